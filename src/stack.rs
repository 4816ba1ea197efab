// SPDX-License-Identifier: FSL-1.1
use std::fmt;

/// stack over a contiguous sequence
pub mod array;

/// stack over a singly linked chain of nodes
pub mod linked;

pub use array::ArrayStack;
pub use linked::LinkedStack;

/// Trait for a LIFO value stack
pub trait Stack<T> {
    /// push a value onto the top of the stack
    fn push(&mut self, value: T);

    /// remove the top value from the stack
    fn pop(&mut self) -> Result<T, Sentinel>;

    /// get a reference to the top value on the stack
    fn peek(&self) -> Result<&T, Sentinel>;

    /// return the number of values on the stack
    fn len(&self) -> usize;

    /// return if the stack is empty
    fn is_empty(&self) -> bool;
}

/// Marker returned by an operation that found nothing on the stack.
///
/// The two variants carry no data and differ only in meaning; which one
/// an operation returns is part of its contract. `pop` reports
/// [`Sentinel::NoValue`] (nothing to remove) while `peek` reports
/// [`Sentinel::Empty`] (nothing to inspect).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentinel {
    /// there was no value to remove
    NoValue,
    /// there was no value to inspect
    Empty,
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::NoValue => write!(f, "no value"),
            Sentinel::Empty => write!(f, "empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(Sentinel::NoValue, Sentinel::Empty);
    }

    #[test]
    fn test_sentinel_display() {
        assert_eq!("no value", Sentinel::NoValue.to_string());
        assert_eq!("empty", Sentinel::Empty.to_string());
    }
}
