// SPDX-License-Identifier: FSL-1.1
use crate::stack::{Sentinel, Stack};
use log::debug;

/// A stack over a dynamically resized contiguous sequence.
///
/// Index 0 is the bottom of the stack and the last element is the
/// logical top, so every operation works at the end of the sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    /// create a new empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds the item at the top of the stack and returns the new count
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len()
    }

    /// Removes and returns the top item, or [`Sentinel::NoValue`] when
    /// the stack is empty
    pub fn pop(&mut self) -> Result<T, Sentinel> {
        match self.items.pop() {
            Some(item) => Ok(item),
            None => {
                debug!("pop on empty array stack");
                Err(Sentinel::NoValue)
            }
        }
    }

    /// Returns a reference to the top item without removing it, or
    /// [`Sentinel::Empty`] when the stack is empty
    pub fn peek(&self) -> Result<&T, Sentinel> {
        self.items.last().ok_or(Sentinel::Empty)
    }

    /// return if the stack holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// return the number of items on the stack
    pub fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) {
        // the inherent push reports the new count; the trait discards it
        let _ = ArrayStack::push(self, value);
    }

    fn pop(&mut self) -> Result<T, Sentinel> {
        ArrayStack::pop(self)
    }

    fn peek(&self) -> Result<&T, Sentinel> {
        ArrayStack::peek(self)
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn is_empty(&self) -> bool {
        ArrayStack::is_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_reports_count() {
        let mut stack = ArrayStack::new();
        assert_eq!(1, stack.push("a"));
        assert_eq!(2, stack.push("b"));
    }

    #[test]
    fn test_pop_and_peek_sentinels() {
        let mut stack: ArrayStack<u32> = ArrayStack::new();
        assert_eq!(Err(Sentinel::NoValue), stack.pop());
        assert_eq!(Err(Sentinel::Empty), stack.peek());
    }
}
