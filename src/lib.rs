// SPDX-License-Identifier: FSL-1.1
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

//! LIFO stacks

/// Errors produced by this library
pub mod error;
pub use error::Error;

/// Stack variants and the trait they share
pub mod stack;
pub use stack::{ArrayStack, LinkedStack, Sentinel, Stack};

/// One convenient import for callers
pub mod prelude {
    pub use super::*;
}
