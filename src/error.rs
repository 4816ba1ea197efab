// SPDX-License-Identifier: FSL-1.1

/// Errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A next link points at a slot that is not in the node pool
    #[error("next link points at {index}, which is not in the node pool")]
    CorruptLink {
        /// the index the dangling link points at
        index: usize,
    },
    /// Walking the chain visited the same node twice
    #[error("cycle detected at node {index}")]
    Cycle {
        /// the first index visited twice
        index: usize,
    },
    /// The chain and the node pool disagree about how many nodes exist
    #[error("walked {walked} nodes but the pool holds {stored}")]
    LengthMismatch {
        /// number of nodes reachable from the head
        walked: usize,
        /// number of nodes allocated in the pool
        stored: usize,
    },
    /// Custom error message
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// creates a custom error from a string
    pub fn custom(s: &impl ToString) -> Error {
        Error::Custom(s.to_string())
    }
}
