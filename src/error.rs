//! Errors raised by tree accessors.
//!
//! Operations with an expected "miss" outcome (`add`, `remove`, `contains`) report it with a
//! `bool`. The variants here are reserved for reads and writes that cannot be satisfied in the
//! tree's current state.

use thiserror::Error;

/// Error type for tree accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The operation isn't valid for the tree's current structure, e.g. reading the root of an
    /// empty tree or overwriting the root of an ordered tree.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    /// The requested item isn't stored in the tree.
    #[error("not found: {0}")]
    NotFound(String),
}

impl TreeError {
    /// The human-readable message carried by this error, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::PreconditionViolated(msg) | Self::NotFound(msg) => msg,
        }
    }
}

/// Result type for tree accessors.
pub type Result<T> = std::result::Result<T, TreeError>;
