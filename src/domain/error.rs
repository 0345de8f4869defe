//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed tree input.
/// Empty children, single-node trees and deep trees are all valid.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid tree: {reason}")]
    InvalidTree { reason: String },

    #[error("node not found in arena")]
    NodeNotFound,
}

impl DomainError {
    pub fn invalid_tree(reason: impl Into<String>) -> Self {
        Self::InvalidTree {
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
