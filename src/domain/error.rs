//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::record::NodeId;

/// Domain errors represent tree construction and query violations.
/// These are independent of I/O and presentation concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty input: no root record to seed the tree")]
    EmptyInput,

    #[error("malformed record {id}: {reason}")]
    MalformedInput { id: NodeId, reason: String },

    #[error("unknown id: {0}")]
    UnknownId(NodeId),
}

impl DomainError {
    pub(crate) fn malformed(id: NodeId, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            id,
            reason: reason.into(),
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;
