//! Note operation errors.

use thiserror::Error;

use crate::notes::model::Payload;

/// Errors surfaced by note store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// No note carries the requested id.
    #[error("No note found with {id}")]
    NotFound { id: String },

    /// A required field was absent or empty.
    #[error("{}", .payload.expected_format())]
    InvalidInput {
        payload: Payload,
        /// Wire names of the missing fields, in declaration order.
        missing: Vec<&'static str>,
    },
}

impl NoteError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

/// Result type for note operations.
pub type NoteResult<T> = Result<T, NoteError>;
