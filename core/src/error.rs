//! Error types for todo operations.

use thiserror::Error;

/// Errors returned by `TodoService`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No record carries the requested id.
    #[error("todo {id} not found")]
    NotFound { id: String },
}

impl TodoError {
    pub fn not_found(id: &str) -> Self {
        TodoError::NotFound { id: id.to_string() }
    }
}
