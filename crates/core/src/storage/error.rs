use thiserror::Error;

use super::CursorError;
use crate::location::ValidationError;

/// Errors that can occur during repository operations.
///
/// Store-side variants name the step that failed (marshal, store call,
/// unmarshal). Nothing here is retried by the repository.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("location not found: {id}")]
    NotFound { id: String },
    /// The key is absent or owned by another account. The two cases are
    /// deliberately indistinguishable.
    #[error("location not found or access denied")]
    NotFoundOrDenied,
    #[error("location already exists: {id}")]
    AlreadyExists { id: String },
    #[error("invalid cursor: {0}")]
    InvalidCursor(#[from] CursorError),
    #[error("invalid limit: {0} (must be at least 1)")]
    InvalidLimit(i32),
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("failed to marshal location: {0}")]
    Serialization(String),
    #[error("failed to unmarshal location: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Wraps a failure to mint the next-page cursor. The fault is on the
    /// server side, unlike [`RepositoryError::InvalidCursor`].
    pub fn cursor_encoding(error: CursorError) -> Self {
        RepositoryError::Serialization(format!("cursor: {error}"))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
