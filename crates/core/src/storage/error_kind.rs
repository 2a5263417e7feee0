//! Pure classification of repository errors.
//!
//! Following the Functional Core pattern, the shell decides how to report an
//! error (log level, error type sent back to the gateway) from its kind alone.

use std::fmt;

use super::RepositoryError;

/// Broad category of a failure, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or invalid input. Retrying the same request cannot succeed.
    BadRequest,
    NotFound,
    Conflict,
    /// The store was unreachable or throttled the request.
    Unavailable,
    Internal,
}

impl ErrorKind {
    /// Returns true for failures caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::BadRequest | ErrorKind::NotFound | ErrorKind::Conflict
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unavailable => "Unavailable",
            ErrorKind::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a [`RepositoryError`] to its [`ErrorKind`].
///
/// - `Validation`, `InvalidCursor`, `InvalidLimit` -> BadRequest
/// - `NotFound`, `NotFoundOrDenied` -> NotFound
/// - `AlreadyExists` -> Conflict
/// - `ConnectionFailed` -> Unavailable
/// - `QueryFailed`, `Serialization`, `InvalidData` -> Internal
///
/// # Examples
///
/// ```
/// use locations_core::storage::{repository_error_kind, ErrorKind, RepositoryError};
///
/// let error = RepositoryError::NotFoundOrDenied;
/// assert_eq!(repository_error_kind(&error), ErrorKind::NotFound);
/// ```
pub fn repository_error_kind(error: &RepositoryError) -> ErrorKind {
    match error {
        RepositoryError::Validation(_) => ErrorKind::BadRequest,
        RepositoryError::InvalidCursor(_) => ErrorKind::BadRequest,
        RepositoryError::InvalidLimit(_) => ErrorKind::BadRequest,
        RepositoryError::NotFound { .. } => ErrorKind::NotFound,
        RepositoryError::NotFoundOrDenied => ErrorKind::NotFound,
        RepositoryError::AlreadyExists { .. } => ErrorKind::Conflict,
        RepositoryError::ConnectionFailed(_) => ErrorKind::Unavailable,
        RepositoryError::QueryFailed(_) => ErrorKind::Internal,
        RepositoryError::Serialization(_) => ErrorKind::Internal,
        RepositoryError::InvalidData(_) => ErrorKind::Internal,
    }
}
