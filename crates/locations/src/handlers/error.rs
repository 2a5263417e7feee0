use std::time::Duration;

use thiserror::Error;

use locations_core::appsync::Operation;
use locations_core::location::{DecodeError, ValidationError};
use locations_core::storage::{repository_error_kind, ErrorKind, RepositoryError};

/// Failure of a single gateway invocation.
///
/// The display string is what the gateway surfaces to the caller, so each
/// variant prefixes the step that failed.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("operation name is missing from the event")]
    MissingField,
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("failed to unmarshal arguments: {0}")]
    Arguments(#[source] serde_json::Error),
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] ValidationError),
    #[error("failed to unmarshal location: {0}")]
    Decode(#[from] DecodeError),
    #[error("failed to {}: {source}", .operation.action())]
    Repository {
        operation: Operation,
        #[source]
        source: RepositoryError,
    },
    #[error("failed to marshal response: {0}")]
    Marshal(#[source] serde_json::Error),
    #[error("deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),
}

impl HandlerError {
    /// Classifies the failure for logging.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HandlerError::MissingField
            | HandlerError::UnknownField(_)
            | HandlerError::Arguments(_)
            | HandlerError::InvalidArguments(_)
            | HandlerError::Decode(_) => ErrorKind::BadRequest,
            HandlerError::Repository { source, .. } => repository_error_kind(source),
            HandlerError::Marshal(_) => ErrorKind::Internal,
            HandlerError::DeadlineExceeded(_) => ErrorKind::Unavailable,
        }
    }
}

/// Returns a mapper attaching `operation` to a repository failure.
pub(crate) fn repository(operation: Operation) -> impl FnOnce(RepositoryError) -> HandlerError {
    move |source| HandlerError::Repository { operation, source }
}
