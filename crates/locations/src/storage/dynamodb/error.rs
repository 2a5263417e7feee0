//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `locations_core::storage`.
//! Conditional check failures are mapped by the caller-supplied outcome,
//! since the same failure means "already exists" on create and "not found
//! or access denied" on update/delete.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use locations_core::storage::RepositoryError;

/// Map transport-level failures. Returns the error back when the service
/// itself answered.
fn map_transport_error<E, R>(err: SdkError<E, R>) -> Result<RepositoryError, SdkError<E, R>> {
    match err {
        SdkError::TimeoutError(_) => Ok(RepositoryError::ConnectionFailed(
            "DynamoDB request timed out".to_string(),
        )),
        SdkError::DispatchFailure(e) => Ok(RepositoryError::ConnectionFailed(format!(
            "DynamoDB dispatch failure: {:?}",
            e
        ))),
        err => Err(err),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    let err = match map_transport_error(err) {
        Ok(mapped) => return mapped,
        Err(err) => err,
    };
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    let err = match map_transport_error(err) {
        Ok(mapped) => return mapped,
        Err(err) => err,
    };
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table or index not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// A failed condition becomes `on_condition_failed`.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    on_condition_failed: RepositoryError,
) -> RepositoryError {
    let err = match map_transport_error(err) {
        Ok(mapped) => return mapped,
        Err(err) => err,
    };
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => on_condition_failed,
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
///
/// A failed condition becomes `NotFoundOrDenied`.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    let err = match map_transport_error(err) {
        Ok(mapped) => return mapped,
        Err(err) => err,
    };
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFoundOrDenied,
        DeleteItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}
