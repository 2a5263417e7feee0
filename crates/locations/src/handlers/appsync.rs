//! Operation dispatcher for AppSync direct-resolver invocations.
//!
//! Each invocation decodes its arguments, calls the repository once, and
//! shapes the result for the gateway. No state survives between invocations.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use locations_core::appsync::{
    AppSyncEvent, CreateLocationArguments, DeleteLocationArguments, GetLocationArguments,
    ListLocationsArguments, ListLocationsResponse, LocationResponse, Operation,
    UpdateLocationArguments,
};
use locations_core::location::from_value;
use locations_core::storage::LocationRepository;

use super::error::{repository, HandlerError};

/// Routes gateway fields to repository calls.
#[derive(Clone)]
pub struct AppSyncHandler {
    repo: Arc<dyn LocationRepository>,
}

impl AppSyncHandler {
    pub fn new(repo: Arc<dyn LocationRepository>) -> Self {
        Self { repo }
    }

    /// Handles one event.
    ///
    /// - create fields return the generated identifier as a string
    /// - `getLocation` returns the flattened location with `locationId` and `__typename`
    /// - update fields and `deleteLocation` return `true`
    /// - `listLocations` returns `{ locations, nextCursor }`
    pub async fn handle(&self, event: AppSyncEvent) -> Result<Value, HandlerError> {
        let field = event.field_name().ok_or(HandlerError::MissingField)?;
        let operation = Operation::from_field(field)
            .ok_or_else(|| HandlerError::UnknownField(field.to_string()))?;

        tracing::debug!(field = %field, operation = %operation, "Dispatching operation");

        match operation {
            Operation::Create => self.create(event.arguments).await,
            Operation::Get => self.get(event.arguments).await,
            Operation::Update => self.update(event.arguments).await,
            Operation::Delete => self.delete(event.arguments).await,
            Operation::List => self.list(event.arguments).await,
        }
    }

    /// Handles one event, giving up once `budget` has elapsed.
    ///
    /// On expiry the in-flight store call is dropped.
    pub async fn handle_within(
        &self,
        event: AppSyncEvent,
        budget: Duration,
    ) -> Result<Value, HandlerError> {
        tokio::time::timeout(budget, self.handle(event))
            .await
            .map_err(|_| HandlerError::DeadlineExceeded(budget))?
    }

    async fn create(&self, arguments: Value) -> Result<Value, HandlerError> {
        let args: CreateLocationArguments = parse_arguments(arguments)?;
        let location = from_value(&args.input)?;

        let location_id = self
            .repo
            .create(&location)
            .await
            .map_err(repository(Operation::Create))?;

        tracing::info!(
            location_id = %location_id,
            account_id = %location.account_id(),
            "Location created"
        );
        Ok(Value::String(location_id))
    }

    async fn get(&self, arguments: Value) -> Result<Value, HandlerError> {
        let args: GetLocationArguments = parse_arguments(arguments)?;
        args.validate()?;

        let location = self
            .repo
            .get(&args.account_id, &args.location_id)
            .await
            .map_err(repository(Operation::Get))?;

        to_response(&LocationResponse::new(&args.location_id, &location))
    }

    async fn update(&self, arguments: Value) -> Result<Value, HandlerError> {
        let args: UpdateLocationArguments = parse_arguments(arguments)?;
        args.validate()?;
        let location = from_value(&args.input)?;

        self.repo
            .update(&location, &args.location_id)
            .await
            .map_err(repository(Operation::Update))?;

        tracing::info!(location_id = %args.location_id, "Location updated");
        Ok(Value::Bool(true))
    }

    async fn delete(&self, arguments: Value) -> Result<Value, HandlerError> {
        let args: DeleteLocationArguments = parse_arguments(arguments)?;
        args.validate()?;

        self.repo
            .delete(&args.account_id, &args.location_id)
            .await
            .map_err(repository(Operation::Delete))?;

        tracing::info!(location_id = %args.location_id, "Location deleted");
        Ok(Value::Bool(true))
    }

    async fn list(&self, arguments: Value) -> Result<Value, HandlerError> {
        let args: ListLocationsArguments = parse_arguments(arguments)?;
        args.validate()?;

        let page = self
            .repo
            .list(&args.account_id, &args.options())
            .await
            .map_err(repository(Operation::List))?;

        to_response(&ListLocationsResponse::from(&page))
    }
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, HandlerError> {
    serde_json::from_value(arguments).map_err(HandlerError::Arguments)
}

fn to_response<T: Serialize>(response: &T) -> Result<Value, HandlerError> {
    serde_json::to_value(response).map_err(HandlerError::Marshal)
}
