mod config;
mod handlers;
mod storage;

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use clap::Parser;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use locations_core::appsync::AppSyncEvent;

use crate::{config::Config, handlers::AppSyncHandler, storage::DynamoDbRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // JSON lines without colors, for CloudWatch
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locations=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    let config = Config::try_parse().context("failed to load configuration")?;

    let client = init_dynamodb_client(&config).await;
    let repository = DynamoDbRepository::new(client, &config.table_name, &config.gsi_name)
        .with_default_page_size(config.default_page_size);

    tracing::info!(
        table = %repository.table_name(),
        index = %config.gsi_name,
        default_page_size = config.default_page_size,
        "Starting locations resolver"
    );

    let handler = AppSyncHandler::new(Arc::new(repository));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<AppSyncEvent>| {
        let handler = handler.clone();
        async move { function_handler(&handler, event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}

/// Build the DynamoDB client with the configured retry and timeout policy.
async fn init_dynamodb_client(config: &Config) -> aws_sdk_dynamodb::Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(config.operation_timeout())
                .build(),
        );

    if let Some(endpoint_url) = &config.endpoint_url {
        tracing::info!(endpoint_url = %endpoint_url, "Using DynamoDB endpoint override");
        loader = loader.endpoint_url(endpoint_url);
    }

    aws_sdk_dynamodb::Client::new(&loader.load().await)
}

async fn function_handler(
    handler: &AppSyncHandler,
    event: LambdaEvent<AppSyncEvent>,
) -> Result<Value, lambda_runtime::Error> {
    let request_id = event.context.request_id.clone();
    let budget = remaining_time(event.context.deadline, SystemTime::now());
    let field = event.payload.field_name().unwrap_or_default().to_string();

    tracing::info!(
        request_id = %request_id,
        field = %field,
        budget_ms = budget.as_millis() as u64,
        "Handling event"
    );

    match handler.handle_within(event.payload, budget).await {
        Ok(response) => {
            tracing::info!(request_id = %request_id, field = %field, "Event handled");
            Ok(response)
        }
        Err(err) => {
            let kind = err.kind();
            if kind.is_client_error() {
                tracing::warn!(
                    request_id = %request_id,
                    field = %field,
                    kind = %kind,
                    error = %err,
                    "Request failed"
                );
            } else {
                tracing::error!(
                    request_id = %request_id,
                    field = %field,
                    kind = %kind,
                    error = %err,
                    "Request failed"
                );
            }
            Err(err.into())
        }
    }
}

/// Time left until `deadline_ms` (milliseconds since the Unix epoch).
fn remaining_time(deadline_ms: u64, now: SystemTime) -> Duration {
    let deadline = UNIX_EPOCH + Duration::from_millis(deadline_ms);
    deadline.duration_since(now).unwrap_or(Duration::ZERO)
}
