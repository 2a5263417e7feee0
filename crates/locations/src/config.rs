use std::time::Duration;

use clap::Parser;

use locations_core::storage::DEFAULT_PAGE_SIZE;

/// Locations - AppSync resolver for location records
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "locations")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// DynamoDB table holding location records
    #[arg(long, env = "DYNAMODB_TABLE_NAME")]
    pub table_name: String,

    /// Secondary index partitioned by accountId
    #[arg(long, default_value = "accountId-index", env = "DYNAMODB_GSI_NAME")]
    pub gsi_name: String,

    /// Page size used when listLocations receives no limit
    #[arg(
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(i32).range(1..),
        env = "DEFAULT_PAGE_SIZE"
    )]
    pub default_page_size: i32,

    /// Override the DynamoDB endpoint (e.g. DynamoDB Local)
    #[arg(long, env = "DYNAMODB_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// SDK attempts per DynamoDB call, including the first
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(1..),
        env = "DYNAMODB_MAX_ATTEMPTS"
    )]
    pub max_attempts: u32,

    /// SDK operation timeout in milliseconds
    #[arg(long, default_value_t = 5000, env = "DYNAMODB_OPERATION_TIMEOUT_MS")]
    pub operation_timeout_ms: u64,
}

impl Config {
    /// Get the operation timeout as a Duration.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}
