//! Storage backend implementations.
//!
//! Concrete implementations of `locations_core::storage::LocationRepository`.
//! DynamoDB serves production traffic; the in-memory backend backs the
//! handler and contract tests.

pub mod dynamodb;

#[cfg(test)]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
