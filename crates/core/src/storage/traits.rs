use async_trait::async_trait;

use crate::location::Location;

use super::{ListOptions, LocationPage, Result};

/// Repository for location records.
///
/// Every call is a single round-trip to the backing store. Cancellation is by
/// dropping the returned future.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Validates and stores a new location, returning its generated identifier.
    async fn create(&self, location: &Location) -> Result<String>;

    /// Gets a location by owning account and identifier.
    async fn get(&self, account_id: &str, location_id: &str) -> Result<Location>;

    /// Validates and replaces an existing location owned by the same account.
    async fn update(&self, location: &Location, location_id: &str) -> Result<()>;

    /// Deletes a location owned by the given account.
    async fn delete(&self, account_id: &str, location_id: &str) -> Result<()>;

    /// Lists one page of an account's locations in ascending identifier order.
    async fn list(&self, account_id: &str, options: &ListOptions) -> Result<LocationPage>;
}
