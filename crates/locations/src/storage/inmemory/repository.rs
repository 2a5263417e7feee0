//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use locations_core::location::Location;
use locations_core::storage::{
    ListOptions, LocationPage, LocationRepository, PaginationCursor, RepositoryError, Result,
    StoredLocation, DEFAULT_PAGE_SIZE,
};

/// Records keyed by (location identifier, owning account).
type Records = BTreeMap<(String, String), Location>;

/// In-memory storage backend for testing.
///
/// Enforces the same ownership preconditions as the DynamoDB backend.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Arc<RwLock<Records>>,
    default_page_size: i32,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Number of stored records across all accounts.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    fn key(location_id: &str, account_id: &str) -> (String, String) {
        (location_id.to_string(), account_id.to_string())
    }
}

#[async_trait]
impl LocationRepository for InMemoryRepository {
    async fn create(&self, location: &Location) -> Result<String> {
        location.validate()?;

        let location_id = Uuid::new_v4().to_string();
        let key = Self::key(&location_id, location.account_id());

        let mut records = self.records.write().await;
        if records.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists { id: location_id });
        }
        records.insert(key, location.clone());
        Ok(location_id)
    }

    async fn get(&self, account_id: &str, location_id: &str) -> Result<Location> {
        let records = self.records.read().await;
        records
            .get(&Self::key(location_id, account_id))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                id: location_id.to_string(),
            })
    }

    async fn update(&self, location: &Location, location_id: &str) -> Result<()> {
        location.validate()?;

        let mut records = self.records.write().await;
        match records.get_mut(&Self::key(location_id, location.account_id())) {
            Some(stored) => {
                *stored = location.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFoundOrDenied),
        }
    }

    async fn delete(&self, account_id: &str, location_id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        if records
            .remove(&Self::key(location_id, account_id))
            .is_none()
        {
            return Err(RepositoryError::NotFoundOrDenied);
        }
        Ok(())
    }

    async fn list(&self, account_id: &str, options: &ListOptions) -> Result<LocationPage> {
        let page_size = options.page_size(self.default_page_size)? as usize;
        let start = PaginationCursor::decode_for_account(options.cursor.as_deref(), account_id)?;

        let records = self.records.read().await;
        let mut remaining = records
            .iter()
            .filter(|((_, owner), _)| owner == account_id)
            .filter(|((id, _), _)| start.as_ref().map_or(true, |c| id.as_str() > c.pk.as_str()))
            .map(|((id, _), location)| StoredLocation {
                location_id: id.clone(),
                location: location.clone(),
            });

        let locations: Vec<StoredLocation> = remaining.by_ref().take(page_size).collect();
        let next_cursor = match (remaining.next(), locations.last()) {
            (Some(_), Some(last)) => Some(
                PaginationCursor::new(&last.location_id, account_id)
                    .encode()
                    .map_err(RepositoryError::cursor_encoding)?,
            ),
            _ => None,
        };

        Ok(LocationPage {
            locations,
            next_cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use locations_core::location::{Address, Coordinates};

    use super::*;

    fn address_location(account_id: &str, street: &str) -> Location {
        Location::address(
            account_id,
            Address {
                street_address: street.to_string(),
                street_address2: None,
                city: "Springfield".to_string(),
                state_province: Some("IL".to_string()),
                postal_code: "62701".to_string(),
                country: "US".to_string(),
            },
        )
    }

    fn coordinates_location(account_id: &str) -> Location {
        Location::coordinates(
            account_id,
            Coordinates {
                latitude: 40.7128,
                longitude: -74.006,
                altitude: None,
                accuracy: Some(3.0),
            },
        )
    }

    // ==================== Create / Get ====================

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryRepository::new();
        let location = address_location("acc-1", "123 Main St");

        let id = repo.create(&location).await.unwrap();
        assert_eq!(id.len(), 36);

        let retrieved = repo.get("acc-1", &id).await.unwrap();
        assert_eq!(retrieved, location);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_location() {
        let repo = InMemoryRepository::new();
        let location = address_location("acc-1", "");

        let result = repo.create(&location).await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
        assert_eq!(repo.record_count().await, 0);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryRepository::new();

        let err = repo.get("acc-1", "missing").await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::NotFound {
                id: "missing".to_string()
            }
        );
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_get_with_other_account_is_not_found() {
        let repo = InMemoryRepository::new();
        let id = repo
            .create(&address_location("acc-1", "123 Main St"))
            .await
            .unwrap();

        let result = repo.get("acc-2", &id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    // ==================== Update ====================

    #[tokio::test]
    async fn test_update_can_change_variant() {
        let repo = InMemoryRepository::new();
        let id = repo
            .create(&address_location("acc-1", "123 Main St"))
            .await
            .unwrap();

        let replacement = coordinates_location("acc-1");
        repo.update(&replacement, &id).await.unwrap();

        assert_eq!(repo.get("acc-1", &id).await.unwrap(), replacement);
    }

    #[tokio::test]
    async fn test_update_with_other_account_is_denied() {
        let repo = InMemoryRepository::new();
        let original = address_location("acc-1", "123 Main St");
        let id = repo.create(&original).await.unwrap();

        let err = repo
            .update(&address_location("acc-2", "9 Elm St"), &id)
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::NotFoundOrDenied);
        assert_eq!(err.to_string(), "location not found or access denied");
        assert_eq!(repo.get("acc-1", &id).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_update_nonexistent_is_denied() {
        let repo = InMemoryRepository::new();

        let result = repo
            .update(&address_location("acc-1", "123 Main St"), "missing")
            .await;
        assert_eq!(result, Err(RepositoryError::NotFoundOrDenied));
    }

    // ==================== Delete ====================

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let repo = InMemoryRepository::new();
        let id = repo
            .create(&address_location("acc-1", "123 Main St"))
            .await
            .unwrap();

        repo.delete("acc-1", &id).await.unwrap();

        let result = repo.get("acc-1", &id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_with_other_account_leaves_record() {
        let repo = InMemoryRepository::new();
        let original = address_location("acc-1", "123 Main St");
        let id = repo.create(&original).await.unwrap();

        let result = repo.delete("acc-2", &id).await;
        assert_eq!(result, Err(RepositoryError::NotFoundOrDenied));
        assert_eq!(repo.get("acc-1", &id).await.unwrap(), original);
    }

    // ==================== List ====================

    #[tokio::test]
    async fn test_list_empty_account() {
        let repo = InMemoryRepository::new();
        repo.create(&address_location("acc-2", "123 Main St"))
            .await
            .unwrap();

        let page = repo.list("acc-1", &ListOptions::default()).await.unwrap();
        assert!(page.locations.is_empty());
        assert_eq!(page.next_cursor, None);
    }

    #[tokio::test]
    async fn test_list_pages_without_gaps_or_duplicates() {
        let repo = InMemoryRepository::new();
        let mut created = Vec::new();
        for i in 0..5 {
            let location = address_location("acc-1", &format!("{i} Main St"));
            created.push(repo.create(&location).await.unwrap());
        }
        repo.create(&coordinates_location("acc-2")).await.unwrap();
        created.sort();

        let options = ListOptions::default().with_limit(3);
        let first = repo.list("acc-1", &options).await.unwrap();
        assert_eq!(first.locations.len(), 3);
        let cursor = first.next_cursor.clone().expect("first page should have a cursor");

        let second = repo
            .list("acc-1", &options.clone().with_cursor(cursor))
            .await
            .unwrap();
        assert_eq!(second.locations.len(), 2);
        assert_eq!(second.next_cursor, None);

        let ids: Vec<String> = first
            .locations
            .iter()
            .chain(second.locations.iter())
            .map(|stored| stored.location_id.clone())
            .collect();
        assert_eq!(ids, created);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 5);
    }

    #[tokio::test]
    async fn test_list_uses_default_page_size() {
        let repo = InMemoryRepository::new();
        for i in 0..(DEFAULT_PAGE_SIZE + 1) {
            repo.create(&address_location("acc-1", &format!("{i} Oak Ave")))
                .await
                .unwrap();
        }

        let page = repo.list("acc-1", &ListOptions::default()).await.unwrap();
        assert_eq!(page.locations.len(), DEFAULT_PAGE_SIZE as usize);
        assert!(page.next_cursor.is_some());
    }

    #[tokio::test]
    async fn test_list_rejects_cursor_from_other_account() {
        let repo = InMemoryRepository::new();
        let token = PaginationCursor::new("loc-1", "acc-2").encode().unwrap();

        let result = repo
            .list("acc-1", &ListOptions::default().with_cursor(token))
            .await;
        assert!(matches!(result, Err(RepositoryError::InvalidCursor(_))));
    }

    #[tokio::test]
    async fn test_list_rejects_zero_limit() {
        let repo = InMemoryRepository::new();

        let result = repo
            .list("acc-1", &ListOptions::default().with_limit(0))
            .await;
        assert_eq!(result, Err(RepositoryError::InvalidLimit(0)));
    }
}
