//! DynamoDB repository implementation.
//!
//! Implements `LocationRepository` from `locations_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use locations_core::location::Location;
use locations_core::storage::{
    ListOptions, LocationPage, LocationRepository, PaginationCursor, RepositoryError, Result,
    DEFAULT_PAGE_SIZE,
};

use super::conversions::{item_to_location, location_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error};
use super::keys;

/// DynamoDB-based repository implementation.
///
/// Holds no state between calls; every operation is a single request.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
    index_name: String,
    default_page_size: i32,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client, table and
    /// account index.
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            index_name: index_name.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page size used when a list request carries no limit.
    pub fn with_default_page_size(mut self, page_size: i32) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl LocationRepository for DynamoDbRepository {
    #[tracing::instrument(skip_all, fields(account_id = %location.account_id()))]
    async fn create(&self, location: &Location) -> Result<String> {
        location.validate()?;

        let location_id = Uuid::new_v4().to_string();
        let item = location_to_item(&location_id, location)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(keys::NOT_EXISTS_CONDITION)
            .send()
            .await
            .map_err(|e| {
                map_put_item_error(
                    e,
                    RepositoryError::AlreadyExists {
                        id: location_id.clone(),
                    },
                )
            })?;

        tracing::debug!(location_id = %location_id, "Created location");
        Ok(location_id)
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, account_id: &str, location_id: &str) -> Result<Location> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(location_id, account_id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        let item = result.item.ok_or_else(|| RepositoryError::NotFound {
            id: location_id.to_string(),
        })?;

        Ok(item_to_location(&item)?.location)
    }

    #[tracing::instrument(skip(self, location), fields(account_id = %location.account_id()))]
    async fn update(&self, location: &Location, location_id: &str) -> Result<()> {
        location.validate()?;

        let item = location_to_item(location_id, location)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(keys::OWNED_BY_CONDITION)
            .expression_attribute_values(
                keys::ACCOUNT_ID_PLACEHOLDER,
                AttributeValue::S(location.account_id().to_string()),
            )
            .send()
            .await
            .map_err(|e| map_put_item_error(e, RepositoryError::NotFoundOrDenied))?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, account_id: &str, location_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::primary_key(location_id, account_id)))
            .condition_expression(keys::OWNED_BY_CONDITION)
            .expression_attribute_values(
                keys::ACCOUNT_ID_PLACEHOLDER,
                AttributeValue::S(account_id.to_string()),
            )
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    #[tracing::instrument(skip(self, options), fields(limit = ?options.limit))]
    async fn list(&self, account_id: &str, options: &ListOptions) -> Result<LocationPage> {
        let page_size = options.page_size(self.default_page_size)?;
        let start_key = PaginationCursor::decode_for_account(options.cursor.as_deref(), account_id)?
            .map(|cursor| keys::cursor_to_start_key(&cursor));

        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&self.index_name)
            .key_condition_expression(keys::ACCOUNT_KEY_CONDITION)
            .expression_attribute_values(
                keys::ACCOUNT_ID_PLACEHOLDER,
                AttributeValue::S(account_id.to_string()),
            )
            .limit(page_size)
            .set_exclusive_start_key(start_key)
            .scan_index_forward(true)
            .send()
            .await
            .map_err(map_query_error)?;

        let locations = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_location)
            .collect::<Result<Vec<_>>>()?;

        let next_cursor = match result.last_evaluated_key {
            Some(key) => {
                let cursor = keys::start_key_to_cursor(&key).ok_or_else(|| {
                    RepositoryError::InvalidData(
                        "LastEvaluatedKey is missing key attributes".to_string(),
                    )
                })?;
                Some(
                    cursor
                        .encode()
                        .map_err(RepositoryError::cursor_encoding)?,
                )
            }
            None => None,
        };

        tracing::debug!(
            count = locations.len(),
            has_more = next_cursor.is_some(),
            "Listed locations"
        );

        Ok(LocationPage {
            locations,
            next_cursor,
        })
    }
}
