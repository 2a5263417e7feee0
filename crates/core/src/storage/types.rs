use serde::{Deserialize, Serialize};

use super::{RepositoryError, Result};
use crate::location::Location;

/// Page size used when a list request carries no limit.
pub const DEFAULT_PAGE_SIZE: i32 = 20;

/// Options for a paginated list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListOptions {
    /// Sets the page size.
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the cursor returned by a previous page.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Returns the page size to query with, falling back to `default`.
    pub fn page_size(&self, default: i32) -> Result<i32> {
        match self.limit {
            Some(limit) if limit < 1 => Err(RepositoryError::InvalidLimit(limit)),
            Some(limit) => Ok(limit),
            None => Ok(default),
        }
    }
}

/// A location paired with its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLocation {
    pub location_id: String,
    pub location: Location,
}

/// One page of a list request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationPage {
    /// Locations in ascending identifier order.
    pub locations: Vec<StoredLocation>,
    /// Present when more results remain.
    pub next_cursor: Option<String>,
}
