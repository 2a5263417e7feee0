//! Argument shapes for each operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::location::{require, ValidationError};
use crate::storage::ListOptions;

/// Arguments of the create fields. `input` is decoded by its own tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLocationArguments {
    pub input: Value,
}

/// Arguments addressing a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationKeyArguments {
    pub account_id: String,
    pub location_id: String,
}

impl LocationKeyArguments {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("accountId", &self.account_id)?;
        require("locationId", &self.location_id)
    }
}

pub type GetLocationArguments = LocationKeyArguments;
pub type DeleteLocationArguments = LocationKeyArguments;

/// Arguments of the update fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationArguments {
    pub location_id: String,
    pub input: Value,
}

impl UpdateLocationArguments {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("locationId", &self.location_id)
    }
}

/// Arguments of `listLocations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLocationsArguments {
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListLocationsArguments {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("accountId", &self.account_id)
    }

    pub fn options(&self) -> ListOptions {
        ListOptions {
            limit: self.limit,
            cursor: self.cursor.clone(),
        }
    }
}
