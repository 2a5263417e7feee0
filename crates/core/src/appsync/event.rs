use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An invocation from the GraphQL gateway.
///
/// Only the operation name and `arguments` drive behavior; the remaining
/// members are accepted so that any envelope the gateway sends deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSyncEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default)]
    pub arguments: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub source: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<AppSyncRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<AppSyncInfo>,
}

/// Request metadata forwarded by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSyncRequest {
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// Resolver info block of the direct-resolver envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSyncInfo {
    pub field_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type_name: Option<String>,
}

impl AppSyncEvent {
    /// Creates an event for the given operation name and arguments.
    pub fn new(field: impl Into<String>, arguments: Value) -> Self {
        Self {
            field: Some(field.into()),
            arguments,
            ..Self::default()
        }
    }

    /// The operation name: `field` when present, otherwise `info.fieldName`.
    pub fn field_name(&self) -> Option<&str> {
        self.field
            .as_deref()
            .or_else(|| self.info.as_ref().map(|info| info.field_name.as_str()))
    }
}
