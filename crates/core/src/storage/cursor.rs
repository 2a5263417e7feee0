//! Opaque pagination cursor.
//!
//! A cursor is base64(JSON) of the last-seen key of a page. Callers treat it
//! as an opaque token; only the repository builds and reads it.

use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when reading or writing a cursor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("failed to encode cursor: {0}")]
    Encode(String),
    #[error("cursor is not valid base64: {0}")]
    Base64(String),
    #[error("cursor payload is malformed: {0}")]
    Payload(String),
    #[error("cursor was issued for a different account")]
    AccountMismatch,
}

/// The last-seen key of a page.
///
/// Unknown JSON fields are ignored on decode so that older deployments can
/// read cursors minted by newer ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationCursor {
    /// Partition key of the last item (the location identifier).
    pub pk: String,
    /// Sort key of the last item (the owning account identifier).
    pub sk: String,
    /// Secondary index partition key.
    #[serde(rename = "accountId")]
    pub account_id: String,
}

impl PaginationCursor {
    /// Creates the cursor for the last item of a page.
    pub fn new(location_id: impl Into<String>, account_id: impl Into<String>) -> Self {
        let account_id = account_id.into();
        Self {
            pk: location_id.into(),
            sk: account_id.clone(),
            account_id,
        }
    }

    /// Encodes the cursor into its opaque token form.
    pub fn encode(&self) -> Result<String, CursorError> {
        let json = serde_json::to_vec(self).map_err(|e| CursorError::Encode(e.to_string()))?;
        Ok(base64::engine::general_purpose::STANDARD.encode(json))
    }

    /// Decodes an opaque token.
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let json = base64::engine::general_purpose::STANDARD
            .decode(token)
            .map_err(|e| CursorError::Base64(e.to_string()))?;
        serde_json::from_slice(&json).map_err(|e| CursorError::Payload(e.to_string()))
    }

    /// Decodes an optional token issued for `account_id`.
    ///
    /// Absent and empty tokens both mean "start from the beginning".
    pub fn decode_for_account(
        token: Option<&str>,
        account_id: &str,
    ) -> Result<Option<Self>, CursorError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        let cursor = Self::decode(token)?;
        if cursor.account_id != account_id {
            return Err(CursorError::AccountMismatch);
        }
        Ok(Some(cursor))
    }
}
