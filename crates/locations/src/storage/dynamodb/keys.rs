//! DynamoDB key layout.
//!
//! One table keyed by `PK` (location identifier) and `SK` (owning account),
//! plus a secondary index partitioned by the top-level `accountId` attribute
//! and sorted by `PK`. Pure functions, no I/O.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use locations_core::storage::PaginationCursor;

// ============================================================================
// Attribute names
// ============================================================================

pub const PK: &str = "PK";
pub const SK: &str = "SK";
pub const ACCOUNT_ID: &str = "accountId";
pub const LOCATION_TYPE: &str = "locationType";
pub const EXTENDED_ATTRIBUTES: &str = "extendedAttributes";
pub const ADDRESS: &str = "address";
pub const COORDINATES: &str = "coordinates";
pub const SHOP: &str = "shop";

// ============================================================================
// Conditions
// ============================================================================

/// Placeholder bound to the caller's account in ownership conditions.
pub const ACCOUNT_ID_PLACEHOLDER: &str = ":accountId";

/// Put succeeds only when nothing is stored under the key.
pub const NOT_EXISTS_CONDITION: &str = "attribute_not_exists(PK) AND attribute_not_exists(SK)";

/// Put/delete succeeds only when the record exists and belongs to `:accountId`.
pub const OWNED_BY_CONDITION: &str =
    "attribute_exists(PK) AND attribute_exists(SK) AND accountId = :accountId";

/// Key condition for listing an account's records on the secondary index.
pub const ACCOUNT_KEY_CONDITION: &str = "accountId = :accountId";

// ============================================================================
// Keys
// ============================================================================

/// Primary key of a record.
pub fn primary_key(location_id: &str, account_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (PK.to_string(), AttributeValue::S(location_id.to_string())),
        (SK.to_string(), AttributeValue::S(account_id.to_string())),
    ])
}

/// Converts a cursor into the `ExclusiveStartKey` of a secondary index query.
pub fn cursor_to_start_key(cursor: &PaginationCursor) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (PK.to_string(), AttributeValue::S(cursor.pk.clone())),
        (SK.to_string(), AttributeValue::S(cursor.sk.clone())),
        (
            ACCOUNT_ID.to_string(),
            AttributeValue::S(cursor.account_id.clone()),
        ),
    ])
}

/// Converts a `LastEvaluatedKey` into a cursor.
///
/// Returns `None` when the key lacks any of the three string components.
pub fn start_key_to_cursor(key: &HashMap<String, AttributeValue>) -> Option<PaginationCursor> {
    let get = |name: &str| key.get(name).and_then(|v| v.as_s().ok()).cloned();

    Some(PaginationCursor {
        pk: get(PK)?,
        sk: get(SK)?,
        account_id: get(ACCOUNT_ID)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key() {
        let key = primary_key("550e8400-e29b-41d4-a716-446655440001", "acc-1");

        assert_eq!(key.len(), 2);
        assert_eq!(
            key.get(PK).unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(key.get(SK).unwrap().as_s().unwrap(), "acc-1");
    }

    #[test]
    fn test_cursor_start_key_round_trip() {
        let cursor = PaginationCursor::new("loc-1", "acc-1");
        let key = cursor_to_start_key(&cursor);

        assert_eq!(key.get(ACCOUNT_ID).unwrap().as_s().unwrap(), "acc-1");
        assert_eq!(start_key_to_cursor(&key), Some(cursor));
    }

    #[test]
    fn test_start_key_missing_component() {
        let mut key = cursor_to_start_key(&PaginationCursor::new("loc-1", "acc-1"));
        key.remove(ACCOUNT_ID);

        assert_eq!(start_key_to_cursor(&key), None);
    }

    #[test]
    fn test_conditions_reference_placeholder() {
        assert!(OWNED_BY_CONDITION.contains(ACCOUNT_ID_PLACEHOLDER));
        assert!(ACCOUNT_KEY_CONDITION.contains(ACCOUNT_ID_PLACEHOLDER));
    }
}
