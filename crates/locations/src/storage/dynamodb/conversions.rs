//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB items and locations.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use locations_core::location::{
    AddressLocation, CoordinatesLocation, ExtendedAttributes, Location, LocationBase,
    LocationType, ShopLocation,
};
use locations_core::storage::{RepositoryError, StoredLocation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_dynamo::aws_sdk_dynamodb_1::{from_attribute_value, to_attribute_value};

use super::keys;

pub type Item = HashMap<String, AttributeValue>;

/// Convert a location to the DynamoDB item stored under `location_id`.
///
/// The item carries exactly one shape block, matching the variant.
pub fn location_to_item(location_id: &str, location: &Location) -> Result<Item, RepositoryError> {
    let account_id = location.account_id();

    // Keys
    let mut item = keys::primary_key(location_id, account_id);
    item.insert(
        keys::ACCOUNT_ID.to_string(),
        AttributeValue::S(account_id.to_string()),
    );

    // Data
    item.insert(
        keys::LOCATION_TYPE.to_string(),
        AttributeValue::S(location.location_type().as_str().to_string()),
    );
    if let Some(attributes) = location.extended_attributes() {
        item.insert(
            keys::EXTENDED_ATTRIBUTES.to_string(),
            marshal(keys::EXTENDED_ATTRIBUTES, attributes)?,
        );
    }

    let (name, shape) = match location {
        Location::Address(l) => (keys::ADDRESS, marshal(keys::ADDRESS, &l.address)?),
        Location::Coordinates(l) => (
            keys::COORDINATES,
            marshal(keys::COORDINATES, &l.coordinates)?,
        ),
        Location::Shop(l) => (keys::SHOP, marshal(keys::SHOP, &l.shop)?),
    };
    item.insert(name.to_string(), shape);

    Ok(item)
}

/// Convert a DynamoDB item back to a location with its identifier.
///
/// Fails when the shape block required by the stored `locationType` is
/// missing.
pub fn item_to_location(item: &Item) -> Result<StoredLocation, RepositoryError> {
    let location_id = get_string(item, keys::PK)?;
    let tag = get_string(item, keys::LOCATION_TYPE)?;
    let location_type = LocationType::parse(&tag)
        .ok_or_else(|| RepositoryError::InvalidData(format!("unknown location type: {tag}")))?;

    let extended_attributes = item
        .get(keys::EXTENDED_ATTRIBUTES)
        .map(|value| unmarshal::<ExtendedAttributes>(keys::EXTENDED_ATTRIBUTES, value))
        .transpose()?;

    let base = LocationBase {
        account_id: get_string(item, keys::ACCOUNT_ID)?,
        location_type,
        extended_attributes,
    };

    let location = match location_type {
        LocationType::Address => Location::Address(AddressLocation {
            base,
            address: get_shape(item, keys::ADDRESS, location_type)?,
        }),
        LocationType::Coordinates => Location::Coordinates(CoordinatesLocation {
            base,
            coordinates: get_shape(item, keys::COORDINATES, location_type)?,
        }),
        LocationType::Shop => Location::Shop(ShopLocation {
            base,
            shop: get_shape(item, keys::SHOP, location_type)?,
        }),
    };

    Ok(StoredLocation {
        location_id,
        location,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn marshal<T: Serialize>(name: &str, value: T) -> Result<AttributeValue, RepositoryError> {
    to_attribute_value(value)
        .map_err(|e| RepositoryError::Serialization(format!("{name}: {e}")))
}

fn unmarshal<T: DeserializeOwned>(
    name: &str,
    value: &AttributeValue,
) -> Result<T, RepositoryError> {
    from_attribute_value(value.clone())
        .map_err(|e| RepositoryError::InvalidData(format!("invalid {name}: {e}")))
}

/// Get the shape block required by `location_type`.
fn get_shape<T: DeserializeOwned>(
    item: &Item,
    name: &str,
    location_type: LocationType,
) -> Result<T, RepositoryError> {
    let value = item.get(name).ok_or_else(|| {
        RepositoryError::InvalidData(format!(
            "{name} is missing for {location_type} location type"
        ))
    })?;
    unmarshal(name, value)
}

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}
