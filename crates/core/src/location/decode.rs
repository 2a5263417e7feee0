//! Discriminator-driven decoding of raw location JSON.

use serde::Deserialize;
use serde_json::Value;

use super::error::DecodeError;
use super::types::{AddressLocation, CoordinatesLocation, Location, LocationType, ShopLocation};

/// Only the tag is read on the first pass; everything else is ignored.
#[derive(Deserialize)]
struct Discriminator {
    #[serde(rename = "locationType", default)]
    location_type: Option<String>,
}

impl Discriminator {
    fn resolve(self) -> Result<LocationType, DecodeError> {
        let tag = self.location_type.unwrap_or_default();
        LocationType::parse(&tag).ok_or(DecodeError::UnknownType(tag))
    }
}

/// Decodes a location from raw JSON bytes.
///
/// The `locationType` tag is read first and selects the variant to decode
/// the full payload into.
pub fn decode(raw: &[u8]) -> Result<Location, DecodeError> {
    let location_type = serde_json::from_slice::<Discriminator>(raw)
        .map_err(DecodeError::Discriminator)?
        .resolve()?;

    let location = match location_type {
        LocationType::Address => serde_json::from_slice(raw).map(Location::Address),
        LocationType::Coordinates => serde_json::from_slice(raw).map(Location::Coordinates),
        LocationType::Shop => serde_json::from_slice(raw).map(Location::Shop),
    };

    location.map_err(|source| DecodeError::Variant {
        location_type,
        source,
    })
}

/// Decodes a location from an already-parsed JSON value.
///
/// Same semantics as [`decode`], used when the payload arrives embedded in a
/// larger argument document.
pub fn from_value(value: &Value) -> Result<Location, DecodeError> {
    let location_type = Discriminator::deserialize(value)
        .map_err(DecodeError::Discriminator)?
        .resolve()?;

    let location = match location_type {
        LocationType::Address => AddressLocation::deserialize(value).map(Location::Address),
        LocationType::Coordinates => {
            CoordinatesLocation::deserialize(value).map(Location::Coordinates)
        }
        LocationType::Shop => ShopLocation::deserialize(value).map(Location::Shop),
    };

    location.map_err(|source| DecodeError::Variant {
        location_type,
        source,
    })
}
