//! Per-variant validation rules.
//!
//! Each check is a pure function over a borrowed value and returns the first
//! violated rule. The match in [`validate_location`] is exhaustive, so adding a
//! variant without rules fails to compile.

use super::error::ValidationError;
use super::types::{Address, Coordinates, Location, LocationBase, LocationType, Shop};

/// Validates a location of any variant.
pub fn validate_location(location: &Location) -> Result<(), ValidationError> {
    let expected = location.variant_type();
    validate_base(location.base(), expected)?;

    match location {
        Location::Address(l) => validate_address(&l.address),
        Location::Coordinates(l) => validate_coordinates(&l.coordinates),
        Location::Shop(l) => validate_shop(&l.shop),
    }
}

fn validate_base(base: &LocationBase, expected: LocationType) -> Result<(), ValidationError> {
    require("accountId", &base.account_id)?;
    if base.location_type != expected {
        return Err(ValidationError::TypeMismatch {
            expected: expected.typename(),
            found: base.location_type,
        });
    }
    Ok(())
}

/// Validates a mailing address.
pub fn validate_address(address: &Address) -> Result<(), ValidationError> {
    require("streetAddress", &address.street_address)?;
    require("city", &address.city)?;
    require("postalCode", &address.postal_code)?;
    require("country", &address.country)?;
    if address.country.chars().count() != 2 {
        return Err(ValidationError::InvalidCountry);
    }
    Ok(())
}

/// Validates GPS coordinates. NaN never falls inside a range.
pub fn validate_coordinates(coordinates: &Coordinates) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&coordinates.latitude) {
        return Err(ValidationError::LatitudeOutOfRange(coordinates.latitude));
    }
    if !(-180.0..=180.0).contains(&coordinates.longitude) {
        return Err(ValidationError::LongitudeOutOfRange(coordinates.longitude));
    }
    if let Some(accuracy) = coordinates.accuracy {
        if accuracy.is_nan() || accuracy < 0.0 {
            return Err(ValidationError::NegativeAccuracy(accuracy));
        }
    }
    Ok(())
}

/// Validates a shop and its embedded address.
pub fn validate_shop(shop: &Shop) -> Result<(), ValidationError> {
    require("name", &shop.name)?;
    require("contactId", &shop.contact_id)?;
    validate_address(&shop.address)
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}
