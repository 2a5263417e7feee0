use thiserror::Error;

use super::types::LocationType;

/// Errors that can occur when decoding a location from raw JSON.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload is not JSON, or `locationType` is not a string.
    #[error("failed to unmarshal location type: {0}")]
    Discriminator(#[source] serde_json::Error),
    #[error("unknown location type: {0}")]
    UnknownType(String),
    /// The payload does not match the shape selected by its tag.
    #[error("failed to unmarshal {location_type} location: {source}")]
    Variant {
        location_type: LocationType,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when validating a location.
///
/// Validation is fail-fast: only the first violation is reported.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("country must be a 2-character ISO 3166-1 alpha-2 code")]
    InvalidCountry,
    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),
    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),
    #[error("accuracy must be non-negative, got {0}")]
    NegativeAccuracy(f64),
    #[error("invalid locationType for {expected}: {found}")]
    TypeMismatch {
        expected: &'static str,
        found: LocationType,
    },
}
