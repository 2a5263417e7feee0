use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ValidationError;
use super::validation::validate_location;

/// Opaque caller-defined attributes attached to a location.
///
/// The service never inspects these; they are stored and returned as-is, except
/// that numbers are persisted as DynamoDB numbers, so a whole-valued float such
/// as `1.0` reads back as the integer `1`.
pub type ExtendedAttributes = Map<String, Value>;

/// Discriminator tag carried in the `locationType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// A location specified by mailing address.
    Address,
    /// A location specified by GPS coordinates.
    Coordinates,
    /// A shop with business details and an address.
    Shop,
}

impl LocationType {
    /// Returns the wire value of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Address => "address",
            LocationType::Coordinates => "coordinates",
            LocationType::Shop => "shop",
        }
    }

    /// Parses a wire tag. Matching is exact (case-sensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "address" => Some(LocationType::Address),
            "coordinates" => Some(LocationType::Coordinates),
            "shop" => Some(LocationType::Shop),
            _ => None,
        }
    }

    /// Returns the concrete GraphQL type name the gateway resolves this tag to.
    pub fn typename(&self) -> &'static str {
        match self {
            LocationType::Address => "AddressLocation",
            LocationType::Coordinates => "CoordinatesLocation",
            LocationType::Shop => "ShopLocation",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every location variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBase {
    /// Owning account (tenant) identifier.
    pub account_id: String,
    pub location_type: LocationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_attributes: Option<ExtendedAttributes>,
}

impl LocationBase {
    fn new(account_id: impl Into<String>, location_type: LocationType) -> Self {
        Self {
            account_id: account_id.into(),
            location_type,
            extended_attributes: None,
        }
    }
}

/// A mailing address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

/// GPS coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    /// Horizontal accuracy in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

/// A shop or business with its address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub name: String,
    pub contact_id: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressLocation {
    #[serde(flatten)]
    pub base: LocationBase,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesLocation {
    #[serde(flatten)]
    pub base: LocationBase,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopLocation {
    #[serde(flatten)]
    pub base: LocationBase,
    pub shop: Shop,
}

/// A location record, one of a closed set of shapes.
///
/// Serializes to the flat JSON object of the inner variant (including its
/// `locationType` tag). Decoding goes through [`super::decode`], which
/// branches on the tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Location {
    Address(AddressLocation),
    Coordinates(CoordinatesLocation),
    Shop(ShopLocation),
}

impl Location {
    /// Creates an address location for the given account.
    pub fn address(account_id: impl Into<String>, address: Address) -> Self {
        Location::Address(AddressLocation {
            base: LocationBase::new(account_id, LocationType::Address),
            address,
        })
    }

    /// Creates a coordinates location for the given account.
    pub fn coordinates(account_id: impl Into<String>, coordinates: Coordinates) -> Self {
        Location::Coordinates(CoordinatesLocation {
            base: LocationBase::new(account_id, LocationType::Coordinates),
            coordinates,
        })
    }

    /// Creates a shop location for the given account.
    pub fn shop(account_id: impl Into<String>, shop: Shop) -> Self {
        Location::Shop(ShopLocation {
            base: LocationBase::new(account_id, LocationType::Shop),
            shop,
        })
    }

    /// Sets the extended attributes.
    pub fn with_extended_attributes(mut self, attributes: ExtendedAttributes) -> Self {
        self.base_mut().extended_attributes = Some(attributes);
        self
    }

    pub fn base(&self) -> &LocationBase {
        match self {
            Location::Address(l) => &l.base,
            Location::Coordinates(l) => &l.base,
            Location::Shop(l) => &l.base,
        }
    }

    fn base_mut(&mut self) -> &mut LocationBase {
        match self {
            Location::Address(l) => &mut l.base,
            Location::Coordinates(l) => &mut l.base,
            Location::Shop(l) => &mut l.base,
        }
    }

    pub fn account_id(&self) -> &str {
        &self.base().account_id
    }

    /// The tag carried by the value. May disagree with the variant on a
    /// hand-built value; [`Location::validate`] rejects that.
    pub fn location_type(&self) -> LocationType {
        self.base().location_type
    }

    /// The tag implied by the variant itself.
    pub fn variant_type(&self) -> LocationType {
        match self {
            Location::Address(_) => LocationType::Address,
            Location::Coordinates(_) => LocationType::Coordinates,
            Location::Shop(_) => LocationType::Shop,
        }
    }

    pub fn extended_attributes(&self) -> Option<&ExtendedAttributes> {
        self.base().extended_attributes.as_ref()
    }

    /// Checks required fields and value ranges, failing on the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_location(self)
    }
}
