mod decode;
mod error;
mod types;
mod validation;

pub use decode::{decode, from_value};
pub use error::{DecodeError, ValidationError};
pub use types::{
    Address, AddressLocation, Coordinates, CoordinatesLocation, ExtendedAttributes, Location,
    LocationBase, LocationType, Shop, ShopLocation,
};
pub(crate) use validation::require;
pub use validation::{validate_address, validate_coordinates, validate_location, validate_shop};
