//! Response shapes returned to the gateway.
//!
//! The gateway resolves a polymorphic `Location` by `__typename`, so every
//! location is returned as a flat object carrying its identifier and concrete
//! type name next to the stored fields.

use serde::Serialize;

use crate::location::Location;
use crate::storage::{LocationPage, StoredLocation};

/// A single location as returned by `getLocation` and inside list pages.
#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse<'a> {
    #[serde(rename = "__typename")]
    pub typename: &'static str,
    #[serde(rename = "locationId")]
    pub location_id: &'a str,
    #[serde(flatten)]
    pub location: &'a Location,
}

impl<'a> LocationResponse<'a> {
    pub fn new(location_id: &'a str, location: &'a Location) -> Self {
        Self {
            typename: location.location_type().typename(),
            location_id,
            location,
        }
    }
}

impl<'a> From<&'a StoredLocation> for LocationResponse<'a> {
    fn from(stored: &'a StoredLocation) -> Self {
        Self::new(&stored.location_id, &stored.location)
    }
}

/// Response of `listLocations`.
#[derive(Debug, Clone, Serialize)]
pub struct ListLocationsResponse<'a> {
    pub locations: Vec<LocationResponse<'a>>,
    #[serde(rename = "nextCursor", skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<&'a str>,
}

impl<'a> From<&'a LocationPage> for ListLocationsResponse<'a> {
    fn from(page: &'a LocationPage) -> Self {
        Self {
            locations: page.locations.iter().map(LocationResponse::from).collect(),
            next_cursor: page.next_cursor.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::location::{Address, Coordinates};

    fn address_location() -> Location {
        Location::address(
            "acc-1",
            Address {
                street_address: "123 Main St".to_string(),
                street_address2: None,
                city: "Springfield".to_string(),
                state_province: None,
                postal_code: "62701".to_string(),
                country: "US".to_string(),
            },
        )
        .with_extended_attributes(json!({"floor": 2}).as_object().cloned().unwrap())
    }

    #[test]
    fn test_location_response_is_flat() {
        let location = address_location();
        let value = serde_json::to_value(LocationResponse::new("loc-1", &location)).unwrap();

        assert_eq!(
            value,
            json!({
                "__typename": "AddressLocation",
                "locationId": "loc-1",
                "accountId": "acc-1",
                "locationType": "address",
                "extendedAttributes": {"floor": 2},
                "address": {
                    "streetAddress": "123 Main St",
                    "city": "Springfield",
                    "postalCode": "62701",
                    "country": "US"
                }
            })
        );
    }

    #[test]
    fn test_list_response_pairs_ids_with_locations() {
        let page = LocationPage {
            locations: vec![
                StoredLocation {
                    location_id: "loc-1".to_string(),
                    location: address_location(),
                },
                StoredLocation {
                    location_id: "loc-2".to_string(),
                    location: Location::coordinates(
                        "acc-1",
                        Coordinates {
                            latitude: 1.5,
                            longitude: 2.5,
                            altitude: None,
                            accuracy: None,
                        },
                    ),
                },
            ],
            next_cursor: Some("token".to_string()),
        };

        let value = serde_json::to_value(ListLocationsResponse::from(&page)).unwrap();

        assert_eq!(value["nextCursor"], "token");
        assert_eq!(value["locations"][0]["locationId"], "loc-1");
        assert_eq!(value["locations"][0]["__typename"], "AddressLocation");
        assert_eq!(value["locations"][1]["locationId"], "loc-2");
        assert_eq!(value["locations"][1]["__typename"], "CoordinatesLocation");
        assert_eq!(value["locations"][1]["coordinates"]["latitude"], 1.5);
    }

    #[test]
    fn test_list_response_omits_cursor_on_last_page() {
        let page = LocationPage::default();
        let value = serde_json::to_value(ListLocationsResponse::from(&page)).unwrap();

        assert_eq!(value, json!({"locations": []}));
    }
}
