use std::fmt;

/// The logical action behind a GraphQL field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
    List,
}

impl Operation {
    /// Resolves a GraphQL field name. Variant-specific create/update fields
    /// are aliases of the generic ones; the payload's own tag picks the shape.
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "createLocation"
            | "createAddressLocation"
            | "createCoordinatesLocation"
            | "createShopLocation" => Some(Operation::Create),
            "getLocation" => Some(Operation::Get),
            "updateLocation"
            | "updateAddressLocation"
            | "updateCoordinatesLocation"
            | "updateShopLocation" => Some(Operation::Update),
            "deleteLocation" => Some(Operation::Delete),
            "listLocations" => Some(Operation::List),
            _ => None,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
        }
    }

    /// The action named in error context, e.g. "failed to create location".
    pub fn action(&self) -> &'static str {
        match self {
            Operation::Create => "create location",
            Operation::Get => "get location",
            Operation::Update => "update location",
            Operation::Delete => "delete location",
            Operation::List => "list locations",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_aliases() {
        for field in [
            "createLocation",
            "createAddressLocation",
            "createCoordinatesLocation",
            "createShopLocation",
        ] {
            assert_eq!(Operation::from_field(field), Some(Operation::Create));
        }
    }

    #[test]
    fn test_update_aliases() {
        for field in [
            "updateLocation",
            "updateAddressLocation",
            "updateCoordinatesLocation",
            "updateShopLocation",
        ] {
            assert_eq!(Operation::from_field(field), Some(Operation::Update));
        }
    }

    #[test]
    fn test_single_name_operations() {
        assert_eq!(Operation::from_field("getLocation"), Some(Operation::Get));
        assert_eq!(Operation::from_field("deleteLocation"), Some(Operation::Delete));
        assert_eq!(Operation::from_field("listLocations"), Some(Operation::List));
    }

    #[test]
    fn test_action() {
        assert_eq!(Operation::Delete.action(), "delete location");
        assert_eq!(Operation::List.action(), "list locations");
        assert_eq!(Operation::List.to_string(), "list");
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(Operation::from_field("deleteAddressLocation"), None);
        assert_eq!(Operation::from_field("GetLocation"), None);
        assert_eq!(Operation::from_field(""), None);
    }
}
