use crate::{address::Address, geo::Coordinate, time::Timestamp};

/// A cached address resolution.
///
/// Created on the first successful geocoding of an address and kept
/// indefinitely. A place whose `coordinates` are `None` has never been
/// resolved successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub address: Address,
    pub coordinates: Option<Coordinate>,
    pub updated_at: Timestamp,
}

impl Place {
    pub fn resolved(address: Address, coordinates: Coordinate) -> Self {
        Self {
            address,
            coordinates: Some(coordinates),
            updated_at: Timestamp::now(),
        }
    }
}
