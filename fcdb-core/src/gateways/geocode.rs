use crate::entities::{Address, Coordinate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Blank input. No request is attempted.
    #[error("cannot geocode an empty address")]
    InvalidAddress,
    /// The provider answered but did not find a match. Definitive,
    /// retrying cannot change it.
    #[error("no coordinates found for the address")]
    ResolutionFailed,
    /// The request could not be completed after exhausting the retry
    /// budget.
    #[error("geocoding provider unavailable")]
    Provider(#[source] anyhow::Error),
}

pub trait GeoCodingGateway {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Result<Coordinate, GeocodeError>;
}
