use thiserror::Error;

// The Earth's radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographical position in decimal degrees.
///
/// The constructor does not validate the ranges. Coordinates loaded from
/// external stores may be out of range; [`distance_km`] rejects them
/// instead of producing nonsense.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("coordinates are out of range")]
pub struct InvalidCoordinate;

/// Great-circle distance between two points in kilometers.
pub fn distance_km(a: Coordinate, b: Coordinate) -> Result<f64, InvalidCoordinate> {
    if !a.is_valid() || !b.is_valid() {
        return Err(InvalidCoordinate);
    }
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin() * (dlat / 2.0).sin()
        + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_KM * c)
}
