use fcdb_core::entities::Coordinate;

/// Decodes the stored `[latitude, longitude]` JSON array. Malformed
/// values are logged and treated as "never resolved".
pub fn load_coordinates(address: &str, raw: &str) -> Option<Coordinate> {
    match serde_json::from_str::<[f64; 2]>(raw) {
        Ok([lat, lng]) => Some(Coordinate::new(lat, lng)),
        Err(err) => {
            log::warn!("Malformed stored coordinates for '{address}': {err}");
            None
        }
    }
}

/// Encodes coordinates as the external `[latitude, longitude]` contract.
pub fn save_coordinates(pos: &Coordinate) -> String {
    serde_json::json!([pos.lat, pos.lng]).to_string()
}
