use super::prelude::*;
use std::collections::{HashMap, HashSet};

/// Resolves a set of addresses to coordinates, best effort.
///
/// The cache is consulted with a single batched lookup first; cached
/// coordinates are final and never re-resolved. Only the remaining
/// addresses are sent to the geocoding gateway, once each, and every
/// newly resolved pair is persisted with a conflict-ignoring batch
/// insert so that concurrent batches cannot fail each other.
///
/// Addresses that could not be resolved are simply absent from the
/// returned map. A geocoding failure for one address never aborts the
/// resolution of the others; only repository failures propagate.
pub fn resolve_addresses<D, G>(
    db: &D,
    geo: &G,
    addresses: &HashSet<Address>,
) -> Result<HashMap<Address, Coordinate>>
where
    D: PlaceRepo,
    G: GeoCodingGateway + ?Sized,
{
    let mut resolved = HashMap::with_capacity(addresses.len());

    let lookup: Vec<&str> = addresses.iter().map(Address::as_str).collect();
    for place in db.get_places(&lookup)? {
        if let Some(coordinates) = place.coordinates {
            resolved.insert(place.address, coordinates);
        }
    }
    log::debug!(
        "Resolved {} of {} addresses from the coordinate cache",
        resolved.len(),
        addresses.len()
    );

    let mut new_places = Vec::new();
    for address in addresses {
        if resolved.contains_key(address) {
            continue;
        }
        match geo.resolve_address_lat_lng(address) {
            Ok(coordinates) => {
                resolved.insert(address.clone(), coordinates);
                new_places.push(Place::resolved(address.clone(), coordinates));
            }
            Err(GeocodeError::InvalidAddress) => {
                log::debug!("Skipped geocoding of blank address");
            }
            Err(err) => {
                log::warn!("Failed to resolve address '{address}': {err}");
            }
        }
    }

    if !new_places.is_empty() {
        let created = db.create_places_if_not_exists(new_places)?;
        log::debug!("Cached {created} newly resolved addresses");
    }

    Ok(resolved)
}
