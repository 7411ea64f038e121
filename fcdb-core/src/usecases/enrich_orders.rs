use super::{match_restaurants::match_fulfilling_restaurants, prelude::*, resolve_addresses};
use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

/// Attaches a ranked list of fulfillment candidates to each order.
///
/// All order and restaurant addresses are resolved with a single call to
/// [`resolve_addresses`], which bounds external geocoding requests by the
/// number of distinct uncached addresses in the batch, independent of how
/// many orders or restaurants share them.
///
/// Restaurants whose coordinates are still unknown afterwards remain
/// eligible for matching but always rank with an unknown distance. The
/// same holds for orders whose own address could not be resolved: their
/// candidate list is derived from menu matching alone.
///
/// Restaurant coordinates filled in here are kept in memory for the
/// current batch only and are not written back to the restaurant record.
pub fn enrich_orders_with_restaurants<D, G>(
    db: &D,
    geo: &G,
    orders: &mut [Order],
    menu_items: &[MenuItem],
    restaurants: &mut HashMap<RestaurantId, Restaurant>,
) -> Result<()>
where
    D: PlaceRepo,
    G: GeoCodingGateway + ?Sized,
{
    if orders.is_empty() {
        return Ok(());
    }

    let addresses: HashSet<Address> = orders
        .iter()
        .map(|order| &order.address)
        .chain(restaurants.values().map(|restaurant| &restaurant.address))
        .filter(|address| !address.is_empty())
        .cloned()
        .collect();
    let resolved = resolve_addresses(db, geo, &addresses)?;

    for restaurant in restaurants.values_mut() {
        if restaurant.coordinates.is_none() {
            restaurant.coordinates = resolved.get(&restaurant.address).copied();
        }
    }

    for order in orders.iter_mut() {
        let order_coordinates = order
            .coordinates
            .or_else(|| resolved.get(&order.address).copied());
        let required = order.required_products();
        let matched = match_fulfilling_restaurants(&required, menu_items);

        let mut candidates: Vec<RestaurantCandidate> = matched
            .into_iter()
            .filter_map(|restaurant_id| {
                let Some(restaurant) = restaurants.get(&restaurant_id) else {
                    log::warn!(
                        "Menu references unknown restaurant {restaurant_id}, skipped for order {}",
                        order.id
                    );
                    return None;
                };
                Some(RestaurantCandidate {
                    id: restaurant_id,
                    name: restaurant.name.clone(),
                    distance_km: candidate_distance_km(
                        order.id,
                        order_coordinates,
                        restaurant.coordinates,
                    ),
                })
            })
            .collect();
        candidates.sort_by(cmp_by_distance);
        order.possible_restaurants = candidates;
    }
    Ok(())
}

/// Distance in km rounded to two decimal places, or `None` if either
/// position is unknown or invalid. Never fails the batch.
fn candidate_distance_km(
    order_id: OrderId,
    order: Option<Coordinate>,
    restaurant: Option<Coordinate>,
) -> Option<f64> {
    let (order, restaurant) = (order?, restaurant?);
    match distance_km(order, restaurant) {
        Ok(km) => Some((km * 100.0).round() / 100.0),
        Err(err) => {
            log::warn!("Failed to compute candidate distance for order {order_id}: {err}");
            None
        }
    }
}

/// Ascending by distance; candidates with an unknown distance sort last.
fn cmp_by_distance(a: &RestaurantCandidate, b: &RestaurantCandidate) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
