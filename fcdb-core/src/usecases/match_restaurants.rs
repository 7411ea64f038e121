use super::prelude::*;
use std::collections::{HashMap, HashSet};

/// Restaurants that stock every required product.
///
/// A restaurant qualifies iff the requirement is non-empty and a subset
/// of its available menu. There is no partial fulfillment: stocking only
/// some of the required products excludes a restaurant entirely.
///
/// Instead of a per-restaurant subset check the menu relation is scanned
/// once, counting per restaurant how many of the required products it
/// stocks. The relation is unique per (restaurant, product) pair, so a
/// count equal to the requirement size means "stocks all of them".
pub fn match_fulfilling_restaurants<'a>(
    required_products: &HashSet<ProductId>,
    menu_items: impl IntoIterator<Item = &'a MenuItem>,
) -> HashSet<RestaurantId> {
    if required_products.is_empty() {
        return HashSet::new();
    }
    let mut stocked_counts: HashMap<RestaurantId, usize> = HashMap::new();
    for item in menu_items {
        if required_products.contains(&item.product_id) {
            *stocked_counts.entry(item.restaurant_id).or_default() += 1;
        }
    }
    stocked_counts
        .into_iter()
        .filter_map(|(restaurant_id, count)| {
            (count == required_products.len()).then_some(restaurant_id)
        })
        .collect()
}
