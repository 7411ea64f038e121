use super::*;
use crate::{entities::*, gateways::geocode::*, repositories::*};

use anyhow::anyhow;
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    result,
};

type RepoResult<T> = result::Result<T, RepoError>;
use crate::repositories::Error as RepoError;

#[derive(Default)]
pub struct MockDb {
    pub places: RefCell<Vec<Place>>,
}

impl PlaceRepo for MockDb {
    fn get_place(&self, address: &str) -> RepoResult<Place> {
        self.places
            .borrow()
            .iter()
            .find(|place| place.address.as_str() == address)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_places(&self, addresses: &[&str]) -> RepoResult<Vec<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .filter(|place| addresses.contains(&place.address.as_str()))
            .cloned()
            .collect())
    }

    fn create_or_update_place(&self, place: Place) -> RepoResult<()> {
        let mut places = self.places.borrow_mut();
        if let Some(existing) = places
            .iter_mut()
            .find(|existing| existing.address == place.address)
        {
            *existing = place;
        } else {
            places.push(place);
        }
        Ok(())
    }

    fn create_places_if_not_exists(&self, new_places: Vec<Place>) -> RepoResult<usize> {
        let mut places = self.places.borrow_mut();
        let mut created = 0;
        for place in new_places {
            if places.iter().any(|existing| existing.address == place.address) {
                continue;
            }
            places.push(place);
            created += 1;
        }
        Ok(created)
    }

    fn count_places(&self) -> RepoResult<usize> {
        Ok(self.places.borrow().len())
    }
}

/// Scripted geocoder that records every attempted lookup.
#[derive(Default)]
pub struct MockGeoGw {
    pub known: HashMap<String, Coordinate>,
    pub unreachable: HashSet<String>,
    pub requests: RefCell<Vec<String>>,
}

impl MockGeoGw {
    pub fn with_known(known: &[(&str, Coordinate)]) -> Self {
        Self {
            known: known
                .iter()
                .map(|(address, pos)| ((*address).to_string(), *pos))
                .collect(),
            ..Self::default()
        }
    }

    pub fn request_count(&self, address: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|requested| requested.as_str() == address)
            .count()
    }
}

impl GeoCodingGateway for MockGeoGw {
    fn resolve_address_lat_lng(&self, addr: &Address) -> result::Result<Coordinate, GeocodeError> {
        if addr.is_empty() {
            return Err(GeocodeError::InvalidAddress);
        }
        self.requests.borrow_mut().push(addr.to_string());
        if self.unreachable.contains(addr.as_str()) {
            return Err(GeocodeError::Provider(anyhow!("connection timed out")));
        }
        self.known
            .get(addr.as_str())
            .copied()
            .ok_or(GeocodeError::ResolutionFailed)
    }
}

fn new_order(id: i64, address: &str, product_ids: &[i64]) -> Order {
    Order {
        id: id.into(),
        status: OrderStatus::default(),
        payment_method: PaymentMethod::default(),
        firstname: "Jane".into(),
        lastname: "Doe".into(),
        phonenumber: "+700000000".into(),
        address: address.into(),
        coordinates: None,
        comment: String::new(),
        created_at: Timestamp::now(),
        called_at: None,
        delivered_at: None,
        cooking_restaurant: None,
        items: product_ids
            .iter()
            .map(|&product_id| OrderItem {
                product_id: product_id.into(),
                quantity: 1,
            })
            .collect(),
        possible_restaurants: vec![],
    }
}

fn new_restaurant(id: i64, name: &str, address: &str) -> Restaurant {
    Restaurant {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        contact_phone: String::new(),
        coordinates: None,
    }
}

fn new_menu(items: &[(i64, i64)]) -> Vec<MenuItem> {
    items
        .iter()
        .map(|&(restaurant_id, product_id)| MenuItem {
            restaurant_id: restaurant_id.into(),
            product_id: product_id.into(),
        })
        .collect()
}

fn addresses(addrs: &[&str]) -> HashSet<Address> {
    addrs.iter().map(|&a| Address::from(a)).collect()
}

#[test]
fn resolve_addresses_prefers_the_cache() {
    let db = MockDb::default();
    let cached = Coordinate::new(55.75, 37.61);
    db.create_or_update_place(Place::resolved("Main St 1".into(), cached))
        .unwrap();
    let geo = MockGeoGw::with_known(&[("Main St 1", Coordinate::new(1.0, 2.0))]);

    let resolved = resolve_addresses(&db, &geo, &addresses(&["Main St 1"])).unwrap();

    // cached coordinates win, no request is issued
    assert_eq!(resolved[&Address::from("Main St 1")], cached);
    assert!(geo.requests.borrow().is_empty());
}

#[test]
fn resolve_addresses_is_idempotent_with_a_warm_cache() {
    let db = MockDb::default();
    let geo = MockGeoGw::with_known(&[("Main St 1", Coordinate::new(55.75, 37.61))]);
    let addrs = addresses(&["Main St 1"]);

    let first = resolve_addresses(&db, &geo, &addrs).unwrap();
    assert_eq!(geo.request_count("Main St 1"), 1);
    assert_eq!(db.count_places().unwrap(), 1);

    let second = resolve_addresses(&db, &geo, &addrs).unwrap();
    assert_eq!(first, second);
    // the second batch is served entirely from the cache
    assert_eq!(geo.request_count("Main St 1"), 1);
}

#[test]
fn resolve_addresses_collects_best_effort_results() {
    let db = MockDb::default();
    let mut geo = MockGeoGw::with_known(&[("Good St 1", Coordinate::new(55.75, 37.61))]);
    geo.unreachable.insert("Down St 3".into());
    let addrs = addresses(&["Good St 1", "Nowhere 2", "Down St 3"]);

    let resolved = resolve_addresses(&db, &geo, &addrs).unwrap();

    assert_eq!(resolved.len(), 1);
    assert!(resolved.contains_key(&Address::from("Good St 1")));
    // every address was attempted exactly once
    assert_eq!(geo.request_count("Good St 1"), 1);
    assert_eq!(geo.request_count("Nowhere 2"), 1);
    assert_eq!(geo.request_count("Down St 3"), 1);
    // only the successful resolution was cached
    assert_eq!(db.count_places().unwrap(), 1);
    assert!(db.get_place("Good St 1").is_ok());
}

#[test]
fn resolve_addresses_skips_blank_addresses_without_touching_the_cache() {
    let db = MockDb::default();
    let geo = MockGeoGw::default();

    let resolved = resolve_addresses(&db, &geo, &addresses(&[""])).unwrap();

    assert!(resolved.is_empty());
    assert!(geo.requests.borrow().is_empty());
    assert_eq!(db.count_places().unwrap(), 0);
}

#[test]
fn losing_an_insert_race_is_not_an_error() {
    let db = MockDb::default();
    let first_writer = Coordinate::new(1.0, 1.0);
    db.create_or_update_place(Place::resolved("Main St 1".into(), first_writer))
        .unwrap();

    // a batch that resolved the same address concurrently loses the
    // insert without an error and without clobbering the stored value
    let created = db
        .create_places_if_not_exists(vec![Place::resolved(
            "Main St 1".into(),
            Coordinate::new(2.0, 2.0),
        )])
        .unwrap();

    assert_eq!(created, 0);
    assert_eq!(db.count_places().unwrap(), 1);
    assert_eq!(
        db.get_place("Main St 1").unwrap().coordinates,
        Some(first_writer)
    );
}

#[test]
fn enrich_ranks_fulfilling_restaurants_by_distance() {
    let db = MockDb::default();
    let geo = MockGeoGw::with_known(&[
        ("Customer St 1", Coordinate::new(55.75, 37.61)),
        ("Near Ave 2", Coordinate::new(55.76, 37.62)),
        ("Far Rd 3", Coordinate::new(55.85, 37.75)),
    ]);

    let mut orders = vec![new_order(1, "Customer St 1", &[1, 2])];
    // "Near" and "Far" stock everything, "Partial" only one product,
    // "Lost" stocks everything but its address cannot be resolved
    let menu = new_menu(&[
        (10, 1),
        (10, 2),
        (10, 3),
        (20, 1),
        (30, 1),
        (30, 2),
        (40, 1),
        (40, 2),
    ]);
    let mut restaurants: HashMap<RestaurantId, Restaurant> = [
        (RestaurantId(10), new_restaurant(10, "Far", "Far Rd 3")),
        (RestaurantId(20), new_restaurant(20, "Partial", "Near Ave 2")),
        (RestaurantId(30), new_restaurant(30, "Near", "Near Ave 2")),
        (RestaurantId(40), new_restaurant(40, "Lost", "Atlantis 9")),
    ]
    .into_iter()
    .collect();

    enrich_orders_with_restaurants(&db, &geo, &mut orders, &menu, &mut restaurants).unwrap();

    let candidates = &orders[0].possible_restaurants;
    let summary: Vec<(RestaurantId, Option<f64>)> = candidates
        .iter()
        .map(|c| (c.id, c.distance_km))
        .collect();
    assert_eq!(summary.len(), 3);
    // nearest first, unresolved last, partial fulfiller excluded
    assert_eq!(summary[0].0, RestaurantId(30));
    assert_eq!(summary[1].0, RestaurantId(10));
    assert_eq!(summary[2], (RestaurantId(40), None));
    let near = summary[0].1.unwrap();
    assert!((near - 1.28).abs() < 0.01);
    assert!(summary[1].1.unwrap() > near);
}

#[test]
fn enrich_geocodes_each_distinct_address_once() {
    let db = MockDb::default();
    let geo = MockGeoGw::with_known(&[
        ("Customer St 1", Coordinate::new(55.75, 37.61)),
        ("Customer St 2", Coordinate::new(55.74, 37.60)),
        ("Main St 1", Coordinate::new(55.76, 37.62)),
    ]);

    // both orders can be prepared by the same restaurant
    let mut orders = vec![
        new_order(1, "Customer St 1", &[1]),
        new_order(2, "Customer St 2", &[1]),
    ];
    let menu = new_menu(&[(10, 1)]);
    let mut restaurants = [(RestaurantId(10), new_restaurant(10, "Main", "Main St 1"))]
        .into_iter()
        .collect();

    enrich_orders_with_restaurants(&db, &geo, &mut orders, &menu, &mut restaurants).unwrap();

    assert_eq!(geo.request_count("Main St 1"), 1);
    assert_eq!(geo.request_count("Customer St 1"), 1);
    assert_eq!(geo.request_count("Customer St 2"), 1);
    assert!(orders
        .iter()
        .all(|order| order.possible_restaurants.len() == 1));
}

#[test]
fn enrich_keeps_candidates_for_unresolvable_order_addresses() {
    let db = MockDb::default();
    let geo = MockGeoGw::with_known(&[("Main St 1", Coordinate::new(55.76, 37.62))]);

    let mut orders = vec![new_order(1, "Unknown Alley 7", &[1])];
    let menu = new_menu(&[(10, 1)]);
    let mut restaurants = [(RestaurantId(10), new_restaurant(10, "Main", "Main St 1"))]
        .into_iter()
        .collect();

    enrich_orders_with_restaurants(&db, &geo, &mut orders, &menu, &mut restaurants).unwrap();

    let candidates = &orders[0].possible_restaurants;
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].distance_km, None);
}

#[test]
fn enrich_fills_missing_restaurant_coordinates_for_the_batch() {
    let db = MockDb::default();
    let geo = MockGeoGw::with_known(&[
        ("Customer St 1", Coordinate::new(55.75, 37.61)),
        ("Main St 1", Coordinate::new(55.76, 37.62)),
    ]);

    let mut orders = vec![new_order(1, "Customer St 1", &[1])];
    let menu = new_menu(&[(10, 1)]);
    let mut restaurants: HashMap<RestaurantId, Restaurant> =
        [(RestaurantId(10), new_restaurant(10, "Main", "Main St 1"))]
            .into_iter()
            .collect();

    enrich_orders_with_restaurants(&db, &geo, &mut orders, &menu, &mut restaurants).unwrap();

    assert_eq!(
        restaurants[&RestaurantId(10)].coordinates,
        Some(Coordinate::new(55.76, 37.62))
    );
}

#[test]
fn enrich_without_orders_is_a_no_op() {
    let db = MockDb::default();
    let geo = MockGeoGw::default();
    let mut orders: Vec<Order> = vec![];
    let mut restaurants = [(RestaurantId(10), new_restaurant(10, "Main", "Main St 1"))]
        .into_iter()
        .collect();

    enrich_orders_with_restaurants(&db, &geo, &mut orders, &[], &mut restaurants).unwrap();

    assert!(geo.requests.borrow().is_empty());
}

#[test]
fn enrich_degrades_invalid_stored_coordinates_to_unknown_distance() {
    let db = MockDb::default();
    let geo = MockGeoGw::with_known(&[("Customer St 1", Coordinate::new(55.75, 37.61))]);

    let mut orders = vec![new_order(1, "Customer St 1", &[1])];
    let menu = new_menu(&[(10, 1)]);
    let mut broken = new_restaurant(10, "Broken", "Main St 1");
    // out-of-range latitude straight from the store
    broken.coordinates = Some(Coordinate::new(123.0, 37.62));
    let mut restaurants = [(RestaurantId(10), broken)].into_iter().collect();

    enrich_orders_with_restaurants(&db, &geo, &mut orders, &menu, &mut restaurants).unwrap();

    let candidates = &orders[0].possible_restaurants;
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].distance_km, None);
}
