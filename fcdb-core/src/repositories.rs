// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Persistent address -> coordinate cache.
///
/// Entries are never deleted and never expire. An address that has been
/// resolved once is considered resolved forever.
pub trait PlaceRepo {
    fn get_place(&self, address: &str) -> Result<Place>;

    /// Batched lookup. Addresses without a cache entry are simply
    /// missing from the result, in no particular order.
    fn get_places(&self, addresses: &[&str]) -> Result<Vec<Place>>;

    fn create_or_update_place(&self, place: Place) -> Result<()>;

    /// Batch insert that skips addresses which already have an entry,
    /// e.g. because a concurrent batch resolved them first. Returns the
    /// number of newly created entries.
    fn create_places_if_not_exists(&self, places: Vec<Place>) -> Result<usize>;

    fn count_places(&self) -> Result<usize>;
}

pub trait RestaurantRepo {
    fn all_restaurants(&self) -> Result<Vec<Restaurant>>;
}

pub trait MenuRepo {
    /// Only rows that are currently offered for sale.
    fn available_menu_items(&self) -> Result<Vec<MenuItem>>;
}

pub trait OrderRepo {
    /// All orders with the given status, line items included.
    fn orders_with_items(&self, status: OrderStatus) -> Result<Vec<Order>>;
}
