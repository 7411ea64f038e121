use std::fmt;

use crate::{address::Address, geo::Coordinate, product::ProductId};

/// Identifier of a restaurant as assigned by the relational store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RestaurantId(pub i64);

impl From<i64> for RestaurantId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// May be blank for restaurants without a registered address.
    pub address: Address,
    pub contact_phone: String,
    /// Resolved lazily and only kept in memory for the current batch.
    pub coordinates: Option<Coordinate>,
}

/// One row of the restaurant menu relation: the restaurant currently
/// offers the product for sale. The relation is unique per
/// (restaurant, product) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItem {
    pub restaurant_id: RestaurantId,
    pub product_id: ProductId,
}
