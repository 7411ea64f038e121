use std::{collections::HashSet, fmt};

use crate::{
    address::Address, geo::Coordinate, product::ProductId, restaurant::RestaurantId,
    time::Timestamp,
};

/// Identifier of an order as assigned by the relational store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub i64);

impl From<i64> for OrderId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Unprocessed,
    Confirmed,
    Preparing,
    Delivering,
    Completed,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Electronic,
}

/// One line item of an order. The quantity is irrelevant for fulfillment
/// matching, only the presence of the product matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A restaurant that is able to prepare an order in full, annotated with
/// the great-circle distance to the customer if both positions are known.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantCandidate {
    pub id: RestaurantId,
    pub name: String,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: Address,
    /// Stored position of the delivery address, if it has ever been
    /// resolved.
    pub coordinates: Option<Coordinate>,
    pub comment: String,
    pub created_at: Timestamp,
    pub called_at: Option<Timestamp>,
    pub delivered_at: Option<Timestamp>,
    pub cooking_restaurant: Option<RestaurantId>,
    pub items: Vec<OrderItem>,
    /// Ranked fulfillment candidates, attached by the enrichment step.
    pub possible_restaurants: Vec<RestaurantCandidate>,
}

impl Order {
    /// The set of products a restaurant must stock to prepare this order.
    pub fn required_products(&self) -> HashSet<ProductId> {
        self.items.iter().map(|item| item.product_id).collect()
    }
}
