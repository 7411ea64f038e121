// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = place)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewPlace {
    pub address: String,
    pub coordinates: Option<String>,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct PlaceRow {
    pub rowid: i64,
    pub address: String,
    pub coordinates: Option<String>,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct RestaurantRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub contact_phone: String,
    pub coordinates: Option<String>,
}

#[derive(Queryable)]
pub struct OrderRow {
    pub id: i64,
    pub status: String,
    pub payment_method: String,
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    pub coordinates: Option<String>,
    pub comment: String,
    pub created_at: i64,
    pub called_at: Option<i64>,
    pub delivered_at: Option<i64>,
    pub cooking_restaurant_id: Option<i64>,
}

#[derive(Queryable)]
pub struct OrderItemRow {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}
