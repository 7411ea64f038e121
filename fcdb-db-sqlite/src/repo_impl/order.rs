use std::collections::HashMap;

use anyhow::anyhow;

use super::*;

fn order_from_row(row: models::OrderRow, items: Vec<OrderItem>) -> Result<Order> {
    let models::OrderRow {
        id,
        status,
        payment_method,
        firstname,
        lastname,
        phonenumber,
        address,
        coordinates,
        comment,
        created_at,
        called_at,
        delivered_at,
        cooking_restaurant_id,
    } = row;
    let status = status
        .parse::<OrderStatus>()
        .map_err(|_| repo::Error::Other(anyhow!("unknown order status '{status}'")))?;
    let payment_method = payment_method
        .parse::<PaymentMethod>()
        .map_err(|_| repo::Error::Other(anyhow!("unknown payment method '{payment_method}'")))?;
    Ok(Order {
        id: id.into(),
        status,
        payment_method,
        firstname,
        lastname,
        phonenumber,
        coordinates: coordinates
            .as_deref()
            .and_then(|raw| load_coordinates(&address, raw)),
        address: address.into(),
        comment,
        created_at: Timestamp::from_milliseconds(created_at),
        called_at: called_at.map(Timestamp::from_milliseconds),
        delivered_at: delivered_at.map(Timestamp::from_milliseconds),
        cooking_restaurant: cooking_restaurant_id.map(Into::into),
        items,
        possible_restaurants: vec![],
    })
}

fn orders_with_items(conn: &mut SqliteConnection, status: OrderStatus) -> Result<Vec<Order>> {
    let rows = schema::orders::table
        .filter(schema::orders::dsl::status.eq(status.to_string()))
        .order_by(schema::orders::dsl::created_at.desc())
        .load::<models::OrderRow>(conn)
        .map_err(from_diesel_err)?;

    let order_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let item_rows = schema::order_item::table
        .filter(schema::order_item::dsl::order_id.eq_any(&order_ids))
        .load::<models::OrderItemRow>(conn)
        .map_err(from_diesel_err)?;
    let mut items_by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for item in item_rows {
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push(OrderItem {
                product_id: item.product_id.into(),
                quantity: item.quantity as u32,
            });
    }

    rows.into_iter()
        .map(|row| {
            let items = items_by_order.remove(&row.id).unwrap_or_default();
            order_from_row(row, items)
        })
        .collect()
}

impl<'a> OrderRepo for DbReadOnly<'a> {
    fn orders_with_items(&self, status: OrderStatus) -> Result<Vec<Order>> {
        orders_with_items(&mut self.conn.borrow_mut(), status)
    }
}

impl<'a> OrderRepo for DbReadWrite<'a> {
    fn orders_with_items(&self, status: OrderStatus) -> Result<Vec<Order>> {
        orders_with_items(&mut self.conn.borrow_mut(), status)
    }
}

impl<'a> OrderRepo for DbConnection<'a> {
    fn orders_with_items(&self, status: OrderStatus) -> Result<Vec<Order>> {
        orders_with_items(&mut self.conn.borrow_mut(), status)
    }
}
