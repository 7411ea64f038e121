use super::*;

fn restaurant_from_row(row: models::RestaurantRow) -> Restaurant {
    let models::RestaurantRow {
        id,
        name,
        address,
        contact_phone,
        coordinates,
    } = row;
    Restaurant {
        id: id.into(),
        name,
        coordinates: coordinates
            .as_deref()
            .and_then(|raw| load_coordinates(&address, raw)),
        address: address.into(),
        contact_phone,
    }
}

fn all_restaurants(conn: &mut SqliteConnection) -> Result<Vec<Restaurant>> {
    use schema::restaurant::dsl;
    let rows = dsl::restaurant
        .load::<models::RestaurantRow>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows.into_iter().map(restaurant_from_row).collect())
}

impl<'a> RestaurantRepo for DbReadOnly<'a> {
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
}

impl<'a> RestaurantRepo for DbReadWrite<'a> {
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
}

impl<'a> RestaurantRepo for DbConnection<'a> {
    fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        all_restaurants(&mut self.conn.borrow_mut())
    }
}
