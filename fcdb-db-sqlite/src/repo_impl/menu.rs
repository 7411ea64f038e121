use super::*;

fn available_menu_items(conn: &mut SqliteConnection) -> Result<Vec<MenuItem>> {
    use schema::restaurant_menu_item::dsl;
    let rows = dsl::restaurant_menu_item
        .filter(dsl::availability.ne(0_i16))
        .select((dsl::restaurant_id, dsl::product_id))
        .load::<(i64, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|(restaurant_id, product_id)| MenuItem {
            restaurant_id: restaurant_id.into(),
            product_id: product_id.into(),
        })
        .collect())
}

impl<'a> MenuRepo for DbReadOnly<'a> {
    fn available_menu_items(&self) -> Result<Vec<MenuItem>> {
        available_menu_items(&mut self.conn.borrow_mut())
    }
}

impl<'a> MenuRepo for DbReadWrite<'a> {
    fn available_menu_items(&self) -> Result<Vec<MenuItem>> {
        available_menu_items(&mut self.conn.borrow_mut())
    }
}

impl<'a> MenuRepo for DbConnection<'a> {
    fn available_menu_items(&self) -> Result<Vec<MenuItem>> {
        available_menu_items(&mut self.conn.borrow_mut())
    }
}
