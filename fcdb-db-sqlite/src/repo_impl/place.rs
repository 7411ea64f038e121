use super::*;

fn place_from_row(row: models::PlaceRow) -> Place {
    let models::PlaceRow {
        address,
        coordinates,
        updated_at,
        ..
    } = row;
    Place {
        coordinates: coordinates
            .as_deref()
            .and_then(|raw| load_coordinates(&address, raw)),
        address: address.into(),
        updated_at: Timestamp::from_milliseconds(updated_at),
    }
}

fn row_from_place(place: Place) -> models::NewPlace {
    models::NewPlace {
        coordinates: place.coordinates.as_ref().map(save_coordinates),
        address: place.address.into(),
        updated_at: place.updated_at.into_milliseconds(),
    }
}

fn get_place(conn: &mut SqliteConnection, address: &str) -> Result<Place> {
    use schema::place::dsl;
    let row = dsl::place
        .filter(dsl::address.eq(address))
        .first::<models::PlaceRow>(conn)
        .map_err(from_diesel_err)?;
    Ok(place_from_row(row))
}

fn get_places(conn: &mut SqliteConnection, addresses: &[&str]) -> Result<Vec<Place>> {
    use schema::place::dsl;
    let rows = dsl::place
        .filter(dsl::address.eq_any(addresses))
        .load::<models::PlaceRow>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows.into_iter().map(place_from_row).collect())
}

fn create_or_update_place(conn: &mut SqliteConnection, place: Place) -> Result<()> {
    use schema::place::dsl;
    let row = row_from_place(place);
    diesel::insert_into(schema::place::table)
        .values(&row)
        .on_conflict(dsl::address)
        .do_update()
        .set((
            dsl::coordinates.eq(&row.coordinates),
            dsl::updated_at.eq(row.updated_at),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_places_if_not_exists(conn: &mut SqliteConnection, places: Vec<Place>) -> Result<usize> {
    let rows: Vec<models::NewPlace> = places.into_iter().map(row_from_place).collect();
    let created = diesel::insert_into(schema::place::table)
        .values(&rows)
        .on_conflict_do_nothing()
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(created)
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::place::dsl;
    let count = dsl::place
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}

impl<'a> PlaceRepo for DbReadWrite<'a> {
    fn get_place(&self, address: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), address)
    }
    fn get_places(&self, addresses: &[&str]) -> Result<Vec<Place>> {
        get_places(&mut self.conn.borrow_mut(), addresses)
    }
    fn create_or_update_place(&self, place: Place) -> Result<()> {
        create_or_update_place(&mut self.conn.borrow_mut(), place)
    }
    fn create_places_if_not_exists(&self, places: Vec<Place>) -> Result<usize> {
        create_places_if_not_exists(&mut self.conn.borrow_mut(), places)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}

impl<'a> PlaceRepo for DbConnection<'a> {
    fn get_place(&self, address: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), address)
    }
    fn get_places(&self, addresses: &[&str]) -> Result<Vec<Place>> {
        get_places(&mut self.conn.borrow_mut(), addresses)
    }
    fn create_or_update_place(&self, place: Place) -> Result<()> {
        create_or_update_place(&mut self.conn.borrow_mut(), place)
    }
    fn create_places_if_not_exists(&self, places: Vec<Place>) -> Result<usize> {
        create_places_if_not_exists(&mut self.conn.borrow_mut(), places)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}
