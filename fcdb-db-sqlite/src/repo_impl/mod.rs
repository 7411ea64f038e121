use diesel::{prelude::*, result::Error as DieselError, sqlite::SqliteConnection};

use fcdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{
    models, schema,
    util::{load_coordinates, save_coordinates},
    DbConnection, DbReadOnly, DbReadWrite,
};

mod menu;
mod order;
mod place;
mod restaurant;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}
