mod enrich_orders;
mod error;
mod match_restaurants;
mod resolve_addresses;

#[cfg(test)]
pub mod tests;

pub use self::{
    enrich_orders::*, error::Error, match_restaurants::*, resolve_addresses::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*, repositories::*};
}
