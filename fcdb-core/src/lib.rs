//! # fcdb-core
//!
//! Business logic of FoodCartDB: fulfillment matching, batched address
//! resolution and order enrichment. All I/O happens behind the repository
//! and gateway traits so that implementations can be substituted in tests.

pub mod entities {
    pub use fcdb_entities::{
        address::*, geo::*, order::*, place::*, product::*, restaurant::*, time::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
