#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # fcdb-entities
//!
//! Reusable, agnostic domain entities for FoodCartDB.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod geo;
pub mod order;
pub mod place;
pub mod product;
pub mod restaurant;
pub mod time;
