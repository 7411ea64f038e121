//! # fcdb-gateways
//!
//! Gateway implementations for external collaborators, currently the
//! Yandex geocoding provider.

pub mod yandex;
