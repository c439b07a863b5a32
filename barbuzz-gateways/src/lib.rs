//! # barbuzz-gateways
//!
//! Clients of the third-party services.

pub mod besttime;
pub mod cache;
pub mod google_places;
