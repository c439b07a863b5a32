#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # barbuzz-entities
//!
//! Domain entities of BarBuzz: establishments, their positions,
//! wait time samples, favorites and users.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod classification;
pub mod establishment;
pub mod favorite;
pub mod geo;
pub mod id;
pub mod opening_hours;
pub mod time;
pub mod user;
pub mod wait_time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
