//! # barbuzz-core
//!
//! Repository and gateway traits together with the use cases
//! that operate on them. No I/O happens in here.

pub mod bbox;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use barbuzz_entities::{
        classification::*, establishment::*, favorite::*, geo::*, id::*, opening_hours::*,
        time::*, user::*, wait_time::*,
    };
}
