#[macro_use]
extern crate log;

use std::sync::Arc;

use barbuzz_core::gateways::{busyness::BusynessGateway, places::PlacesGateway};
use barbuzz_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::{Cfg, PhotoCfg};

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    places: Option<Arc<dyn PlacesGateway + Send + Sync>>,
    busyness: Option<Arc<dyn BusynessGateway + Send + Sync>>,
    version: &'static str,
) {
    web::run(
        connections.into(),
        enable_cors,
        cfg,
        places,
        busyness,
        version,
    )
    .await;
}
