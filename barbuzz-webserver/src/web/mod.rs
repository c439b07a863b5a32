use std::{sync::Arc, time::Duration};

use barbuzz_core::gateways::{busyness::BusynessGateway, places::PlacesGateway};
use barbuzz_gateways::cache::{CacheKey, TtlCache};
use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::adapters::json;

pub mod api;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

/// Everything needed to build photo URLs from photo references.
#[derive(Debug, Clone)]
pub struct PhotoCfg {
    pub api_base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub default_radius_meters: u32,
    pub default_limit: usize,
    pub max_wait_minutes: u32,
    /// How long unfiltered nearby results are reused
    pub nearby_cache_ttl: Duration,
    pub photos: Option<PhotoCfg>,
}

/// Recent results of nearby searches without post-filters.
///
/// Cleared whenever an establishment is modified.
pub struct NearbyCache(TtlCache<CacheKey, Vec<json::Establishment>>);

impl NearbyCache {
    pub fn new(ttl: Duration) -> Self {
        Self(TtlCache::new(ttl))
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    places: Option<Arc<dyn PlacesGateway + Send + Sync>>,
    busyness: Option<Arc<dyn BusynessGateway + Send + Sync>>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { places, busyness } = gateways;

    if places.is_none() {
        info!("No places gateway configured");
    }
    if busyness.is_none() {
        info!("No busyness gateway configured, wait times are only reported by users");
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let nearby_cache = NearbyCache::new(cfg.nearby_cache_ttl);
    let places = guards::Places(places);
    let busyness = guards::Busyness(busyness);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(nearby_cache)
        .manage(places)
        .manage(busyness)
        .manage(cfg)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    places: Option<Arc<dyn PlacesGateway + Send + Sync>>,
    busyness: Option<Arc<dyn BusynessGateway + Send + Sync>>,
    version: &'static str,
) {
    let mounts = mounts();
    let options = InstanceOptions {
        mounts,
        rocket_cfg: None,
        cfg,
        version,
    };
    let gateways = Gateways { places, busyness };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
