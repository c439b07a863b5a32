use std::{collections::HashMap, sync::Arc, time::Duration};

use barbuzz_core::gateways::{
    busyness::BusynessGateway,
    places::{PlaceDetails, PlacesGateway},
};
use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use super::{sqlite, Cfg, Gateways, InstanceOptions};
use crate::core::prelude::*;

pub mod prelude {

    pub const DUMMY_VERSION: &str = "1.2.3";

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{
        create_user, default_cfg, rocket_test_setup, rocket_test_setup_with_gateways,
        DummyBusynessGW, DummyPlacesGW,
    };

    pub use crate::core::{db::*, repositories::*};
}

pub fn default_cfg() -> Cfg {
    Cfg {
        default_radius_meters: 5000,
        default_limit: 12,
        max_wait_minutes: 60,
        nearby_cache_ttl: Duration::from_secs(300),
        photos: None,
    }
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, sqlite::Connections) {
    rocket_test_setup_with_gateways(
        mounts,
        default_cfg(),
        Gateways {
            places: None,
            busyness: None,
        },
    )
}

pub fn rocket_test_setup_with_gateways(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    gateways: Gateways,
) -> (Client, sqlite::Connections) {
    let connections = barbuzz_db_sqlite::Connections::init(":memory:", 1).unwrap();
    barbuzz_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
        .unwrap();
    let db = sqlite::Connections::from(connections);
    let options = InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn create_user(db: &sqlite::Connections, username: &str, token: &str) -> User {
    let user = User {
        id: Id::new(),
        username: username.into(),
    };
    db.exclusive().unwrap().create_user(&user, token).unwrap();
    user
}

#[derive(Default)]
pub struct DummyPlacesGW {
    pub details: HashMap<String, PlaceDetails>,
}

impl DummyPlacesGW {
    pub fn into_gateways(self) -> Gateways {
        Gateways {
            places: Some(Arc::new(self)),
            busyness: None,
        }
    }
}

impl PlacesGateway for DummyPlacesGW {
    fn place_details(&self, external_id: &str) -> anyhow::Result<Option<PlaceDetails>> {
        Ok(self.details.get(external_id).cloned())
    }
}

/// Reports a fixed busyness or fails if there is none.
pub struct DummyBusynessGW(pub Option<f64>);

impl DummyBusynessGW {
    pub fn into_gateways(self) -> Gateways {
        Gateways {
            places: None,
            busyness: Some(Arc::new(self)),
        }
    }
}

impl BusynessGateway for DummyBusynessGW {
    fn create_forecast(&self, name: &str, _address: &str) -> anyhow::Result<String> {
        Ok(format!("ven_{name}"))
    }

    fn current_busyness(&self, _venue_id: &str) -> anyhow::Result<f64> {
        self.0.ok_or_else(|| anyhow::anyhow!("No forecast"))
    }
}
