mod search;

pub mod prelude {
    use std::{cell::Cell, collections::HashMap};

    pub use barbuzz_core::{
        bbox::DegreeApproximation,
        db::*,
        entities::*,
        gateways::{busyness::BusynessGateway, places::*},
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use barbuzz_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub const AUSTIN: (f64, f64) = (30.2672, -97.7431);

    pub fn austin() -> MapPoint {
        MapPoint::from_lat_lng_deg(AUSTIN.0, AUSTIN.1)
    }

    /// A position the given number of miles north of downtown Austin.
    pub fn north_of_austin(miles: f64) -> MapPoint {
        let km = miles / 0.621371;
        let deg = km / (std::f64::consts::PI * 6371.0 / 180.0);
        MapPoint::from_lat_lng_deg(AUSTIN.0 + deg, AUSTIN.1)
    }

    pub fn new_bar(name: &str) -> usecases::NewEstablishment {
        usecases::NewEstablishment {
            name: name.into(),
            lat: AUSTIN.0,
            lng: AUSTIN.1,
            classification: Some("bar".into()),
            ..Default::default()
        }
    }

    #[derive(Default)]
    pub struct DummyPlacesGW {
        pub details: HashMap<String, PlaceDetails>,
        pub unavailable: bool,
        pub requests: Cell<usize>,
    }

    impl DummyPlacesGW {
        pub fn with_photo(external_id: &str, photo_reference: &str) -> Self {
            let mut details = HashMap::new();
            details.insert(
                external_id.to_owned(),
                PlaceDetails {
                    place_id: Some(external_id.into()),
                    types: vec!["bar".into()],
                    photo_reference: Some(photo_reference.into()),
                    ..Default::default()
                },
            );
            Self {
                details,
                ..Default::default()
            }
        }
    }

    impl PlacesGateway for DummyPlacesGW {
        fn place_details(&self, external_id: &str) -> anyhow::Result<Option<PlaceDetails>> {
            self.requests.set(self.requests.get() + 1);
            if self.unavailable {
                anyhow::bail!("Places API unavailable");
            }
            Ok(self.details.get(external_id).cloned())
        }
    }

    /// Reports a fixed busyness or fails if there is none.
    pub struct DummyBusynessGW {
        pub busyness_pct: Option<f64>,
    }

    impl BusynessGateway for DummyBusynessGW {
        fn create_forecast(&self, name: &str, _address: &str) -> anyhow::Result<String> {
            Ok(format!("ven_{name}"))
        }

        fn current_busyness(&self, _venue_id: &str) -> anyhow::Result<f64> {
            self.busyness_pct
                .ok_or_else(|| anyhow::anyhow!("Forecast unavailable"))
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            barbuzz_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn create_establishment(&self, establishment: Establishment) -> Establishment {
            self.db_connections
                .exclusive()
                .unwrap()
                .create_establishment(&establishment)
                .unwrap();
            establishment
        }

        pub fn create_user(&self, username: &str, token: &str) -> User {
            let user = User {
                id: Id::new(),
                username: username.into(),
            };
            self.db_connections
                .exclusive()
                .unwrap()
                .create_user(&user, token)
                .unwrap();
            user
        }

        pub fn try_get_establishment(&self, id: &str) -> Option<Establishment> {
            match self.db_connections.shared().unwrap().get_establishment(id) {
                Ok(establishment) => Some(establishment),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn wait_time_samples(&self, establishment_id: &str) -> Vec<WaitTimeSample> {
            self.db_connections
                .shared()
                .unwrap()
                .wait_time_samples(establishment_id)
                .unwrap()
        }
    }
}
