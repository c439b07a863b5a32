use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "barbuzz.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_BEST_TIME_API_KEY_PRIVATE: &str = "BEST_TIME_API_KEY_PRIVATE";
const ENV_NAME_BEST_TIME_API_KEY_PUBLIC: &str = "BEST_TIME_API_KEY_PUBLIC";

pub struct Config {
    pub db: Db,
    pub search: Search,
    pub webserver: WebServer,
    pub google_places: GooglePlaces,
    pub besttime: BestTime,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_with(|name| env::var(name).ok());
        Ok(cfg)
    }

    fn override_with<F>(&mut self, env_var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db_url) = env_var(ENV_NAME_DB_URL) {
            self.db.conn_sqlite = db_url;
        }
        if let Some(api_key) = env_var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
            self.google_places.api_key = Some(api_key);
        }
        if let Some(api_key) = env_var(ENV_NAME_BEST_TIME_API_KEY_PRIVATE) {
            self.besttime.api_key_private = Some(api_key);
        }
        if let Some(api_key) = env_var(ENV_NAME_BEST_TIME_API_KEY_PUBLIC) {
            self.besttime.api_key_public = Some(api_key);
        }
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct Search {
    pub default_radius_meters: u32,
    pub default_limit: usize,
    pub nearby_cache_ttl: Duration,
}

pub struct WebServer {
    pub enable_cors: bool,
}

/// The gateway is only enabled if an API key is available.
pub struct GooglePlaces {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub cache_ttl: Duration,
}

/// The gateway is only enabled if both API keys are available.
pub struct BestTime {
    pub api_key_private: Option<String>,
    pub api_key_public: Option<String>,
    pub api_base_url: String,
    pub max_wait_minutes: u32,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            search,
            webserver,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Search {
            default_radius,
            default_limit,
            nearby_cache_ttl,
        } = search.unwrap_or_default();
        if default_radius == 0 {
            return Err(anyhow!("Invalid default search radius"));
        }
        if default_limit == 0 {
            return Err(anyhow!("Invalid default result limit"));
        }
        let search = Search {
            default_radius_meters: default_radius,
            default_limit,
            nearby_cache_ttl,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let webserver = WebServer { enable_cors: cors };

        let raw::Gateway {
            google_places,
            besttime,
        } = gateway.unwrap_or_default();

        let raw::GooglePlaces {
            api_key,
            api_base_url,
            cache_ttl,
        } = google_places.unwrap_or_default();
        let google_places = GooglePlaces {
            api_key,
            api_base_url: api_base_url
                .unwrap_or_else(|| barbuzz_gateways::google_places::DEFAULT_API_BASE_URL.into()),
            cache_ttl: cache_ttl.unwrap_or(barbuzz_gateways::cache::DEFAULT_PLACE_DETAILS_TTL),
        };

        let raw::BestTime {
            api_key_private,
            api_key_public,
            api_base_url,
            max_wait,
        } = besttime.unwrap_or_default();
        let besttime = BestTime {
            api_key_private,
            api_key_public,
            api_base_url: api_base_url
                .unwrap_or_else(|| barbuzz_gateways::besttime::DEFAULT_API_BASE_URL.into()),
            max_wait_minutes: max_wait
                .unwrap_or(barbuzz_core::usecases::DEFAULT_MAX_WAIT_MINUTES),
        };

        Ok(Self {
            db,
            search,
            webserver,
            google_places,
            besttime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }

    #[test]
    fn fill_in_gateway_defaults() {
        let raw_config: raw::Config = toml::from_str(
            r#"
            [db]
            connection-sqlite = ":memory:"
            connection-pool-size = 1
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw_config).unwrap();
        assert_eq!(":memory:", cfg.db.conn_sqlite);
        assert_eq!(12, cfg.search.default_limit);
        assert_eq!(
            barbuzz_gateways::google_places::DEFAULT_API_BASE_URL,
            cfg.google_places.api_base_url
        );
        assert_eq!(
            barbuzz_gateways::cache::DEFAULT_PLACE_DETAILS_TTL,
            cfg.google_places.cache_ttl
        );
        assert_eq!(60, cfg.besttime.max_wait_minutes);
    }

    #[test]
    fn reject_empty_connection_pool() {
        let raw_config: raw::Config = toml::from_str(
            r#"
            [db]
            connection-sqlite = "barbuzz.db"
            connection-pool-size = 0
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw_config).is_err());
    }

    #[test]
    fn override_with_environment() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        let vars: HashMap<_, _> = [
            (ENV_NAME_DB_URL, "other.db"),
            (ENV_NAME_GOOGLE_MAPS_API_KEY, "maps-key"),
            (ENV_NAME_BEST_TIME_API_KEY_PUBLIC, "public-key"),
        ]
        .into_iter()
        .collect();
        cfg.override_with(|name| vars.get(name).map(ToString::to_string));
        assert_eq!("other.db", cfg.db.conn_sqlite);
        assert_eq!(Some("maps-key"), cfg.google_places.api_key.as_deref());
        assert_eq!(None, cfg.besttime.api_key_private);
        assert_eq!(Some("public-key"), cfg.besttime.api_key_public.as_deref());
    }
}
