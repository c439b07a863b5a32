use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, bail, Result};
use barbuzz_application::prelude as flows;
use barbuzz_core::gateways::{busyness::BusynessGateway, places::PlacesGateway};
use barbuzz_db_sqlite::Connections;
use barbuzz_gateways::{besttime::BestTime, cache::CachedPlacesGateway, google_places::GooglePlaces};
use clap::{Parser, Subcommand};

use crate::config::{self, Config};

type SharedPlacesGateway = Arc<dyn PlacesGateway + Send + Sync>;
type SharedBusynessGateway = Arc<dyn BusynessGateway + Send + Sync>;

#[derive(Debug, Parser)]
#[command(version, about = "Directory of bars and nightclubs nearby")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Import places by their id, updating places that are already known
    Import {
        #[arg(value_name = "PLACE_ID", required = true)]
        place_ids: Vec<String>,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    barbuzz_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let places = places_gateway(&cfg.google_places);
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg, connections, places),
        Command::Import { place_ids } => import_places(&connections, places, &place_ids),
    }
}

fn places_gateway(cfg: &config::GooglePlaces) -> Option<SharedPlacesGateway> {
    let Some(api_key) = &cfg.api_key else {
        warn!("No Google Maps API key found");
        return None;
    };
    info!("Use Google Places gateway");
    let gateway = GooglePlaces::new(api_key.clone(), cfg.api_base_url.clone());
    Some(Arc::new(CachedPlacesGateway::new(gateway, cfg.cache_ttl)))
}

fn busyness_gateway(cfg: &config::BestTime) -> Option<SharedBusynessGateway> {
    let (Some(api_key_private), Some(api_key_public)) = (&cfg.api_key_private, &cfg.api_key_public)
    else {
        warn!("No BestTime API keys found");
        return None;
    };
    info!("Use BestTime gateway");
    Some(Arc::new(BestTime::new(
        api_key_private.clone(),
        api_key_public.clone(),
        cfg.api_base_url.clone(),
    )))
}

fn serve(
    cfg: Config,
    connections: Connections,
    places: Option<SharedPlacesGateway>,
) -> Result<()> {
    let Config {
        search,
        webserver,
        google_places,
        besttime,
        ..
    } = cfg;
    let busyness = busyness_gateway(&besttime);
    let photos = google_places
        .api_key
        .map(|api_key| barbuzz_webserver::PhotoCfg {
            api_base_url: google_places.api_base_url,
            api_key,
        });
    let web_cfg = barbuzz_webserver::Cfg {
        default_radius_meters: search.default_radius_meters,
        default_limit: search.default_limit,
        max_wait_minutes: besttime.max_wait_minutes,
        nearby_cache_ttl: search.nearby_cache_ttl,
        photos,
    };

    // The blocking HTTP clients must not be dropped within the runtime
    let gateways = (places.clone(), busyness.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(barbuzz_webserver::run(
        connections,
        webserver.enable_cors,
        web_cfg,
        places,
        busyness,
        env!("CARGO_PKG_VERSION"),
    ));
    drop(runtime);
    drop(gateways);
    Ok(())
}

fn import_places(
    connections: &Connections,
    places: Option<SharedPlacesGateway>,
    place_ids: &[String],
) -> Result<()> {
    let places = places.ok_or_else(|| anyhow!("Importing places requires a places gateway"))?;
    let mut failed = 0;
    for place_id in place_ids {
        match flows::import_place(connections, &*places, place_id) {
            Ok(establishment) => {
                info!(
                    "Imported place {place_id} as '{}' ({})",
                    establishment.name, establishment.id
                );
            }
            Err(err) => {
                failed += 1;
                error!("Unable to import place {place_id}: {err}");
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} places could not be imported", place_ids.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_import_command() {
        let args = Args::try_parse_from(["barbuzz", "--db-url", "test.db", "import", "p1", "p2"])
            .unwrap();
        assert_eq!(Some("test.db"), args.db_url.as_deref());
        assert!(!args.enable_cors);
        match args.command {
            Some(Command::Import { place_ids }) => assert_eq!(vec!["p1", "p2"], place_ids),
            _ => panic!("Expected import command"),
        }
    }

    #[test]
    fn serve_by_default() {
        let args = Args::try_parse_from(["barbuzz", "--enable-cors"]).unwrap();
        assert!(args.enable_cors);
        assert!(args.command.is_none());
    }

    #[test]
    fn import_requires_place_ids() {
        assert!(Args::try_parse_from(["barbuzz", "import"]).is_err());
    }
}
