use std::str::FromStr;

use super::*;
use barbuzz_core::{bbox::DegreeApproximation, gateways::places::PlacesGateway};
use barbuzz_gateways::cache::CacheKey;

fn parse_param<T: FromStr>(
    param: Option<&str>,
    invalid: ParameterError,
) -> result::Result<Option<T>, ParameterError> {
    param
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<T>().map_err(|_| invalid))
        .transpose()
}

fn parse_filter(
    price_level: Option<&str>,
    rating: Option<&str>,
) -> result::Result<usecases::ResultFilter, ParameterError> {
    let price_level = parse_param::<i64>(price_level, ParameterError::PriceLevel)?
        .map(PriceLevel::try_from)
        .transpose()?;
    let min_rating = parse_param::<f64>(rating, ParameterError::RatingValue)?
        .map(RatingValue::try_from)
        .transpose()?;
    Ok(usecases::ResultFilter {
        price_level,
        min_rating,
    })
}

#[allow(clippy::too_many_arguments)]
#[get("/bars?<lat>&<lng>&<radius>&<limit>&<price_level>&<rating>&<query>&<global>")]
pub async fn get_bars(
    connections: sqlite::Connections,
    cfg: &State<Cfg>,
    places: &State<Places>,
    nearby_cache: &State<NearbyCache>,
    lat: Option<&str>,
    lng: Option<&str>,
    radius: Option<&str>,
    limit: Option<&str>,
    price_level: Option<&str>,
    rating: Option<&str>,
    query: Option<String>,
    global: Option<&str>,
) -> Result<Vec<json::Establishment>> {
    let filter = parse_filter(price_level, rating)?;
    let photos = cfg.photos.clone();
    let places = places.0.clone();

    let is_global = global.is_some_and(|g| g.trim().eq_ignore_ascii_case("true"));
    if let Some(text) = query.filter(|q| is_global && !q.trim().is_empty()) {
        // An unusable limit falls back to the default for text searches
        let limit = parse_param::<usize>(limit, ParameterError::InvalidLimit)
            .ok()
            .flatten()
            .filter(|l| *l > 0)
            .unwrap_or(cfg.default_limit);
        let query = usecases::TextQuery {
            text,
            limit,
            filter,
        };
        let results = spawn_blocking(move || {
            let places = places.as_deref().map(|gw| gw as &dyn PlacesGateway);
            flows::find_bars_by_text(&connections, places, &query)
        })
        .await?;
        return Ok(Json(
            results
                .into_iter()
                .map(|e| to_json::establishment(e, None, photos.as_ref()))
                .collect(),
        ));
    }

    let lat = parse_param::<f64>(lat, ParameterError::InvalidPosition)?.unwrap_or(0.0);
    let lng = parse_param::<f64>(lng, ParameterError::InvalidPosition)?.unwrap_or(0.0);
    let radius = parse_param::<u32>(radius, ParameterError::InvalidRadius)?
        .unwrap_or(cfg.default_radius_meters);
    let limit =
        parse_param::<usize>(limit, ParameterError::InvalidLimit)?.unwrap_or(cfg.default_limit);
    let center =
        MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(ParameterError::InvalidPosition)?;

    let query = usecases::NearbyQuery {
        center,
        radius: Distance::from_meters(f64::from(radius)),
        limit,
        filter,
    };
    let cache_key = filter
        .is_empty()
        .then(|| CacheKey::nearby(lat, lng, radius, limit));
    if let Some(results) = cache_key.as_ref().and_then(|key| nearby_cache.0.get(key)) {
        debug!("Serving nearby results from cache");
        return Ok(Json(results));
    }

    let results = spawn_blocking(move || {
        let places = places.as_deref().map(|gw| gw as &dyn PlacesGateway);
        flows::find_nearby_bars(&connections, &DegreeApproximation, places, &query)
    })
    .await?;
    // Incomplete records might be completed by later requests
    let cacheable = !results.is_empty()
        && results
            .iter()
            .all(|result| !result.establishment.lacks_details());
    let results: Vec<_> = results
        .into_iter()
        .map(
            |usecases::NearbyEstablishment {
                 establishment,
                 distance,
             }| { to_json::establishment(establishment, Some(distance), photos.as_ref()) },
        )
        .collect();
    // Empty results might be caused by a temporary fault
    if let Some(key) = cache_key.filter(|_| cacheable) {
        nearby_cache.0.insert(key, results.clone());
    }
    Ok(Json(results))
}

#[get("/bars/<id>")]
pub fn get_bar(
    connections: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    id: &str,
) -> Result<json::Establishment> {
    auth.user(&connections)?;
    let establishment = flows::get_establishment(&connections, id)?;
    Ok(Json(to_json::establishment(
        establishment,
        None,
        cfg.photos.as_ref(),
    )))
}

#[post("/bars", format = "application/json", data = "<body>")]
pub fn post_bar(
    connections: sqlite::Connections,
    auth: Auth,
    nearby_cache: &State<NearbyCache>,
    body: JsonResult<json::NewEstablishment>,
) -> Result<String> {
    auth.user(&connections)?;
    let new_establishment = from_json::try_new_establishment(body?.into_inner())?;
    let establishment = flows::create_establishment(&connections, new_establishment)?;
    nearby_cache.0.clear();
    Ok(Json(establishment.id.into()))
}

#[put("/bars/<id>", format = "application/json", data = "<body>")]
pub fn put_bar(
    connections: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    nearby_cache: &State<NearbyCache>,
    id: &str,
    body: JsonResult<json::NewEstablishment>,
) -> Result<json::Establishment> {
    auth.user(&connections)?;
    let new_establishment = from_json::try_new_establishment(body?.into_inner())?;
    let establishment = flows::update_establishment(&connections, id, new_establishment)?;
    nearby_cache.0.clear();
    Ok(Json(to_json::establishment(
        establishment,
        None,
        cfg.photos.as_ref(),
    )))
}

#[delete("/bars/<id>")]
pub fn delete_bar(
    connections: sqlite::Connections,
    auth: Auth,
    nearby_cache: &State<NearbyCache>,
    id: &str,
) -> StatusResult {
    auth.user(&connections)?;
    flows::delete_establishment(&connections, id)?;
    nearby_cache.0.clear();
    Ok(Status::NoContent)
}
