use super::*;
use crate::error::AppError;
use barbuzz_core::{
    bbox::BboxProjection,
    gateways::places::PlacesGateway,
    usecases::{NearbyEstablishment, NearbyQuery, TextQuery},
};

/// Bar-like establishments around a location, nearest first.
///
/// Only invalid queries are reported as errors. Any other failure
/// is logged and results in an empty list.
pub fn find_nearby_bars<P>(
    connections: &sqlite::Connections,
    projection: &P,
    places: Option<&dyn PlacesGateway>,
    query: &NearbyQuery,
) -> Result<Vec<NearbyEstablishment>>
where
    P: BboxProjection + ?Sized,
{
    let found = connections
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(usecases::nearby(&db, projection, query)?));
    let mut results = match found {
        Ok(results) => results,
        Err(err) if err.is_parameter_error() => return Err(err),
        Err(err) => {
            error!("Failed to search nearby bars: {err}");
            return Ok(vec![]);
        }
    };
    if let Some(places) = places {
        complete_details(
            connections,
            places,
            results.iter_mut().map(|r| &mut r.establishment),
        );
    }
    Ok(results)
}

/// Bar-like establishments that mention the given text.
pub fn find_bars_by_text(
    connections: &sqlite::Connections,
    places: Option<&dyn PlacesGateway>,
    query: &TextQuery,
) -> Result<Vec<Establishment>> {
    let found = connections
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(usecases::search_by_text(&db, query)?));
    let mut results = match found {
        Ok(results) => results,
        Err(err) if err.is_parameter_error() => return Err(err),
        Err(err) => {
            error!("Failed to search bars by text '{}': {err}", query.text);
            return Ok(vec![]);
        }
    };
    if let Some(places) = places {
        complete_details(connections, places, results.iter_mut());
    }
    Ok(results)
}

// Modifies the results in place and never reorders them.
fn complete_details<'a>(
    connections: &sqlite::Connections,
    places: &dyn PlacesGateway,
    establishments: impl Iterator<Item = &'a mut Establishment>,
) {
    for establishment in establishments.filter(|e| e.lacks_details()) {
        let Some(external_id) = establishment.external_id.as_deref() else {
            continue;
        };
        let details = match places.place_details(external_id) {
            Ok(Some(details)) => details,
            Ok(None) => {
                debug!("Place {external_id} is unknown to the places data source");
                continue;
            }
            Err(err) => {
                warn!("Failed to fetch details of place {external_id}: {err}");
                continue;
            }
        };
        let mut completed = establishment.clone();
        if !usecases::complete_establishment_details(&mut completed, &details) {
            continue;
        }
        match store_completed_details(connections, &completed) {
            Ok(()) => {
                debug!("Completed details of establishment {}", completed.id);
                *establishment = completed;
            }
            Err(err) => {
                warn!(
                    "Failed to store completed details of establishment {}: {err}",
                    completed.id
                );
            }
        }
    }
}

fn store_completed_details(
    connections: &sqlite::Connections,
    establishment: &Establishment,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| conn.update_establishment(establishment))?;
    Ok(())
}
