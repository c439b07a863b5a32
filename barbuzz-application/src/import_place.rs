use super::*;
use barbuzz_core::gateways::places::PlacesGateway;

/// Fetches a single record from the places data source and
/// stores it as an establishment.
pub fn import_place(
    connections: &sqlite::Connections,
    places: &dyn PlacesGateway,
    external_id: &str,
) -> Result<Establishment> {
    let Some(details) = places.place_details(external_id)? else {
        info!("Place {external_id} not found");
        return Err(RepoError::NotFound.into());
    };
    let establishment = connections
        .exclusive()?
        .transaction(|conn| usecases::import_place_details(conn, &details))
        .inspect_err(|err| {
            warn!("Failed to import place {external_id}: {err}");
        })?;
    info!(
        "Imported place {external_id} as establishment {} ({})",
        establishment.id, establishment.name
    );
    Ok(establishment)
}
