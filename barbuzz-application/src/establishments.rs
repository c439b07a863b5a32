use super::*;

pub fn create_establishment(
    connections: &sqlite::Connections,
    new_establishment: usecases::NewEstablishment,
) -> Result<Establishment> {
    let establishment = connections
        .exclusive()?
        .transaction(|conn| usecases::create_establishment(conn, new_establishment))
        .inspect_err(|err| {
            warn!("Failed to create new establishment: {err}");
        })?;
    info!(
        "Created establishment {} ({})",
        establishment.id, establishment.name
    );
    Ok(establishment)
}

pub fn update_establishment(
    connections: &sqlite::Connections,
    id: &str,
    new_establishment: usecases::NewEstablishment,
) -> Result<Establishment> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_establishment(conn, id, new_establishment))
        .inspect_err(|err| {
            warn!("Failed to update establishment {id}: {err}");
        })?)
}

pub fn delete_establishment(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_establishment(conn, id))
        .inspect_err(|err| {
            warn!("Failed to delete establishment {id}: {err}");
        })?)
}

pub fn get_establishment(connections: &sqlite::Connections, id: &str) -> Result<Establishment> {
    let db = connections.shared()?;
    Ok(usecases::get_establishment(&db, id)?)
}
