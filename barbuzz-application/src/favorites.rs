use super::*;

pub fn toggle_favorite(
    connections: &sqlite::Connections,
    user: &User,
    establishment_id: &str,
) -> Result<FavoriteStatus> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::toggle_favorite(conn, user, establishment_id))
        .inspect_err(|err| {
            warn!(
                "Failed to toggle favorite {establishment_id} of user {}: {err}",
                user.username
            );
        })?)
}

pub fn favorites_of_user(connections: &sqlite::Connections, user: &User) -> Result<Vec<Establishment>> {
    let db = connections.shared()?;
    Ok(usecases::favorites_of_user(&db, user)?)
}
