use super::*;

#[get("/favorites")]
pub fn get_favorites(
    connections: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
) -> Result<Vec<json::Establishment>> {
    let user = auth.user(&connections)?;
    let favorites = flows::favorites_of_user(&connections, &user)?;
    Ok(Json(
        favorites
            .into_iter()
            .map(|e| to_json::establishment(e, None, cfg.photos.as_ref()))
            .collect(),
    ))
}

#[post("/favorites/<id>/toggle")]
pub fn post_toggle_favorite(
    connections: sqlite::Connections,
    auth: Auth,
    id: &str,
) -> Result<json::FavoriteToggled> {
    let user = auth.user(&connections)?;
    let status = flows::toggle_favorite(&connections, &user, id)?;
    Ok(Json(status.into()))
}
