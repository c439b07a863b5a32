use super::prelude::*;

/// Adds the establishment to the user's favorites or removes it
/// if it is already there.
///
/// Must run inside a single transaction to be atomic.
pub fn toggle_favorite<R>(repo: &R, user: &User, establishment_id: &str) -> Result<FavoriteStatus>
where
    R: EstablishmentRepo + FavoriteRepo + ?Sized,
{
    let establishment = repo.get_establishment(establishment_id)?;
    let favorite = Favorite {
        user_id: user.id.clone(),
        establishment_id: establishment.id,
    };
    let status = if repo.is_favorite(&favorite)? {
        repo.delete_favorite(&favorite)?;
        FavoriteStatus::Unfavorited
    } else {
        repo.create_favorite(&favorite)?;
        FavoriteStatus::Favorited
    };
    log::debug!(
        "User {} {} establishment {}",
        user.username,
        status.as_str(),
        favorite.establishment_id
    );
    Ok(status)
}

pub fn favorites_of_user<R>(repo: &R, user: &User) -> Result<Vec<Establishment>>
where
    R: FavoriteRepo + ?Sized,
{
    Ok(repo.favorite_establishments_of_user(user.id.as_str())?)
}
