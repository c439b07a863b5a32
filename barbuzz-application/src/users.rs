use super::*;
use crate::error::AppError;

/// Resolves the user of an access token.
pub fn authenticate_user(connections: &sqlite::Connections, token: &str) -> Result<User> {
    if token.is_empty() {
        return Err(usecases::Error::Unauthorized.into());
    }
    let db = connections.shared()?;
    db.get_user_by_token(token).map_err(|err| match err {
        RepoError::NotFound => AppError::from(usecases::Error::Unauthorized),
        err => err.into(),
    })
}
