use crate::repositories::*;

/// Everything a single database connection provides.
pub trait Db: EstablishmentRepo + WaitTimeRepo + FavoriteRepo + UserRepo {}

impl<T> Db for T where T: EstablishmentRepo + WaitTimeRepo + FavoriteRepo + UserRepo {}
