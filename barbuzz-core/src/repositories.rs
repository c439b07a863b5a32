// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Restricts which classifications a query may return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassificationFilter {
    /// Only {bar}, {nightclub} and {bar, nightclub}
    #[default]
    BarLike,
    Any,
}

impl ClassificationFilter {
    pub fn accepts(self, classification: &Classification) -> bool {
        match self {
            Self::BarLike => classification.is_bar_like(),
            Self::Any => true,
        }
    }
}

pub trait EstablishmentRepo {
    fn create_establishment(&self, establishment: &Establishment) -> Result<()>;
    fn update_establishment(&self, establishment: &Establishment) -> Result<()>;
    fn delete_establishment(&self, id: &str) -> Result<()>;

    /// Inserts a new record or replaces the attributes of the record
    /// with the same external id. The internal id and the creation
    /// time of an existing record are preserved.
    fn upsert_establishment_by_external_id(
        &self,
        establishment: Establishment,
    ) -> Result<Establishment>;

    fn get_establishment(&self, id: &str) -> Result<Establishment>;
    fn try_get_establishment_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Establishment>>;

    // Results are returned in insertion order
    fn establishments_in_bbox(
        &self,
        bbox: &MapBbox,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>>;

    /// Case-insensitive substring match on name, address or description.
    fn establishments_by_text(
        &self,
        text: &str,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>>;

    fn all_establishments(&self) -> Result<Vec<Establishment>>;
    fn count_establishments(&self) -> Result<usize>;
}

pub trait WaitTimeRepo {
    fn add_wait_time_sample(&self, sample: &WaitTimeSample) -> Result<()>;

    // Latest timestamp wins, ties are resolved by insertion order
    fn latest_wait_time_sample(&self, establishment_id: &str) -> Result<Option<WaitTimeSample>>;

    fn wait_time_samples(&self, establishment_id: &str) -> Result<Vec<WaitTimeSample>>;
}

pub trait FavoriteRepo {
    fn create_favorite(&self, favorite: &Favorite) -> Result<()>;
    fn delete_favorite(&self, favorite: &Favorite) -> Result<()>;
    fn is_favorite(&self, favorite: &Favorite) -> Result<bool>;
    fn favorite_establishments_of_user(&self, user_id: &str) -> Result<Vec<Establishment>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User, token: &str) -> Result<()>;
    fn get_user_by_token(&self, token: &str) -> Result<User>;
}
