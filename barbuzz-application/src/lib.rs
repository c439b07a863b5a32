#[macro_use]
extern crate log;

mod establishments;
mod favorites;
mod import_place;
mod search_bars;
mod users;
mod wait_times;

pub mod prelude {
    pub use super::{
        establishments::*, favorites::*, import_place::*, search_bars::*, users::*,
        wait_times::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use barbuzz_core::{
    entities::*,
    repositories::{Error as RepoError, *},
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use barbuzz_db_sqlite::Connections;
}
