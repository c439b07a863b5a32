mod error;
mod establishments;
mod favorites;
mod import_place;
mod nearby;
mod search;
mod wait_times;

#[cfg(test)]
pub mod tests;

pub use self::{
    error::Error, establishments::*, favorites::*, import_place::*, nearby::*, search::*,
    wait_times::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
