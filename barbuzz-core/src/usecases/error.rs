use crate::{repositories, util::validate::EstablishmentInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Location parameters required")]
    MissingLocation,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Empty search text")]
    EmptyQuery,
    #[error("The name is invalid")]
    Name,
    #[error("Price level out of range")]
    PriceLevel,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid wait time")]
    WaitTime,
    #[error("Invalid opening hours")]
    InvalidOpeningHours,
    #[error("Invalid classification")]
    Classification,
    #[error("Not a bar or nightclub")]
    NotBarLike,
    #[error("Missing place id")]
    MissingPlaceId,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<EstablishmentInvalidation> for Error {
    fn from(err: EstablishmentInvalidation) -> Self {
        match err {
            EstablishmentInvalidation::Name => Self::Name,
            EstablishmentInvalidation::MissingLocation => Self::MissingLocation,
            EstablishmentInvalidation::Position => Self::InvalidPosition,
        }
    }
}

impl From<barbuzz_entities::establishment::PriceLevelOutOfRange> for Error {
    fn from(_: barbuzz_entities::establishment::PriceLevelOutOfRange) -> Self {
        Self::PriceLevel
    }
}

impl From<barbuzz_entities::establishment::RatingOutOfRange> for Error {
    fn from(_: barbuzz_entities::establishment::RatingOutOfRange) -> Self {
        Self::RatingValue
    }
}

impl From<barbuzz_entities::classification::ClassificationParseError> for Error {
    fn from(_: barbuzz_entities::classification::ClassificationParseError) -> Self {
        Self::Classification
    }
}

impl From<barbuzz_entities::opening_hours::HourMinuteParseError> for Error {
    fn from(_: barbuzz_entities::opening_hours::HourMinuteParseError) -> Self {
        Self::InvalidOpeningHours
    }
}
