use barbuzz_entities::{establishment::Establishment, geo::MapPoint};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstablishmentInvalidation {
    #[error("Empty name")]
    Name,
    #[error("Missing location")]
    MissingLocation,
    #[error("Invalid position")]
    Position,
}

/// Clients send `0,0` if the location is unknown.
pub fn validate_search_center(pos: MapPoint) -> Result<(), EstablishmentInvalidation> {
    if !pos.is_valid() {
        return Err(EstablishmentInvalidation::Position);
    }
    if pos.is_origin() {
        return Err(EstablishmentInvalidation::MissingLocation);
    }
    Ok(())
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

impl Validate for Establishment {
    type Error = EstablishmentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.name) {
            return Err(EstablishmentInvalidation::Name);
        }
        validate_search_center(self.pos)
    }
}
