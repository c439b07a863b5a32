use thiserror::Error;

use crate::{
    classification::Classification, geo::MapPoint, id::Id, opening_hours::OpeningHours,
    time::Timestamp,
};

/// Price category from 0 (free) to 4 (very expensive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriceLevel(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Price level {0} is out of range")]
pub struct PriceLevelOutOfRange(pub i64);

impl PriceLevel {
    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(4)
    }

    pub const fn to_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PriceLevel {
    type Error = PriceLevelOutOfRange;

    fn try_from(from: i64) -> Result<Self, Self::Error> {
        u8::try_from(from)
            .ok()
            .map(Self)
            .filter(|p| *p <= Self::max())
            .ok_or(PriceLevelOutOfRange(from))
    }
}

impl From<PriceLevel> for u8 {
    fn from(from: PriceLevel) -> Self {
        from.0
    }
}

/// Average user rating between 0.0 and 5.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RatingValue(f64);

#[derive(Debug, Error, PartialEq)]
#[error("Rating {0} is out of range")]
pub struct RatingOutOfRange(pub f64);

impl RatingValue {
    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub const fn to_f64(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for RatingValue {
    type Error = RatingOutOfRange;

    fn try_from(from: f64) -> Result<Self, Self::Error> {
        // NaN fails both comparisons
        if from >= Self::min().0 && from <= Self::max().0 {
            Ok(Self(from))
        } else {
            Err(RatingOutOfRange(from))
        }
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

/// A bar, nightclub or any other venue known to the directory.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Establishment {
    pub id              : Id,
    /// Identifier of the record at the places data source
    pub external_id     : Option<String>,
    pub name            : String,
    pub pos             : MapPoint,
    pub classification  : Classification,
    pub address         : Option<String>,
    pub phone           : Option<String>,
    pub website         : Option<String>,
    pub description     : Option<String>,
    pub price_level     : Option<PriceLevel>,
    pub rating          : Option<RatingValue>,
    pub opening_hours   : Option<OpeningHours>,
    pub open_now        : Option<bool>,
    pub photo_reference : Option<String>,
    pub created_at      : Timestamp,
    pub updated_at      : Timestamp,
}

impl Establishment {
    pub fn is_bar_like(&self) -> bool {
        self.classification.is_bar_like()
    }

    /// Details that can be completed from the places data source.
    pub fn lacks_details(&self) -> bool {
        self.photo_reference.is_none() || self.opening_hours.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_level_range() {
        assert_eq!(Ok(PriceLevel::min()), PriceLevel::try_from(0));
        assert_eq!(Ok(PriceLevel::max()), PriceLevel::try_from(4));
        assert_eq!(Err(PriceLevelOutOfRange(5)), PriceLevel::try_from(5));
        assert_eq!(Err(PriceLevelOutOfRange(-1)), PriceLevel::try_from(-1));
    }

    #[test]
    fn rating_range() {
        assert_eq!(Ok(4.3), RatingValue::try_from(4.3).map(f64::from));
        assert!(RatingValue::try_from(5.0).is_ok());
        assert!(RatingValue::try_from(5.01).is_err());
        assert!(RatingValue::try_from(-0.1).is_err());
        assert!(RatingValue::try_from(f64::NAN).is_err());
    }
}
