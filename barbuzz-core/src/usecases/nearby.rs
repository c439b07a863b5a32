use super::prelude::*;
use crate::{
    bbox::BboxProjection,
    util::{
        sort::{sort_by_distance, DistanceTo},
        validate::validate_search_center,
    },
};

pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 5000;
pub const DEFAULT_RESULT_LIMIT: usize = 12;

/// Optional constraints applied to an already ordered result list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResultFilter {
    pub price_level: Option<PriceLevel>,
    pub min_rating: Option<RatingValue>,
}

impl ResultFilter {
    pub fn is_empty(&self) -> bool {
        self.price_level.is_none() && self.min_rating.is_none()
    }

    pub fn accepts(&self, establishment: &Establishment) -> bool {
        if let Some(price_level) = self.price_level {
            if establishment.price_level != Some(price_level) {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            match establishment.rating {
                Some(rating) if rating >= min_rating => {}
                _ => return false,
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub center: MapPoint,
    pub radius: Distance,
    pub limit: usize,
    pub filter: ResultFilter,
}

impl NearbyQuery {
    pub fn new(center: MapPoint, radius: Distance, limit: usize) -> Self {
        Self {
            center,
            radius,
            limit,
            filter: Default::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        validate_search_center(self.center)?;
        if !(self.radius.to_meters() > 0.0 && self.radius.to_meters().is_finite()) {
            return Err(Error::InvalidRadius);
        }
        if self.limit == 0 {
            return Err(Error::InvalidLimit);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyEstablishment {
    pub establishment: Establishment,
    /// Great-circle distance from the search center
    pub distance: Distance,
}

impl DistanceTo for NearbyEstablishment {
    fn distance(&self) -> Distance {
        self.distance
    }
}

/// Bar-like establishments within `query.radius` around `query.center`,
/// nearest first.
pub fn nearby<R, P>(repo: &R, projection: &P, query: &NearbyQuery) -> Result<Vec<NearbyEstablishment>>
where
    R: EstablishmentRepo + ?Sized,
    P: BboxProjection + ?Sized,
{
    query.validate()?;
    let NearbyQuery {
        center,
        radius,
        limit,
        filter,
    } = query;

    let bbox = projection.bbox_around(*center, *radius);
    log::debug!("Searching establishments within {bbox}");
    let candidates = repo.establishments_in_bbox(&bbox, ClassificationFilter::BarLike)?;
    debug_assert!(candidates.iter().all(Establishment::is_bar_like));

    let mut results: Vec<_> = candidates
        .into_iter()
        .filter_map(|establishment| {
            let distance = MapPoint::distance(*center, establishment.pos)?;
            (distance <= *radius).then_some(NearbyEstablishment {
                establishment,
                distance,
            })
        })
        .collect();
    sort_by_distance(&mut results);

    let results = results
        .into_iter()
        .filter(|r| filter.accepts(&r.establishment))
        .take(*limit)
        .collect();
    Ok(results)
}
