use super::*;
use barbuzz_entities as e;

impl From<e::opening_hours::DayTime> for DayTime {
    fn from(from: e::opening_hours::DayTime) -> Self {
        let e::opening_hours::DayTime { day, time } = from;
        Self {
            day: day.index(),
            time: time.to_string(),
        }
    }
}

impl From<e::opening_hours::OpeningPeriod> for OpeningPeriod {
    fn from(from: e::opening_hours::OpeningPeriod) -> Self {
        let e::opening_hours::OpeningPeriod { open, close } = from;
        Self {
            open: open.into(),
            close: close.map(Into::into),
        }
    }
}

impl From<e::establishment::Establishment> for Establishment {
    fn from(from: e::establishment::Establishment) -> Self {
        let e::establishment::Establishment {
            id,
            external_id,
            name,
            pos,
            classification,
            address,
            phone,
            website,
            description,
            price_level,
            rating,
            opening_hours,
            open_now,
            photo_reference,
            created_at,
            updated_at,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            external_id,
            name,
            lat,
            lng,
            classification: classification.to_string(),
            address,
            phone,
            website,
            description,
            price_level: price_level.map(Into::into),
            rating: rating.map(Into::into),
            opening_hours: opening_hours
                .map(|hours| hours.into_periods().into_iter().map(Into::into).collect()),
            open_now,
            photo_reference,
            image: None,
            distance: None,
            created: created_at.as_secs(),
            updated: updated_at.as_secs(),
        }
    }
}

impl From<e::wait_time::WaitTimeSample> for WaitTimeSample {
    fn from(from: e::wait_time::WaitTimeSample) -> Self {
        let e::wait_time::WaitTimeSample {
            establishment_id,
            created_at,
            estimated_wait,
        } = from;
        Self {
            bar: establishment_id.into(),
            created: created_at.as_secs(),
            estimated_wait,
        }
    }
}

impl From<e::favorite::FavoriteStatus> for FavoriteStatus {
    fn from(from: e::favorite::FavoriteStatus) -> Self {
        use e::favorite::FavoriteStatus as E;
        match from {
            E::Favorited => Self::Favorited,
            E::Unfavorited => Self::Unfavorited,
        }
    }
}

impl From<e::favorite::FavoriteStatus> for FavoriteToggled {
    fn from(from: e::favorite::FavoriteStatus) -> Self {
        Self {
            status: from.into(),
        }
    }
}
