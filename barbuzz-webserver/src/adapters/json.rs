pub use barbuzz_boundary::*;

use crate::core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;
    use usecases::Error as ParameterError;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the entities both are outside this crate.

    fn day_time(from: DayTime) -> Result<e::DayTime, ParameterError> {
        let DayTime { day, time } = from;
        let day = e::Weekday::from_index(day).ok_or(ParameterError::InvalidOpeningHours)?;
        let time = time.parse()?;
        Ok(e::DayTime { day, time })
    }

    pub fn try_opening_hours(
        periods: Vec<OpeningPeriod>,
    ) -> Result<e::OpeningHours, ParameterError> {
        periods
            .into_iter()
            .map(|OpeningPeriod { open, close }| {
                Ok(e::OpeningPeriod {
                    open: day_time(open)?,
                    close: close.map(day_time).transpose()?,
                })
            })
            .collect()
    }

    pub fn try_new_establishment(
        from: NewEstablishment,
    ) -> Result<usecases::NewEstablishment, ParameterError> {
        let NewEstablishment {
            external_id,
            name,
            lat,
            lng,
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
        } = from;
        Ok(usecases::NewEstablishment {
            external_id,
            name,
            lat,
            lng,
            classification,
            address,
            phone,
            website,
            description,
            price_level,
            rating,
            opening_hours: opening_hours.map(try_opening_hours).transpose()?,
            open_now,
            photo_reference,
        })
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;
    use crate::web::PhotoCfg;

    /// Miles rounded to one decimal.
    pub fn distance_in_miles(distance: e::Distance) -> f64 {
        (distance.to_miles() * 10.0).round() / 10.0
    }

    pub fn establishment(
        from: e::Establishment,
        distance: Option<e::Distance>,
        photos: Option<&PhotoCfg>,
    ) -> Establishment {
        let image = photos.zip(from.photo_reference.as_deref()).map(
            |(PhotoCfg { api_base_url, api_key }, photo_reference)| {
                barbuzz_gateways::google_places::photo_url(api_base_url, api_key, photo_reference)
            },
        );
        Establishment {
            image,
            distance: distance.map(distance_in_miles),
            ..from.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_distance_to_one_decimal() {
        let austin = e::MapPoint::from_lat_lng_deg(30.2672, -97.7431);
        let nearby = e::MapPoint::from_lat_lng_deg(30.2700, -97.7400);
        let distance = e::MapPoint::distance(austin, nearby).unwrap();
        assert!((distance.to_km() - 0.43).abs() < 0.01);
        assert_eq!(0.3, to_json::distance_in_miles(distance));
        assert_eq!(1.1, to_json::distance_in_miles(e::Distance::from_km(1.77)));
    }

    #[test]
    fn reject_invalid_opening_hours() {
        let period = |day, time: &str| OpeningPeriod {
            open: DayTime {
                day,
                time: time.into(),
            },
            close: None,
        };
        assert_eq!(
            1,
            from_json::try_opening_hours(vec![period(5, "1600")])
                .unwrap()
                .periods()
                .len()
        );
        assert!(from_json::try_opening_hours(vec![period(7, "1600")]).is_err());
        assert!(from_json::try_opening_hours(vec![period(1, "25:00")]).is_err());
    }
}
