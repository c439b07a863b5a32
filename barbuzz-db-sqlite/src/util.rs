use anyhow::{anyhow, Result as Fallible};
use barbuzz_core::entities::*;

use crate::models;

pub fn opening_hours_to_json(opening_hours: &OpeningHours) -> Fallible<String> {
    let periods: Vec<_> = opening_hours
        .periods()
        .iter()
        .map(|OpeningPeriod { open, close }| models::OpeningPeriodJson {
            open_day: open.day.index(),
            open_time: open.time.to_string(),
            close_day: close.map(|c| c.day.index()),
            close_time: close.map(|c| c.time.to_string()),
        })
        .collect();
    Ok(serde_json::to_string(&periods)?)
}

fn load_day_time(day: u8, time: &str) -> Fallible<DayTime> {
    let day = Weekday::from_index(day).ok_or_else(|| anyhow!("Invalid weekday: {day}"))?;
    let time = time.parse()?;
    Ok(DayTime { day, time })
}

pub fn opening_hours_from_json(json: &str) -> Fallible<OpeningHours> {
    let periods: Vec<models::OpeningPeriodJson> = serde_json::from_str(json)?;
    periods
        .into_iter()
        .map(
            |models::OpeningPeriodJson {
                 open_day,
                 open_time,
                 close_day,
                 close_time,
             }| {
                let open = load_day_time(open_day, &open_time)?;
                let close = match (close_day, close_time) {
                    (Some(day), Some(time)) => Some(load_day_time(day, &time)?),
                    _ => None,
                };
                Ok(OpeningPeriod { open, close })
            },
        )
        .collect()
}

pub fn new_establishment(e: &Establishment) -> Fallible<models::NewEstablishment<'_>> {
    let Establishment {
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
    } = e;
    let (lat, lng) = pos.to_lat_lng_deg();
    Ok(models::NewEstablishment {
        id: id.as_str(),
        external_id: external_id.as_deref(),
        name,
        lat,
        lng,
        classification: classification.to_string(),
        address: address.as_deref(),
        phone: phone.as_deref(),
        website: website.as_deref(),
        description: description.as_deref(),
        price_level: price_level.map(|p| i16::from(p.to_u8())),
        rating: rating.map(RatingValue::to_f64),
        opening_hours: opening_hours
            .as_ref()
            .map(opening_hours_to_json)
            .transpose()?,
        open_now: *open_now,
        photo_reference: photo_reference.as_deref(),
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    })
}

pub fn load_establishment(entity: models::EstablishmentEntity) -> Fallible<Establishment> {
    let models::EstablishmentEntity {
        rowid: _,
        id,
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
        created_at,
        updated_at,
    } = entity;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid position of establishment {id}: {lat},{lng}"))?;
    let classification = classification.parse()?;
    let price_level = price_level
        .map(|p| PriceLevel::try_from(i64::from(p)))
        .transpose()?;
    let rating = rating.map(RatingValue::try_from).transpose()?;
    let opening_hours = opening_hours
        .as_deref()
        .map(opening_hours_from_json)
        .transpose()?;
    Ok(Establishment {
        id: id.into(),
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
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    })
}
