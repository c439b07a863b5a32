use super::prelude::*;
use crate::gateways::places::{PlaceDayTime, PlaceDetails, PlacePeriod};

const BAR_PLACE_TYPES: [&str; 2] = ["bar", "night_club"];
const UNKNOWN_NAME: &str = "Unknown Bar";

pub fn is_bar_place(details: &PlaceDetails) -> bool {
    details
        .types
        .iter()
        .any(|t| BAR_PLACE_TYPES.contains(&t.as_str()))
}

fn parse_day_time(day_time: &PlaceDayTime) -> Option<DayTime> {
    let day = day_time
        .day
        .and_then(|d| u8::try_from(d).ok())
        .and_then(Weekday::from_index)?;
    let time = day_time.time.as_deref()?.parse().ok()?;
    Some(DayTime { day, time })
}

/// Drops periods without a valid opening time.
pub fn clean_opening_periods(periods: &[PlacePeriod]) -> OpeningHours {
    periods
        .iter()
        .filter_map(|PlacePeriod { open, close }| {
            let open = open.as_ref().and_then(parse_day_time)?;
            let close = close.as_ref().and_then(parse_day_time);
            Some(OpeningPeriod { open, close })
        })
        .collect()
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

fn price_level_of(details: &PlaceDetails) -> Option<PriceLevel> {
    let price_level = details.price_level?;
    PriceLevel::try_from(price_level)
        .inspect_err(|err| log::warn!("Ignoring price level of place: {err}"))
        .ok()
}

fn rating_of(details: &PlaceDetails) -> Option<RatingValue> {
    let rating = details.rating?;
    RatingValue::try_from(rating)
        .inspect_err(|err| log::warn!("Ignoring rating of place: {err}"))
        .ok()
}

/// Converts the details of a bar or nightclub into an establishment.
pub fn establishment_from_place_details(details: &PlaceDetails) -> Result<Establishment> {
    if !is_bar_place(details) {
        return Err(Error::NotBarLike);
    }
    let external_id = non_empty(&details.place_id).ok_or(Error::MissingPlaceId)?;
    let location = details.location.ok_or(Error::MissingLocation)?;
    let pos = MapPoint::try_from_lat_lng_deg(location.lat, location.lng)
        .ok_or(Error::InvalidPosition)?;
    if pos.is_origin() {
        return Err(Error::MissingLocation);
    }
    let opening_hours = clean_opening_periods(&details.periods);
    let now = Timestamp::now();
    Ok(Establishment {
        id: Id::new(),
        external_id: Some(external_id),
        name: non_empty(&details.name).unwrap_or_else(|| UNKNOWN_NAME.to_owned()),
        pos,
        classification: Classification::from_place_types(details.types.iter().map(String::as_str)),
        address: non_empty(&details.formatted_address),
        phone: non_empty(&details.formatted_phone_number),
        website: non_empty(&details.website),
        description: None,
        price_level: price_level_of(details),
        rating: rating_of(details),
        opening_hours: (!opening_hours.is_empty()).then_some(opening_hours),
        open_now: details.open_now,
        photo_reference: non_empty(&details.photo_reference),
        created_at: now,
        updated_at: now,
    })
}

/// Stores a bar or nightclub from the places data source,
/// deduplicated by its external id.
pub fn import_place_details<R>(repo: &R, details: &PlaceDetails) -> Result<Establishment>
where
    R: EstablishmentRepo + ?Sized,
{
    let establishment = establishment_from_place_details(details)?;
    log::debug!(
        "Importing place {:?} ({})",
        establishment.external_id,
        establishment.name
    );
    Ok(repo.upsert_establishment_by_external_id(establishment)?)
}

/// Fills in missing photo and opening hours.
///
/// Returns `true` if anything has changed.
pub fn complete_establishment_details(
    establishment: &mut Establishment,
    details: &PlaceDetails,
) -> bool {
    let mut changed = false;
    if establishment.photo_reference.is_none() {
        if let Some(photo_reference) = non_empty(&details.photo_reference) {
            establishment.photo_reference = Some(photo_reference);
            changed = true;
        }
    }
    if establishment.opening_hours.is_none() {
        let opening_hours = clean_opening_periods(&details.periods);
        if !opening_hours.is_empty() {
            establishment.opening_hours = Some(opening_hours);
            establishment.open_now = details.open_now.or(establishment.open_now);
            changed = true;
        }
    }
    if changed {
        establishment.updated_at = Timestamp::now();
    }
    changed
}
