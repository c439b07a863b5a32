use super::prelude::*;
use crate::util::validate::Validate as _;

/// Attributes of an establishment as provided by a client.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewEstablishment {
    pub external_id     : Option<String>,
    pub name            : String,
    pub lat             : f64,
    pub lng             : f64,
    pub classification  : Option<String>,
    pub address         : Option<String>,
    pub phone           : Option<String>,
    pub website         : Option<String>,
    pub description     : Option<String>,
    pub price_level     : Option<i64>,
    pub rating          : Option<f64>,
    pub opening_hours   : Option<OpeningHours>,
    pub open_now        : Option<bool>,
    pub photo_reference : Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

fn prepare_establishment(
    id: Id,
    created_at: Timestamp,
    new: NewEstablishment,
) -> Result<Establishment> {
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
    } = new;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let classification = classification
        .as_deref()
        .map(str::parse::<Classification>)
        .transpose()?
        .unwrap_or_default();
    let price_level = price_level.map(PriceLevel::try_from).transpose()?;
    let rating = rating.map(RatingValue::try_from).transpose()?;
    let establishment = Establishment {
        id,
        external_id: non_empty(external_id),
        name: name.trim().to_owned(),
        pos,
        classification,
        address: non_empty(address),
        phone: non_empty(phone),
        website: non_empty(website),
        description: non_empty(description),
        price_level,
        rating,
        opening_hours: opening_hours.filter(|h| !h.is_empty()),
        open_now,
        photo_reference: non_empty(photo_reference),
        created_at,
        updated_at: Timestamp::now(),
    };
    establishment.validate()?;
    Ok(establishment)
}

pub fn create_establishment<R>(repo: &R, new: NewEstablishment) -> Result<Establishment>
where
    R: EstablishmentRepo + ?Sized,
{
    let establishment = prepare_establishment(Id::new(), Timestamp::now(), new)?;
    log::debug!(
        "Creating establishment {} ({})",
        establishment.id,
        establishment.name
    );
    repo.create_establishment(&establishment)?;
    Ok(establishment)
}

/// Replaces all attributes of an existing establishment.
pub fn update_establishment<R>(repo: &R, id: &str, new: NewEstablishment) -> Result<Establishment>
where
    R: EstablishmentRepo + ?Sized,
{
    let old = repo.get_establishment(id)?;
    let establishment = prepare_establishment(old.id, old.created_at, new)?;
    repo.update_establishment(&establishment)?;
    Ok(establishment)
}

pub fn delete_establishment<R>(repo: &R, id: &str) -> Result<()>
where
    R: EstablishmentRepo + ?Sized,
{
    log::info!("Deleting establishment {id}");
    Ok(repo.delete_establishment(id)?)
}

pub fn get_establishment<R>(repo: &R, id: &str) -> Result<Establishment>
where
    R: EstablishmentRepo + ?Sized,
{
    Ok(repo.get_establishment(id)?)
}
