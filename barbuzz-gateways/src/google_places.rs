use anyhow::{bail, Result};
use barbuzz_core::gateways::places::{
    PlaceDayTime, PlaceDetails, PlaceLocation, PlacePeriod, PlacesGateway,
};
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

const DETAILS_FIELDS: &str = "place_id,name,types,geometry/location,formatted_address,\
formatted_phone_number,website,opening_hours,price_level,rating,photos";

/// Client of the Google Places details API.
#[derive(Debug, Clone)]
pub struct GooglePlaces {
    pub api_key: String,
    pub api_base_url: String,
    client: reqwest::blocking::Client,
}

impl GooglePlaces {
    pub fn new(api_key: String, api_base_url: String) -> Self {
        Self {
            api_key,
            api_base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// URL of a photo with the given reference.
    pub fn photo_url(&self, photo_reference: &str) -> String {
        photo_url(&self.api_base_url, &self.api_key, photo_reference)
    }
}

pub fn photo_url(api_base_url: &str, api_key: &str, photo_reference: &str) -> String {
    format!("{api_base_url}/photo?maxwidth=400&photoreference={photo_reference}&key={api_key}")
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<PlaceResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PlaceResult {
    place_id: Option<String>,
    name: Option<String>,
    types: Vec<String>,
    geometry: Option<Geometry>,
    formatted_address: Option<String>,
    formatted_phone_number: Option<String>,
    website: Option<String>,
    opening_hours: Option<OpeningHours>,
    price_level: Option<i64>,
    rating: Option<f64>,
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpeningHours {
    open_now: Option<bool>,
    periods: Vec<Period>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Period {
    open: Option<DayTime>,
    close: Option<DayTime>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DayTime {
    day: Option<i64>,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

impl From<DayTime> for PlaceDayTime {
    fn from(from: DayTime) -> Self {
        let DayTime { day, time } = from;
        Self { day, time }
    }
}

impl From<PlaceResult> for PlaceDetails {
    fn from(from: PlaceResult) -> Self {
        let PlaceResult {
            place_id,
            name,
            types,
            geometry,
            formatted_address,
            formatted_phone_number,
            website,
            opening_hours,
            price_level,
            rating,
            photos,
        } = from;
        let OpeningHours { open_now, periods } = opening_hours.unwrap_or_default();
        let periods = periods
            .into_iter()
            .map(|Period { open, close }| PlacePeriod {
                open: open.map(Into::into),
                close: close.map(Into::into),
            })
            .collect();
        Self {
            place_id,
            name,
            types,
            location: geometry.map(|Geometry { location }| PlaceLocation {
                lat: location.lat,
                lng: location.lng,
            }),
            formatted_address,
            formatted_phone_number,
            website,
            open_now,
            periods,
            price_level,
            rating,
            photo_reference: photos.into_iter().next().map(|p| p.photo_reference),
        }
    }
}

fn details_from_response(response: DetailsResponse) -> Result<Option<PlaceDetails>> {
    let DetailsResponse {
        status,
        error_message,
        result,
    } = response;
    match status.as_str() {
        "OK" => Ok(result.map(Into::into)),
        "NOT_FOUND" | "ZERO_RESULTS" => Ok(None),
        _ => {
            let message = error_message.unwrap_or_default();
            bail!("Places API request failed with status {status}: {message}")
        }
    }
}

impl PlacesGateway for GooglePlaces {
    fn place_details(&self, external_id: &str) -> Result<Option<PlaceDetails>> {
        let url = format!("{}/details/json", self.api_base_url);
        log::debug!("Requesting details of place {external_id}");
        let response = self
            .client
            .get(url)
            .query(&[
                ("place_id", external_id),
                ("fields", DETAILS_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json::<DetailsResponse>()?;
        details_from_response(response)
    }
}
