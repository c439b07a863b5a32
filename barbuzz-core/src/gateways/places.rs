use anyhow::Result as Fallible;

/// Details of a single record of the places data source.
///
/// All fields are optional because the upstream API omits
/// everything it does not know.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub types: Vec<String>,
    pub location: Option<PlaceLocation>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub open_now: Option<bool>,
    pub periods: Vec<PlacePeriod>,
    pub price_level: Option<i64>,
    pub rating: Option<f64>,
    pub photo_reference: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacePeriod {
    pub open: Option<PlaceDayTime>,
    pub close: Option<PlaceDayTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceDayTime {
    pub day: Option<i64>,
    pub time: Option<String>,
}

pub trait PlacesGateway {
    /// `Ok(None)` if the data source doesn't know the id.
    fn place_details(&self, external_id: &str) -> Fallible<Option<PlaceDetails>>;
}
