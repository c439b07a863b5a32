#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use serde::{Deserialize, Serialize};

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = establishment, treat_none_as_null = true)]
pub struct NewEstablishment<'a> {
    pub id: &'a str,
    pub external_id: Option<&'a str>,
    pub name: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub classification: String,
    pub address: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub website: Option<&'a str>,
    pub description: Option<&'a str>,
    pub price_level: Option<i16>,
    pub rating: Option<f64>,
    pub opening_hours: Option<String>,
    pub open_now: Option<bool>,
    pub photo_reference: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct EstablishmentEntity {
    pub rowid: i64,
    pub id: String,
    pub external_id: Option<String>,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub classification: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub price_level: Option<i16>,
    pub rating: Option<f64>,
    pub opening_hours: Option<String>,
    pub open_now: Option<bool>,
    pub photo_reference: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Serialized representation of a single opening period.
#[derive(Debug, Serialize, Deserialize)]
pub struct OpeningPeriodJson {
    pub open_day: u8,
    pub open_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub token: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub token: String,
}

#[derive(Insertable)]
#[diesel(table_name = wait_time_sample)]
pub struct NewWaitTimeSample {
    pub parent_rowid: i64,
    pub created_at: i64,
    pub estimated_wait: i64,
}

#[derive(Queryable)]
pub struct WaitTimeSampleEntity {
    pub created_at: i64,
    pub estimated_wait: i64,
    // Joined columns
    pub establishment_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = favorite)]
pub struct NewFavorite {
    pub user_rowid: i64,
    pub establishment_rowid: i64,
    pub created_at: i64,
}
