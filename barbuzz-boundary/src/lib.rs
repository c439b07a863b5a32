use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Establishment {
    pub id              : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub external_id     : Option<String>,
    pub name            : String,
    pub lat             : f64,
    pub lng             : f64,
    pub classification  : String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone           : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website         : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_level     : Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating          : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opening_hours   : Option<Vec<OpeningPeriod>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub open_now        : Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo_reference : Option<String>,
    /// Photo URL
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image           : Option<String>,
    /// Miles from the search center, rounded to one decimal
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance        : Option<f64>,
    pub created         : i64,
    pub updated         : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewEstablishment {
    #[serde(default)]
    pub external_id     : Option<String>,
    pub name            : String,
    pub lat             : f64,
    pub lng             : f64,
    #[serde(default)]
    pub classification  : Option<String>,
    #[serde(default)]
    pub address         : Option<String>,
    #[serde(default)]
    pub phone           : Option<String>,
    #[serde(default)]
    pub website         : Option<String>,
    #[serde(default)]
    pub description     : Option<String>,
    #[serde(default)]
    pub price_level     : Option<i64>,
    #[serde(default)]
    pub rating          : Option<f64>,
    #[serde(default)]
    pub opening_hours   : Option<Vec<OpeningPeriod>>,
    #[serde(default)]
    pub open_now        : Option<bool>,
    #[serde(default)]
    pub photo_reference : Option<String>,
}

/// Weekly opening period in the format of the places data source.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct OpeningPeriod {
    pub open: DayTime,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub close: Option<DayTime>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct DayTime {
    /// 0 = Sunday
    pub day: u8,
    /// HHMM
    pub time: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct WaitTimeReport {
    /// Id of the establishment
    pub bar: String,
    /// Minutes
    pub estimated_wait: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct WaitTimeSample {
    pub bar: String,
    pub created: i64,
    pub estimated_wait: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteStatus {
    Favorited,
    Unfavorited,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct FavoriteToggled {
    pub status: FavoriteStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_new_establishment_with_defaults() {
        let new: NewEstablishment =
            serde_json::from_str(r#"{"name":"Barbarella","lat":30.2672,"lng":-97.7431}"#)
                .unwrap();
        assert_eq!("Barbarella", new.name);
        assert!(new.classification.is_none());
        assert!(new.opening_hours.is_none());
    }

    #[test]
    fn serialize_favorite_status() {
        let json = serde_json::to_string(&FavoriteToggled {
            status: FavoriteStatus::Unfavorited,
        })
        .unwrap();
        assert_eq!(r#"{"status":"unfavorited"}"#, json);
    }

    #[test]
    fn serialize_opening_period_without_close() {
        let period = OpeningPeriod {
            open: DayTime {
                day: 0,
                time: "0000".into(),
            },
            close: None,
        };
        assert_eq!(
            r#"{"open":{"day":0,"time":"0000"}}"#,
            serde_json::to_string(&period).unwrap()
        );
    }
}
