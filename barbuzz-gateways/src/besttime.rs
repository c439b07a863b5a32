use anyhow::Result;
use barbuzz_core::gateways::busyness::BusynessGateway;
use serde::{de::DeserializeOwned, Deserialize};

pub const DEFAULT_API_BASE_URL: &str = "https://besttime.app/api/v1";

/// Client of the BestTime foot traffic forecasts.
#[derive(Debug, Clone)]
pub struct BestTime {
    pub api_key_private: String,
    pub api_key_public: String,
    pub api_base_url: String,
    client: reqwest::blocking::Client,
}

impl BestTime {
    pub fn new(api_key_private: String, api_key_public: String, api_base_url: String) -> Self {
        Self {
            api_key_private,
            api_key_public,
            api_base_url,
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{message}")]
struct JsonError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    venue_info: VenueInfo,
}

#[derive(Debug, Deserialize)]
struct VenueInfo {
    venue_id: String,
}

#[derive(Debug, Deserialize)]
struct LiveResponse {
    analysis: Analysis,
}

#[derive(Debug, Deserialize)]
struct Analysis {
    hour_raw: f64,
}

fn read_json<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
    if response.status().is_success() {
        Ok(response.json()?)
    } else {
        let status = response.status();
        let json_error: JsonError = response
            .json()
            .map_err(|_| anyhow::anyhow!("BestTime request failed with status {status}"))?;
        Err(json_error.into())
    }
}

impl BusynessGateway for BestTime {
    fn create_forecast(&self, name: &str, address: &str) -> Result<String> {
        let url = format!("{}/forecasts", self.api_base_url);
        log::debug!("Creating forecast for venue '{name}'");
        let response = self
            .client
            .post(url)
            .query(&[
                ("api_key_private", self.api_key_private.as_str()),
                ("venue_name", name),
                ("venue_address", address),
            ])
            .send()?;
        let ForecastResponse {
            venue_info: VenueInfo { venue_id },
        } = read_json(response)?;
        Ok(venue_id)
    }

    fn current_busyness(&self, venue_id: &str) -> Result<f64> {
        let url = format!("{}/forecasts/now/raw", self.api_base_url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("api_key_public", self.api_key_public.as_str()),
                ("venue_id", venue_id),
            ])
            .send()?;
        let LiveResponse {
            analysis: Analysis { hour_raw },
        } = read_json(response)?;
        Ok(hour_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_forecast_response() {
        let json = r#"{
            "status": "OK",
            "venue_info": {
                "venue_id": "ven_51387131543761435650505241346a394a6432395362654a496843",
                "venue_name": "The White Horse",
                "venue_address": "500 Comal St, Austin, TX"
            },
            "analysis": []
        }"#;
        let response: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            "ven_51387131543761435650505241346a394a6432395362654a496843",
            response.venue_info.venue_id
        );
    }

    #[test]
    fn parse_live_response() {
        let json = r#"{
            "status": "OK",
            "analysis": { "hour_start": 22, "hour_raw": 75, "day_int": 5 }
        }"#;
        let response: LiveResponse = serde_json::from_str(json).unwrap();
        assert_eq!(75.0, response.analysis.hour_raw);
    }

    #[test]
    fn parse_error_response() {
        let json = r#"{"status":"Error","message":"Invalid api_key_public"}"#;
        let err: JsonError = serde_json::from_str(json).unwrap();
        assert_eq!("Invalid api_key_public", err.to_string());
    }
}
