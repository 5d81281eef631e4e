use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::Config,
    http::truncate_body,
    model::{LocationQuery, WeatherReport},
};

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone())
    }

    fn query_params(&self, query: &LocationQuery) -> Vec<(&'static str, String)> {
        let mut params = match query {
            LocationQuery::Place { city, country } => vec![("q", format!("{city},{country}"))],
            LocationQuery::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        };
        params.push(("appid", self.api_key.clone()));
        params.push(("units", "metric".to_string()));
        params
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &LocationQuery) -> Result<WeatherReport> {
        tracing::debug!("Requesting OpenWeather current conditions for {query}");

        let res = self
            .http
            .get(CURRENT_URL)
            .query(&self.query_params(query))
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        parse_current(&body)
    }
}

fn parse_current(body: &str) -> Result<WeatherReport> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather current JSON")?;

    let observed_at = parsed.dt.and_then(unix_to_utc).unwrap_or_else(Utc::now);

    let status = parsed
        .weather
        .first()
        .map(|w| w.main.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(WeatherReport {
        location_name: parsed.name,
        status,
        temp_c: parsed.main.temp,
        max_c: parsed.main.temp_max,
        min_c: parsed.main.temp_min,
        observed_at,
    })
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
