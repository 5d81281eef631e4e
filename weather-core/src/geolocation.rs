use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::http::truncate_body;

/// City and country the caller's public IP maps to.
///
/// `country` is whatever the service returned (usually an ISO2 code) and still
/// goes through country normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpLocation {
    pub city: String,
    pub country: String,
}

#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    async fn locate(&self) -> Result<IpLocation>;
}

const IPINFO_URL: &str = "https://ipinfo.io/json";

/// Looks up the caller's public IP with ipinfo.io.
#[derive(Debug, Clone)]
pub struct IpInfoGeolocator {
    http: Client,
    url: String,
}

impl IpInfoGeolocator {
    pub fn new() -> Self {
        Self { http: Client::new(), url: IPINFO_URL.to_string() }
    }
}

impl Default for IpInfoGeolocator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    city: Option<String>,
    country: Option<String>,
    #[serde(default)]
    bogon: bool,
}

#[async_trait]
impl Geolocator for IpInfoGeolocator {
    async fn locate(&self) -> Result<IpLocation> {
        tracing::debug!("Resolving current location via {}", self.url);

        let res = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("Failed to send request to ipinfo.io")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read ipinfo.io response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "ipinfo.io request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        parse_ipinfo(&body)
    }
}

fn parse_ipinfo(body: &str) -> Result<IpLocation> {
    let parsed: IpInfoResponse =
        serde_json::from_str(body).context("Failed to parse ipinfo.io JSON")?;

    if parsed.bogon {
        return Err(anyhow!("ipinfo.io reports a private (bogon) address"));
    }

    let city = non_empty(parsed.city).ok_or_else(|| anyhow!("ipinfo.io returned no city"))?;
    let country =
        non_empty(parsed.country).ok_or_else(|| anyhow!("ipinfo.io returned no country"))?;

    Ok(IpLocation { city, country })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
