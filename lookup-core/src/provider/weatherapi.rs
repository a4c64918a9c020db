use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::LookupFailed,
    model::{CurrentConditions, LocationInfo, WeatherReport, absolute_icon_url},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn with_options(api_key: String, base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for WeatherAPI.com")?;

        Ok(Self { api_key, base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_current(&self, query: &str) -> Result<WeatherReport, LookupFailed> {
        let url = format!("{}/v1/current.json", self.base_url);
        tracing::debug!(%url, query, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, bytes = body.len(), "WeatherAPI responded");

        if !status.is_success() {
            return Err(LookupFailed::Status { status, body: truncate_body(&body) });
        }

        // One body, two views: `location` and `current` both come from here.
        let parsed: WaResponse = serde_json::from_str(&body)?;
        parsed.into_report()
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: u8,
    wind_kph: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl WaResponse {
    fn into_report(self) -> Result<WeatherReport, LookupFailed> {
        let WaResponse { location, current } = self;

        let location = LocationInfo::new(location.name, location.country, location.localtime)?;
        let current = CurrentConditions {
            condition_text: current.condition.text,
            condition_icon: absolute_icon_url(&current.condition.icon),
            temperature_c: current.temp_c,
            humidity_pct: current.humidity,
            wind_kph: current.wind_kph,
        };

        Ok(WeatherReport { location, current })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &str) -> Result<WeatherReport, LookupFailed> {
        self.fetch_current(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
