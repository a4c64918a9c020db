use crate::{Config, error::LookupFailed, model::WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

pub use weatherapi::WeatherApiProvider;

/// Source of current conditions for a free-text location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Look up current conditions. One call is one request.
    async fn current(&self, query: &str) -> Result<WeatherReport, LookupFailed>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<WeatherApiProvider> {
    let api_key = config.api_key()?;
    WeatherApiProvider::with_options(api_key, config.base_url(), config.timeout())
}
