use serde::{Deserialize, Serialize};

use crate::{date, error::LookupFailed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub city: String,
    pub country: String,
    /// Raw provider timestamp, `"YYYY-MM-DD H:MM"`.
    pub localtime: String,
    /// Long-form date derived from `localtime`.
    pub date: String,
    /// Time-of-day part of `localtime`.
    pub time: String,
}

impl LocationInfo {
    /// Build from the provider's fields, deriving the displayed date and time.
    pub fn new(city: String, country: String, localtime: String) -> Result<Self, LookupFailed> {
        let date = date::format_long_date(&localtime)?;
        let time = date::time_of_day(&localtime)?.to_string();

        Ok(Self { city, country, localtime, date, time })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub condition_text: String,
    pub condition_icon: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_kph: f64,
}

/// Everything one successful lookup produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: LocationInfo,
    pub current: CurrentConditions,
}

/// Turn a protocol-relative icon URL (`//cdn...`) into an absolute one.
pub fn absolute_icon_url(icon: &str) -> String {
    if icon.starts_with("//") { format!("https:{icon}") } else { icon.to_string() }
}
