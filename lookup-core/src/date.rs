//! Formatting of the provider's local timestamp (`"2023-06-01 14:30"`).
//!
//! The timestamp is already in the location's local time, so nothing here
//! converts between zones.

use chrono::NaiveDateTime;

use crate::error::LookupFailed;

const LOCALTIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Long-form calendar date, e.g. `"Thursday, June 1, 2023"`.
pub fn format_long_date(localtime: &str) -> Result<String, LookupFailed> {
    let parsed = NaiveDateTime::parse_from_str(localtime.trim(), LOCALTIME_FORMAT)
        .map_err(|_| LookupFailed::Timestamp(localtime.to_string()))?;

    Ok(parsed.format(LONG_DATE_FORMAT).to_string())
}

/// The raw time-of-day part after the space, e.g. `"14:30"`.
pub fn time_of_day(localtime: &str) -> Result<&str, LookupFailed> {
    localtime
        .split_once(' ')
        .map(|(_, time)| time)
        .filter(|time| !time.is_empty())
        .ok_or_else(|| LookupFailed::Timestamp(localtime.to_string()))
}
