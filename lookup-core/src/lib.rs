//! Core library for the `weather-lookup` widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com provider and its single-request lookup
//! - The display surface (`WeatherView`) and an in-memory `Page`
//! - The lookup controller that turns a submit into a render outcome
//!
//! It is used by `lookup-cli`, but any front end that can implement
//! `WeatherView` can drive it.

pub mod config;
pub mod controller;
pub mod date;
pub mod error;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use controller::{LookupController, RenderOutcome};
pub use error::LookupFailed;
pub use model::{CurrentConditions, LocationInfo, WeatherReport};
pub use provider::{WeatherApiProvider, WeatherProvider, provider_from_config};
pub use view::{Page, WeatherView};
