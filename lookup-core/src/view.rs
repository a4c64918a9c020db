//! Display surface of the lookup widget.
//!
//! The controller only talks to a [`WeatherView`]; [`Page`] is the in-memory
//! implementation used by the CLI and by tests.

use std::{collections::BTreeMap, fmt};

pub const NOT_FOUND_MESSAGE: &str = "Data Not Found!";

const HUMIDITY_ICON: &str = "./assets/droplets-01-svgrepo-com.svg";
const WIND_ICON: &str = "./assets/wind-svgrepo-com.svg";

/// Text slots that are overwritten in place on every successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    City,
    Country,
    Date,
    Time,
    ConditionText,
    Temperature,
}

impl Slot {
    pub const fn all() -> &'static [Slot] {
        &[Slot::City, Slot::Country, Slot::Date, Slot::Time, Slot::ConditionText, Slot::Temperature]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    Humidity,
    Wind,
}

/// A dynamically created widget: icon, title and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub kind: MeasurementKind,
    pub icon: String,
    pub title: String,
    pub value: String,
}

impl Measurement {
    pub fn humidity(pct: u8) -> Self {
        Self {
            kind: MeasurementKind::Humidity,
            icon: HUMIDITY_ICON.to_string(),
            title: "Humidity".to_string(),
            value: format!("{pct} %"),
        }
    }

    pub fn wind(kph: f64) -> Self {
        Self {
            kind: MeasurementKind::Wind,
            icon: WIND_ICON.to_string(),
            title: "Wind Speed".to_string(),
            value: format!("{kph} Km/h"),
        }
    }
}

pub fn temperature_text(celsius: f64) -> String {
    format!("{celsius} °C")
}

/// Handles onto the widget's display elements.
pub trait WeatherView: Send {
    fn set_loading(&mut self, active: bool);
    fn set_info_visible(&mut self, visible: bool);
    /// Show the error panel with `message`, or hide it with `None`.
    fn set_not_found(&mut self, message: Option<&str>);
    fn set_text(&mut self, slot: Slot, text: &str);
    fn set_condition_icon(&mut self, url: &str);
    fn clear_measurements(&mut self);
    fn push_measurement(&mut self, measurement: Measurement);
}

/// In-memory page holding the complete widget state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub loading: bool,
    /// How many times the loading indicator has been switched on.
    pub loading_activations: u32,
    pub info_visible: bool,
    pub not_found: Option<String>,
    pub slots: BTreeMap<Slot, String>,
    pub condition_icon: Option<String>,
    pub measurements: Vec<Measurement>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn measurements_of(&self, kind: MeasurementKind) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(move |m| m.kind == kind)
    }
}

impl WeatherView for Page {
    fn set_loading(&mut self, active: bool) {
        if active && !self.loading {
            self.loading_activations += 1;
        }
        self.loading = active;
    }

    fn set_info_visible(&mut self, visible: bool) {
        self.info_visible = visible;
    }

    fn set_not_found(&mut self, message: Option<&str>) {
        self.not_found = message.map(str::to_string);
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        self.slots.insert(slot, text.to_string());
    }

    fn set_condition_icon(&mut self, url: &str) {
        self.condition_icon = Some(url.to_string());
    }

    fn clear_measurements(&mut self) {
        self.measurements.clear();
    }

    fn push_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            writeln!(f, "Loading...")?;
        }

        if let Some(message) = &self.not_found {
            writeln!(f, "{message}")?;
        }

        if !self.info_visible {
            return Ok(());
        }

        let text = |slot: Slot| self.text(slot).unwrap_or_default().to_string();

        writeln!(f, "{}, {}", text(Slot::City), text(Slot::Country))?;
        writeln!(f, "{}  {}", text(Slot::Date), text(Slot::Time))?;
        writeln!(f, "{}  {}", text(Slot::Temperature), text(Slot::ConditionText))?;
        if let Some(icon) = &self.condition_icon {
            writeln!(f, "  icon: {icon}")?;
        }
        for m in &self.measurements {
            writeln!(f, "{}: {}", m.title, m.value)?;
        }

        Ok(())
    }
}
