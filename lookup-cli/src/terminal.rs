use lookup_core::{
    Page, WeatherView,
    view::{Measurement, Slot},
};

/// A [`Page`] that also announces the loading indicator on stderr.
#[derive(Debug, Default)]
pub struct TerminalView {
    page: Page,
    quiet: bool,
}

impl TerminalView {
    pub fn new(quiet: bool) -> Self {
        Self { page: Page::new(), quiet }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

impl WeatherView for TerminalView {
    fn set_loading(&mut self, active: bool) {
        if active && !self.quiet {
            eprintln!("Loading...");
        }
        self.page.set_loading(active);
    }

    fn set_info_visible(&mut self, visible: bool) {
        self.page.set_info_visible(visible);
    }

    fn set_not_found(&mut self, message: Option<&str>) {
        self.page.set_not_found(message);
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        self.page.set_text(slot, text);
    }

    fn set_condition_icon(&mut self, url: &str) {
        self.page.set_condition_icon(url);
    }

    fn clear_measurements(&mut self) {
        self.page.clear_measurements();
    }

    fn push_measurement(&mut self, measurement: Measurement) {
        self.page.push_measurement(measurement);
    }
}
