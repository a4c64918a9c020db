//! The submit → lookup → render cycle.

use crate::{
    model::WeatherReport,
    provider::WeatherProvider,
    view::{Measurement, NOT_FOUND_MESSAGE, Slot, WeatherView, temperature_text},
};

/// What the view shows once a lookup has finished.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    Found(WeatherReport),
    NotFound,
}

/// Drives one view from one provider.
///
/// `on_submit` borrows the controller mutably, so lookups through the same
/// controller never overlap: a resubmission starts only after the previous
/// one has rendered its outcome.
#[derive(Debug)]
pub struct LookupController<P, V> {
    provider: P,
    view: V,
}

impl<P: WeatherProvider, V: WeatherView> LookupController<P, V> {
    pub fn new(provider: P, view: V) -> Self {
        Self { provider, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Handle a submit of the location input.
    ///
    /// Empty input is ignored and yields `None`. Otherwise exactly one
    /// request is made and the view ends in one of the two outcome states.
    pub async fn on_submit(&mut self, raw_input: &str) -> Option<RenderOutcome> {
        if raw_input.is_empty() {
            tracing::trace!("empty location, submit ignored");
            return None;
        }

        self.view.set_info_visible(false);
        self.view.set_loading(true);

        let result = self.provider.current(raw_input).await;

        self.view.clear_measurements();
        self.view.set_loading(false);

        let outcome = match result {
            Ok(report) => {
                tracing::info!(
                    query = raw_input,
                    city = %report.location.city,
                    country = %report.location.country,
                    "weather found"
                );
                self.render_found(&report);
                RenderOutcome::Found(report)
            }
            Err(err) => {
                tracing::warn!(query = raw_input, error = %err, "weather lookup failed");
                self.render_not_found();
                RenderOutcome::NotFound
            }
        };

        Some(outcome)
    }

    fn render_found(&mut self, report: &WeatherReport) {
        let WeatherReport { location, current } = report;
        let view = &mut self.view;

        view.set_text(Slot::City, &location.city);
        view.set_text(Slot::Country, &location.country);
        view.set_text(Slot::Date, &location.date);
        view.set_text(Slot::Time, &location.time);

        view.set_text(Slot::ConditionText, &current.condition_text);
        view.set_condition_icon(&current.condition_icon);

        view.set_text(Slot::Temperature, &temperature_text(current.temperature_c));
        view.push_measurement(Measurement::humidity(current.humidity_pct));
        view.push_measurement(Measurement::wind(current.wind_kph));

        view.set_not_found(None);
        view.set_info_visible(true);
    }

    fn render_not_found(&mut self) {
        self.view.set_info_visible(false);
        self.view.set_not_found(Some(NOT_FOUND_MESSAGE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::LookupFailed,
        model::{CurrentConditions, LocationInfo},
        provider::{
            WeatherApiProvider,
            weatherapi::tests::{LONDON_BODY, NOT_FOUND_BODY},
        },
        view::{MeasurementKind, Page},
    };
    use async_trait::async_trait;
    use std::{
        collections::VecDeque,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

    /// Replays a fixed list of answers and counts calls.
    #[derive(Debug, Default)]
    struct ScriptedProvider {
        answers: Mutex<VecDeque<Option<WeatherReport>>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(answers: impl IntoIterator<Item = Option<WeatherReport>>) -> Self {
            Self { answers: Mutex::new(answers.into_iter().collect()), calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for ScriptedProvider {
        async fn current(&self, query: &str) -> Result<WeatherReport, LookupFailed> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let answer = self.answers.lock().unwrap().pop_front().flatten();
            answer.ok_or_else(|| LookupFailed::Timestamp(query.to_string()))
        }
    }

    fn report(city: &str) -> WeatherReport {
        WeatherReport {
            location: LocationInfo::new(city.into(), "Somewhere".into(), "2023-06-01 14:30".into())
                .unwrap(),
            current: CurrentConditions {
                condition_text: "Sunny".into(),
                condition_icon: "https://cdn.weatherapi.com/weather/64x64/day/113.png".into(),
                temperature_c: 25.5,
                humidity_pct: 40,
                wind_kph: 9.0,
            },
        }
    }

    #[tokio::test]
    async fn found_populates_every_field() {
        let provider = ScriptedProvider::new([Some(report("Paris"))]);
        let mut controller = LookupController::new(provider, Page::new());

        let outcome = controller.on_submit("Paris").await;
        assert!(matches!(outcome, Some(RenderOutcome::Found(ref r)) if r.location.city == "Paris"));

        let page = controller.view();
        for slot in Slot::all() {
            assert!(page.text(*slot).is_some(), "slot {slot:?} must be filled");
        }
        assert_eq!(page.text(Slot::City), Some("Paris"));
        assert_eq!(page.text(Slot::Date), Some("Thursday, June 1, 2023"));
        assert_eq!(page.text(Slot::Time), Some("14:30"));
        assert_eq!(page.text(Slot::Temperature), Some("25.5 °C"));
        assert!(page.condition_icon.is_some());
        assert_eq!(page.measurements_of(MeasurementKind::Humidity).count(), 1);
        assert_eq!(page.measurements_of(MeasurementKind::Wind).count(), 1);

        assert!(page.info_visible);
        assert!(page.not_found.is_none());
        assert!(!page.loading);
    }

    #[tokio::test]
    async fn failure_hides_info_and_shows_message() {
        let provider = ScriptedProvider::new([Some(report("Paris")), None]);
        let mut controller = LookupController::new(provider, Page::new());

        controller.on_submit("Paris").await;
        let outcome = controller.on_submit("Atlantis").await;
        assert_eq!(outcome, Some(RenderOutcome::NotFound));

        let page = controller.view();
        assert!(!page.info_visible);
        assert!(page.measurements.is_empty());
        assert_eq!(page.not_found.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert!(!page.loading);
    }

    #[tokio::test]
    async fn empty_input_is_a_no_op() {
        let provider = ScriptedProvider::new([]);
        let mut controller = LookupController::new(provider, Page::new());

        assert_eq!(controller.on_submit("").await, None);

        assert_eq!(controller.provider().calls(), 0);
        assert_eq!(controller.view(), &Page::new());
    }

    #[tokio::test]
    async fn widgets_do_not_accumulate_across_lookups() {
        let provider =
            ScriptedProvider::new([Some(report("Paris")), None, Some(report("Rome")), Some(report("Oslo"))]);
        let mut controller = LookupController::new(provider, Page::new());

        for city in ["Paris", "Atlantis", "Rome", "Oslo"] {
            controller.on_submit(city).await;
        }

        let page = controller.view();
        assert_eq!(page.measurements.len(), 2);
        assert_eq!(page.text(Slot::City), Some("Oslo"));
        assert!(page.not_found.is_none());
    }

    #[tokio::test]
    async fn loading_toggles_once_per_submit() {
        let provider = ScriptedProvider::new([Some(report("Paris")), None]);
        let mut controller = LookupController::new(provider, Page::new());

        controller.on_submit("Paris").await;
        assert_eq!(controller.view().loading_activations, 1);
        assert!(!controller.view().loading);

        controller.on_submit("Atlantis").await;
        assert_eq!(controller.view().loading_activations, 2);
        assert!(!controller.view().loading);

        controller.on_submit("").await;
        assert_eq!(controller.view().loading_activations, 2);
    }

    fn http_controller(server: &MockServer) -> LookupController<WeatherApiProvider, Page> {
        let provider =
            WeatherApiProvider::with_options("KEY".into(), &server.uri(), Duration::from_secs(5))
                .unwrap();
        LookupController::new(provider, Page::new())
    }

    #[tokio::test]
    async fn one_request_per_submit_over_http() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/v1/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LONDON_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = http_controller(&server);
        let outcome = controller.on_submit("London").await;

        assert!(matches!(outcome, Some(RenderOutcome::Found(_))));
        assert_eq!(controller.view().text(Slot::ConditionText), Some("Partly cloudy"));
        assert_eq!(controller.view().text(Slot::Temperature), Some("21 °C"));
    }

    #[tokio::test]
    async fn http_404_renders_not_found() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY))
            .expect(1)
            .mount(&server)
            .await;

        let mut controller = http_controller(&server);

        assert_eq!(controller.on_submit("Atlantis").await, Some(RenderOutcome::NotFound));
        assert_eq!(controller.view().not_found.as_deref(), Some(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn malformed_json_renders_not_found() {
        let server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let mut controller = http_controller(&server);

        assert_eq!(controller.on_submit("London").await, Some(RenderOutcome::NotFound));
        assert!(!controller.view().info_visible);
    }

    #[tokio::test]
    async fn empty_input_never_reaches_the_network() {
        let server = MockServer::start().await;

        Mock::given(matchers::any())
            .respond_with(ResponseTemplate::new(200).set_body_string(LONDON_BODY))
            .expect(0)
            .mount(&server)
            .await;

        let mut controller = http_controller(&server);
        assert_eq!(controller.on_submit("").await, None);
    }
}
