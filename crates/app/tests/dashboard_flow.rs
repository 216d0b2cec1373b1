//! End-to-end scenarios for the dashboard flow.
//!
//! Each test wires a [`DashboardController`] to in-memory stores and a
//! scripted weather API, then drives it the way the page does.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::rc::Rc;

use serde_json::{Value, json};
use tokio::sync::oneshot;
use weatherboard_app::error::{DashboardError, GENERIC_ERROR_MESSAGE, TransportError};
use weatherboard_app::memory_store::InMemoryStore;
use weatherboard_app::ports::{ApiResponse, KeyValueStore, WeatherApi};
use weatherboard_app::services::{DashboardController, ViewState};
use weatherboard_app::settings::{ClientSettings, SettingsKeys};
use weatherboard_domain::field::ForecastField;
use weatherboard_domain::query::{Granularity, Query, UnitSystem};
use weatherboard_domain::theme::Theme;
use weatherboard_domain::time::ChronoDayLabeler;

enum Reply {
    Ready(Result<ApiResponse, TransportError>),
    Gated(oneshot::Receiver<ApiResponse>),
}

/// Weather API double: replays replies queued per city and records request
/// bodies.
#[derive(Clone, Default)]
struct ScriptedApi {
    replies: Rc<RefCell<HashMap<String, VecDeque<Reply>>>>,
    requests: Rc<RefCell<Vec<Value>>>,
}

impl ScriptedApi {
    fn push(&self, city: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(city.to_string())
            .or_default()
            .push_back(reply);
    }

    fn reply(&self, city: &str, status: u16, body: &str) {
        self.push(city, Reply::Ready(Ok(ApiResponse::new(status, body))));
    }

    fn fail(&self, city: &str, message: &str) {
        self.push(city, Reply::Ready(Err(TransportError::new(message))));
    }

    fn gate(&self, city: &str) -> oneshot::Sender<ApiResponse> {
        let (tx, rx) = oneshot::channel();
        self.push(city, Reply::Gated(rx));
        tx
    }

    fn requests(&self) -> Vec<Value> {
        self.requests.borrow().clone()
    }
}

impl WeatherApi for ScriptedApi {
    fn fetch(&self, query: &Query) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        self.requests
            .borrow_mut()
            .push(serde_json::to_value(query.to_request()).unwrap());
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(&query.city)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Reply::Ready(Err(TransportError::new("no scripted reply"))));
        async move {
            match reply {
                Reply::Ready(result) => result,
                Reply::Gated(rx) => rx.await.map_err(|_| TransportError::new("gate dropped")),
            }
        }
    }
}

type Controller = DashboardController<ScriptedApi, InMemoryStore, InMemoryStore, ChronoDayLabeler>;

struct Harness {
    api: ScriptedApi,
    session: InMemoryStore,
    local: InMemoryStore,
}

impl Harness {
    fn new() -> Self {
        Self {
            api: ScriptedApi::default(),
            session: InMemoryStore::new(),
            local: InMemoryStore::new(),
        }
    }

    /// A fresh controller over the same stores, as after a page reload.
    fn controller(&self) -> Controller {
        let settings = ClientSettings::new(
            self.session.clone(),
            self.local.clone(),
            SettingsKeys::default(),
        );
        DashboardController::new(self.api.clone(), settings, ChronoDayLabeler)
    }
}

fn paris_hourly_body() -> String {
    json!({
        "location": "Paris, France",
        "units": "celsius",
        "forecast_type": "hourly",
        "weather": {
            "current": {
                "temperature_2m": 18.4,
                "apparent_temperature": 17.9,
                "wind_speed_10m": 11.2,
                "wind_direction_10m": 240,
                "relative_humidity_2m": 72,
                "uv_index": 2.1,
                "weather_code": 3
            },
            "hourly": {
                "time": ["2025-01-06T00:00", "2025-01-06T01:00"],
                "weather_code": [3, 2],
                "temperature_2m": [12.1, 11.8],
                "apparent_temperature": [10.5, 10.1],
                "precipitation_probability": [5, null]
            }
        }
    })
    .to_string()
}

fn paris_daily_body() -> String {
    json!({
        "location": "Paris, France",
        "units": "celsius",
        "forecast_type": "daily",
        "weather": {
            "daily": {
                "time": ["2025-01-06", "2025-01-07", "2025-01-08"],
                "weather_code": [3, 61, 0],
                "temperature_2m_max": [9.1, 8.4, 7.0],
                "temperature_2m_min": [3.2, 2.9, 1.0],
                "precipitation_probability_max": [20, 80, 0]
            }
        }
    })
    .to_string()
}

fn paris() -> Query {
    Query::from_form("Paris", "", "", UnitSystem::Metric, false)
}

#[tokio::test]
async fn should_render_overcast_header_for_paris() {
    let harness = Harness::new();
    harness.api.reply("Paris", 200, &paris_hourly_body());

    let dashboard = harness.controller().submit(&paris()).await.unwrap();

    assert_eq!(
        harness.api.requests(),
        vec![json!({
            "city": "Paris",
            "lat": "",
            "lon": "",
            "units": "celsius",
            "forecast_type": "hourly"
        })]
    );
    let current = dashboard.current.unwrap();
    assert_eq!(current.description, "Overcast");
    assert_eq!(current.icon, Some("fa-cloud"));
    assert!(current.temperature.ends_with("°C"));
    assert_eq!(dashboard.heading, "Paris, France");
}

#[tokio::test]
async fn should_show_endpoint_error_verbatim_and_no_dashboard() {
    let harness = Harness::new();
    harness.api.reply("Paris", 400, r#"{"error":"city not found"}"#);
    let controller = harness.controller();
    let mut state = ViewState::default();

    state.begin_submit();
    state.apply(controller.submit(&paris()).await);

    assert_eq!(state.error.as_deref(), Some("city not found"));
    assert!(state.dashboard.is_none());
    assert!(!state.container_visible);
}

#[tokio::test]
async fn should_show_generic_message_when_server_error_body_unparsable() {
    let harness = Harness::new();
    harness.api.reply("Paris", 500, "<html><body>Internal Server Error</body></html>");

    let err = harness.controller().submit(&paris()).await.unwrap_err();

    assert_eq!(err.to_string(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn should_surface_transport_failure_message() {
    let harness = Harness::new();
    harness.api.fail("Paris", "TypeError: Failed to fetch");

    let err = harness.controller().submit(&paris()).await.unwrap_err();

    assert!(matches!(err, DashboardError::Transport(_)));
    assert_eq!(err.to_string(), "TypeError: Failed to fetch");
}

#[tokio::test]
async fn should_resubmit_as_daily_when_granularity_toggled() {
    let harness = Harness::new();
    harness.api.reply("Paris", 200, &paris_hourly_body());
    harness.api.reply("Paris", 200, &paris_daily_body());
    let controller = harness.controller();

    let hourly = controller.submit(&paris()).await.unwrap();
    let daily = controller
        .change_granularity(paris(), Granularity::Daily)
        .await
        .unwrap();

    let requests = harness.api.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1]["forecast_type"], "daily");
    assert_eq!(requests[1]["city"], "Paris");

    let hourly_columns = hourly.forecast.unwrap().columns;
    assert!(hourly_columns.contains(&ForecastField::Temperature));

    let daily_table = daily.forecast.unwrap();
    assert_eq!(
        daily_table.columns,
        vec![
            ForecastField::TemperatureMax,
            ForecastField::TemperatureMin,
            ForecastField::PrecipitationProbabilityMax,
        ]
    );
    assert_eq!(daily_table.rows.len(), 3);
    assert!(daily.current.is_none());
}

#[tokio::test]
async fn should_persist_defaults_even_when_request_fails() {
    let harness = Harness::new();
    harness.api.reply("", 400, r#"{"error":"No location provided"}"#);
    let query = Query::from_form("", "48.8", "2.3", UnitSystem::Imperial, true);

    let _ = harness.controller().submit(&query).await;

    let reloaded = harness.controller().initialize();
    assert_eq!(reloaded.form, Some(query));
    assert!(reloaded.should_auto_submit());
}

#[tokio::test]
async fn should_not_auto_submit_without_stored_defaults() {
    let harness = Harness::new();
    let startup = harness.controller().initialize();
    assert!(startup.form.is_none());
    assert!(!startup.should_auto_submit());
    assert!(harness.api.requests().is_empty());
}

#[tokio::test]
async fn should_treat_malformed_stored_defaults_as_absent() {
    let harness = Harness::new();
    harness.session.set("defaultLocation", "{oops").unwrap();
    assert!(!harness.controller().initialize().should_auto_submit());
}

#[test]
fn should_restore_initial_theme_after_two_toggles() {
    let harness = Harness::new();
    let controller = harness.controller();
    let initial = Some(Theme::Dark);

    let once = controller.toggle_theme(initial);
    let twice = controller.toggle_theme(Some(once));

    assert_eq!(Some(twice), initial);
    assert_eq!(harness.local.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(harness.controller().initialize().theme, Some(twice));
}

#[test]
fn should_toggle_to_light_when_no_theme_attribute() {
    let harness = Harness::new();
    assert_eq!(harness.controller().toggle_theme(None), Theme::Light);
    assert_eq!(harness.controller().initialize().theme, Some(Theme::Light));
}

#[tokio::test]
async fn should_render_identical_tables_for_identical_responses() {
    let harness = Harness::new();
    harness.api.reply("Paris", 200, &paris_hourly_body());
    harness.api.reply("Paris", 200, &paris_hourly_body());
    let controller = harness.controller();

    let first = controller.submit(&paris()).await.unwrap();
    let second = controller.submit(&paris()).await.unwrap();

    assert_eq!(first, second);
    let table = first.forecast.unwrap();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1].cells, vec!["11.8", "10.1", "-"]);
}

#[tokio::test]
async fn should_keep_response_that_completes_last() {
    let harness = Harness::new();
    let gate = harness.api.gate("Paris");
    harness
        .api
        .reply("Berlin", 200, &json!({"location": "Berlin, Germany"}).to_string());
    let controller = harness.controller();
    let state = RefCell::new(ViewState::default());

    let slow = async {
        state.borrow_mut().begin_submit();
        let outcome = controller.submit(&paris()).await;
        state.borrow_mut().apply(outcome);
    };
    let fast_then_release = async {
        state.borrow_mut().begin_submit();
        let outcome = controller
            .submit(&Query::from_form("Berlin", "", "", UnitSystem::Metric, false))
            .await;
        state.borrow_mut().apply(outcome);
        gate.send(ApiResponse::new(200, paris_hourly_body())).unwrap();
    };
    tokio::join!(slow, fast_then_release);

    let state = state.into_inner();
    assert_eq!(state.dashboard.unwrap().heading, "Paris, France");
    assert_eq!(harness.api.requests().len(), 2);
}
