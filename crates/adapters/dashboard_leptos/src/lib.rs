use leptos::prelude::*;
use weatherboard_app::services::DashboardController;
use weatherboard_app::settings::ClientSettings;

pub mod api;
mod components;
pub mod config;
pub mod document;
pub mod locale;
pub mod logging;
mod pages;
pub mod storage;

use api::HttpWeatherApi;
use config::DashboardConfig;
use locale::BrowserDayLabeler;
use pages::Home;
use storage::SettingsBackend;

/// Controller wired to the browser adapters.
pub type BrowserController =
    DashboardController<HttpWeatherApi, SettingsBackend, SettingsBackend, BrowserDayLabeler>;

/// Build the controller from configuration.
#[must_use]
pub fn build_controller(config: &DashboardConfig) -> BrowserController {
    let settings = ClientSettings::new(
        SettingsBackend::session(),
        SettingsBackend::local(),
        config.settings_keys(),
    );
    DashboardController::new(
        HttpWeatherApi::new(config.api.endpoint.clone()),
        settings,
        BrowserDayLabeler::from_navigator(),
    )
}

/// Root application component.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    view! { <Home config/> }
}
