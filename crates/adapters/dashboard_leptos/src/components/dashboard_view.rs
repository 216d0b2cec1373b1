//! Dashboard container: heading, current conditions and forecast table.

use leptos::prelude::*;
use weatherboard_app::services::ViewState;
use weatherboard_domain::dashboard::Dashboard;

use super::{CurrentCard, ForecastGrid};

/// The dashboard area. The container stays hidden until the first
/// successful render.
#[component]
pub fn DashboardView(state: RwSignal<ViewState>) -> impl IntoView {
    let hidden = move || state.with(|s| !s.container_visible);
    let dashboard = move || {
        state
            .with(|s| s.dashboard.clone())
            .map(|dashboard| view! { <Report dashboard/> })
    };

    view! {
        <div id="weather-dashboard-container" class="card" class=("d-none", hidden)>
            <div class="card-body">
                <div id="weather-dashboard">{dashboard}</div>
            </div>
        </div>
    }
}

#[component]
fn Report(dashboard: Dashboard) -> impl IntoView {
    let current = dashboard.current.map(|panel| view! { <CurrentCard panel/> });
    let forecast = dashboard.forecast.map(|table| view! { <ForecastGrid table/> });

    view! {
        <h2>{dashboard.heading}</h2>
        {current}
        {forecast}
    }
}
