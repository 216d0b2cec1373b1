use leptos::prelude::*;
use weatherboard_dashboard::config::DashboardConfig;
use weatherboard_dashboard::{App, logging};

fn main() {
    let config = DashboardConfig::load();
    logging::init(&config.logging.filter);
    tracing::info!(endpoint = %config.api.endpoint, "starting weather dashboard");

    leptos::mount::mount_to_body(move || view! { <App config/> });
}
