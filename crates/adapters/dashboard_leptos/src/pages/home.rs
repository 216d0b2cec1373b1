//! The single dashboard page.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use weatherboard_app::error::DashboardError;
use weatherboard_app::services::ViewState;
use weatherboard_domain::dashboard::Dashboard;
use weatherboard_domain::query::{Granularity, Query};
use weatherboard_domain::theme::Theme;

use crate::components::{DashboardView, ErrorBanner, FormState, ThemeToggle, WeatherForm};
use crate::config::DashboardConfig;
use crate::{BrowserController, document};

/// Clear the page, run `work` in the background and show its outcome.
///
/// Outcomes of overlapping runs are applied in completion order.
fn run(
    state: RwSignal<ViewState>,
    work: impl Future<Output = Result<Dashboard, DashboardError>> + 'static,
) {
    state.update(ViewState::begin_submit);
    spawn_local(async move {
        let outcome = work.await;
        state.update(|s| s.apply(outcome));
    });
}

#[component]
pub fn Home(config: DashboardConfig) -> impl IntoView {
    let controller = StoredValue::new_local(crate::build_controller(&config));
    let attribute = config.theme.attribute;

    let startup = controller.with_value(BrowserController::initialize);
    if let Some(theme) = startup.theme {
        document::apply_theme(&attribute, theme);
    }
    let theme = RwSignal::new(startup.theme.or_else(|| document::read_theme(&attribute)));

    let form = FormState::new(startup.form.as_ref());
    let state = RwSignal::new(ViewState::default());

    let submit = move |query: Query| {
        let controller = controller.get_value();
        run(state, async move { controller.submit(&query).await });
    };
    let change_granularity = move |granularity: Granularity| {
        let controller = controller.get_value();
        let query = form.snapshot();
        run(state, async move {
            controller.change_granularity(query, granularity).await
        });
    };
    let toggle_theme =
        move |current: Option<Theme>| controller.with_value(|c| c.toggle_theme(current));

    if startup.should_auto_submit() {
        submit(form.snapshot());
    }

    let error = Signal::derive(move || state.with(|s| s.error.clone()));

    view! {
        <main class="container py-4">
            <div class="d-flex justify-content-between align-items-center mb-3">
                <h1>"Weather Dashboard"</h1>
                <ThemeToggle attribute theme on_toggle=toggle_theme/>
            </div>
            <WeatherForm form on_submit=submit on_granularity=change_granularity/>
            <ErrorBanner message=error/>
            <DashboardView state/>
        </main>
    }
}
