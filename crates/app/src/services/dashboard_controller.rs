//! Dashboard controller: startup, submit, granularity and theme use-cases.

use weatherboard_domain::dashboard::Dashboard;
use weatherboard_domain::query::{Granularity, Query};
use weatherboard_domain::theme::Theme;
use weatherboard_domain::time::DayLabeler;

use crate::error::DashboardError;
use crate::ports::{KeyValueStore, WeatherApi};
use crate::response;
use crate::settings::ClientSettings;

/// What the page restores before first paint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Startup {
    /// Form pre-fill from the persisted defaults.
    pub form: Option<Query>,
    /// Theme to apply to the document root.
    pub theme: Option<Theme>,
}

impl Startup {
    /// Persisted defaults trigger an immediate submit.
    #[must_use]
    pub fn should_auto_submit(&self) -> bool {
        self.form.is_some()
    }
}

/// Application service behind the dashboard page.
///
/// Holds no per-request state: each submit is independent, so overlapping
/// submits are not cancelled or ordered.
#[derive(Debug, Clone)]
pub struct DashboardController<A, S, L, D> {
    api: A,
    settings: ClientSettings<S, L>,
    labeler: D,
}

impl<A, S, L, D> DashboardController<A, S, L, D>
where
    A: WeatherApi,
    S: KeyValueStore,
    L: KeyValueStore,
    D: DayLabeler,
{
    /// Create a controller from its ports.
    pub fn new(api: A, settings: ClientSettings<S, L>, labeler: D) -> Self {
        Self {
            api,
            settings,
            labeler,
        }
    }

    /// Read both persisted slots.
    pub fn initialize(&self) -> Startup {
        let stored = self.settings.load();
        Startup {
            form: stored.defaults,
            theme: stored.theme,
        }
    }

    /// Persist `query` as the new defaults, call the endpoint and build the
    /// dashboard.
    ///
    /// The defaults are written before the request, so a failed request still
    /// updates them.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Transport`] when no response arrived, and
    /// [`DashboardError::Rejected`] / [`DashboardError::Malformed`] when the
    /// response signals a failure or cannot be read.
    pub async fn submit(&self, query: &Query) -> Result<Dashboard, DashboardError> {
        if let Err(err) = self.settings.save_defaults(query) {
            tracing::warn!(error = %err, "failed to persist defaults");
        }
        if !query.has_location() {
            tracing::debug!("submitting without city or coordinates");
        }
        tracing::debug!(
            units = %query.units,
            granularity = %query.granularity,
            "requesting forecast"
        );

        let outcome = match self.api.fetch(query).await {
            Ok(raw) => response::decode(&raw),
            Err(err) => Err(err.into()),
        };

        match outcome {
            Ok(weather) => Ok(Dashboard::build(&weather, &self.labeler)),
            Err(err) => {
                tracing::warn!(error = %err, "forecast request failed");
                Err(err)
            }
        }
    }

    /// Re-run the submit with another granularity.
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Self::submit).
    pub async fn change_granularity(
        &self,
        query: Query,
        granularity: Granularity,
    ) -> Result<Dashboard, DashboardError> {
        self.submit(&query.with_granularity(granularity)).await
    }

    /// Compute the next theme from the current document attribute and persist it.
    pub fn toggle_theme(&self, current: Option<Theme>) -> Theme {
        let next = Theme::toggle_from(current);
        if let Err(err) = self.settings.save_theme(next) {
            tracing::warn!(error = %err, "failed to persist theme");
        }
        next
    }
}
