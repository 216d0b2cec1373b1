//! View state: what the error area and dashboard area currently show.

use weatherboard_domain::dashboard::Dashboard;

use crate::error::DashboardError;

/// UI-facing state of one dashboard page.
///
/// Every submit first calls [`begin_submit`](Self::begin_submit) and later
/// [`apply`](Self::apply) with its outcome. Outcomes overwrite each other, so
/// with overlapping submits the last one to complete is what stays visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Message in the error area; hidden when `None`.
    pub error: Option<String>,
    /// Rendered dashboard; the area is empty when `None`.
    pub dashboard: Option<Dashboard>,
    /// The dashboard container starts hidden and stays revealed after the
    /// first successful render.
    pub container_visible: bool,
}

impl ViewState {
    /// Clear the previous error and dashboard before a new request.
    pub fn begin_submit(&mut self) {
        self.error = None;
        self.dashboard = None;
    }

    /// Show a finished submit: a dashboard or a single error message.
    pub fn apply(&mut self, outcome: Result<Dashboard, DashboardError>) {
        match outcome {
            Ok(dashboard) => {
                self.error = None;
                self.dashboard = Some(dashboard);
                self.container_visible = true;
            }
            Err(err) => {
                self.dashboard = None;
                self.error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard(heading: &str) -> Dashboard {
        Dashboard {
            heading: heading.to_string(),
            current: None,
            forecast: None,
        }
    }

    #[test]
    fn should_start_hidden_and_empty() {
        let state = ViewState::default();
        assert!(state.error.is_none());
        assert!(state.dashboard.is_none());
        assert!(!state.container_visible);
    }

    #[test]
    fn should_reveal_container_on_success() {
        let mut state = ViewState::default();
        state.begin_submit();
        state.apply(Ok(dashboard("Paris")));
        assert!(state.container_visible);
        assert_eq!(state.dashboard.unwrap().heading, "Paris");
    }

    #[test]
    fn should_show_error_and_keep_dashboard_empty_on_failure() {
        let mut state = ViewState::default();
        state.apply(Err(DashboardError::Malformed));
        assert_eq!(state.error.as_deref(), Some("Unknown error"));
        assert!(state.dashboard.is_none());
        assert!(!state.container_visible);
    }

    #[test]
    fn should_clear_previous_results_when_submit_begins() {
        let mut state = ViewState::default();
        state.apply(Ok(dashboard("Paris")));
        state.begin_submit();
        assert!(state.dashboard.is_none());
        assert!(state.container_visible);

        state.apply(Err(DashboardError::Malformed));
        state.begin_submit();
        assert!(state.error.is_none());
    }

    #[test]
    fn should_keep_last_completed_outcome() {
        let mut state = ViewState::default();
        state.begin_submit();
        state.begin_submit();
        state.apply(Ok(dashboard("first")));
        state.apply(Ok(dashboard("second")));
        assert_eq!(state.dashboard.unwrap().heading, "second");
    }
}
