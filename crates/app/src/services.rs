//! Use-case services.

pub mod dashboard_controller;
pub mod view_state;

pub use dashboard_controller::{DashboardController, Startup};
pub use view_state::ViewState;
