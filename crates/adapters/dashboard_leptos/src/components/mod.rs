mod current_card;
mod dashboard_view;
mod error_banner;
mod forecast_grid;
mod theme_toggle;
mod weather_form;

pub use current_card::CurrentCard;
pub use dashboard_view::DashboardView;
pub use error_banner::ErrorBanner;
pub use forecast_grid::ForecastGrid;
pub use theme_toggle::ThemeToggle;
pub use weather_form::{FormState, WeatherForm};
