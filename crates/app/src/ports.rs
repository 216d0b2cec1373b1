//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the browser.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Futures returned by ports are not required to be `Send`: the dashboard runs
//! on the browser's single UI thread.

pub mod storage;
pub mod weather_api;

pub use storage::KeyValueStore;
pub use weather_api::{ApiResponse, WeatherApi};
