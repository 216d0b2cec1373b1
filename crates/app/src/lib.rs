//! # weatherboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `WeatherApi`: one POST to the weather endpoint, raw status and body back
//!   - `KeyValueStore`: a string slot store (browser session/local storage)
//! - Define the **driving/inbound** use-case:
//!   - `DashboardController`: initialize, submit, change granularity, toggle theme
//! - Own the **client settings** (persisted defaults, theme preference) on top of
//!   `KeyValueStore`
//! - Decode endpoint responses into a dashboard or a user-facing error
//! - Provide **in-process infrastructure** (in-memory store) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `weatherboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod error;
pub mod memory_store;
pub mod ports;
pub mod response;
pub mod services;
pub mod settings;
