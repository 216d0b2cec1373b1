//! # weatherboard-domain
//!
//! Pure domain model for the weatherboard browser dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamp parsing and day labels
//! - Define the **Query** a user submits (location, unit system, granularity)
//! - Define the **Theme** preference and its toggle rule
//! - Own the static **condition code table** (WMO code → icon, description)
//! - Decode the **Weather Response** payload leniently, field by field
//! - Describe the canonical **forecast columns** and their accessors
//! - Build the **Dashboard** view-model that adapters render
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser APIs.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod condition;
pub mod dashboard;
pub mod field;
pub mod forecast;
pub mod query;
pub mod theme;

mod de;
