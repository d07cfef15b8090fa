//! Utility modules for browser access, formatting and marker layout.
//!
//! Provides:
//! - [`dom`] - Window access and new-tab navigation
//! - [`format`] - Metric and count formatting
//! - [`geo`] - Schematic marker placement
//! - [`validate_map_url`] - Map URL allow-list validation

pub mod dom;
pub mod format;
pub mod geo;
mod url;

pub use url::{validate_map_url, UrlValidation};
