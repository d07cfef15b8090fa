//! UI components built with Leptos.
//!
//! - [`Dashboard`] - Page layout (main entry point)
//! - [`collection`] - Collection point browser (map + list)
//! - [`health`] - Health impact panel
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod collection;
mod dashboard;
pub mod health;
pub mod icons;

pub use dashboard::Dashboard;
