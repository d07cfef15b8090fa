//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Facility`], [`FacilityId`], [`Coordinate`], [`WasteType`] - Collection points
//! - [`WasteFilter`], [`Selection`] - Browser filter and selection state
//! - [`HealthImpact`], [`HealthMetric`] - Health impact panel content

mod browser;
mod facility;
mod health;

pub use browser::{Selection, WasteFilter, ALL_FILTER_VALUE};
pub use facility::{Coordinate, Facility, FacilityId, WasteType};
pub use health::{EducationalResource, HealthImpact, HealthMetric, MetricKind};
