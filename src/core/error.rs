//! Error types for the application.
//!
//! The browser state engine has no failure paths. Errors only arise at its
//! edges:
//!
//! - [`CatalogError`] - Bundled dataset parsing and validation
//! - [`DirectionsError`] - Opening an external map destination

use thiserror::Error;

use crate::models::FacilityId;

/// Errors raised while loading the bundled collection point or health data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset is not valid JSON or does not match the expected shape
    #[error("invalid dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// A collection point lists no waste types
    #[error("collection point '{0}' accepts no waste types")]
    NoWasteTypes(FacilityId),
    /// Two collection points share an identifier
    #[error("duplicate collection point id '{0}'")]
    DuplicateId(FacilityId),
}

/// Errors raised by the default directions handler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectionsError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Generated destination URL failed validation
    #[error("destination rejected: {0}")]
    Rejected(String),
    /// `window.open` failed or was blocked
    #[error("failed to open map window")]
    OpenFailed,
}
