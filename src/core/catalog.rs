//! Bundled dataset loading.
//!
//! The browser trusts its facility list: ids are assumed unique and every
//! point is assumed to accept at least one waste type. This loader is where
//! those assumptions are checked for the bundled data.

use std::collections::HashSet;

use super::error::CatalogError;
use crate::models::{Facility, HealthImpact};

/// Parse and validate a collection point list.
pub fn load_facilities(json: &str) -> Result<Vec<Facility>, CatalogError> {
    let facilities: Vec<Facility> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(facilities.len());
    for facility in &facilities {
        if facility.waste_types.is_empty() {
            return Err(CatalogError::NoWasteTypes(facility.id.clone()));
        }
        if !seen.insert(&facility.id) {
            return Err(CatalogError::DuplicateId(facility.id.clone()));
        }
    }

    tracing::debug!(count = facilities.len(), "collection points loaded");
    Ok(facilities)
}

/// Parse the health impact panel content.
pub fn load_health(json: &str) -> Result<HealthImpact, CatalogError> {
    Ok(serde_json::from_str(json)?)
}
