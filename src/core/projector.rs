//! Visible subset projection.
//!
//! Both the map and the list derive what they show from [`project`], so
//! for the same filter they always show the same points in the same order.

use crate::models::{Facility, WasteFilter};

/// Restrict `facilities` to those passing `filter`, keeping input order.
///
/// [`WasteFilter::All`] returns every facility; an unrecognized filter
/// returns nothing.
pub fn project<'a>(facilities: &'a [Facility], filter: &WasteFilter) -> Vec<&'a Facility> {
    facilities.iter().filter(|f| filter.matches(f)).collect()
}

/// Number of facilities [`project`] would return.
pub fn visible_count(facilities: &[Facility], filter: &WasteFilter) -> usize {
    facilities.iter().filter(|f| filter.matches(f)).count()
}
