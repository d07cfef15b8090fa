//! Filter and selection state machine for the collection point browser.
//!
//! [`BrowserState`] holds the only two mutable pieces of browser state.
//! They change independently:
//!
//! - Changing the filter never touches the selection. A selected point that
//!   the filter hides stays selected; it is just not drawn as active.
//! - Selecting never touches the filter, and is not checked against the
//!   current facility list.

use crate::models::{Facility, Selection, WasteFilter};

use super::projector;

/// Current filter and selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub filter: WasteFilter,
    pub selection: Selection,
}

impl BrowserState {
    /// Fresh state: no filter, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `facility`.
    pub fn select(&mut self, facility: &Facility) {
        self.selection = Selection::Facility(facility.id.clone());
    }

    /// Whether `facility` is the selected point (by identifier).
    pub fn is_selected(&self, facility: &Facility) -> bool {
        self.selection.is(facility)
    }

    pub fn set_filter(&mut self, filter: WasteFilter) {
        self.filter = filter;
    }

    /// Reset to [`WasteFilter::All`]. Reachable from any state.
    pub fn clear_filter(&mut self) {
        self.filter = WasteFilter::All;
    }

    /// Points visible under the current filter.
    pub fn visible<'a>(&self, facilities: &'a [Facility]) -> Vec<&'a Facility> {
        projector::project(facilities, &self.filter)
    }

    /// True when the filter hides every point.
    pub fn is_empty_result(&self, facilities: &[Facility]) -> bool {
        projector::visible_count(facilities, &self.filter) == 0
    }

    /// Resolve the selection against a facility list.
    ///
    /// Returns `None` when nothing is selected or when the selected id is
    /// no longer in `facilities` (stale selection).
    pub fn selected_in<'a>(&self, facilities: &'a [Facility]) -> Option<&'a Facility> {
        let id = self.selection.id()?;
        facilities.iter().find(|f| &f.id == id)
    }

    /// Selected point, only if it is also visible under the current filter.
    pub fn active_in<'a>(&self, facilities: &'a [Facility]) -> Option<&'a Facility> {
        self.selected_in(facilities)
            .filter(|f| self.filter.matches(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, FacilityId, WasteType};

    fn facility(id: &str, types: &[WasteType]) -> Facility {
        Facility {
            id: FacilityId::new(id),
            name: format!("Point {}", id),
            address: format!("{} Green Street", id),
            coordinates: Coordinate::new(34.05, -118.24),
            operating_hours: "Mon-Fri: 8AM-6PM".to_string(),
            waste_types: types.to_vec(),
            distance: "1.0 km".to_string(),
        }
    }

    fn sample() -> Vec<Facility> {
        use WasteType::*;
        vec![
            facility("1", &[Plastic, Paper, Glass]),
            facility("2", &[Electronics, Metal, Batteries]),
            facility("3", &[Plastic, Paper, Organic]),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = BrowserState::new();
        assert_eq!(state.filter, WasteFilter::All);
        assert_eq!(state.selection, Selection::None);
        assert_eq!(state.visible(&sample()).len(), 3);
    }

    #[test]
    fn test_select_replaces_previous() {
        let points = sample();
        let mut state = BrowserState::new();
        state.select(&points[0]);
        state.select(&points[2]);
        assert!(!state.is_selected(&points[0]));
        assert!(state.is_selected(&points[2]));
        assert_eq!(state.selection.id(), Some(&FacilityId::new("3")));
    }

    #[test]
    fn test_is_selected_only_matching_id() {
        let points = sample();
        let mut state = BrowserState::new();
        state.select(&points[1]);

        let flags: Vec<bool> = points.iter().map(|p| state.is_selected(p)).collect();
        assert_eq!(flags, vec![false, true, false]);

        // Different record, same id
        let copy = facility("2", &[WasteType::Glass]);
        assert!(state.is_selected(&copy));
    }

    #[test]
    fn test_selection_survives_filter() {
        let points = sample();
        let mut state = BrowserState::new();
        state.select(&points[0]);
        state.set_filter(WasteFilter::Type(WasteType::Electronics));

        assert_eq!(state.selection, Selection::Facility(FacilityId::new("1")));
        assert!(state.visible(&points).iter().all(|p| !state.is_selected(p)));
        assert_eq!(state.active_in(&points), None);
        assert_eq!(state.selected_in(&points).map(|p| p.id.as_str()), Some("1"));

        state.clear_filter();
        assert_eq!(state.active_in(&points).map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn test_filter_then_select_only_result() {
        let points = sample();
        let mut state = BrowserState::new();
        state.set_filter(WasteFilter::from_value("Batteries"));

        let visible = state.visible(&points);
        assert_eq!(visible.len(), 1);
        let only = visible[0];
        state.select(only);

        assert_eq!(state.selection.id(), Some(&FacilityId::new("2")));
    }

    #[test]
    fn test_clear_filter_from_every_state() {
        let filters = [
            WasteFilter::All,
            WasteFilter::Type(WasteType::Organic),
            WasteFilter::Unrecognized("Asbestos".to_string()),
        ];
        for filter in filters {
            let mut state = BrowserState::new();
            state.set_filter(filter);
            state.clear_filter();
            assert_eq!(state.filter, WasteFilter::All);
        }
    }

    #[test]
    fn test_empty_result() {
        let points = sample();
        let mut state = BrowserState::new();
        assert!(!state.is_empty_result(&points));

        state.set_filter(WasteFilter::from_value("Asbestos"));
        assert!(state.is_empty_result(&points));

        state.clear_filter();
        assert!(!state.is_empty_result(&points));
        assert!(state.is_empty_result(&[]));
    }

    #[test]
    fn test_select_outside_store() {
        let points = sample();
        let stranger = facility("99", &[WasteType::Glass]);
        let mut state = BrowserState::new();
        state.select(&stranger);

        assert!(state.is_selected(&stranger));
        assert_eq!(state.selected_in(&points), None);
    }
}
