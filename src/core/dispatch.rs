//! Outbound actions for the collection point browser.
//!
//! The browser forwards two events to its host: a point was selected, and
//! directions to a point were requested. It does not know what the host
//! does with them. Both handlers default to no-ops.

use std::fmt;
use std::rc::Rc;

use crate::config::MAPS_BASE_URL;
use crate::models::{Coordinate, Facility, FacilityId};

/// Handler invoked with the facility a user selected.
pub type SelectHandler = Rc<dyn Fn(&Facility)>;

/// Handler invoked with a directions request.
pub type DirectionsHandler = Rc<dyn Fn(&DirectionsRequest)>;

/// A request to navigate to a collection point, emitted for the host.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionsRequest {
    pub facility_id: FacilityId,
    pub name: String,
    pub destination: Coordinate,
}

impl DirectionsRequest {
    pub fn for_facility(facility: &Facility) -> Self {
        Self {
            facility_id: facility.id.clone(),
            name: facility.name.clone(),
            destination: facility.coordinates,
        }
    }

    /// External map URL centered on the destination.
    ///
    /// Format: `https://maps.google.com/?q={lat},{lng}`
    pub fn maps_url(&self) -> String {
        format!(
            "{}?q={},{}",
            MAPS_BASE_URL, self.destination.lat, self.destination.lng
        )
    }
}

/// Forwards selection and directions events to host-supplied handlers.
#[derive(Clone)]
pub struct ActionDispatcher {
    on_select: SelectHandler,
    on_directions: DirectionsHandler,
}

impl ActionDispatcher {
    /// Dispatcher with no-op handlers.
    pub fn new() -> Self {
        Self {
            on_select: Rc::new(|_| {}),
            on_directions: Rc::new(|_| {}),
        }
    }

    pub fn with_on_select(mut self, handler: impl Fn(&Facility) + 'static) -> Self {
        self.on_select = Rc::new(handler);
        self
    }

    pub fn with_on_directions(mut self, handler: impl Fn(&DirectionsRequest) + 'static) -> Self {
        self.on_directions = Rc::new(handler);
        self
    }

    /// Forward a user selection. Call once per user action, not per render.
    pub fn on_select(&self, facility: &Facility) {
        tracing::debug!(id = %facility.id, "collection point selected");
        (self.on_select)(facility);
    }

    /// Emit a directions request for `facility`. Does not select it.
    pub fn on_directions(&self, facility: &Facility) -> DirectionsRequest {
        let request = DirectionsRequest::for_facility(facility);
        tracing::info!(id = %facility.id, name = %facility.name, "directions requested");
        (self.on_directions)(&request);
        request
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDispatcher").finish_non_exhaustive()
    }
}
