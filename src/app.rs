//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserSignals,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::collection::card_dom_id;
use crate::components::Dashboard;
use crate::config::{COLLECTION_POINTS_JSON, DEFAULT_USER_LOCATION, HEALTH_IMPACT_JSON};
use crate::core::catalog::{load_facilities, load_health};
use crate::core::error::{CatalogError, DirectionsError};
use crate::core::{ActionDispatcher, BrowserState, DirectionsRequest};
use crate::models::{Coordinate, Facility, HealthImpact, WasteFilter};
use crate::utils::{dom, validate_map_url, UrlValidation};

// ============================================================================
// BrowserSignals
// ============================================================================

/// Reactive wrapper around [`BrowserState`] and the [`ActionDispatcher`].
///
/// Every user action goes through here so that state changes and outbound
/// events happen once per action, never from a render or effect.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles.
#[derive(Clone, Copy)]
pub struct BrowserSignals {
    /// Filter and selection.
    pub state: RwSignal<BrowserState>,
    dispatcher: StoredValue<ActionDispatcher, LocalStorage>,
}

impl BrowserSignals {
    pub fn new(dispatcher: ActionDispatcher) -> Self {
        Self {
            state: RwSignal::new(BrowserState::new()),
            dispatcher: StoredValue::new_local(dispatcher),
        }
    }

    /// Select a point and notify the host once.
    pub fn select(&self, facility: &Facility) {
        self.state.update(|s| s.select(facility));
        self.dispatcher.with_value(|d| d.on_select(facility));
    }

    /// Forward a directions request. Selection is left untouched.
    pub fn request_directions(&self, facility: &Facility) {
        self.dispatcher.with_value(|d| {
            d.on_directions(facility);
        });
    }

    pub fn set_filter(&self, filter: WasteFilter) {
        tracing::debug!(filter = %filter, "filter changed");
        self.state.update(|s| s.set_filter(filter));
    }

    pub fn clear_filter(&self) {
        tracing::debug!("filter cleared");
        self.state.update(|s| s.clear_filter());
    }

    /// Current filter (tracked).
    pub fn filter(&self) -> WasteFilter {
        self.state.with(|s| s.filter.clone())
    }

    /// Whether `facility` is selected (tracked).
    pub fn is_selected(&self, facility: &Facility) -> bool {
        self.state.with(|s| s.is_selected(facility))
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Collection points for the current render cycle.
    pub facilities: RwSignal<Vec<Facility>>,

    /// Reference point drawn as the user marker. Display only.
    pub user_location: Coordinate,

    /// Browser filter/selection state and outbound actions.
    pub browser: BrowserSignals,
}

impl AppContext {
    pub fn new(
        facilities: Vec<Facility>,
        user_location: Option<Coordinate>,
        dispatcher: ActionDispatcher,
    ) -> Self {
        Self {
            facilities: RwSignal::new(facilities),
            user_location: user_location.unwrap_or(DEFAULT_USER_LOCATION),
            browser: BrowserSignals::new(dispatcher),
        }
    }

    /// Visible subset under the current filter (tracked).
    ///
    /// Each view calls this on its own; the projection is deterministic so
    /// they always agree.
    pub fn visible_facilities(&self) -> Vec<Facility> {
        self.browser.state.with(|state| {
            self.facilities
                .with(|all| state.visible(all).into_iter().cloned().collect())
        })
    }
}

// ============================================================================
// Host handlers
// ============================================================================

/// Default directions handler: open the destination in an external map.
fn open_directions(request: &DirectionsRequest) {
    let result = match validate_map_url(&request.maps_url()) {
        UrlValidation::Valid(url) => dom::open_in_new_tab(&url),
        UrlValidation::Invalid(err) => Err(DirectionsError::Rejected(err.to_string())),
    };
    if let Err(err) = result {
        tracing::warn!(
            id = %request.facility_id,
            name = %request.name,
            error = %err,
            "could not open directions"
        );
    }
}

/// Default selection handler: bring the matching list card into view, so a
/// marker click is mirrored in the list.
fn reveal_in_list(facility: &Facility) {
    dom::scroll_into_view(&card_dom_id(&facility.id));
}

fn load_bundled_data() -> Result<(Vec<Facility>, HealthImpact), CatalogError> {
    Ok((
        load_facilities(COLLECTION_POINTS_JSON)?,
        load_health(HEALTH_IMPACT_JSON)?,
    ))
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the bundled collection points and health content
/// - Creates and provides the global AppContext
/// - Renders the dashboard, or a notice if the bundled data is invalid
#[component]
pub fn App() -> impl IntoView {
    let (facilities, health) = match load_bundled_data() {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(error = %err, "bundled data failed to load");
            return view! { <DataError message=err.to_string() /> }.into_any();
        }
    };

    let dispatcher = ActionDispatcher::new()
        .with_on_select(reveal_in_list)
        .with_on_directions(open_directions);
    provide_context(AppContext::new(facilities, None, dispatcher));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = dom::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Dashboard health=health />
        </ErrorBoundary>
    }
    .into_any()
}

/// Shown instead of the dashboard when bundled data cannot be parsed.
#[component]
fn DataError(message: String) -> impl IntoView {
    view! {
        <div class="app-error">
            <h1>"Collection data unavailable"</h1>
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FacilityId, Selection};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counters {
        selects: Rc<Cell<usize>>,
        directions: Rc<Cell<usize>>,
    }

    fn counting_context() -> (AppContext, Counters) {
        let selects = Rc::new(Cell::new(0));
        let directions = Rc::new(Cell::new(0));
        let (s, d) = (selects.clone(), directions.clone());
        let dispatcher = ActionDispatcher::new()
            .with_on_select(move |_| s.set(s.get() + 1))
            .with_on_directions(move |_| d.set(d.get() + 1));
        let facilities = load_facilities(COLLECTION_POINTS_JSON).unwrap();
        (
            AppContext::new(facilities, None, dispatcher),
            Counters {
                selects,
                directions,
            },
        )
    }

    fn visible_ids(ctx: &AppContext) -> Vec<String> {
        ctx.visible_facilities()
            .iter()
            .map(|f| f.id.to_string())
            .collect()
    }

    #[test]
    fn test_select_notifies_once() {
        Owner::new().with(|| {
            let (ctx, counters) = counting_context();
            let second = ctx.facilities.get_untracked()[1].clone();

            ctx.browser.select(&second);

            assert_eq!(counters.selects.get(), 1);
            assert_eq!(counters.directions.get(), 0);
            assert!(ctx.browser.is_selected(&second));
        });
    }

    #[test]
    fn test_directions_leave_selection_alone() {
        Owner::new().with(|| {
            let (ctx, counters) = counting_context();
            let first = ctx.facilities.get_untracked()[0].clone();

            ctx.browser.request_directions(&first);

            assert_eq!(counters.directions.get(), 1);
            assert_eq!(counters.selects.get(), 0);
            assert!(!ctx.browser.is_selected(&first));
            assert_eq!(ctx.browser.state.get_untracked().selection, Selection::None);
        });
    }

    #[test]
    fn test_views_share_projection() {
        Owner::new().with(|| {
            let (ctx, _) = counting_context();
            assert_eq!(visible_ids(&ctx), vec!["1", "2", "3"]);

            ctx.browser.set_filter(WasteFilter::from_value("Paper"));
            assert_eq!(visible_ids(&ctx), vec!["1", "3"]);

            ctx.browser.set_filter(WasteFilter::from_value("Uranium"));
            assert!(visible_ids(&ctx).is_empty());

            ctx.browser.clear_filter();
            assert_eq!(visible_ids(&ctx), vec!["1", "2", "3"]);
        });
    }

    #[test]
    fn test_filter_keeps_selection() {
        Owner::new().with(|| {
            let (ctx, counters) = counting_context();
            let first = ctx.facilities.get_untracked()[0].clone();
            ctx.browser.select(&first);

            ctx.browser.set_filter(WasteFilter::from_value("Electronics"));

            assert_eq!(visible_ids(&ctx), vec!["2"]);
            assert_eq!(
                ctx.browser.state.get_untracked().selection,
                Selection::Facility(FacilityId::new("1"))
            );
            // Filtering is not a selection event
            assert_eq!(counters.selects.get(), 1);
        });
    }

    #[test]
    fn test_filter_then_select_only_result() {
        Owner::new().with(|| {
            let (ctx, counters) = counting_context();
            ctx.browser.set_filter(WasteFilter::from_value("Batteries"));

            let visible = ctx.visible_facilities();
            assert_eq!(visible.len(), 1);
            ctx.browser.select(&visible[0]);

            assert_eq!(
                ctx.browser.state.get_untracked().selection.id(),
                Some(&FacilityId::new("2"))
            );
            assert_eq!(counters.selects.get(), 1);
        });
    }
}
