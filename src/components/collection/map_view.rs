//! Schematic map view.
//!
//! Markers are laid out from coordinates relative to the full point set,
//! so filtering hides markers without moving the remaining ones.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::MARKER_PADDING_PCT;
use crate::models::Facility;
use crate::utils::geo::{marker_position, Bounds};

stylance::import_crate_style!(css, "src/components/collection/collection.module.css");

#[component]
pub fn MapView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let user_location = ctx.user_location;

    // Bounds cover every point plus the user marker
    let bounds = Memo::new(move |_| {
        ctx.facilities.with(|all| {
            Bounds::enclosing(
                all.iter()
                    .map(|f| f.coordinates)
                    .chain(std::iter::once(user_location)),
            )
        })
    });

    let user_style = move || {
        bounds
            .get()
            .map(|b| marker_position(user_location, &b, MARKER_PADDING_PCT).style())
            .unwrap_or_default()
    };

    view! {
        <div class=css::map role="img" aria-label="Map of collection points">
            <For
                each=move || ctx.visible_facilities()
                key=|facility| facility.id.clone()
                children=move |facility| {
                    view! { <Marker facility=facility bounds=bounds /> }
                }
            />
            <div class=css::userMarker style=user_style title="Your location">
                <Icon icon=ic::USER_LOCATION />
            </div>
        </div>
    }
}

#[component]
fn Marker(facility: Facility, bounds: Memo<Option<Bounds>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let coordinates = facility.coordinates;
    let title = facility.name.clone();
    let facility = StoredValue::new(facility);

    let is_selected = Signal::derive(move || facility.with_value(|f| ctx.browser.is_selected(f)));

    let style = move || {
        bounds
            .get()
            .map(|b| marker_position(coordinates, &b, MARKER_PADDING_PCT).style())
            .unwrap_or_default()
    };

    let marker_class = move || {
        if is_selected.get() {
            format!("{} {}", css::marker, css::markerActive)
        } else {
            css::marker.to_string()
        }
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        facility.with_value(|f| ctx.browser.select(f));
    };

    view! {
        <button
            class=marker_class
            style=style
            title=title
            aria-pressed=move || is_selected.get().to_string()
            on:click=handle_click
        >
            <Icon icon=ic::MAP_PIN />
        </button>
    }
}
