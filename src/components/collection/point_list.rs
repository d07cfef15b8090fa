//! Collection point list component.
//!
//! One card per visible point. When the filter hides everything, an empty
//! state offers a single action back to the unfiltered list.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Facility, FacilityId};

stylance::import_crate_style!(css, "src/components/collection/collection.module.css");

/// DOM id of the list card for a collection point.
pub fn card_dom_id(id: &FacilityId) -> String {
    format!("collection-point-{}", id.as_str())
}

#[component]
pub fn PointList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entries = Memo::new(move |_| ctx.visible_facilities());
    let is_empty = Memo::new(move |_| {
        ctx.browser
            .state
            .with(|state| ctx.facilities.with(|all| state.is_empty_result(all)))
    });

    view! {
        <div class=css::list role="list" aria-label="Collection point list">
            <Show
                when=move || !is_empty.get()
                fallback=|| view! { <EmptyState /> }
            >
                <For
                    each=move || entries.get()
                    key=|facility| facility.id.clone()
                    children=move |facility| {
                        view! { <PointCard facility=facility /> }
                    }
                />
            </Show>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::empty>
            <span class=css::emptyIcon><Icon icon=ic::INFO /></span>
            <p>"No collection points match your filter criteria."</p>
            <button class=css::linkButton on:click=move |_| ctx.browser.clear_filter()>
                "Show all points"
            </button>
        </div>
    }
}

#[component]
fn PointCard(facility: Facility) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let dom_id = card_dom_id(&facility.id);
    let name = facility.name.clone();
    let address = facility.address.clone();
    let hours = facility.operating_hours.clone();
    let directions_label = format!("Directions ({})", facility.distance);
    let badges = facility
        .waste_types
        .iter()
        .map(|t| view! { <span class=css::badge>{t.as_str()}</span> })
        .collect::<Vec<_>>();

    let facility = StoredValue::new(facility);
    let is_selected = Signal::derive(move || facility.with_value(|f| ctx.browser.is_selected(f)));

    let card_class = move || {
        if is_selected.get() {
            format!("{} {}", css::card, css::cardActive)
        } else {
            css::card.to_string()
        }
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        facility.with_value(|f| ctx.browser.select(f));
    };

    // Directions must not bubble up to the card's select handler
    let handle_directions = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        facility.with_value(|f| ctx.browser.request_directions(f));
    };

    view! {
        <article
            id=dom_id
            class=card_class
            role="listitem"
            tabindex="0"
            aria-selected=move || is_selected.get().to_string()
            on:click=handle_click
        >
            <h3 class=css::cardTitle>{name}</h3>
            <div class=css::cardRow>
                <span class=css::rowIcon><Icon icon=ic::MAP_PIN /></span>
                <p>{address}</p>
            </div>
            <div class=css::cardRow>
                <span class=css::rowIcon><Icon icon=ic::CLOCK /></span>
                <p>{hours}</p>
            </div>
            <div class=css::badges>{badges}</div>
            <button class=css::directionsButton on:click=handle_directions>
                <Icon icon=ic::NAVIGATION />
                {directions_label}
            </button>
        </article>
    }
}
