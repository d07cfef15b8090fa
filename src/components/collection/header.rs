//! Browser header component.
//!
//! Title, visible point count and the waste type filter dropdown.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::visible_count;
use crate::models::{WasteFilter, WasteType, ALL_FILTER_VALUE};
use crate::utils::format::format_visible_count;

stylance::import_crate_style!(css, "src/components/collection/collection.module.css");

/// Browser header with filter.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let count_label = Memo::new(move |_| {
        let filter = ctx.browser.filter();
        ctx.facilities
            .with(|all| format_visible_count(visible_count(all, &filter), all.len()))
    });

    // A selection hidden by the filter is still reported
    let selection_label = Memo::new(move |_| {
        ctx.browser.state.with(|state| {
            ctx.facilities.with(|all| {
                let selected = state.selected_in(all)?;
                Some(if state.active_in(all).is_some() {
                    format!("Selected: {}", selected.name)
                } else {
                    format!("Selected: {} (hidden by filter)", selected.name)
                })
            })
        })
    });

    view! {
        <header class=css::header>
            <div class=css::title>
                <h2 class=css::titleLabel>"Collection Points"</h2>
                <span class=css::count>{move || count_label.get()}</span>
                {move || selection_label.get().map(|label| view! {
                    <span class=css::selectionStatus>{label}</span>
                })}
            </div>
            <div class=css::filterControls>
                <FilterSelect />
                <span class=css::filterIcon title="Filter collection points">
                    <Icon icon=ic::FILTER />
                </span>
            </div>
        </header>
    }
}

/// Waste type dropdown bound to the browser filter.
#[component]
fn FilterSelect() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        ctx.browser.set_filter(WasteFilter::from_value(&value));
    };

    view! {
        <select
            class=css::filterSelect
            aria-label="Filter by waste type"
            prop:value=move || ctx.browser.filter().as_value().to_string()
            on:change=on_change
        >
            <option value=ALL_FILTER_VALUE>"All Types"</option>
            {WasteType::ALL
                .into_iter()
                .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
