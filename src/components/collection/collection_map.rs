//! Main collection point browser component.
//!
//! ## Layout
//!
//! - Header with title, visible count and waste type filter
//! - Map (left, two thirds) and point list (right, one third)

use leptos::prelude::*;

use super::{Header, MapView, PointList};

stylance::import_crate_style!(css, "src/components/collection/collection.module.css");

/// Collection point browser.
#[component]
pub fn CollectionMap() -> impl IntoView {
    view! {
        <section class=css::browser aria-label="Collection points">
            <Header />
            <div class=css::body>
                <div class=css::mapPane>
                    <MapView />
                </div>
                <div class=css::listPane>
                    <PointList />
                </div>
            </div>
        </section>
    }
}
