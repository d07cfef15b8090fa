//! Dashboard page.
//!
//! Stacks the collection point browser above the health impact panel.

use leptos::prelude::*;

use super::collection::CollectionMap;
use super::health::HealthImpactPanel;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::HealthImpact;

stylance::import_crate_style!(css, "src/components/dashboard.module.css");

#[component]
pub fn Dashboard(health: HealthImpact) -> impl IntoView {
    view! {
        <main class=css::dashboard>
            <h1 class=css::appTitle>{APP_NAME}</h1>
            <div class=css::browserSlot>
                <CollectionMap />
            </div>
            <HealthImpactPanel impact=health />
            <footer class=css::footer>{format!("{} v{}", APP_NAME, APP_VERSION)}</footer>
        </main>
    }
}
