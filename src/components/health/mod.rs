//! Health impact panel.
//!
//! Static presentation: progress metrics, a community impact sentence and
//! educational resource cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{EducationalResource, HealthImpact, HealthMetric, MetricKind};
use crate::utils::format::{format_progress, format_value};

stylance::import_crate_style!(css, "src/components/health/health.module.css");

fn accent_class(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::AirQuality => css::accentGreen,
        MetricKind::Respiratory => css::accentBlue,
        MetricKind::CommunityHealth => css::accentRed,
    }
}

#[component]
pub fn HealthImpactPanel(impact: HealthImpact) -> impl IntoView {
    let HealthImpact {
        community_impact,
        metrics,
        resources,
    } = impact;

    view! {
        <section class=css::panel aria-label="Health impact">
            <div class=css::intro>
                <h2>"Health Impact"</h2>
                <p>{community_impact}</p>
            </div>

            <div class=css::metrics>
                {metrics
                    .into_iter()
                    .map(|metric| view! { <MetricCard metric=metric /> })
                    .collect::<Vec<_>>()}
            </div>

            <h3 class=css::sectionTitle>
                <Icon icon=ic::BOOK_OPEN />
                "Health Education Resources"
            </h3>
            <div class=css::resources>
                {resources
                    .into_iter()
                    .map(|resource| view! { <ResourceCard resource=resource /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn MetricCard(metric: HealthMetric) -> impl IntoView {
    let bar_style = format!("width: {:.1}%;", metric.progress_percent());
    let value_label = format_value(metric.value, &metric.unit);
    let progress_label = format_progress(metric.value, metric.target, &metric.unit);
    let accent = accent_class(metric.kind);
    let icon = ic::metric_icon(metric.kind);
    let title = metric.title;

    view! {
        <div class=css::metricCard>
            <div class=css::metricHeader>
                <span class=format!("{} {}", css::metricIcon, accent)>
                    <Icon icon=icon />
                </span>
                <span class=css::metricValue>{value_label}</span>
            </div>
            <h4 class=css::metricTitle>{title}</h4>
            <div class=css::progressLabel>
                <span>"Progress"</span>
                <span>{progress_label}</span>
            </div>
            <div class=css::progressTrack role="progressbar">
                <div class=format!("{} {}", css::progressBar, accent) style=bar_style></div>
            </div>
        </div>
    }
}

#[component]
fn ResourceCard(resource: EducationalResource) -> impl IntoView {
    let EducationalResource {
        title,
        description,
        image_url,
        link,
    } = resource;
    let alt = title.clone();

    view! {
        <a class=css::resourceCard href=link>
            <div class=css::resourceImage>
                <img src=image_url alt=alt />
            </div>
            <div class=css::resourceBody>
                <h4>{title}</h4>
                <p>{description}</p>
                <span class=css::learnMore>
                    "Learn more"
                    <Icon icon=ic::ARROW_UP_RIGHT />
                </span>
            </div>
        </a>
    }
}
