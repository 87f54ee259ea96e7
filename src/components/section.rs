//! Shared Section Pieces
//!
//! Heading block and stat grid reused by several page sections.

use leptos::prelude::*;

use crate::models::Stat;

/// Badge + heading + lead paragraph at the top of a section
#[component]
pub fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    lead: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div class="section-badge">{badge}</div>
            <h2 class="section-title">{title}</h2>
            <p class="section-lead">{lead}</p>
        </div>
    }
}

/// Grid of headline figures
#[component]
pub fn StatGrid(stats: &'static [Stat], #[prop(default = "stat-grid")] class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            {stats.iter().map(|stat| view! {
                <div class="stat">
                    <div class="stat-value">{stat.value}</div>
                    <div class="stat-caption">{stat.caption}</div>
                </div>
            }).collect_view()}
        </div>
    }
}
