//! Descriptions Section Component
//!
//! "Season 2" pitch: competition tracks and what participants get out of it.

use leptos::prelude::*;

use crate::content::{DESCRIPTIONS_IMAGE, EVENT_NAME, EXPERIENCE_POINTS, TRACKS};
use crate::models::DescriptionPoint;

/// Icon rows for a list of description points.
///
/// `inline_title` renders "title - description" in one sentence (tracks);
/// otherwise title and description are separate spans (experience points).
#[component]
fn PointList(points: &'static [DescriptionPoint], #[prop(optional)] inline_title: bool) -> impl IntoView {
    view! {
        <div class="point-list">
            {points.iter().map(|point| view! {
                <div class="point">
                    <img class="point-icon" src=point.icon alt="" width="24" height="24" />
                    {if inline_title {
                        view! {
                            <p class="point-text">
                                <strong>{point.title}" "</strong>
                                "- "{point.description}
                            </p>
                        }.into_any()
                    } else {
                        view! {
                            <div class="point-text">
                                <span class="point-title">{point.title}</span>
                                " "
                                <span class="point-description">{point.description}</span>
                            </div>
                        }.into_any()
                    }}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Descriptions() -> impl IntoView {
    view! {
        <section id="mentors" class="descriptions">
            <div class="descriptions-grid">
                <div class="descriptions-copy">
                    <h1 class="descriptions-title">"Season 2 Comes Back"</h1>
                    <p class="descriptions-subtitle">
                        <span class="emphasis">{EVENT_NAME}</span>
                        " – An arena for passionate technology talents with breakthrough thinking and a desire \
                        to solve complex problems in the financial and banking industry"
                    </p>

                    <PointList points=TRACKS inline_title=true />

                    <div class="descriptions-experience">
                        <p class="descriptions-experience-title">{EVENT_NAME}" offers you an invaluable experience:"</p>
                        <PointList points=EXPERIENCE_POINTS />
                    </div>
                </div>

                <div class="descriptions-image">
                    <img
                        src=DESCRIPTIONS_IMAGE
                        alt="VPBank Technology Hackathon 2025 - Technology professionals working together"
                        width="850"
                        height="850"
                    />
                </div>
            </div>
        </section>
    }
}
