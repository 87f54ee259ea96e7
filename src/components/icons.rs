//! Inline SVG Icon Component
//!
//! Path data lives in `crate::icon_paths`.

use leptos::prelude::*;

/// Render an inline SVG icon from path data.
///
/// `solid` switches from a 2px stroke outline to a filled glyph.
#[component]
pub fn Icon(
    path: &'static str,
    #[prop(optional)] solid: bool,
    #[prop(default = "icon")] class: &'static str,
) -> impl IntoView {
    let (fill, stroke) = if solid { ("currentColor", "none") } else { ("none", "currentColor") };
    view! {
        <svg
            class=class
            fill=fill
            stroke=stroke
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}
