//! Countdown Panel Component
//!
//! Four zero-padded cells ticking down to the configured target.

use leptos::prelude::*;
use leptos_countdown::{pad2, use_countdown, BrowserClock, Unit};

fn unit_caption(unit: Unit) -> &'static str {
    match unit {
        Unit::Days => "Ngày",
        Unit::Hours => "Giờ",
        Unit::Minutes => "Phút",
        Unit::Seconds => "Giây",
    }
}

/// Live countdown; the ticker stops when this component unmounts
#[component]
pub fn CountdownPanel(target_ms: Option<i64>) -> impl IntoView {
    let time_left = use_countdown(target_ms, BrowserClock);

    view! {
        <div class="countdown">
            <h2 class="countdown-title">"Thời gian đếm ngược"</h2>
            <div class="countdown-grid">
                {Unit::ALL.into_iter().map(move |unit| view! {
                    <div class="countdown-cell">
                        <div class="countdown-value">{move || pad2(time_left.get().value(unit))}</div>
                        <div class="countdown-unit">{unit_caption(unit)}</div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captions_follow_unit_order() {
        let captions: Vec<_> = Unit::ALL.into_iter().map(unit_caption).collect();
        assert_eq!(captions, vec!["Ngày", "Giờ", "Phút", "Giây"]);
    }
}
