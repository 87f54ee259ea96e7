//! Timeline Section Component

use leptos::prelude::*;

use super::icons::Icon;
use super::SectionHeader;
use crate::content::TIMELINE_EVENTS;
use crate::context::use_site_context;
use crate::models::TimelineEvent;

#[component]
fn TimelineItem(event: TimelineEvent) -> impl IntoView {
    let category = event.category;
    view! {
        <div class="timeline-item">
            <div class="timeline-dot">
                <div class=category.badge_class()>
                    <Icon path=category.icon() class="icon icon-small" />
                </div>
            </div>
            <div class="timeline-card">
                <div class="timeline-meta">
                    <div class="timeline-when">
                        <span class="timeline-date">{event.date}</span>
                        <span class="timeline-time">{event.time}</span>
                    </div>
                    <div class=category.badge_class()>{category.label()}</div>
                </div>
                <h3 class="timeline-title">{event.title}</h3>
                <p class="timeline-description">{event.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Timeline() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <section id="timeline" class="timeline">
            <SectionHeader
                badge="Lịch trình sự kiện"
                title="Lịch trình Hackathon 2025"
                lead="Theo dõi các mốc thời gian quan trọng của VPBank Technology Hackathon 2025"
            />

            <div class="timeline-track">
                // Several milestones share a date, so position is the key
                <For
                    each=|| TIMELINE_EVENTS.iter().copied().enumerate()
                    key=|(index, _)| *index
                    children=|(_, event)| view! { <TimelineItem event=event /> }
                />
            </div>

            <div class="timeline-cta">
                <h3>"Đừng bỏ lỡ cơ hội tham gia!"</h3>
                <p>"Đăng ký ngay để nhận thông báo về các cập nhật mới nhất"</p>
                <a class="btn btn-accent" href=ctx.registration_href()>"Đăng ký tham gia"</a>
            </div>
        </section>
    }
}
