//! About Section Component
//!
//! Event pitch, highlight cards and technology focus areas.

use leptos::prelude::*;

use super::icons::Icon;
use super::{SectionHeader, StatGrid};
use crate::content::{ABOUT_STATS, EVENT_NAME, FOCUS_AREAS, HIGHLIGHTS};
use crate::context::use_site_context;
use crate::models::Highlight;

#[component]
fn HighlightCard(highlight: Highlight) -> impl IntoView {
    view! {
        <div class="highlight-card">
            <div class="highlight-number">{highlight.number}</div>
            <div class="highlight-body">
                <h4 class="highlight-title">{highlight.title}</h4>
                <p class="highlight-description">{highlight.description}</p>
            </div>
            <div class="highlight-icon">
                <Icon path=highlight.icon />
            </div>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <section id="about" class="about">
            <SectionHeader
                badge="Về sự kiện"
                title=EVENT_NAME
                lead="Cuộc thi lập trình lớn nhất năm 2025 do VPBank tổ chức, tập hợp những tài năng công nghệ \
                      hàng đầu để cùng nhau xây dựng tương lai của ngành tài chính số tại Việt Nam."
            />

            <div class="about-grid">
                <div class="about-why">
                    <h3>"Tại sao tham gia VPBank Technology Hackathon?"</h3>
                    <p>
                        "VPBank Technology Hackathon 2025 là sân chơi lý tưởng cho các developer, designer, \
                        và những người đam mê công nghệ muốn thể hiện tài năng và sáng tạo trong lĩnh vực FinTech."
                    </p>
                    <p>
                        "Đây không chỉ là cuộc thi mà còn là cơ hội để bạn học hỏi, kết nối và phát triển \
                        những ý tưởng đột phá có thể thay đổi cách thức hoạt động của ngành ngân hàng số."
                    </p>
                    <StatGrid stats=ABOUT_STATS />
                </div>

                <div class="about-highlights">
                    {HIGHLIGHTS.iter().map(|h| view! { <HighlightCard highlight=*h /> }).collect_view()}
                </div>
            </div>

            <div class="focus-areas">
                <h3>"Lĩnh vực công nghệ trọng tâm"</h3>
                <p>"Khám phá và phát triển giải pháp trong các lĩnh vực công nghệ hàng đầu"</p>
                <div class="focus-grid">
                    {FOCUS_AREAS.iter().map(|area| view! {
                        <div class="focus-tile">
                            <div class="focus-emoji">{area.emoji}</div>
                            <h4>{area.title}</h4>
                            <p>{area.topics}</p>
                        </div>
                    }).collect_view()}
                </div>
                <a class="btn btn-accent" href=ctx.registration_href()>"Bắt đầu hành trình"</a>
            </div>
        </section>
    }
}
