//! Hero Section Component

use leptos::prelude::*;

use super::{CountdownPanel, StatGrid};
use crate::content::HERO_STATS;
use crate::context::use_site_context;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <section id="overview" class="hero">
            <div class="hero-content">
                <div class="hero-badge">
                    <span class="pulse-dot"></span>
                    "Sự kiện công nghệ lớn nhất năm 2025"
                </div>

                <div class="hero-heading">
                    <h1 class="hero-title">
                        <span class="hero-title-main">"VPBank Technology"</span>
                        <span class="hero-title-accent">"Hackathon 2025"</span>
                    </h1>
                    <p class="hero-tagline">"Khám phá tương lai công nghệ tài chính cùng VPBank"</p>
                    <p class="hero-lead">
                        "Tham gia cuộc thi lập trình lớn nhất năm 2025. Sáng tạo, đổi mới và chinh phục \
                        những thử thách công nghệ hàng đầu trong lĩnh vực FinTech."
                    </p>
                </div>

                <CountdownPanel target_ms=ctx.target_ms />

                <div class="hero-actions">
                    <a class="btn btn-primary" href=ctx.registration_href()>"Đăng ký tham gia"</a>
                    <a class="btn btn-outline" href="#about">"Tìm hiểu thêm"</a>
                </div>

                <StatGrid stats=HERO_STATS class="hero-stats" />
            </div>
        </section>
    }
}
