//! Challenges Section Component
//!
//! Challenge cards with difficulty, suggested technologies and prize.

use leptos::prelude::*;

use super::icons::Icon;
use super::SectionHeader;
use crate::content::{CHALLENGES, CHALLENGE_RULES, TOTAL_PRIZE};
use crate::context::use_site_context;
use crate::models::Challenge;

#[component]
fn ChallengeCard(challenge: Challenge) -> impl IntoView {
    view! {
        <div class="challenge-card">
            <div class="challenge-header">
                <div class="challenge-heading">
                    <div class="challenge-icon">
                        <Icon path=challenge.icon />
                    </div>
                    <div>
                        <h3 class="challenge-title">{challenge.title}</h3>
                        <div class="challenge-category">{challenge.category}</div>
                    </div>
                </div>
                <div class=challenge.difficulty.badge_class()>{challenge.difficulty.label()}</div>
            </div>

            <p class="challenge-description">{challenge.description}</p>

            <div class="challenge-tech">
                <h4>"Công nghệ gợi ý:"</h4>
                <div class="tag-list">
                    {challenge.technologies.iter().map(|tech| view! {
                        <span class="tag">{*tech}</span>
                    }).collect_view()}
                </div>
            </div>

            <div class="challenge-footer">
                <div>
                    <div class="prize-caption">"Giải thưởng"</div>
                    <div class="prize-amount">{challenge.prize}</div>
                </div>
                <button class="btn btn-primary">"Chọn thử thách"</button>
            </div>
        </div>
    }
}

#[component]
pub fn Challenges() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <section id="challenges" class="challenges">
            <SectionHeader
                badge="Thử thách"
                title="Các thử thách Hackathon"
                lead="Chọn thử thách phù hợp với kỹ năng và đam mê của bạn. Mỗi thử thách đều có giải thưởng hấp dẫn \
                      và cơ hội hợp tác với VPBank."
            />

            <div class="challenge-grid">
                <For
                    each=|| CHALLENGES.iter().copied()
                    key=|challenge| challenge.id
                    children=|challenge| view! { <ChallengeCard challenge=challenge /> }
                />
            </div>

            <div class="challenge-rules">
                <div>
                    <h3>"Quy tắc và hướng dẫn"</h3>
                    <ul>
                        {CHALLENGE_RULES.iter().map(|rule| view! { <li>{*rule}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="challenge-total">
                    <div class="prize-total">{TOTAL_PRIZE}</div>
                    <div class="prize-caption">"Tổng giải thưởng"</div>
                    <a class="btn btn-primary" href=ctx.registration_href()>"Đăng ký ngay"</a>
                </div>
            </div>
        </section>
    }
}
