//! Site Footer Component

use leptos::prelude::*;

use super::icons::Icon;
use crate::content::SOCIAL_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <h2 class="footer-title">"VPBANK TECHNOLOGY HACKATHON 2025"</h2>
            <div class="footer-contact">
                <h3 class="contact-title">"Contact"</h3>
                <div class="social-links">
                    <For
                        each=|| SOCIAL_LINKS.iter().copied()
                        key=|link| link.url
                        children=|link| {
                            let target = link.opens_new_tab().then_some("_blank");
                            let rel = link.opens_new_tab().then_some("noopener noreferrer");
                            view! {
                                <a class="social-link" href=link.url target=target rel=rel>
                                    <Icon path=link.icon.icon() solid=true class="icon social-icon" />
                                    <span class="social-label">{link.label}</span>
                                </a>
                            }
                        }
                    />
                </div>
            </div>
        </footer>
    }
}
