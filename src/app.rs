//! Hackathon Site App
//!
//! Resolves the config and composes the page sections.

use leptos::prelude::*;

use crate::components::{About, Challenges, Descriptions, Footer, Header, Hero, Timeline};
use crate::config::load_site_config;
use crate::context::SiteContext;

#[component]
pub fn App() -> impl IntoView {
    let config = load_site_config();
    let ctx = SiteContext::new(&config);

    match ctx.target_ms {
        Some(ms) => web_sys::console::log_1(&format!("[APP] Countdown target {} ({} ms)", config.target, ms).into()),
        None => web_sys::console::warn_1(
            &format!("[APP] Unparseable countdown target {:?}, countdown stays at zero", config.target).into(),
        ),
    }

    // Provide context to all sections
    provide_context(ctx);

    view! {
        <div class="page">
            <Header />
            <main class="page-main">
                <Hero />
                <About />
                <Descriptions />
                <Challenges />
                <Timeline />
            </main>
            <Footer />
        </div>
    }
}
