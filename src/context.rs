//! Site Context
//!
//! Resolved configuration shared with every section via the Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;

/// Values every section may need, resolved once at mount
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Countdown target in epoch milliseconds (None = unparseable, shows zeros)
    pub target_ms: Option<i64>,
    registration_href: StoredValue<String>,
}

impl SiteContext {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            target_ms: config.target_ms(),
            registration_href: StoredValue::new(config.registration_href.clone()),
        }
    }

    /// Anchor for call-to-action links
    pub fn registration_href(&self) -> String {
        self.registration_href.get_value()
    }
}

/// Get the site context provided by `App`
pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
