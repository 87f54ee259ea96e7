//! Site Configuration
//!
//! Read once at start-up from the inline JSON block in `index.html`:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "target": "2025-03-15T00:00:00", "utc_offset_minutes": 420 }
//! </script>
//! ```

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use serde::Deserialize;

/// DOM id of the config script element
pub const CONFIG_ELEMENT_ID: &str = "site-config";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Countdown target: RFC 3339, or a naive date-time read in `utc_offset_minutes`
    pub target: String,
    /// Offset for a naive `target`, minutes east of UTC
    pub utc_offset_minutes: i32,
    /// Anchor for every call-to-action button
    pub registration_href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            target: "2025-03-15T00:00:00".to_string(),
            utc_offset_minutes: 7 * 60,
            registration_href: "#registration".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Target instant as epoch milliseconds, `None` if `target` is unparseable
    pub fn target_ms(&self) -> Option<i64> {
        let raw = self.target.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.timestamp_millis());
        }
        let offset = FixedOffset::east_opt(self.utc_offset_minutes.checked_mul(60)?)?;
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .and_then(|naive| offset.from_local_datetime(&naive).single())
            .map(|dt| dt.timestamp_millis())
    }
}

/// One-line summary for the start-up log
fn loaded_message(config: &SiteConfig) -> String {
    format!("[CONFIG] Loaded #{}, target {}", CONFIG_ELEMENT_ID, config.target)
}

/// Text of the config element, if the page carries one
fn read_config_element() -> Result<String, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let element = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or_else(|| format!("#{} not found", CONFIG_ELEMENT_ID))?;
    Ok(element.text_content().unwrap_or_default())
}

/// Load the config from the page, falling back to defaults
pub fn load_site_config() -> SiteConfig {
    match read_config_element().and_then(|json| SiteConfig::from_json(&json)) {
        Ok(config) => {
            web_sys::console::log_1(&loaded_message(&config).into());
            config
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("[CONFIG] Using defaults: {}", e).into());
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r##"{ "registration_href": "#register" }"##).unwrap();
        assert_eq!(config.registration_href, "#register");
        assert_eq!(config.utc_offset_minutes, 420);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(SiteConfig::from_json("{ target: ").is_err());
        assert!(SiteConfig::from_json(r#"{ "utc_offset_minutes": "seven" }"#).is_err());
    }

    #[test]
    fn test_naive_target_uses_offset() {
        // 2025-03-15T00:00:00+07:00 == 2025-03-14T17:00:00Z
        let config = SiteConfig::default();
        let expected = DateTime::parse_from_rfc3339("2025-03-14T17:00:00Z").unwrap().timestamp_millis();
        assert_eq!(config.target_ms(), Some(expected));
    }

    #[test]
    fn test_rfc3339_target_ignores_offset_field() {
        let config = SiteConfig {
            target: "2025-03-15T00:00:00Z".to_string(),
            utc_offset_minutes: -300,
            ..SiteConfig::default()
        };
        assert_eq!(config.target_ms(), Some(1_741_996_800_000));
    }

    #[test]
    fn test_minute_precision_naive_target() {
        let config = SiteConfig {
            target: "1970-01-01T00:01".to_string(),
            utc_offset_minutes: 0,
            ..SiteConfig::default()
        };
        assert_eq!(config.target_ms(), Some(60_000));
    }

    #[test]
    fn test_garbage_target_is_none() {
        let config = SiteConfig { target: "next spring".to_string(), ..SiteConfig::default() };
        assert_eq!(config.target_ms(), None);
    }

    #[test]
    fn test_loaded_message_names_source_and_target_only() {
        let config = SiteConfig { registration_href: "#apply-now".to_string(), ..SiteConfig::default() };
        let message = loaded_message(&config);
        assert_eq!(message, "[CONFIG] Loaded #site-config, target 2025-03-15T00:00:00");
        assert!(!message.contains("apply-now"));
    }

    #[test]
    fn test_out_of_range_offset_is_none() {
        let config = SiteConfig { utc_offset_minutes: 24 * 60, ..SiteConfig::default() };
        assert_eq!(config.target_ms(), None);
    }
}
