use serde::Deserialize;
use std::time::Duration;

use crate::page::Page;

/// Attribute on `<body>` that may carry a JSON object overriding defaults.
pub const CONFIG_ATTRIBUTE: &str = "data-fx-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub header_offset: f64,
    pub scrolled_threshold: f64,
    pub section_lookahead: f64,
    pub back_to_top_threshold: f64,
    pub parallax_base: f64,
    pub parallax_step: f64,
    pub counter_steps: u32,
    pub counter_interval_ms: u64,
    pub typing_delay_ms: u64,
    pub typing_interval_ms: u64,
    pub easter_egg_duration_ms: u64,
    pub cursor_trail: bool,
    pub cursor_easing: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            scrolled_threshold: 100.0,
            section_lookahead: 150.0,
            back_to_top_threshold: 500.0,
            parallax_base: 0.5,
            parallax_step: 0.2,
            counter_steps: 50,
            counter_interval_ms: 30,
            typing_delay_ms: 1500,
            typing_interval_ms: 100,
            easter_egg_duration_ms: 5000,
            cursor_trail: false,
            cursor_easing: 0.1,
        }
    }
}

impl FxConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the body attribute. Missing or malformed input
    /// falls back to the defaults.
    pub fn from_page<P: Page>(page: &P) -> Self {
        let raw = page
            .body()
            .and_then(|body| page.attribute(&body, CONFIG_ATTRIBUTE));
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("fx: ignoring {CONFIG_ATTRIBUTE}: {err}");
                Self::default()
            }
        }
    }

    pub fn counter_interval(&self) -> Duration {
        Duration::from_millis(self.counter_interval_ms)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn easter_egg_duration(&self) -> Duration {
        Duration::from_millis(self.easter_egg_duration_ms)
    }
}
