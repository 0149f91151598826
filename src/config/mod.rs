//! Tunable constants for the site components.
//!
//! Every value has a default matching the shipped page, so an empty JSON
//! object is a complete configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod error;

pub use error::ConfigError;

/// Form timers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Delay before a shown outcome resets itself.
    pub reset_delay_ms: u64,

    /// Cancel a pending reset when a new submission starts.
    pub cancel_stale_timers: bool,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 5000,
            cancel_stale_timers: true,
        }
    }
}

impl FormsConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

/// Navigation bar behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Viewport widths above this close the mobile menu.
    pub desktop_breakpoint_px: f64,

    /// Extra lead applied when deciding which section is active.
    pub highlight_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint_px: 968.0,
            highlight_offset_px: 100.0,
        }
    }
}

/// Visibility observer registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub fade_threshold: f64,
    pub fade_bottom_margin_px: f64,
    pub counter_threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            fade_threshold: 0.1,
            fade_bottom_margin_px: -50.0,
            counter_threshold: 0.5,
        }
    }
}

/// Statistics counter animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u64,
    pub frame_ms: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            frame_ms: 16,
        }
    }
}

impl CounterConfig {
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Scroll-to-top button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTopConfig {
    /// Page offset beyond which the button shows.
    pub threshold_px: f64,
}

impl Default for ScrollTopConfig {
    fn default() -> Self {
        Self { threshold_px: 300.0 }
    }
}

/// All component settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub forms: FormsConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub scroll_top: ScrollTopConfig,
}

impl SiteConfig {
    /// Parse and check a JSON configuration. Missing keys take defaults.
    ///
    /// ```rust
    /// use tablefront::config::SiteConfig;
    ///
    /// let config = SiteConfig::from_json(r#"{ "forms": { "cancel_stale_timers": false } }"#).unwrap();
    /// assert!(!config.forms.cancel_stale_timers);
    /// assert_eq!(config.forms.reset_delay_ms, 5000);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter.frame_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "counter.frame_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.counter.duration_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "counter.duration_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        for (field, value) in [
            ("reveal.fade_threshold", self.reveal.fade_threshold),
            ("reveal.counter_threshold", self.reveal.counter_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} is outside 0.0..=1.0"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.forms.reset_delay(), Duration::from_millis(5000));
        assert_eq!(config.nav.desktop_breakpoint_px, 968.0);
        assert_eq!(config.counter.frame(), Duration::from_millis(16));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = SiteConfig::from_json("{ forms: ");
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn zero_frame_is_rejected() {
        let result = SiteConfig::from_json(r#"{ "counter": { "frame_ms": 0 } }"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "counter.frame_ms",
                ..
            })
        ));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let result = SiteConfig::from_json(r#"{ "reveal": { "counter_threshold": 1.5 } }"#);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn config_serializes_back() {
        let config = SiteConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }
}
