//! Clock configuration
//!
//! Read once at startup: in the browser from the `data-clock-config` attribute
//! of whichever element carries it, natively from the JSON file named by
//! `CLOCK_CONFIG`. The browser lookup is by attribute rather than by id, so a
//! config can move the clock to any `container_id`. Missing fields take their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;
use crate::error::{ClockError, ClockResult};
use crate::layout::ViewportSize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Timer cadence
    pub tick_interval_ms: u32,
    /// Id of the element the clock renders into (web)
    pub container_id: String,
    /// Maker's name printed on the dial
    pub brand: String,
    /// Viewport assumed by the headless host
    pub native_viewport: ViewportSize,
    /// Ticks the native binary runs before exiting
    pub native_ticks: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            container_id: "clock".to_string(),
            brand: "OREVA".to_string(),
            native_viewport: ViewportSize::new(1000.0, 800.0),
            native_ticks: 5,
        }
    }
}

impl ClockConfig {
    /// Environment variable naming the native config file
    pub const ENV_VAR: &'static str = "CLOCK_CONFIG";

    /// Parse a JSON config
    pub fn from_json(json: &str) -> ClockResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ClockError::Config(e.to_string()))?;
        if config.tick_interval_ms == 0 {
            return Err(ClockError::Config("tick_interval_ms must be positive".into()));
        }
        Ok(config)
    }

    /// Page attribute holding the browser config
    pub const ATTRIBUTE: &'static str = "data-clock-config";

    /// Parse `json` if present, falling back to defaults when it is absent or invalid
    pub fn from_attribute(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded clock config from {}", Self::ATTRIBUTE);
                config
            }
            Some(Err(e)) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
            None => {
                log::info!("Using default clock config");
                Self::default()
            }
        }
    }

    /// Load config from the first element carrying `data-clock-config` (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let selector = format!("[{}]", Self::ATTRIBUTE);
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute(Self::ATTRIBUTE));
        Self::from_attribute(json.as_deref())
    }

    /// Load config from the file named by `CLOCK_CONFIG` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default clock config");
            return Self::default();
        };

        match std::fs::read_to_string(&path)
            .map_err(|e| ClockError::Config(format!("{path}: {e}")))
            .and_then(|json| Self::from_json(&json))
        {
            Ok(config) => {
                log::info!("Loaded clock config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClockConfig::from_json(r#"{ "brand": "ACME" }"#).unwrap();
        assert_eq!(config.brand, "ACME");
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.container_id, "clock");
    }

    #[test]
    fn test_full_json() {
        let config = ClockConfig::from_json(
            r#"{
                "tick_interval_ms": 500,
                "container_id": "wall",
                "brand": "",
                "native_viewport": { "width": 640.0, "height": 480.0 },
                "native_ticks": 2
            }"#,
        )
        .unwrap();
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.native_viewport, ViewportSize::new(640.0, 480.0));
        assert_eq!(config.native_ticks, 2);
    }

    #[test]
    fn test_attribute_can_move_container() {
        let config = ClockConfig::from_attribute(Some(r#"{ "container_id": "lobby-clock" }"#));
        assert_eq!(config.container_id, "lobby-clock");
        assert_eq!(config.brand, "OREVA");
    }

    #[test]
    fn test_attribute_falls_back_to_defaults() {
        assert_eq!(ClockConfig::from_attribute(None), ClockConfig::default());
        assert_eq!(
            ClockConfig::from_attribute(Some(r#"{ "tick_interval_ms": 0 }"#)),
            ClockConfig::default()
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = ClockConfig::from_json("{ brand: ").unwrap_err();
        assert!(matches!(err, ClockError::Config(_)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = ClockConfig::from_json(r#"{ "tick_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ClockError::Config(_)));
    }
}
