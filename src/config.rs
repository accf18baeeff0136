//! Session options
//!
//! Small data-driven knobs for the two page variants this game ships in:
//! with or without a start screen, with or without the HUD hint line. On the
//! web the page opts in through a `data-config` JSON attribute on the canvas
//! element; anything missing or malformed falls back to defaults.

use serde::{Deserialize, Serialize};

/// Game session options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Begin on a title overlay and wait for Enter instead of dropping
    /// straight into play
    pub start_screen: bool,
    /// Show the control hint line under the score
    pub show_hint: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_screen: false,
            show_hint: true,
        }
    }
}

impl GameConfig {
    /// Parse config JSON, falling back to defaults on any error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed data-config: {err}");
                Self::default()
            }
        }
    }

    /// Read config from the canvas element's `data-config` attribute
    #[cfg(target_arch = "wasm32")]
    pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Self {
        match canvas.get_attribute("data-config") {
            Some(json) => Self::from_json(&json),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert!(!config.start_screen);
        assert!(config.show_hint);
    }

    #[test]
    fn test_from_json_full() {
        let config = GameConfig::from_json(r#"{"start_screen": true, "show_hint": false}"#);
        assert!(config.start_screen);
        assert!(!config.show_hint);
    }

    #[test]
    fn test_from_json_partial_fills_defaults() {
        let config = GameConfig::from_json(r#"{"start_screen": true}"#);
        assert!(config.start_screen);
        assert!(config.show_hint);
    }

    #[test]
    fn test_from_json_malformed_falls_back() {
        let config = GameConfig::from_json("{not json");
        assert!(!config.start_screen);
        assert!(config.show_hint);
    }

    #[test]
    fn test_roundtrip() {
        let config = GameConfig {
            start_screen: true,
            show_hint: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back = GameConfig::from_json(&json);
        assert!(back.start_screen);
        assert!(!back.show_hint);
    }
}
