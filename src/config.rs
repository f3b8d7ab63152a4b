use serde::{Deserialize, Serialize};

use crate::util::clog;

pub const DEFAULT_FRAME_RATE: u32 = 10;
const MAX_FRAME_RATE: u32 = 60;

/// Runtime settings, read once from `<body data-config='{...}'>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Redraws per second.
    pub frame_rate: u32,
    pub background: String,
    pub foreground: String,
    pub font_family: String,
    /// Stroke through the three cells of a winning line.
    pub highlight_winning_line: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            background: "#4242e7".to_string(),
            foreground: "#a5a5ff".to_string(),
            font_family: "\"Press Start 2P\"".to_string(),
            highlight_winning_line: true,
        }
    }
}

impl GameConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.frame_rate = cfg.frame_rate.clamp(1, MAX_FRAME_RATE);
        Ok(cfg)
    }

    /// Interval between redraws in milliseconds.
    pub fn frame_interval_ms(&self) -> i32 {
        (1000 / self.frame_rate.clamp(1, MAX_FRAME_RATE)) as i32
    }

    pub fn font(&self, px: f64) -> String {
        format!("{}px {}", px, self.font_family)
    }

    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-config"));
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                clog(&format!("ignoring malformed data-config: {}", e));
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_look() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.frame_rate, 10);
        assert_eq!(cfg.frame_interval_ms(), 100);
        assert_eq!(cfg.font(28.0), "28px \"Press Start 2P\"");
        assert!(cfg.highlight_winning_line);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = GameConfig::from_json(r##"{"frame_rate": 25, "background": "#000"}"##).unwrap();
        assert_eq!(cfg.frame_rate, 25);
        assert_eq!(cfg.frame_interval_ms(), 40);
        assert_eq!(cfg.background, "#000");
        assert_eq!(cfg.foreground, GameConfig::default().foreground);
    }

    #[test]
    fn frame_rate_is_clamped() {
        assert_eq!(GameConfig::from_json(r#"{"frame_rate": 0}"#).unwrap().frame_rate, 1);
        assert_eq!(GameConfig::from_json(r#"{"frame_rate": 500}"#).unwrap().frame_rate, 60);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{frame_rate").is_err());
        assert!(GameConfig::from_json(r#"{"frame_rate": "fast"}"#).is_err());
    }
}
