//! User settings stored as settings.json in the app data directory

use crate::constants::CJK_FONT_CANDIDATES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Font with kana/kanji coverage for the rain
    pub glyph_font_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            glyph_font_path: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::parse(&s).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to parse settings, using defaults");
                Self::default()
            }),
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let settings = serde_json::from_str(json)?;
        debug!("Settings loaded");
        Ok(settings)
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Configured glyph font if it exists, otherwise the first installed candidate.
    pub fn glyph_font_or_probe(&self) -> Option<PathBuf> {
        if let Some(configured) = self.glyph_font_path.as_deref().map(PathBuf::from) {
            if configured.is_file() {
                return Some(configured);
            }
            warn!(path = %configured.display(), "Configured glyph font not found, probing system fonts");
        }
        CJK_FONT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = Settings::parse(r#"{ "window_w": 1200.0 }"#).expect("valid json");
        assert_eq!(settings.window_w, Some(1200.0));
        assert_eq!(settings.window_h, None);
        assert_eq!(settings.glyph_font_path, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let settings = Settings::parse(r#"{ "theme": "light" }"#).expect("valid json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::parse("{ window_w").is_err());
    }

    #[test]
    fn load_from_missing_dir_gives_defaults() {
        let dir = std::env::temp_dir().join("jovanstar-portfolio-missing-settings-dir");
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_geometry() {
        let dir = std::env::temp_dir().join(format!("jovanstar-portfolio-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(1024.0),
            window_h: Some(768.0),
            glyph_font_path: Some("/fonts/cjk.ttf".into()),
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn configured_font_that_does_not_exist_is_not_returned() {
        let settings = Settings {
            glyph_font_path: Some("/definitely/not/a/font.ttf".into()),
            ..Settings::default()
        };
        assert_ne!(
            settings.glyph_font_or_probe(),
            Some(PathBuf::from("/definitely/not/a/font.ttf"))
        );
    }
}
