//! This module handles the overlay's presentation settings, including
//! loading and saving them to a `toasts.toml` file.
//!
//! The library never picks a location on its own; the host application
//! decides where the file lives and passes the path in.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Anchor, Settings};
//! use std::path::PathBuf;
//!
//! let path = PathBuf::from("./toasts.toml");
//!
//! // Load existing settings, falling back to the defaults
//! let mut settings = config::load_from_path(&path).unwrap_or_default();
//!
//! // Move the toast stack to the top-right corner
//! settings.anchor = Some(Anchor::TopRight);
//!
//! // Save the modified settings
//! config::save_to_path(&settings, &path).expect("Failed to save settings");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Screen corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Presentation settings for the toast overlay.
///
/// Absent fields fall back to the design-token defaults at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub anchor: Option<Anchor>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub spacing: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            anchor: Some(Anchor::BottomRight),
            width: None,
            spacing: None,
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "invalid settings file, using defaults");
        Settings::default()
    }))
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let settings = Settings {
            anchor: Some(Anchor::TopLeft),
            width: Some(280.0),
            spacing: Some(6.0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings_path = temp_dir.path().join("nested").join("toasts.toml");

        save_to_path(&settings, &settings_path).expect("failed to save settings");
        let loaded = load_from_path(&settings_path).expect("failed to load settings");

        assert_eq!(loaded, settings);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings_path = temp_dir.path().join("toasts.toml");
        fs::write(&settings_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&settings_path).expect("load should not error");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let settings_path = nested_dir.join("toasts.toml");

        save_to_path(&Settings::default(), &settings_path).expect("save should create directories");
        assert!(settings_path.exists());
    }

    #[test]
    fn anchor_serializes_as_kebab_case() {
        let settings = Settings {
            anchor: Some(Anchor::BottomLeft),
            width: None,
            spacing: None,
        };

        let content = toml::to_string_pretty(&settings).expect("failed to serialize settings");
        assert!(content.contains("anchor = \"bottom-left\""));
    }

    #[test]
    fn default_settings_anchor_bottom_right() {
        let settings = Settings::default();
        assert_eq!(settings.anchor, Some(Anchor::BottomRight));
        assert_eq!(settings.width, None);
        assert_eq!(settings.spacing, None);
    }
}
