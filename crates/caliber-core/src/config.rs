use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::clock::{MAX_SPEED, MIN_SPEED};
use crate::error::ConfigError;
use crate::view::MAX_EXPLODE;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_true() -> bool {
    true
}
const fn default_speed() -> f32 {
    1.0
}
const fn default_resolution() -> [u32; 2] {
    [1280, 720]
}
fn default_title() -> String {
    "Caliber - Mechanical Watch Movement".into()
}

// ---------------------------------------------------------------------------
// CaliberConfig
// ---------------------------------------------------------------------------

/// Startup configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct CaliberConfig {
    /// Start with the animation running (default: true).
    #[serde(default = "default_true")]
    pub start_running: bool,

    /// Initial speed multiplier (default: 1.0).
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Initial explode factor (default: 0.0).
    #[serde(default)]
    pub explode: f32,

    /// Show part labels (default: true).
    #[serde(default = "default_true")]
    pub show_labels: bool,

    /// Window settings.
    #[serde(default)]
    pub window: WindowConfig,
}

impl Default for CaliberConfig {
    fn default() -> Self {
        Self {
            start_running: true,
            speed: default_speed(),
            explode: 0.0,
            show_labels: true,
            window: WindowConfig::default(),
        }
    }
}

impl CaliberConfig {
    /// Validate configuration. Returns Err on out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !(0.0..=MAX_EXPLODE).contains(&self.explode) {
            return Err(ConfigError::InvalidExplode(self.explode));
        }
        let [w, h] = self.window.resolution;
        if w == 0 || h == 0 {
            return Err(ConfigError::InvalidResolution(w, h));
        }
        Ok(())
    }

    /// Load from a TOML file and validate.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// WindowConfig
// ---------------------------------------------------------------------------

/// Window title and size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// [width, height] in logical pixels.
    #[serde(default = "default_resolution")]
    pub resolution: [u32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            resolution: default_resolution(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- defaults ----

    #[test]
    fn config_default_values() {
        let cfg = CaliberConfig::default();
        assert!(cfg.start_running);
        assert!((cfg.speed - 1.0).abs() < f32::EPSILON);
        assert!((cfg.explode - 0.0).abs() < f32::EPSILON);
        assert!(cfg.show_labels);
        assert_eq!(cfg.window.resolution, [1280, 720]);
    }

    // ---- validate ----

    #[test]
    fn config_validate_ok() {
        assert!(CaliberConfig::default().validate().is_ok());
    }

    #[test]
    fn config_validate_speed_out_of_range() {
        let cfg = CaliberConfig {
            speed: 8.0,
            ..CaliberConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::InvalidSpeed(_)
        ));
    }

    #[test]
    fn config_validate_explode_out_of_range() {
        let cfg = CaliberConfig {
            explode: -0.1,
            ..CaliberConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::InvalidExplode(_)
        ));
    }

    #[test]
    fn config_validate_resolution() {
        let cfg = CaliberConfig {
            window: WindowConfig {
                resolution: [0, 720],
                ..WindowConfig::default()
            },
            ..CaliberConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::InvalidResolution(0, 720)
        ));
    }

    // ---- TOML ----

    #[test]
    fn config_toml_deserialization() {
        let toml_str = r#"
            start_running = false
            speed = 2.5
            explode = 1.0
            show_labels = false

            [window]
            title = "Bench Test"
            resolution = [800, 600]
        "#;
        let cfg: CaliberConfig = toml::from_str(toml_str).unwrap();
        assert!(!cfg.start_running);
        assert!((cfg.speed - 2.5).abs() < f32::EPSILON);
        assert!((cfg.explode - 1.0).abs() < f32::EPSILON);
        assert!(!cfg.show_labels);
        assert_eq!(cfg.window.title, "Bench Test");
        assert_eq!(cfg.window.resolution, [800, 600]);
    }

    #[test]
    fn config_toml_defaults() {
        let cfg: CaliberConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, CaliberConfig::default());
    }

    // ---- from_file ----

    #[test]
    fn config_from_file() {
        let dir = std::env::temp_dir().join("caliber_test_config");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.toml");
        std::fs::write(&path, "speed = 0.5\nexplode = 2.0\n").unwrap();

        let cfg = CaliberConfig::from_file(&path).unwrap();
        assert!((cfg.speed - 0.5).abs() < f32::EPSILON);
        assert!((cfg.explode - 2.0).abs() < f32::EPSILON);

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn config_from_file_invalid() {
        let dir = std::env::temp_dir().join("caliber_test_config_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "speed = 50.0\n").unwrap();

        assert!(CaliberConfig::from_file(&path).is_err());

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn config_from_file_not_found() {
        assert!(CaliberConfig::from_file("/nonexistent/caliber.toml").is_err());
    }
}
