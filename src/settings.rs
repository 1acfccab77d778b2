//! Host settings and preferences
//!
//! Separate from [`crate::Tuning`]: nothing here changes gameplay, only how
//! the host paces frames, reads the keyboard and presents the game.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, require_positive};

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Frame pacing ===
    /// Sleep between frames (ms)
    pub frame_sleep_ms: u64,
    /// How long the final frame stays up after game over (ms)
    pub game_over_linger_ms: u64,
    /// Fixed step used by the headless runner (seconds)
    pub headless_dt: f32,

    // === Input ===
    /// A key counts as held while its last press/repeat is this recent (ms).
    /// Only matters on terminals that never report key releases.
    pub key_hold_window_ms: u64,

    // === HUD ===
    /// Show the status line
    pub show_hud: bool,

    // === Session ===
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_sleep_ms: 16,
            game_over_linger_ms: 1000,
            headless_dt: 1.0 / 60.0,

            key_hold_window_ms: 150,

            show_hud: true,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        require_positive("headless_dt", settings.headless_dt)?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{}; using default settings", err);
                Self::default()
            }
        }
    }

    pub fn frame_sleep(&self) -> Duration {
        Duration::from_millis(self.frame_sleep_ms)
    }

    pub fn game_over_linger(&self) -> Duration {
        Duration::from_millis(self.game_over_linger_ms)
    }

    pub fn key_hold_window(&self) -> Duration {
        Duration::from_millis(self.key_hold_window_ms)
    }
}
