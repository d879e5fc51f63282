//! Game settings and preferences
//!
//! Read from a JSON file next to the binary. Missing or broken files fall back
//! to defaults; missing fields take their default value.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_RATE_LIMIT;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Start with audio muted
    pub muted: bool,

    // === Frame pacing ===
    /// Frames (and therefore ticks) per second
    pub frame_rate_limit: u32,

    // === Determinism ===
    /// Fixed RNG seed for reproducible obstacle layouts (None = random)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            frame_rate_limit: FRAME_RATE_LIMIT,
            seed: None,
        }
    }
}

impl Settings {
    /// Default settings file name
    const FILE_NAME: &'static str = "gap_runner_settings.json";
    /// Environment variable overriding the settings path
    const PATH_ENV: &'static str = "GAP_RUNNER_SETTINGS";

    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Clamp volumes to 0..=1 and keep at least one frame per second
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.frame_rate_limit = self.frame_rate_limit.max(1);
        self
    }

    /// Where settings are read from
    pub fn default_path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::FILE_NAME))
    }

    /// Load settings from the default path
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load settings from a file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
