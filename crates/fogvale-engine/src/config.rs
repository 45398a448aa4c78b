//! Engine configuration.
//!
//! Configurable parameters for window, timing, audio, and the headless run.
//! Configuration loads from and saves to a TOML file; missing fields take
//! their defaults and a broken file falls back to defaults with a warning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "fogvale.toml";

/// Errors from configuration load/save.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serializing the config failed
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Engine configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Window Settings ===
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Target frames per second
    pub target_fps: u32,

    // === Session Settings ===
    /// RNG seed (None = random each run)
    pub seed: Option<u64>,
    /// Frames to run in headless mode (None = run until interrupted)
    pub run_frames: Option<u64>,
    /// Start the session immediately instead of waiting for the menu
    pub auto_start: bool,

    // === Audio Settings ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Debug Settings ===
    /// Log the FPS average with the periodic summary
    pub show_fps: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_width: 1920,
            window_height: 1080,
            target_fps: 60,
            seed: None,
            run_frames: Some(600),
            auto_start: true,
            master_volume: 1.0,
            show_fps: true,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Loads configuration, falling back to defaults if the file is
    /// missing or unreadable.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to load config, using defaults");
                Self::default()
            }
        }
    }
}
