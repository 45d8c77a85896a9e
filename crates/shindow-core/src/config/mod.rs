mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Shindow.
///
/// Loaded from `~/.config/shindow/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which processes are offered for selection.
    pub process: ProcessConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Process selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Substring matched (case-insensitively) against executable names.
    /// An empty filter lists every process.
    pub name_filter: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            name_filter: "eqgame.exe".into(),
        }
    }
}

impl Config {
    /// Normalizes values that would otherwise misbehave at runtime.
    pub fn validate(&mut self) {
        self.process.name_filter = self.process.name_filter.trim().to_string();
        self.logging.max_file_mb = self.logging.max_file_mb.min(1024);
    }
}
