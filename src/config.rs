//! Engine configuration and its persistence
//!
//! [`EngineConfig`] selects the castling rule variant and which automatic draw
//! rules end the game. It is stored as JSON.
//!
//! # File Location
//!
//! [`EngineConfig::default_path`] resolves `engine.json` inside the user's
//! configuration directory, falling back to the working directory when no
//! such directory exists.
//!
//! # Error Handling
//!
//! [`EngineConfig::load`] and [`EngineConfig::save`] return [`ConfigResult`].
//! [`EngineConfig::load_or_default`] never fails: a missing or malformed file
//! is logged and replaced by the defaults.

use crate::error::ConfigResult;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config filename
const CONFIG_FILENAME: &str = "engine.json";

/// How strictly castling checks attacked squares
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastlingRule {
    /// The king may not castle out of, through, or into check
    #[default]
    Standard,
    /// Only the king's current square is checked; the square it passes over
    /// is not. Landing in check is still refused by the post-move safety test.
    Lenient,
}

/// Automatic draw rules consulted by `BoardEngine::outcome`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawRules {
    pub insufficient_material: bool,
    pub seventy_five_move: bool,
    pub fivefold_repetition: bool,
}

impl Default for DrawRules {
    fn default() -> Self {
        DrawRules {
            insufficient_material: true,
            seventy_five_move: true,
            fivefold_repetition: true,
        }
    }
}

impl DrawRules {
    /// Only checkmate and stalemate end the game
    pub fn disabled() -> Self {
        DrawRules {
            insufficient_material: false,
            seventy_five_move: false,
            fivefold_repetition: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub castling: CastlingRule,
    pub draw_rules: DrawRules,
}

impl EngineConfig {
    /// Path to `engine.json` in the user's configuration directory
    ///
    /// Falls back to a local `engine.json` if the system config dir cannot be
    /// found.
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("com", "chess-rules", "BoardEngine") {
            Some(dirs) => dirs.config_dir().join(CONFIG_FILENAME),
            None => PathBuf::from(CONFIG_FILENAME),
        }
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("[CONFIG] Loaded engine config from {:?}", path);
        Ok(config)
    }

    /// Load from `path`, using defaults when the file is absent or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[CONFIG] No config file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load config file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write as pretty JSON, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json_string()?)?;
        info!("[CONFIG] Saved engine config to {:?}", path);
        Ok(())
    }
}
