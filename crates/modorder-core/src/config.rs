use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use modorder_util::errors::ModError;
use modorder_util::fs::{expand_home, find_ancestor_with, home_dir};

/// File name looked up in the working directory and its ancestors.
pub const SETTINGS_FILE_NAME: &str = "modorder.toml";

/// User settings loaded from `modorder.toml` or `~/.modorder/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Root of the game installation; the base package lives below it.
    #[serde(default, rename = "game-path")]
    pub game_path: Option<PathBuf>,

    /// Directory holding user-installed packages.
    #[serde(default, rename = "mods-path")]
    pub mods_path: Option<PathBuf>,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Package discovery settings from `[catalog]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Location of the mandatory base package, relative to the game path.
    #[serde(default = "default_base_dir", rename = "base-dir")]
    pub base_dir: String,

    #[serde(default = "default_manifest_name", rename = "manifest-name")]
    pub manifest_name: String,

    /// Abort discovery on the first malformed package manifest instead of
    /// skipping it.
    #[serde(default)]
    pub strict: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            manifest_name: default_manifest_name(),
            strict: false,
        }
    }
}

fn default_base_dir() -> String {
    "data/base".to_string()
}

fn default_manifest_name() -> String {
    "info.json".to_string()
}

impl Settings {
    /// Load settings from an explicit file.
    pub fn from_path(path: &Path) -> Result<Self, ModError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content).map_err(|e| match e {
            ModError::Config { message } => ModError::Config {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    /// Parse settings from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ModError> {
        toml::from_str(content).map_err(|e| ModError::Config {
            message: format!("Failed to parse settings: {e}"),
        })
    }

    /// Find and load settings for a run started in `cwd`.
    ///
    /// Looks for `modorder.toml` in `cwd` and its ancestors, then for the
    /// global settings file; returns defaults if neither exists.
    pub fn discover(cwd: &Path) -> Result<Self, ModError> {
        if let Some(dir) = find_ancestor_with(cwd, SETTINGS_FILE_NAME) {
            tracing::debug!("using settings from {}", dir.display());
            return Self::from_path(&dir.join(SETTINGS_FILE_NAME));
        }
        let global = Self::default_path();
        if global.is_file() {
            tracing::debug!("using global settings {}", global.display());
            Self::from_path(&global)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global settings file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// The configured game path with `~` expanded, or a `Config` error.
    pub fn require_game_path(&self) -> Result<PathBuf, ModError> {
        self.game_path
            .as_deref()
            .map(expand_home)
            .ok_or_else(|| ModError::Config {
                message: "game-path is not set".to_string(),
            })
    }

    /// The configured mods path with `~` expanded, or a `Config` error.
    pub fn require_mods_path(&self) -> Result<PathBuf, ModError> {
        self.mods_path
            .as_deref()
            .map(expand_home)
            .ok_or_else(|| ModError::Config {
                message: "mods-path is not set".to_string(),
            })
    }
}

/// Returns the path to the modorder data directory (`~/.modorder/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".modorder")
}
