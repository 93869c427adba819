//! Configuration primitives for FaqDesk.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/FaqDesk/config/config.toml on Windows
//!   $XDG_DATA_HOME/FaqDesk/config/config.toml on Linux
//!   ~/Library/Application Support/FaqDesk/config/config.toml on macOS
//!
//! The config records which business profile the assistant answers from and
//! how the terminal chat presents itself.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Where the business profile lives.
    #[serde(default)]
    pub profile: ProfileSettings,
    /// Terminal chat presentation.
    #[serde(default)]
    pub chat: ChatSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileSettings {
    /// Path to a `.json`, `.yaml` or `.yml` business profile.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Print the about/contact/pricing panels before the conversation starts.
    #[serde(default = "default_show_overview")]
    pub show_overview: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            show_overview: default_show_overview(),
        }
    }
}

const fn default_show_overview() -> bool {
    true
}

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Profile picked up from the workspace root when nothing else is configured.
pub const DEFAULT_PROFILE_FILE_NAME: &str = "business_data.json";

/// Returns the root directory where FaqDesk stores data.
///
/// Order of precedence:
/// 1. `FAQDESK_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("FAQDESK_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("FaqDesk"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    load_from(config_file_path()?)
}

/// Loads the configuration at `path`, returning defaults when it does not exist.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Persists the configuration to the default location.
pub fn save(config: &AppConfig) -> Result<PathBuf> {
    let path = config_file_path()?;
    save_to(&path, config)?;
    Ok(path)
}

pub fn save_to<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating config directory {:?}", parent))?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed writing config file {:?}", path))?;
    Ok(())
}

/// Chooses the profile to load.
///
/// An explicit override wins, then the configured path, then
/// `business_data.json` under `workspace`, if present.
pub fn resolve_profile_path(
    config: &AppConfig,
    override_path: Option<&Path>,
    workspace: &Path,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }
    if let Some(path) = &config.profile.path {
        return Some(path.clone());
    }
    let candidate = workspace.join(DEFAULT_PROFILE_FILE_NAME);
    candidate.exists().then_some(candidate)
}
