//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`PARROT_API_KEY`, legacy `GEMINI_API_KEY`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./parrot.toml in the current directory
//! 4. $XDG_CONFIG_HOME/parrot/parrot.toml (or ~/.config/parrot/parrot.toml)
//! 5. Built-in defaults
//!
//! The credential is resolved here, once, at startup; request logic receives
//! it as an explicit parameter instead of reading ambient environment state.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TMUX_WINDOW: &str = "parrot";
const DEFAULT_VIEWER: &str = "less";

// ---------------------------------------------------------------------------
// Resolved config
// ---------------------------------------------------------------------------

/// Top-level runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the structured endpoint, if any source provided one.
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    pub display: DisplayConfig,
}

/// How responses are shown to the user.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Open responses in a new tmux window instead of writing to stdout.
    pub tmux: bool,
    /// Window name used for tmux display.
    pub window_name: String,
    /// Pager launched inside the tmux window.
    pub viewer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            display: DisplayConfig {
                tmux: false,
                window_name: DEFAULT_TMUX_WINDOW.to_string(),
                viewer: DEFAULT_VIEWER.to_string(),
            },
        }
    }
}

impl Config {
    /// The credential, or the fatal precondition error when absent.
    ///
    /// Callers check this before constructing any request so a missing key
    /// never reaches the network layer.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}

// ---------------------------------------------------------------------------
// File shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_key: Option<String>,
    timeout_secs: Option<u64>,
    #[serde(default)]
    display: DisplayFile,
}

#[derive(Debug, Default, Deserialize)]
struct DisplayFile {
    tmux: Option<bool>,
    window_name: Option<String>,
    viewer: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration using the documented precedence order.
pub fn load_config(explicit_path: Option<&str>) -> Result<Config, ConfigError> {
    let file = read_config_file(explicit_path)?;
    Ok(merge(file, env_api_key()))
}

fn read_config_file(explicit: Option<&str>) -> Result<ConfigFile, ConfigError> {
    // An explicitly requested file must exist; default candidates may not.
    if let Some(path) = explicit {
        let raw = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&raw)?);
    }
    for candidate in default_config_paths() {
        if candidate.exists() {
            let raw = std::fs::read_to_string(&candidate)?;
            return Ok(toml::from_str(&raw)?);
        }
    }
    Ok(ConfigFile::default())
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("parrot.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parrot").join("parrot.toml"));
    }
    paths
}

fn env_api_key() -> Option<String> {
    ["PARROT_API_KEY", "GEMINI_API_KEY"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
}

/// Merge file values and the environment credential over built-in defaults.
fn merge(file: ConfigFile, env_key: Option<String>) -> Config {
    Config {
        api_key: resolve_api_key(env_key, file.api_key),
        timeout_secs: file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        display: DisplayConfig {
            tmux: file.display.tmux.unwrap_or(false),
            window_name: file
                .display
                .window_name
                .unwrap_or_else(|| DEFAULT_TMUX_WINDOW.to_string()),
            viewer: file.display.viewer.unwrap_or_else(|| DEFAULT_VIEWER.to_string()),
        },
    }
}

/// The environment wins over the file; empty values count as unset.
fn resolve_api_key(env_key: Option<String>, file_key: Option<String>) -> Option<String> {
    env_key
        .filter(|key| !key.trim().is_empty())
        .or_else(|| file_key.filter(|key| !key.trim().is_empty()))
}
