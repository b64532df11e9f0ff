//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navlayout/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::registry::{NavItem, StaticRegistry};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Replaces the built-in navigation items when non-empty.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub settings_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

const APP_DIR: &str = ".navlayout";
const DEFAULT_SETTINGS_FILE: &str = "settings.json";
const DEFAULT_LOG_FILE: &str = "navlayout.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub settings_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub items: Vec<NavItem>,
}

impl ResolvedConfig {
    /// Items from config, or the built-in set when none are configured.
    pub fn registry(&self) -> StaticRegistry {
        if self.items.is_empty() {
            StaticRegistry::builtin()
        } else {
            StaticRegistry::new(self.items.clone())
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.navlayout`, or a relative `.navlayout` when there is no home directory.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}

/// Returns the path to `~/.navlayout/config.toml`.
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

/// Where the loaded config came from.
///
/// Config is read before the file logger exists, so loading reports its
/// outcome here and the caller logs it once logging is up.
#[derive(Debug)]
pub enum ConfigOrigin {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed { path: PathBuf, error: std::io::Error },
}

impl ConfigOrigin {
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => info!("Loaded config from {}", path.display()),
            ConfigOrigin::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::GenerateFailed { path, error } => {
                warn!("Failed to write default config to {}: {}", path.display(), error)
            }
        }
    }
}

/// Load config from an explicit path, or from `~/.navlayout/config.toml`.
///
/// An explicit path must exist. The default path is generated with
/// commented-out defaults if missing, and `LayoutConfig::default()` is
/// returned. A malformed file is `ConfigError::Parse` either way.
pub fn load_config(explicit: Option<&Path>) -> Result<(LayoutConfig, ConfigOrigin), ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let path = config_path();
            if !path.exists() {
                let origin = match generate_default_config(&path) {
                    Ok(()) => ConfigOrigin::Generated(path),
                    Err(error) => ConfigOrigin::GenerateFailed { path, error },
                };
                return Ok((LayoutConfig::default(), origin));
            }
            path
        }
    };

    let contents = fs::read_to_string(&path)?;
    let config: LayoutConfig = toml::from_str(&contents)?;
    Ok((config, ConfigOrigin::File(path)))
}

/// Writes a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# navlayout configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# settings_file = "~/.navlayout/settings.json"   # Or set NAVLAYOUT_SETTINGS
# log_file = "~/.navlayout/navlayout.log"
# log_level = "info"                              # Or set NAVLAYOUT_LOG_LEVEL

# Navigation items. When any are listed they replace the built-in set.
# [[items]]
# id = "calendar"
# title = "Calendar"
# icon = "Calendar"
# side = "top"                                    # "top" or "bottom"

# [[items]]
# id = "settings"
# title = "Settings"
# icon = "Settings"
# side = "bottom"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_settings` is the `--settings` flag (None = not specified).
pub fn resolve(config: &LayoutConfig, cli_settings: Option<&Path>) -> ResolvedConfig {
    // Settings file: CLI → env → config → default
    let settings_file = cli_settings
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("NAVLAYOUT_SETTINGS").ok().map(|s| expand_home(&s)))
        .or_else(|| config.general.settings_file.as_deref().map(expand_home))
        .unwrap_or_else(|| app_dir().join(DEFAULT_SETTINGS_FILE));

    // Log file: config → default
    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(|| app_dir().join(DEFAULT_LOG_FILE));

    // Log level: env → config → default
    let log_level = std::env::var("NAVLAYOUT_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .map(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        settings_file,
        log_file,
        log_level,
        items: config.items.clone(),
    }
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
