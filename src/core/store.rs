//! # Settings Persistence
//!
//! The layout engine never touches storage itself. A host loads one snapshot
//! through a `SettingsStore`, and hands every committed snapshot back to it.
//!
//! `JsonFileStore` keeps the snapshot as a single JSON file. Writes use
//! atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::core::state::Settings;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("settings parse error: {0}")]
    Parse(serde_json::Error),
    #[error("settings serialize error: {0}")]
    Serialize(serde_json::Error),
}

/// Where settings snapshots come from and go to.
pub trait SettingsStore {
    fn load(&self) -> Result<Settings, StoreError>;
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

// ============================================================================
// JSON file
// ============================================================================

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    /// A missing file is an empty layout, not an error.
    fn load(&self) -> Result<Settings, StoreError> {
        if !self.path.exists() {
            info!("No settings at {}, starting empty", self.path.display());
            return Ok(Settings::default());
        }
        let json = fs::read_to_string(&self.path)?;
        let settings = serde_json::from_str(&json).map_err(StoreError::Parse)?;
        debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        atomic_write_json(&self.path, settings)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json(path: &Path, data: &Settings) -> Result<(), StoreError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data).map_err(StoreError::Serialize)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// In memory
// ============================================================================

/// Holds the latest snapshot in memory. Counts saves so hosts and tests can
/// tell whether anything was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Settings,
    saves: usize,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self { settings, saves: 0 }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings, StoreError> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.settings = settings.clone();
        self.saves += 1;
        Ok(())
    }
}
