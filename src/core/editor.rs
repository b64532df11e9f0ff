//! # Layout Editor
//!
//! Threads the current snapshot through `update()` and persists each change.
//!
//! ```text
//! store.load() → normalize → reconcile → [ apply(action) → update() → store.save() ]*
//! ```
//!
//! Persistence is fire-and-forget from the engine's point of view: a failed
//! save is logged and reported as an `Effect`, but the in-memory snapshot
//! still advances.

use log::{info, warn};

use crate::core::action::{Action, Rejection, update};
use crate::core::registry::NavRegistry;
use crate::core::state::Settings;
use crate::core::store::{SettingsStore, StoreError};

/// What happened after an accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The action resolved to a no-op; nothing was saved.
    Unchanged,
    Saved,
    SaveFailed(String),
}

pub struct Editor<S: SettingsStore> {
    store: S,
    settings: Settings,
}

impl<S: SettingsStore> Editor<S> {
    /// Loads the stored snapshot, repairs broken invariants and places any
    /// registered items the layout doesn't mention yet.
    pub fn open(store: S, registry: &dyn NavRegistry) -> Result<Self, StoreError> {
        let mut settings = store.load()?;
        if settings.normalize() {
            warn!("Stored layout violated invariants and was repaired");
        }
        let added = settings.reconcile(registry);
        if added > 0 {
            info!("Placed {} unlisted navigation items", added);
        }
        Ok(Self { store, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies an action. A rejection leaves both the snapshot and the store untouched.
    pub fn apply(&mut self, action: Action) -> Result<Effect, Rejection> {
        let next = update(&self.settings, action)?;
        if next == self.settings {
            return Ok(Effect::Unchanged);
        }
        self.settings = next;
        Ok(self.persist())
    }

    /// Saves the current snapshot regardless of whether an action changed it.
    pub fn persist(&mut self) -> Effect {
        match self.store.save(&self.settings) {
            Ok(()) => Effect::Saved,
            Err(e) => {
                warn!("Failed to save settings: {}", e);
                Effect::SaveFailed(e.to_string())
            }
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
