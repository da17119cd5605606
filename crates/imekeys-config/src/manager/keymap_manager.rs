//! Core manager implementation.

use std::sync::Arc;

use imekeys_common::{Action, ConfigError, KeyId, Keymap, KeymapError};
use tracing::{debug, info, warn};

use crate::store::ConfigStore;

/// Progress of the most recent save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveState {
    /// Nothing saved yet this session.
    #[default]
    Idle,
    /// A save is waiting on the store.
    Saving,
    Saved,
    SaveFailed,
}

/// Confirmation that a binding was applied and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub action: Action,
    pub key: Option<KeyId>,
    /// Action that lost `key` to this assignment, if any.
    pub displaced: Option<Action>,
}

/// Holds the keymap for one settings session and persists changes to it.
///
/// Changes are applied optimistically: [`KeymapManager::set_binding`] updates
/// the in-memory keymap before the store confirms the write, and leaves it
/// in place if the write fails. The returned [`KeymapError::Write`] carries
/// the previous keymap for [`KeymapManager::revert`].
///
/// Mutating methods take `&mut self`, so one save always resolves before the
/// next begins and two read-modify-write cycles never interleave. Share a
/// manager across tasks behind a `tokio::sync::Mutex` to keep that ordering.
pub struct KeymapManager {
    store: Arc<dyn ConfigStore>,
    keymap: Keymap,
    version: Option<String>,
    save_state: SaveState,
}

impl KeymapManager {
    /// Create a manager with an empty keymap. Call [`KeymapManager::load`]
    /// to fetch the stored one.
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self {
            store,
            keymap: Keymap::new(),
            version: None,
            save_state: SaveState::Idle,
        }
    }

    /// Read the configuration and adopt its keymap and version.
    ///
    /// On failure the current keymap is kept.
    pub async fn load(&mut self) -> Result<&Keymap, KeymapError> {
        let config = self.store.read_config().await.map_err(|e| {
            warn!("failed to load keymap: {e}");
            KeymapError::Read(e)
        })?;

        for conflict in config.keymap.conflicts() {
            warn!(
                action = %conflict.action,
                keys = ?conflict.keys,
                "stored keymap binds an action to several keys"
            );
        }

        info!(bindings = config.keymap.len(), version = ?config.version, "keymap loaded");
        self.keymap = config.keymap;
        self.version = config.version;
        Ok(&self.keymap)
    }

    /// Current in-memory keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Key bound to `action`, or `None` when unassigned.
    pub fn key_for(&self, action: Action) -> Option<&KeyId> {
        self.keymap.key_for(action)
    }

    /// Version string from the last successful load, `None` if the stored
    /// record has none.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    /// Bind `action` to `key` (or unbind it with `None`) and persist.
    ///
    /// The key is taken from whatever action held it. The new keymap becomes
    /// current immediately; on a failed read or write the error is
    /// [`KeymapError::Write`] and the optimistic keymap stays current.
    pub async fn set_binding(
        &mut self,
        action: Action,
        key: Option<KeyId>,
    ) -> Result<Saved, KeymapError> {
        let displaced = key
            .as_ref()
            .and_then(|k| self.keymap.get(k))
            .filter(|bound| *bound != action);
        let next = self.keymap.with_binding(action, key.clone());
        let previous = std::mem::replace(&mut self.keymap, next);
        if let Some(lost) = displaced {
            debug!(key = ?key, from = %lost, to = %action, "key reassigned");
        }

        self.save_state = SaveState::Saving;
        match self.persist().await {
            Ok(()) => {
                self.save_state = SaveState::Saved;
                info!(action = %action, key = ?key, "binding saved");
                Ok(Saved {
                    action,
                    key,
                    displaced,
                })
            }
            Err(source) => {
                self.save_state = SaveState::SaveFailed;
                warn!(action = %action, key = ?key, "binding not saved: {source}");
                Err(KeymapError::Write { source, previous })
            }
        }
    }

    /// Replace the in-memory keymap, typically with the `previous` keymap of
    /// a failed save. Nothing is written to the store.
    pub fn revert(&mut self, previous: Keymap) {
        debug!(bindings = previous.len(), "reverting keymap");
        self.keymap = previous;
    }

    /// Write the current keymap into a fresh copy of the stored record.
    async fn persist(&self) -> Result<(), ConfigError> {
        let config = self.store.read_config().await?;
        self.store
            .write_config(config.with_keymap(self.keymap.clone()))
            .await
    }
}
