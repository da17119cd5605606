//! Configuration schema for the IME settings file.
//!
//! Only the fields this crate manages are typed. Everything else in the
//! file is kept in [`ImeConfig::extra`] and written back unchanged, so a
//! keymap save never drops settings owned by other parts of the IME.

use imekeys_common::Keymap;
use serde::{Deserialize, Serialize};

/// Root configuration record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImeConfig {
    /// Installed IME version, shown on the settings screen. Written by the
    /// IME installer; left absent when the file has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Input-mode switch bindings.
    pub keymap: Keymap,

    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl ImeConfig {
    /// Copy of this record with its keymap replaced.
    pub fn with_keymap(&self, keymap: Keymap) -> Self {
        Self {
            keymap,
            ..self.clone()
        }
    }
}
