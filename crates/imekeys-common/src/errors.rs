use std::path::PathBuf;

use crate::keymap::Keymap;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config read error: {0}")]
    ReadError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

/// Failure of a keymap load or save against the config store.
#[derive(Debug, thiserror::Error)]
pub enum KeymapError {
    /// The store could not be read; the in-memory keymap is unchanged.
    #[error("failed to read keymap: {0}")]
    Read(#[source] ConfigError),

    /// The new binding was applied in memory but could not be persisted.
    ///
    /// `previous` is the keymap that was in effect before the assignment, so
    /// the caller can put it back.
    #[error("failed to save keymap: {source}")]
    Write {
        #[source]
        source: ConfigError,
        previous: Keymap,
    },
}

impl KeymapError {
    /// The keymap to restore if the caller wants to undo an unsaved binding.
    pub fn previous_keymap(&self) -> Option<&Keymap> {
        match self {
            KeymapError::Write { previous, .. } => Some(previous),
            KeymapError::Read(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImeKeysError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Keymap(#[from] KeymapError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}
