//! IME configuration and keymap management.
//!
//! Provides the TOML-backed configuration record, the stores it is read
//! from and written to, and the [`KeymapManager`] that keeps the
//! input-mode switch bindings consistent while persisting them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use imekeys_common::{Action, KeyId};
//! use imekeys_config::{KeymapManager, TomlFileStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(TomlFileStore::at_default_path()?);
//! let mut manager = KeymapManager::new(store);
//! manager.load().await?;
//! manager
//!     .set_binding(Action::SwitchToKana, Some(KeyId::new("0x1C")))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod manager;
pub mod schema;
pub mod store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

// Re-export core types for convenience
pub use manager::{KeymapManager, SaveState, Saved};
pub use schema::ImeConfig;
pub use store::{ConfigStore, MemoryStore, TomlFileStore};
pub use toml_writer::save_config_to_path;
