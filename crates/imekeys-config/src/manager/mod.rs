//! Keymap assignment manager.
//!
//! Owns the session's in-memory keymap and runs every change through a
//! read-modify-write cycle against a [`ConfigStore`](crate::store::ConfigStore).

mod keymap_manager;


pub use keymap_manager::{KeymapManager, SaveState, Saved};
