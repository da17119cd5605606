//! Configuration stores.
//!
//! A [`ConfigStore`] hands out the full configuration record and accepts a
//! full record back. Callers never mutate store-owned state in place: they
//! read a copy, change it, and write the copy.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use imekeys_common::ConfigError;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::schema::ImeConfig;
use crate::toml_loader;
use crate::toml_writer;

/// Persistent home of the IME configuration.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Return the full configuration record.
    async fn read_config(&self) -> Result<ImeConfig, ConfigError>;

    /// Persist `config`, replacing whatever was stored before.
    async fn write_config(&self, config: ImeConfig) -> Result<(), ConfigError>;
}

/// Stores the configuration as a TOML file.
///
/// A missing file reads as the default config. Filesystem work runs on
/// tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default config path, creating a commented
    /// default file there if none exists.
    pub fn at_default_path() -> Result<Self, ConfigError> {
        let path = toml_loader::default_config_path()?;
        if !path.exists() {
            info!("no config found at {}, creating default", path.display());
            toml_loader::create_default_config(&path)?;
        }
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigStore for TomlFileStore {
    async fn read_config(&self) -> Result<ImeConfig, ConfigError> {
        let path = self.path.clone();
        debug!(path = %path.display(), "reading config");
        tokio::task::spawn_blocking(move || toml_loader::load_or_default(&path))
            .await
            .map_err(|e| ConfigError::ReadError(format!("config read task failed: {e}")))?
    }

    async fn write_config(&self, config: ImeConfig) -> Result<(), ConfigError> {
        let path = self.path.clone();
        debug!(path = %path.display(), "writing config");
        tokio::task::spawn_blocking(move || toml_writer::save_config_to_path(&config, &path))
            .await
            .map_err(|e| ConfigError::WriteError(format!("config write task failed: {e}")))?
    }
}

/// Keeps the configuration in memory.
///
/// Reads and writes can be made to fail, which lets callers exercise their
/// error paths without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: RwLock<ImeConfig>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new(config: ImeConfig) -> Self {
        Self {
            config: RwLock::new(config),
            ..Default::default()
        }
    }

    /// Make subsequent reads fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current stored record, bypassing failure injection.
    pub async fn snapshot(&self) -> ImeConfig {
        self.config.read().await.clone()
    }

    /// Replace the stored record, as another writer would.
    pub async fn replace(&self, config: ImeConfig) {
        *self.config.write().await = config;
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn read_config(&self) -> Result<ImeConfig, ConfigError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(ConfigError::ReadError("memory store read disabled".into()));
        }
        Ok(self.config.read().await.clone())
    }

    async fn write_config(&self, config: ImeConfig) -> Result<(), ConfigError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ConfigError::WriteError("memory store write disabled".into()));
        }
        *self.config.write().await = config;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
