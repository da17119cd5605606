//! Persist an [`ImeConfig`] as TOML.
//!
//! The file is replaced in one step: the new contents go to a sibling
//! `config.toml.tmp` that is then renamed over the target, so a reader never
//! sees a half-written keymap.

use std::fs;
use std::path::{Path, PathBuf};

use imekeys_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::ImeConfig;

/// Serialize `config` and replace the file at `path` with it, creating
/// missing parent directories first.
pub fn save_config_to_path(config: &ImeConfig, path: &Path) -> Result<(), ConfigError> {
    let text = render(config)?;
    ensure_parent(path)?;
    replace_file(path, &text)?;
    debug!(path = %path.display(), bytes = text.len(), "config written");
    Ok(())
}

fn render(config: &ImeConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::WriteError(format!("cannot encode config as TOML: {e}")))
}

fn ensure_parent(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| write_error(dir, e)),
        _ => Ok(()),
    }
}

fn replace_file(path: &Path, text: &str) -> Result<(), ConfigError> {
    let staged = staging_path(path);
    fs::write(&staged, text).map_err(|e| write_error(&staged, e))?;

    let Err(rename_err) = fs::rename(&staged, path) else {
        return Ok(());
    };
    // Windows refuses to rename over a file another process holds open.
    warn!(path = %path.display(), "rename failed ({rename_err}); writing in place");
    let _ = fs::remove_file(&staged);
    fs::write(path, text).map_err(|e| write_error(path, e))
}

fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("toml.tmp")
}

fn write_error(path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::WriteError(format!("cannot write {}: {err}", path.display()))
}
