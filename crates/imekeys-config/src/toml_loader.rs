//! TOML config file loading and creation.

use crate::schema::ImeConfig;
use crate::validation;
use imekeys_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. A config that fails validation is
/// still returned as parsed: the problems are logged, and keymap lookups
/// stay deterministic on inconsistent data.
pub fn load_from_path(path: &Path) -> Result<ImeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ReadError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: ImeConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Like [`load_from_path`], but a missing file yields the default config.
pub fn load_or_default(path: &Path) -> Result<ImeConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(ImeConfig::default())
        }
        other => other,
    }
}

/// Get the platform-specific default config file path.
///
/// On Windows: `%APPDATA%\imekeys\config.toml`
/// On Linux: `~/.config/imekeys/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ReadError("could not determine config directory".into()))?;
    Ok(config_dir.join("imekeys").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
///
/// No `version` is written: that field belongs to the IME installer.
fn default_config_toml() -> String {
    r##"# IME configuration
# Missing fields use defaults.

# Keys that switch input mode, by virtual-key code.
# Actions: "Latin", "Kana". Each action may be bound to one key.
#
#   "0x1D" = NonConvert   "0x1C" = Convert   "0x1B" = Esc
#   "0x09" = Tab          "0x20" = Space
[keymap]
# "0x1D" = "Latin"
# "0x1C" = "Kana"
"##
    .to_string()
}
