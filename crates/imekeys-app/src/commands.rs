//! Command execution against a [`KeymapManager`].
//!
//! Output goes to any `io::Write` so the commands can be checked without a
//! terminal.

use std::io::Write;

use imekeys_common::notifications::describe_key;
use imekeys_common::{Action, ImeKeysError, KeyId, KnownKey, Notification, UNASSIGNED};
use imekeys_config::KeymapManager;
use tracing::warn;

use crate::cli::Command;

/// Where users check for newer releases.
pub const RELEASES_URL: &str = "https://github.com/fkunn1326/azooKey-Windows/releases";

pub async fn run(
    command: Command,
    manager: &mut KeymapManager,
    out: &mut impl Write,
) -> Result<(), ImeKeysError> {
    match command {
        Command::Show { json } => {
            manager.load().await?;
            if json {
                show_json(manager, out)
            } else {
                show(manager, out)
            }
        }
        Command::Get { action } => {
            manager.load().await?;
            writeln!(out, "{}", key_or_unassigned(manager.key_for(action)))?;
            Ok(())
        }
        Command::Set { action, key } => {
            let key = KeyId::parse_choice(&key)
                .map_err(|e| ImeKeysError::InvalidArgument(e.to_string()))?;
            manager.load().await?;
            set(manager, action, key, out).await
        }
        Command::Keys => {
            for key in KnownKey::ALL {
                writeln!(out, "{:<6} {}", key.id(), key.name())?;
            }
            Ok(())
        }
        Command::Version => {
            if let Err(e) = manager.load().await {
                warn!("could not read version from config: {e}");
            }
            // Configs not written by the installer carry no version.
            let version = manager.version().unwrap_or(env!("CARGO_PKG_VERSION"));
            writeln!(out, "v{version}")?;
            writeln!(out, "Check for updates: {RELEASES_URL}")?;
            Ok(())
        }
    }
}

fn show(manager: &KeymapManager, out: &mut impl Write) -> Result<(), ImeKeysError> {
    for action in Action::ALL {
        let key = manager
            .key_for(action)
            .map(describe_key)
            .unwrap_or_else(|| UNASSIGNED.to_string());
        writeln!(out, "{:<24} {}", action.label(), key)?;
    }
    Ok(())
}

fn show_json(manager: &KeymapManager, out: &mut impl Write) -> Result<(), ImeKeysError> {
    let bindings: serde_json::Map<String, serde_json::Value> = Action::ALL
        .iter()
        .map(|action| {
            let key = manager
                .key_for(*action)
                .map(|k| serde_json::Value::String(k.to_string()))
                .unwrap_or(serde_json::Value::Null);
            (action.stored_name().to_string(), key)
        })
        .collect();
    let body = serde_json::json!({
        "version": manager.version(),
        "bindings": bindings,
    });
    let text = serde_json::to_string_pretty(&body)
        .map_err(|e| ImeKeysError::Other(format!("failed to serialize bindings: {e}")))?;
    writeln!(out, "{text}")?;
    Ok(())
}

async fn set(
    manager: &mut KeymapManager,
    action: Action,
    key: Option<KeyId>,
    out: &mut impl Write,
) -> Result<(), ImeKeysError> {
    match manager.set_binding(action, key).await {
        Ok(saved) => {
            writeln!(out, "{}", Notification::binding_saved(action, saved.key.as_ref()))?;
            if let Some(lost) = saved.displaced {
                let note = Notification::warning(
                    "Binding moved",
                    format!("{} is now unassigned", lost.label()),
                );
                writeln!(out, "{note}")?;
            }
            Ok(())
        }
        Err(e) => {
            writeln!(out, "{}", Notification::keymap_failed(&e))?;
            if let Some(previous) = e.previous_keymap() {
                manager.revert(previous.clone());
            }
            Err(e.into())
        }
    }
}

fn key_or_unassigned(key: Option<&KeyId>) -> String {
    key.map(|k| k.to_string())
        .unwrap_or_else(|| UNASSIGNED.to_string())
}
