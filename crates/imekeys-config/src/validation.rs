//! Configuration validation.
//!
//! Checks the keymap against the invariants the settings screen relies on
//! and collects every problem into a single `ConfigError`.

use crate::schema::ImeConfig;
use imekeys_common::{ConfigError, Keymap};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ImeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_key_ids(&mut errors, &config.keymap);
    validate_no_duplicates(&mut errors, &config.keymap);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Every key identifier must be non-empty, unpadded, and not the
/// `unassigned` sentinel.
fn validate_key_ids(errors: &mut Vec<String>, keymap: &Keymap) {
    for (key, action) in keymap.iter() {
        if !key.is_well_formed() {
            errors.push(format!("keymap.\"{key}\" ({action}) is not a valid key identifier"));
        }
    }
}

/// No action may be bound to more than one key.
fn validate_no_duplicates(errors: &mut Vec<String>, keymap: &Keymap) {
    for conflict in keymap.conflicts() {
        let keys: Vec<&str> = conflict.keys.iter().map(|k| k.as_str()).collect();
        errors.push(format!(
            "action '{}' is bound to several keys: {}",
            conflict.action,
            keys.join(", ")
        ));
    }
}
