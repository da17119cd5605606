use std::fmt;

use crate::actions::Action;
use crate::errors::KeymapError;
use crate::key::KeyId;

/// Severity level for user-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A short message for the user, shown by whatever surface the caller has
/// (toast, status line, terminal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Confirmation after a binding was persisted.
    pub fn binding_saved(action: Action, key: Option<&KeyId>) -> Self {
        let body = match key {
            Some(key) => format!("{} -> {}", action.label(), describe_key(key)),
            None => format!("{} is now unassigned", action.label()),
        };
        Self::info("Settings saved", body)
    }

    /// Failure to load or persist the keymap.
    pub fn keymap_failed(err: &KeymapError) -> Self {
        match err {
            KeymapError::Read(_) => Self::error("Failed to load settings", err.to_string()),
            KeymapError::Write { .. } => Self::error("Failed to save settings", err.to_string()),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        write!(f, "[{tag}] {}: {}", self.title, self.body)
    }
}

/// `"Esc (0x1B)"` for catalogued keys, the raw identifier otherwise.
pub fn describe_key(key: &KeyId) -> String {
    match key.known_name() {
        Some(name) => format!("{name} ({key})"),
        None => key.to_string(),
    }
}
