use std::fmt;
use std::str::FromStr;

use super::Action;

impl Action {
    /// Human-readable label for settings screens and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SwitchToLatin => "Switch to Latin input",
            Action::SwitchToKana => "Switch to Kana input",
        }
    }

    /// The name stored in the config file's `keymap` table.
    pub fn stored_name(&self) -> &'static str {
        match self {
            Action::SwitchToLatin => "Latin",
            Action::SwitchToKana => "Kana",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stored_name())
    }
}

/// Returned when a string names no known [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action '{0}' (expected latin or kana)")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts the stored names and the variant names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latin" | "switchtolatin" | "switch-to-latin" => Ok(Action::SwitchToLatin),
            "kana" | "switchtokana" | "switch-to-kana" => Ok(Action::SwitchToKana),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}
