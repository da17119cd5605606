use serde::{Deserialize, Serialize};

/// A logical input-mode switch the IME performs when its bound key is pressed.
///
/// The serialized form (`"Latin"`, `"Kana"`) is what the IME reads from the
/// `keymap` table, so renaming a variant must keep its `serde` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Switch to direct Latin (alphanumeric) input.
    #[serde(rename = "Latin")]
    SwitchToLatin,
    /// Switch to Japanese kana input.
    #[serde(rename = "Kana")]
    SwitchToKana,
}

impl Action {
    /// Every action, in display order.
    pub const ALL: [Action; 2] = [Action::SwitchToLatin, Action::SwitchToKana];
}
