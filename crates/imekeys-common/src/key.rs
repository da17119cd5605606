//! Physical key identifiers and the catalogue of selectable keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentinel used by settings screens and the CLI for "no key bound".
pub const UNASSIGNED: &str = "unassigned";

/// An opaque identifier for a physical key.
///
/// In practice this is a virtual-key code rendered as hex (`"0x1D"`), but it
/// is only ever compared, never interpreted numerically. Ordering is
/// lexicographic on the stored string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(String);

impl KeyId {
    /// Wraps a raw identifier without checking it. Use [`str::parse`] for
    /// user input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this identifier could have come from [`KeyId::from_str`].
    pub fn is_well_formed(&self) -> bool {
        let trimmed = self.0.trim();
        !trimmed.is_empty() && trimmed == self.0 && !trimmed.eq_ignore_ascii_case(UNASSIGNED)
    }

    /// Parses a key choice: the [`UNASSIGNED`] sentinel maps to `None`.
    pub fn parse_choice(s: &str) -> Result<Option<KeyId>, ParseKeyError> {
        if s.trim().eq_ignore_ascii_case(UNASSIGNED) {
            return Ok(None);
        }
        s.parse().map(Some)
    }

    /// Display name from the known key catalogue, if this key is in it.
    pub fn known_name(&self) -> Option<&'static str> {
        KnownKey::from_id(self).map(|k| k.name())
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<KnownKey> for KeyId {
    fn from(key: KnownKey) -> Self {
        KeyId::new(key.id())
    }
}

/// Returned when a string cannot be used as a [`KeyId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeyError {
    #[error("key identifier is empty")]
    Empty,

    #[error("'unassigned' is not a key identifier")]
    Sentinel,
}

impl FromStr for KeyId {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseKeyError::Empty);
        }
        if trimmed.eq_ignore_ascii_case(UNASSIGNED) {
            return Err(ParseKeyError::Sentinel);
        }
        Ok(KeyId(trimmed.to_string()))
    }
}

/// Keys offered for input-mode switching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownKey {
    NonConvert,
    Convert,
    Escape,
    Tab,
    Space,
}

impl KnownKey {
    /// Every known key, in the order settings screens list them.
    pub const ALL: [KnownKey; 5] = [
        KnownKey::NonConvert,
        KnownKey::Convert,
        KnownKey::Escape,
        KnownKey::Tab,
        KnownKey::Space,
    ];

    /// Virtual-key code as stored in the keymap.
    pub fn id(&self) -> &'static str {
        match self {
            KnownKey::NonConvert => "0x1D",
            KnownKey::Convert => "0x1C",
            KnownKey::Escape => "0x1B",
            KnownKey::Tab => "0x09",
            KnownKey::Space => "0x20",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KnownKey::NonConvert => "NonConvert",
            KnownKey::Convert => "Convert",
            KnownKey::Escape => "Esc",
            KnownKey::Tab => "Tab",
            KnownKey::Space => "Space",
        }
    }

    pub fn from_id(id: &KeyId) -> Option<KnownKey> {
        Self::ALL.into_iter().find(|k| k.id() == id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let key: KeyId = " 0x1D ".parse().unwrap();
        assert_eq!(key.as_str(), "0x1D");
    }

    #[test]
    fn parse_rejects_empty_and_sentinel() {
        assert_eq!("".parse::<KeyId>(), Err(ParseKeyError::Empty));
        assert_eq!("   ".parse::<KeyId>(), Err(ParseKeyError::Empty));
        assert_eq!("unassigned".parse::<KeyId>(), Err(ParseKeyError::Sentinel));
    }

    #[test]
    fn parse_choice_maps_sentinel_to_none() {
        assert_eq!(KeyId::parse_choice("unassigned").unwrap(), None);
        assert_eq!(KeyId::parse_choice("Unassigned").unwrap(), None);
        assert_eq!(
            KeyId::parse_choice("0x20").unwrap(),
            Some(KeyId::new("0x20"))
        );
        assert!(KeyId::parse_choice("").is_err());
    }

    #[test]
    fn keys_are_opaque_and_case_sensitive() {
        // No numeric interpretation: these are different keys.
        assert_ne!(KeyId::new("0x1D"), KeyId::new("0x1d"));
        assert_ne!(KeyId::new("0x09"), KeyId::new("0x9"));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut keys = vec![KeyId::new("0x20"), KeyId::new("0x09"), KeyId::new("0x1D")];
        keys.sort();
        assert_eq!(keys, vec![KeyId::new("0x09"), KeyId::new("0x1D"), KeyId::new("0x20")]);
    }

    #[test]
    fn well_formed_rejects_padding_and_sentinel() {
        assert!(KeyId::new("0x1C").is_well_formed());
        assert!(!KeyId::new("").is_well_formed());
        assert!(!KeyId::new(" 0x1C").is_well_formed());
        assert!(!KeyId::new("UNASSIGNED").is_well_formed());
    }

    #[test]
    fn known_keys_round_trip_through_ids() {
        for key in KnownKey::ALL {
            let id = KeyId::from(key);
            assert_eq!(KnownKey::from_id(&id), Some(key));
            assert_eq!(id.known_name(), Some(key.name()));
        }
        assert_eq!(KeyId::new("0x41").known_name(), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&KeyId::new("0x1B")).unwrap();
        assert_eq!(json, "\"0x1B\"");
    }
}
