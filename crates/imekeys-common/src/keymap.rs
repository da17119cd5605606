//! The key-to-action assignment model.
//!
//! A [`Keymap`] maps each bound key to the action it triggers. Keys are unique
//! by construction; [`Keymap::assign`] additionally keeps every action bound
//! to at most one key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::actions::Action;
use crate::key::KeyId;

/// Mapping from physical key to the action it triggers.
///
/// Unbound keys are simply absent. Stored as a `BTreeMap` so iteration, and
/// therefore serialization and tie-breaking, follow [`KeyId`]'s order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keymap(BTreeMap<KeyId, Action>);

/// An action bound to more than one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub action: Action,
    /// Always two or more, in key order.
    pub keys: Vec<KeyId>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The action bound to `key`, if any.
    pub fn get(&self, key: &KeyId) -> Option<Action> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyId, Action)> {
        self.0.iter().map(|(k, a)| (k, *a))
    }

    /// Every key bound to `action`, lowest first.
    pub fn keys_for(&self, action: Action) -> Vec<&KeyId> {
        self.0
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| key)
            .collect()
    }

    /// The key bound to `action`, or `None` when it is unassigned.
    ///
    /// A keymap produced only through [`Keymap::assign`] never binds an
    /// action twice. If one loaded from disk does, the lowest key wins and
    /// the inconsistency is logged.
    pub fn key_for(&self, action: Action) -> Option<&KeyId> {
        let keys = self.keys_for(action);
        if keys.len() > 1 {
            warn!(
                action = %action,
                keys = ?keys,
                "action bound to several keys, using the lowest"
            );
        }
        keys.first().copied()
    }

    /// Binds `action` to `key`, or unbinds it when `key` is `None`.
    ///
    /// Every existing binding for `action` is removed first. The new key then
    /// takes `action` even if it was bound to something else: last
    /// assignment wins. Returns the action `key` was bound to before, if it
    /// was a different one.
    pub fn assign(&mut self, action: Action, key: Option<KeyId>) -> Option<Action> {
        self.0.retain(|_, bound| *bound != action);
        let key = key?;
        self.0.insert(key, action)
    }

    /// Copy of this keymap with [`Keymap::assign`] applied.
    pub fn with_binding(&self, action: Action, key: Option<KeyId>) -> Keymap {
        let mut next = self.clone();
        next.assign(action, key);
        next
    }

    /// Actions bound to more than one key.
    pub fn conflicts(&self) -> Vec<Conflict> {
        Action::ALL
            .iter()
            .filter_map(|&action| {
                let keys = self.keys_for(action);
                (keys.len() > 1).then(|| Conflict {
                    action,
                    keys: keys.into_iter().cloned().collect(),
                })
            })
            .collect()
    }
}

impl FromIterator<(KeyId, Action)> for Keymap {
    fn from_iter<I: IntoIterator<Item = (KeyId, Action)>>(iter: I) -> Self {
        Keymap(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Keymap {
    type Item = (&'a KeyId, &'a Action);
    type IntoIter = std::collections::btree_map::Iter<'a, KeyId, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> KeyId {
        KeyId::new(s)
    }

    fn keymap(entries: &[(&str, Action)]) -> Keymap {
        entries.iter().map(|(k, a)| (key(k), *a)).collect()
    }

    #[test]
    fn assign_into_empty_keymap() {
        let mut map = Keymap::new();
        map.assign(Action::SwitchToLatin, Some(key("0x1D")));
        assert_eq!(map, keymap(&[("0x1D", Action::SwitchToLatin)]));
        assert_eq!(map.key_for(Action::SwitchToLatin), Some(&key("0x1D")));
    }

    #[test]
    fn reassigning_a_key_unbinds_its_previous_action() {
        let mut map = keymap(&[("0x1D", Action::SwitchToLatin)]);
        let displaced = map.assign(Action::SwitchToKana, Some(key("0x1D")));
        assert_eq!(displaced, Some(Action::SwitchToLatin));
        assert_eq!(map, keymap(&[("0x1D", Action::SwitchToKana)]));
        assert_eq!(map.key_for(Action::SwitchToLatin), None);
    }

    #[test]
    fn unassigning_removes_only_that_action() {
        let mut map = keymap(&[
            ("0x1D", Action::SwitchToLatin),
            ("0x1C", Action::SwitchToKana),
        ]);
        map.assign(Action::SwitchToLatin, None);
        assert_eq!(map, keymap(&[("0x1C", Action::SwitchToKana)]));
    }

    #[test]
    fn moving_an_action_to_a_new_key_drops_the_old_key() {
        let mut map = keymap(&[("0x1D", Action::SwitchToLatin)]);
        let displaced = map.assign(Action::SwitchToLatin, Some(key("0x20")));
        assert_eq!(displaced, None);
        assert_eq!(map, keymap(&[("0x20", Action::SwitchToLatin)]));
    }

    #[test]
    fn rebinding_the_same_key_reports_no_displacement() {
        let mut map = keymap(&[("0x1D", Action::SwitchToLatin)]);
        let displaced = map.assign(Action::SwitchToLatin, Some(key("0x1D")));
        assert_eq!(displaced, None);
        assert_eq!(map, keymap(&[("0x1D", Action::SwitchToLatin)]));
    }

    #[test]
    fn unassigning_an_unbound_action_is_a_no_op() {
        let before = keymap(&[("0x1C", Action::SwitchToKana)]);
        let after = before.with_binding(Action::SwitchToLatin, None);
        assert_eq!(before, after);
    }

    #[test]
    fn assign_clears_duplicate_bindings_from_disk() {
        let mut map = keymap(&[
            ("0x09", Action::SwitchToLatin),
            ("0x1D", Action::SwitchToLatin),
        ]);
        map.assign(Action::SwitchToLatin, Some(key("0x20")));
        assert_eq!(map, keymap(&[("0x20", Action::SwitchToLatin)]));
    }

    #[test]
    fn key_for_breaks_ties_with_lowest_key() {
        let map = keymap(&[
            ("0x1D", Action::SwitchToKana),
            ("0x09", Action::SwitchToKana),
        ]);
        assert_eq!(map.key_for(Action::SwitchToKana), Some(&key("0x09")));
    }

    #[test]
    fn conflicts_lists_actions_with_several_keys() {
        let map = keymap(&[
            ("0x1D", Action::SwitchToKana),
            ("0x09", Action::SwitchToKana),
            ("0x1C", Action::SwitchToLatin),
        ]);
        let conflicts = map.conflicts();
        assert_eq!(
            conflicts,
            vec![Conflict {
                action: Action::SwitchToKana,
                keys: vec![key("0x09"), key("0x1D")],
            }]
        );
        assert!(keymap(&[("0x1C", Action::SwitchToLatin)]).conflicts().is_empty());
    }

    #[test]
    fn with_binding_leaves_original_untouched() {
        let original = keymap(&[("0x1D", Action::SwitchToLatin)]);
        let next = original.with_binding(Action::SwitchToKana, Some(key("0x1D")));
        assert_eq!(original.get(&key("0x1D")), Some(Action::SwitchToLatin));
        assert_eq!(next.get(&key("0x1D")), Some(Action::SwitchToKana));
    }

    #[test]
    fn serializes_as_flat_table_of_stored_names() {
        let map = keymap(&[
            ("0x1D", Action::SwitchToLatin),
            ("0x1C", Action::SwitchToKana),
        ]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"0x1C":"Kana","0x1D":"Latin"}"#);
        let parsed: Keymap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    /// Every sequence of assignments up to `DEPTH` long over a small domain
    /// must keep each action on at most one key, and the key just assigned
    /// must own its action afterwards.
    #[test]
    fn assign_sequences_preserve_invariants() {
        const DEPTH: usize = 4;
        let choices: Vec<Option<KeyId>> = vec![
            None,
            Some(key("0x1D")),
            Some(key("0x1C")),
            Some(key("0x20")),
        ];
        let steps: Vec<(Action, Option<KeyId>)> = Action::ALL
            .iter()
            .flat_map(|&a| choices.iter().map(move |k| (a, k.clone())))
            .collect();

        let mut frontier = vec![Keymap::new()];
        for _ in 0..DEPTH {
            let mut next = Vec::new();
            for map in &frontier {
                for (action, choice) in &steps {
                    let mut updated = map.clone();
                    updated.assign(*action, choice.clone());

                    for a in Action::ALL {
                        assert!(updated.keys_for(a).len() <= 1, "{a} bound twice in {updated:?}");
                    }
                    assert_eq!(updated.key_for(*action), choice.as_ref());
                    if let Some(k) = choice {
                        assert_eq!(updated.get(k), Some(*action));
                    }
                    // Bindings of other actions survive unless their key was taken.
                    for (k, a) in map.iter() {
                        if a != *action && Some(k) != choice.as_ref() {
                            assert_eq!(updated.get(k), Some(a));
                        }
                    }
                    next.push(updated);
                }
            }
            next.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));
            next.dedup();
            frontier = next;
        }
    }
}
