mod action_enum;
mod dispatch;

pub use action_enum::*;
pub use dispatch::ParseActionError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_actions_have_labels() {
        for action in Action::ALL {
            assert!(!action.label().is_empty(), "action {:?} has empty label", action);
        }
    }

    #[test]
    fn all_actions_have_unique_stored_names() {
        let names: Vec<&str> = Action::ALL.iter().map(|a| a.stored_name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn serializes_to_stored_name() {
        let json = serde_json::to_string(&Action::SwitchToLatin).unwrap();
        assert_eq!(json, "\"Latin\"");
        let json = serde_json::to_string(&Action::SwitchToKana).unwrap();
        assert_eq!(json, "\"Kana\"");
    }

    #[test]
    fn deserializes_from_stored_name() {
        let action: Action = serde_json::from_str("\"Kana\"").unwrap();
        assert_eq!(action, Action::SwitchToKana);
        assert!(serde_json::from_str::<Action>("\"SwitchToKana\"").is_err());
    }
}
