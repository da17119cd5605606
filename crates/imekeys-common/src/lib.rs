pub mod actions;
pub mod errors;
pub mod key;
pub mod keymap;
pub mod notifications;

pub use actions::Action;
pub use errors::{ConfigError, ImeKeysError, KeymapError};
pub use key::{KeyId, KnownKey, UNASSIGNED};
pub use keymap::{Conflict, Keymap};
pub use notifications::{Notification, NotificationLevel};
