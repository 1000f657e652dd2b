//! Preferences window logic, independent of the UI toolkit.
//!
//! - [`view`]: `PreferencesView` and `DisplayProvider` traits implemented by
//!   the platform layer
//! - [`preferences`]: `PreferencesController`, the action handlers and the
//!   model-to-view refresh

pub mod preferences;
pub mod view;

pub use preferences::{opacity_label, refresh_field, PreferencesController};
pub use view::{DisplayProvider, NoDisplays, PreferencesView};
