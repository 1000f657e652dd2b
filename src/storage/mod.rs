//! Preferences persistence.
//!
//! Prefs are kept as a JSON file in the user's config directory on every
//! platform.

pub mod config;

pub use config::{default_prefs_path, load_prefs, save_prefs, PrefsCache};
