//! Shared, observable preferences.
//!
//! The store replaces key-value observation with an explicit table of
//! per-field listeners; see [`store`].

pub mod store;

pub use store::{Listener, ObserverId, PrefsStore, SharedPrefs};
