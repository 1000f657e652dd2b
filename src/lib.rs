#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Preferences core of an on-screen ruler.
//!
//! Everything outside [`platform`] is plain Rust with no FFI, so the whole
//! preferences pipeline (store, controller, unit conversion, persistence)
//! runs under normal integration tests. The macOS window only implements
//! [`controller::PreferencesView`] and [`controller::DisplayProvider`].

pub mod controller;
pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod storage;
pub mod units;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types most callers need
pub use controller::{DisplayProvider, PreferencesController, PreferencesView};
pub use error::{FreeRulerError, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{PrefField, Prefs};
pub use prefs::{PrefsStore, SharedPrefs};
pub use storage::PrefsCache;
pub use units::{convert, DisplayInfo, Rect, Unit};
