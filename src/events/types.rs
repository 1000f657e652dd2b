//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (preferences window, app delegate) through the
/// EventBus to the dispatcher, which executes the appropriate actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === UI Lifecycle Events ===
    /// Preferences window was brought on screen
    PreferencesWindowOpened,

    /// Preferences window is about to close
    PreferencesWindowClosed,

    // === System Events ===
    /// Application is terminating
    Quit,
}

impl AppEvent {
    /// Returns true if pending preference changes should be written to disk
    /// when this event is handled.
    pub fn requires_persist(&self) -> bool {
        matches!(self, AppEvent::PreferencesWindowClosed | AppEvent::Quit)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::PreferencesWindowOpened => "Preferences window opened",
            AppEvent::PreferencesWindowClosed => "Preferences window closed",
            AppEvent::Quit => "Application quit",
        }
    }
}
