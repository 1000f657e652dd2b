//! macOS implementation using AppKit via objc2.
//!
//! - [`ffi`]: objc2 helpers and CoreGraphics display queries
//! - [`screens`]: [`DisplayProvider`](crate::controller::DisplayProvider) over `NSScreen`
//! - [`ui`]: the preferences window

pub mod ffi;
pub mod screens;
pub mod ui;

pub use ffi::bridge;
pub use screens::ScreenDisplays;
pub use ui::open_preferences;
