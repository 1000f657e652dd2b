//! FFI helpers for macOS frameworks.
//!
//! - [`bridge`]: objc2 aliases and helpers for untyped messaging
//! - [`display`]: NSScreen and CoreGraphics display queries

pub mod bridge;
pub mod display;

pub use display::{display_id_for_screen, display_info_for_screen, rect_from_ns};
