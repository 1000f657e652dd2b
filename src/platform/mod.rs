//! Platform-specific implementations.
//!
//! Only macOS has a windowing layer. Everything above this module is
//! platform independent and tested on any host.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
