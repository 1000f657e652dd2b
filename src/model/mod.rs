//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the preferences record and configuration constants.
//!
//! Persistence is in [`crate::storage`].

pub mod constants;
pub mod prefs;

pub use constants::*;
pub use prefs::{clamp_opacity, PrefField, Prefs};
