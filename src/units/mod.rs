//! Measurement units and display density.
//!
//! Values are stored unit-less and interpreted through a [`Unit`] tag. A unit's
//! scale is the number of pixels in one of it, resolved from the density of the
//! display the value is edited on. This module is pure Rust, with no FFI, so
//! the platform layer only has to hand in [`DisplayInfo`] values.
//!
//! - [`unit`]: the `Unit` tag and its scale lookup
//! - [`display`]: `Rect`, `Size`, `DisplayInfo` and screen lookup by frame
//! - [`convert`](mod@convert): rescaling a value across units

pub mod convert;
pub mod display;
pub mod unit;

pub use convert::convert;
pub use display::{display_for_frame, DisplayInfo, Rect, Size};
pub use unit::Unit;
