//! AppKit user interface.

pub mod preferences;

pub use preferences::open_preferences;
