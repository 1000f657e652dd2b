//! Configuration constants and default values.
//!
//! This module contains all application constants including preference
//! defaults, persisted key names, validation limits and fallback densities.

// === Preference Defaults ===

/// Default ruler foreground opacity in percent.
pub const DEFAULT_FOREGROUND_OPACITY: i32 = 90;

/// Default ruler background opacity in percent.
pub const DEFAULT_BACKGROUND_OPACITY: i32 = 50;

/// Rulers float above other windows by default.
pub const DEFAULT_FLOAT_RULERS: bool = true;

/// Horizontal and vertical rulers move together by default.
pub const DEFAULT_GROUP_RULERS: bool = true;

/// Rulers are drawn without a drop shadow by default.
pub const DEFAULT_RULER_SHADOW: bool = false;

/// Default screen-side amount of the user-defined unit.
pub const DEFAULT_USER_UNIT_SCREEN_VALUE: f64 = 1.0;

/// Default amount of the user-defined unit.
pub const DEFAULT_USER_UNIT_VALUE: f64 = 1.0;

/// Default label of the user-defined unit.
pub const DEFAULT_USER_UNIT_NAME: &str = "units";

// === Persisted Keys ===

/// Key for the foreground opacity preference.
pub const PREF_FOREGROUND_OPACITY: &str = "foregroundOpacity";

/// Key for the background opacity preference.
pub const PREF_BACKGROUND_OPACITY: &str = "backgroundOpacity";

/// Key for the float-rulers preference.
pub const PREF_FLOAT_RULERS: &str = "floatRulers";

/// Key for the group-rulers preference.
pub const PREF_GROUP_RULERS: &str = "groupRulers";

/// Key for the ruler-shadow preference.
pub const PREF_RULER_SHADOW: &str = "rulerShadow";

/// Key for the user unit screen value.
pub const PREF_USER_UNIT_SCREEN_VALUE: &str = "userUnitScreenValue";

/// Key for the unit of the user unit screen value.
pub const PREF_USER_UNIT_SCREEN_UNIT: &str = "userUnitScreenUnit";

/// Key for the user unit value.
pub const PREF_USER_UNIT_VALUE: &str = "userUnitValue";

/// Key for the user unit label.
pub const PREF_USER_UNIT_UNIT: &str = "userUnitUnit";

// === Validation Limits ===

/// Minimum opacity percentage.
pub const MIN_OPACITY: i32 = 0;

/// Maximum opacity percentage.
pub const MAX_OPACITY: i32 = 100;

// === Display Density ===

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Fallback horizontal density in pixels per inch when no display is known.
pub const DEFAULT_DPI: f64 = 72.0;

/// Fallback horizontal density in pixels per millimetre when no display is known.
pub const DEFAULT_DPMM: f64 = DEFAULT_DPI / MM_PER_INCH;

// === Storage ===

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "Free Ruler";

/// Preferences file name.
pub const PREFS_FILE_NAME: &str = "prefs.json";
