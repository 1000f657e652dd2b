//! Ruler preferences (pure Rust, no FFI).
//!
//! This module defines the preferences record shared by the rulers and the
//! preferences window, and the field tags used to observe it.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::units::Unit;

/// Complete preferences record, serializable to/from the prefs file.
///
/// Serialized keys are the camelCase names in [`PrefField::key`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prefs {
    /// Ruler foreground opacity [0, 100].
    pub foreground_opacity: i32,
    /// Ruler background opacity [0, 100].
    pub background_opacity: i32,
    /// Keep rulers above other windows.
    pub float_rulers: bool,
    /// Move both rulers together.
    pub group_rulers: bool,
    /// Draw a drop shadow under rulers.
    pub ruler_shadow: bool,
    /// Screen-side amount of the user unit, in `user_unit_screen_unit`.
    pub user_unit_screen_value: f64,
    /// Unit of `user_unit_screen_value`.
    pub user_unit_screen_unit: Unit,
    /// How many user units `user_unit_screen_value` stands for.
    pub user_unit_value: f64,
    /// Label of the user unit.
    pub user_unit_unit: String,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            foreground_opacity: DEFAULT_FOREGROUND_OPACITY,
            background_opacity: DEFAULT_BACKGROUND_OPACITY,
            float_rulers: DEFAULT_FLOAT_RULERS,
            group_rulers: DEFAULT_GROUP_RULERS,
            ruler_shadow: DEFAULT_RULER_SHADOW,
            user_unit_screen_value: DEFAULT_USER_UNIT_SCREEN_VALUE,
            user_unit_screen_unit: Unit::Pixels,
            user_unit_value: DEFAULT_USER_UNIT_VALUE,
            user_unit_unit: DEFAULT_USER_UNIT_NAME.to_string(),
        }
    }
}

impl Prefs {
    /// Clamps opacities and replaces non-finite numbers with their defaults.
    pub fn validate(&mut self) {
        self.foreground_opacity = clamp_opacity(self.foreground_opacity);
        self.background_opacity = clamp_opacity(self.background_opacity);
        if !self.user_unit_screen_value.is_finite() {
            self.user_unit_screen_value = DEFAULT_USER_UNIT_SCREEN_VALUE;
        }
        if !self.user_unit_value.is_finite() {
            self.user_unit_value = DEFAULT_USER_UNIT_VALUE;
        }
    }

    /// Fields whose values differ between `self` and `other`, in declaration order.
    pub fn changed_fields(&self, other: &Prefs) -> Vec<PrefField> {
        PrefField::ALL
            .into_iter()
            .filter(|field| !self.field_eq(other, *field))
            .collect()
    }

    fn field_eq(&self, other: &Prefs, field: PrefField) -> bool {
        match field {
            PrefField::ForegroundOpacity => self.foreground_opacity == other.foreground_opacity,
            PrefField::BackgroundOpacity => self.background_opacity == other.background_opacity,
            PrefField::FloatRulers => self.float_rulers == other.float_rulers,
            PrefField::GroupRulers => self.group_rulers == other.group_rulers,
            PrefField::RulerShadow => self.ruler_shadow == other.ruler_shadow,
            PrefField::UserUnitScreenValue => {
                self.user_unit_screen_value == other.user_unit_screen_value
            }
            PrefField::UserUnitScreenUnit => {
                self.user_unit_screen_unit == other.user_unit_screen_unit
            }
            PrefField::UserUnitValue => self.user_unit_value == other.user_unit_value,
            PrefField::UserUnitUnit => self.user_unit_unit == other.user_unit_unit,
        }
    }
}

/// Clamp an opacity percentage to [MIN_OPACITY, MAX_OPACITY].
pub fn clamp_opacity(pct: i32) -> i32 {
    pct.clamp(MIN_OPACITY, MAX_OPACITY)
}

/// Observable preference fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefField {
    ForegroundOpacity,
    BackgroundOpacity,
    FloatRulers,
    GroupRulers,
    RulerShadow,
    UserUnitScreenValue,
    UserUnitScreenUnit,
    UserUnitValue,
    UserUnitUnit,
}

impl PrefField {
    /// Every field, in declaration order.
    pub const ALL: [PrefField; 9] = [
        PrefField::ForegroundOpacity,
        PrefField::BackgroundOpacity,
        PrefField::FloatRulers,
        PrefField::GroupRulers,
        PrefField::RulerShadow,
        PrefField::UserUnitScreenValue,
        PrefField::UserUnitScreenUnit,
        PrefField::UserUnitValue,
        PrefField::UserUnitUnit,
    ];

    /// Persisted key name.
    pub fn key(self) -> &'static str {
        match self {
            PrefField::ForegroundOpacity => PREF_FOREGROUND_OPACITY,
            PrefField::BackgroundOpacity => PREF_BACKGROUND_OPACITY,
            PrefField::FloatRulers => PREF_FLOAT_RULERS,
            PrefField::GroupRulers => PREF_GROUP_RULERS,
            PrefField::RulerShadow => PREF_RULER_SHADOW,
            PrefField::UserUnitScreenValue => PREF_USER_UNIT_SCREEN_VALUE,
            PrefField::UserUnitScreenUnit => PREF_USER_UNIT_SCREEN_UNIT,
            PrefField::UserUnitValue => PREF_USER_UNIT_VALUE,
            PrefField::UserUnitUnit => PREF_USER_UNIT_UNIT,
        }
    }

    /// Position in [`PrefField::ALL`], used to index listener tables.
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PrefField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_follow_declaration_order() {
        for (i, field) in PrefField::ALL.iter().enumerate() {
            assert_eq!(field.slot(), i);
        }
    }

    #[test]
    fn test_serialized_keys_match_field_keys() {
        let json = serde_json::to_value(Prefs::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), PrefField::ALL.len());
        for field in PrefField::ALL {
            assert!(obj.contains_key(field.key()), "missing key {}", field.key());
        }
    }

    #[test]
    fn test_changed_fields() {
        let a = Prefs::default();
        let mut b = a.clone();
        b.ruler_shadow = !b.ruler_shadow;
        b.user_unit_unit = "tiles".into();
        assert_eq!(
            a.changed_fields(&b),
            vec![PrefField::RulerShadow, PrefField::UserUnitUnit]
        );
        assert!(a.changed_fields(&a).is_empty());
    }
}
