//! Measurement unit tag.

use serde::{Deserialize, Serialize};

use super::display::DisplayInfo;
use crate::model::constants::{DEFAULT_DPI, DEFAULT_DPMM};

/// Unit a measurement value is expressed in.
///
/// Persisted as its raw integer (`0`, `1`, `2`), which is also the index of
/// the entry in the unit popup. Raw values outside that range read back as
/// [`Unit::Pixels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Unit {
    #[default]
    Pixels,
    Millimeters,
    Inches,
}

impl Unit {
    /// All units in popup order.
    pub const ALL: [Unit; 3] = [Unit::Pixels, Unit::Millimeters, Unit::Inches];

    /// Map a raw tag or popup index to a unit.
    ///
    /// Unknown values fall back to `Pixels`.
    pub fn from_index(index: i64) -> Unit {
        match index {
            0 => Unit::Pixels,
            1 => Unit::Millimeters,
            2 => Unit::Inches,
            other => {
                log::warn!("unknown unit tag {other}, treating as pixels");
                Unit::Pixels
            }
        }
    }

    /// Raw tag, equal to the popup index.
    pub fn index(self) -> i64 {
        match self {
            Unit::Pixels => 0,
            Unit::Millimeters => 1,
            Unit::Inches => 2,
        }
    }

    /// Menu title.
    pub fn title(self) -> &'static str {
        match self {
            Unit::Pixels => "Pixels",
            Unit::Millimeters => "Millimeters",
            Unit::Inches => "Inches",
        }
    }

    /// Pixels per one of this unit on `surface`, horizontal axis.
    ///
    /// Without a surface the default densities apply.
    pub fn scale(self, surface: Option<&DisplayInfo>) -> f64 {
        match self {
            Unit::Pixels => 1.0,
            Unit::Millimeters => surface.map_or(DEFAULT_DPMM, |s| s.pixels_per_mm.width),
            Unit::Inches => surface.map_or(DEFAULT_DPI, |s| s.pixels_per_inch.width),
        }
    }
}

impl From<i64> for Unit {
    fn from(raw: i64) -> Self {
        Unit::from_index(raw)
    }
}

impl From<Unit> for i64 {
    fn from(unit: Unit) -> Self {
        unit.index()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
