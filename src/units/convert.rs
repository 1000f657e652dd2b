//! Rescaling a stored value when its unit changes.

use super::display::DisplayInfo;
use super::unit::Unit;

/// Re-express `value`, given in `from`, in `to` so that the physical length
/// it stands for on `surface` stays the same.
///
/// Both scales are resolved against the same surface. With no surface the
/// default densities are used, so this never fails.
pub fn convert(value: f64, from: Unit, to: Unit, surface: Option<&DisplayInfo>) -> f64 {
    if from == to {
        return value;
    }
    let old_scale = from.scale(surface);
    let new_scale = to.scale(surface);
    value * old_scale / new_scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::{DEFAULT_DPI, DEFAULT_DPMM};

    #[test]
    fn test_same_unit_is_noop() {
        let s = DisplayInfo::from_dpmm(3.7, 3.7);
        for unit in Unit::ALL {
            assert_eq!(convert(12.345, unit, unit, Some(&s)), 12.345);
            assert_eq!(convert(12.345, unit, unit, None), 12.345);
        }
    }

    #[test]
    fn test_millimeters_to_pixels() {
        let s = DisplayInfo::from_dpmm(10.0, 10.0);
        assert_eq!(convert(100.0, Unit::Millimeters, Unit::Pixels, Some(&s)), 1000.0);
    }

    #[test]
    fn test_inches_to_pixels() {
        let s = DisplayInfo::from_dpi(96.0, 96.0);
        assert_eq!(convert(96.0, Unit::Inches, Unit::Pixels, Some(&s)), 9216.0);
    }

    #[test]
    fn test_pixels_to_millimeters() {
        let s = DisplayInfo::from_dpmm(10.0, 10.0);
        assert_eq!(convert(50.0, Unit::Pixels, Unit::Millimeters, Some(&s)), 5.0);
    }

    #[test]
    fn test_no_surface_uses_defaults() {
        let px = convert(1.0, Unit::Inches, Unit::Pixels, None);
        assert_eq!(px, DEFAULT_DPI);

        let mm = convert(DEFAULT_DPMM, Unit::Pixels, Unit::Millimeters, None);
        assert!((mm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inches_to_millimeters_is_physical() {
        let s = DisplayInfo::from_dpi(144.0, 144.0);
        let mm = convert(1.0, Unit::Inches, Unit::Millimeters, Some(&s));
        assert!((mm - 25.4).abs() < 1e-9);
    }
}
