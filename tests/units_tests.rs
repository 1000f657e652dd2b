//! Unit conversion across display densities.

use freeruler::model::constants::{DEFAULT_DPI, DEFAULT_DPMM};
use freeruler::units::display_for_frame;
use freeruler::{convert, DisplayInfo, Rect, Unit};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn ten_px_per_mm() -> DisplayInfo {
    DisplayInfo::from_dpmm(10.0, 10.0)
}

#[test]
fn same_unit_is_identity() {
    let surface = ten_px_per_mm();
    for unit in Unit::ALL {
        assert_eq!(convert(12.34, unit, unit, Some(&surface)), 12.34);
        assert_eq!(convert(12.34, unit, unit, None), 12.34);
    }
}

#[test]
fn millimeters_to_pixels_uses_surface_density() {
    let surface = ten_px_per_mm();
    assert!(approx_eq(
        convert(100.0, Unit::Millimeters, Unit::Pixels, Some(&surface)),
        1000.0
    ));
}

#[test]
fn inches_to_pixels_uses_surface_dpi() {
    let surface = DisplayInfo::from_dpi(96.0, 96.0);
    assert!(approx_eq(
        convert(96.0, Unit::Inches, Unit::Pixels, Some(&surface)),
        9216.0
    ));
}

#[test]
fn pixels_to_millimeters() {
    let surface = ten_px_per_mm();
    assert!(approx_eq(
        convert(50.0, Unit::Pixels, Unit::Millimeters, Some(&surface)),
        5.0
    ));
}

#[test]
fn no_surface_uses_default_densities() {
    assert!(approx_eq(
        convert(1.0, Unit::Inches, Unit::Pixels, None),
        DEFAULT_DPI
    ));
    assert!(approx_eq(
        convert(1.0, Unit::Millimeters, Unit::Pixels, None),
        DEFAULT_DPMM
    ));
}

#[test]
fn inches_to_millimeters_is_independent_of_density() {
    for surface in [Some(ten_px_per_mm()), Some(DisplayInfo::from_dpi(220.0, 220.0)), None] {
        assert!(approx_eq(
            convert(1.0, Unit::Inches, Unit::Millimeters, surface.as_ref()),
            25.4
        ));
    }
}

#[test]
fn conversion_round_trips() {
    let surface = DisplayInfo::from_dpi(109.0, 109.0);
    for from in Unit::ALL {
        for to in Unit::ALL {
            let there = convert(37.5, from, to, Some(&surface));
            let back = convert(there, to, from, Some(&surface));
            assert!(approx_eq(back, 37.5), "{from} -> {to} -> {from} gave {back}");
        }
    }
}

#[test]
fn scale_uses_horizontal_axis() {
    let surface = DisplayInfo::from_dpmm(4.0, 8.0);
    assert!(approx_eq(Unit::Millimeters.scale(Some(&surface)), 4.0));
    assert!(approx_eq(Unit::Pixels.scale(Some(&surface)), 1.0));
}

#[test]
fn physical_size_gives_density() {
    let info = DisplayInfo::from_physical_size(
        freeruler::units::Size::new(1440.0, 900.0),
        freeruler::units::Size::new(288.0, 180.0),
    )
    .unwrap();
    assert!(approx_eq(info.pixels_per_mm.width, 5.0));
    assert!(approx_eq(info.pixels_per_inch.width, 127.0));
}

#[test]
fn unknown_physical_size_gives_none() {
    let zero = freeruler::units::Size::new(0.0, 0.0);
    let pixels = freeruler::units::Size::new(1920.0, 1080.0);
    assert!(DisplayInfo::from_physical_size(pixels, zero).is_none());
}

#[test]
fn display_lookup_picks_overlapping_frame() {
    let left = DisplayInfo::from_dpmm(4.0, 4.0).with_frame(Rect::new(0.0, 0.0, 1440.0, 900.0));
    let right =
        DisplayInfo::from_dpmm(8.0, 8.0).with_frame(Rect::new(1440.0, 0.0, 2560.0, 1440.0));
    let displays = [left, right];

    let popup = Rect::new(1600.0, 300.0, 150.0, 26.0);
    assert_eq!(display_for_frame(&displays, &popup), Some(&right));

    let off_screen = Rect::new(-500.0, -500.0, 10.0, 10.0);
    assert!(display_for_frame(&displays, &off_screen).is_none());
}

#[test]
fn zero_pixel_size_gives_none() {
    let pixels = freeruler::units::Size::new(0.0, 1080.0);
    let mm = freeruler::units::Size::new(600.0, 340.0);
    assert!(DisplayInfo::from_physical_size(pixels, mm).is_none());
}
