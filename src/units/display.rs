//! Display geometry and physical density.
//!
//! Coordinates are global screen coordinates in points, as reported by the
//! platform layer. Nothing here touches the platform.

use crate::model::constants::MM_PER_INCH;

/// Width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with its origin at the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the two rectangles overlap with a non-zero area.
    ///
    /// Touching edges do not count, and an empty rectangle intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A display surface: where it is and how dense its pixels are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayInfo {
    /// Frame in global screen coordinates.
    pub frame: Rect,
    /// Pixels per millimetre along each axis.
    pub pixels_per_mm: Size,
    /// Pixels per inch along each axis.
    pub pixels_per_inch: Size,
}

impl DisplayInfo {
    /// Build from a density in pixels per millimetre.
    ///
    /// The per-inch density is derived; the per-millimetre one is kept as given.
    pub fn from_dpmm(width: f64, height: f64) -> Self {
        Self {
            frame: Rect::default(),
            pixels_per_mm: Size::new(width, height),
            pixels_per_inch: Size::new(width * MM_PER_INCH, height * MM_PER_INCH),
        }
    }

    /// Build from a density in pixels per inch.
    ///
    /// The per-millimetre density is derived; the per-inch one is kept as given.
    pub fn from_dpi(width: f64, height: f64) -> Self {
        Self {
            frame: Rect::default(),
            pixels_per_mm: Size::new(width / MM_PER_INCH, height / MM_PER_INCH),
            pixels_per_inch: Size::new(width, height),
        }
    }

    /// Build from a pixel resolution and a physical size in millimetres.
    ///
    /// Returns `None` when either size is unknown (zero or negative), which
    /// is what the platform reports for some virtual displays.
    pub fn from_physical_size(pixels: Size, millimeters: Size) -> Option<Self> {
        if millimeters.width <= 0.0 || millimeters.height <= 0.0 {
            return None;
        }
        if pixels.width <= 0.0 || pixels.height <= 0.0 {
            return None;
        }
        Some(Self::from_dpmm(
            pixels.width / millimeters.width,
            pixels.height / millimeters.height,
        ))
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }
}

/// First display whose frame overlaps `frame`.
pub fn display_for_frame<'a>(displays: &'a [DisplayInfo], frame: &Rect) -> Option<&'a DisplayInfo> {
    displays.iter().find(|d| d.frame.intersects(frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_empty_rect_intersects_nothing() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 20.0);
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_from_dpi_keeps_dpi_exact() {
        let d = DisplayInfo::from_dpi(96.0, 96.0);
        assert_eq!(d.pixels_per_inch.width, 96.0);
        assert!((d.pixels_per_mm.width - 96.0 / 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_from_physical_size() {
        let d = DisplayInfo::from_physical_size(Size::new(2560.0, 1600.0), Size::new(256.0, 160.0))
            .expect("known physical size");
        assert_eq!(d.pixels_per_mm, Size::new(10.0, 10.0));
    }

    #[test]
    fn test_from_physical_size_unknown() {
        assert!(DisplayInfo::from_physical_size(Size::new(1920.0, 1080.0), Size::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_display_for_frame_picks_first_overlap() {
        let left = DisplayInfo::from_dpmm(4.0, 4.0).with_frame(Rect::new(0.0, 0.0, 1440.0, 900.0));
        let right =
            DisplayInfo::from_dpmm(8.0, 8.0).with_frame(Rect::new(1440.0, 0.0, 2560.0, 1440.0));
        let displays = [left, right];

        let popup = Rect::new(1600.0, 300.0, 120.0, 24.0);
        let found = display_for_frame(&displays, &popup).expect("popup is on the right display");
        assert_eq!(found.pixels_per_mm.width, 8.0);

        let off_screen = Rect::new(-500.0, -500.0, 10.0, 10.0);
        assert!(display_for_frame(&displays, &off_screen).is_none());
    }
}
