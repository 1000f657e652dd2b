//! NSScreen / CoreGraphics display queries.

use core_graphics::display::CGDisplay;

use super::bridge::{id, msg_send, nil, nsstring_id, NSRect};
use crate::units::{DisplayInfo, Rect, Size};

/// Get the stable CGDirectDisplayID for an NSScreen, 0 if unknown.
///
/// # Safety
/// `screen` must be a valid NSScreen pointer.
pub unsafe fn display_id_for_screen(screen: id) -> u32 {
    let desc: id = msg_send![screen, deviceDescription];
    let num: id = msg_send![desc, objectForKey: nsstring_id("NSScreenNumber")];
    if num == nil {
        0
    } else {
        let v: u64 = msg_send![num, unsignedIntegerValue];
        v as u32
    }
}

/// Physical size of a display in millimetres, as reported by EDID.
///
/// Zero for displays that do not report one (projectors, some virtual displays).
pub fn physical_size_mm(display_id: u32) -> Size {
    let size = CGDisplay::new(display_id).screen_size();
    Size::new(size.width, size.height)
}

pub fn rect_from_ns(r: NSRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}

/// Density of an NSScreen in points per millimetre, with its frame.
///
/// Rulers measure in points, so the density is the frame size over the
/// physical size. Returns `None` when the physical size is unknown.
///
/// # Safety
/// `screen` must be a valid NSScreen pointer.
pub unsafe fn display_info_for_screen(screen: id) -> Option<DisplayInfo> {
    let frame: NSRect = msg_send![screen, frame];
    let frame = rect_from_ns(frame);
    let mm = physical_size_mm(display_id_for_screen(screen));
    DisplayInfo::from_physical_size(Size::new(frame.width, frame.height), mm)
        .map(|info| info.with_frame(frame))
}
