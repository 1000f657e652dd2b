//! Attached displays as seen by AppKit.

use crate::controller::DisplayProvider;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send};
use crate::platform::macos::ffi::display_info_for_screen;
use crate::units::DisplayInfo;

/// Reads `+[NSScreen screens]` on every call, so hot-plugged displays and
/// resolution changes are picked up without invalidation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScreenDisplays;

impl DisplayProvider for ScreenDisplays {
    fn displays(&self) -> Vec<DisplayInfo> {
        let Some(cls) = get_class("NSScreen") else {
            return Vec::new();
        };
        unsafe {
            let screens: id = msg_send![cls, screens];
            let count: usize = msg_send![screens, count];
            let mut out = Vec::with_capacity(count);
            for i in 0..count {
                let screen: id = msg_send![screens, objectAtIndex: i];
                match display_info_for_screen(screen) {
                    Some(info) => out.push(info),
                    None => log::debug!("screen {} has no physical size, skipped", i),
                }
            }
            out
        }
    }
}
