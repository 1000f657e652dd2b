//! Thin layer over objc2 for untyped Cocoa messaging.
//!
//! The preferences window talks to AppKit through `msg_send!` on raw object
//! pointers. This module collects the aliases and helpers that style needs.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};
pub use objc2_app_kit::NSApplication;
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as a raw pointer.
///
/// The string is autoreleased, so it lives until the enclosing pool drains.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::autorelease_return(ns) as id
}

/// Copy an NSString into a Rust `String`. `nil` gives an empty string.
///
/// # Safety
/// `ns` must be nil or a valid NSString.
pub unsafe fn string_from_ns(ns: id) -> String {
    if ns.is_null() {
        return String::new();
    }
    let utf8: *const c_char = msg_send![ns, UTF8String];
    if utf8.is_null() {
        return String::new();
    }
    CStr::from_ptr(utf8).to_string_lossy().into_owned()
}

/// Look up a class by name.
pub fn get_class(name: &str) -> Option<&'static AnyClass> {
    let c_name = CString::new(name).ok()?;
    AnyClass::get(&c_name)
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    objc2::rc::autoreleasepool(|_| f())
}
