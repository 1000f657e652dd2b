//! AppKit widgets of the preferences window.

use crate::controller::PreferencesView;
use crate::model::constants::{MAX_OPACITY, MIN_OPACITY};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, string_from_ns, NSApp, NSPoint, NSRect,
    NSSize, Sel, NO, YES,
};
use crate::platform::macos::ffi::rect_from_ns;
use crate::units::Rect;

// NSTitledWindowMask | NSClosableWindowMask
const WINDOW_STYLE: u64 = 1 | 2;
const NS_BACKING_STORE_BUFFERED: u64 = 2;
const NS_BUTTON_TYPE_SWITCH: u64 = 3;
const NS_CONTROL_STATE_ON: isize = 1;

const WIDTH: f64 = 460.0;
const HEIGHT: f64 = 300.0;

/// Handles to every control the controller reads or writes.
pub struct AppKitPreferencesView {
    pub window: id,
    foreground_slider: id,
    foreground_label: id,
    background_slider: id,
    background_label: id,
    float_checkbox: id,
    group_checkbox: id,
    shadow_checkbox: id,
    screen_value_field: id,
    screen_unit_popup: id,
    user_value_field: id,
    user_unit_field: id,
}

impl AppKitPreferencesView {
    /// Build the window and its controls, wiring every action to `target`.
    ///
    /// Returns `None` if AppKit classes cannot be found.
    ///
    /// # Safety
    /// Must be called from the main thread with a valid autorelease pool.
    /// `target` must respond to every action selector used below.
    pub unsafe fn build(target: id) -> Option<Self> {
        let window_cls = get_class("NSWindow")?;
        let window: id = msg_send![window_cls, alloc];
        let window: id = msg_send![
            window,
            initWithContentRect: NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(WIDTH, HEIGHT)),
            styleMask: WINDOW_STYLE,
            backing: NS_BACKING_STORE_BUFFERED,
            defer: NO
        ];
        let _: () = msg_send![window, setTitle: nsstring_id("Preferences")];
        let _: () = msg_send![window, setReleasedWhenClosed: NO];
        let _: () = msg_send![window, setMovableByWindowBackground: YES];
        let _: () = msg_send![window, setDelegate: target];
        let content: id = msg_send![window, contentView];

        let h = HEIGHT;
        add(content, label(20.0, h - 40.0, 160.0, "Foreground opacity:")?);
        let foreground_slider = slider(180.0, h - 42.0, target, sel!(setForegroundOpacity:))?;
        add(content, foreground_slider);
        let foreground_label = label(400.0, h - 40.0, 50.0, "")?;
        add(content, foreground_label);

        add(content, label(20.0, h - 72.0, 160.0, "Background opacity:")?);
        let background_slider = slider(180.0, h - 74.0, target, sel!(setBackgroundOpacity:))?;
        add(content, background_slider);
        let background_label = label(400.0, h - 72.0, 50.0, "")?;
        add(content, background_label);

        let float_checkbox = checkbox(
            20.0,
            h - 110.0,
            "Float rulers above other windows",
            target,
            sel!(setFloatRulers:),
        )?;
        add(content, float_checkbox);
        let group_checkbox =
            checkbox(20.0, h - 136.0, "Group rulers", target, sel!(setGroupRulers:))?;
        add(content, group_checkbox);
        let shadow_checkbox =
            checkbox(20.0, h - 162.0, "Ruler shadow", target, sel!(setRulerShadow:))?;
        add(content, shadow_checkbox);

        add(content, label(20.0, h - 205.0, 160.0, "Custom unit:")?);
        let screen_value_field =
            text_field(180.0, h - 207.0, 80.0, target, sel!(setUserScreenValue:))?;
        add(content, screen_value_field);

        let popup_cls = get_class("NSPopUpButton")?;
        let screen_unit_popup: id = msg_send![popup_cls, alloc];
        let screen_unit_popup: id = msg_send![
            screen_unit_popup,
            initWithFrame: NSRect::new(NSPoint::new(270.0, h - 210.0), NSSize::new(150.0, 26.0)),
            pullsDown: NO
        ];
        let _: () = msg_send![screen_unit_popup, setTarget: target];
        let _: () = msg_send![screen_unit_popup, setAction: sel!(setUserScreenUnit:)];
        add(content, screen_unit_popup);

        add(content, label(150.0, h - 240.0, 24.0, "=")?);
        let user_value_field = text_field(180.0, h - 242.0, 80.0, target, sel!(setUserUnitValue:))?;
        add(content, user_value_field);
        let user_unit_field = text_field(270.0, h - 242.0, 150.0, target, sel!(setUserUnit:))?;
        add(content, user_unit_field);

        Some(Self {
            window,
            foreground_slider,
            foreground_label,
            background_slider,
            background_label,
            float_checkbox,
            group_checkbox,
            shadow_checkbox,
            screen_value_field,
            screen_unit_popup,
            user_value_field,
            user_unit_field,
        })
    }
}

unsafe fn add(content: id, control: id) {
    let _: () = msg_send![content, addSubview: control];
}

unsafe fn label(x: f64, y: f64, w: f64, text: &str) -> Option<id> {
    let lbl: id = msg_send![get_class("NSTextField")?, alloc];
    let lbl: id = msg_send![lbl, initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(w, 20.0))];
    let _: () = msg_send![lbl, setBezeled: NO];
    let _: () = msg_send![lbl, setDrawsBackground: NO];
    let _: () = msg_send![lbl, setEditable: NO];
    let _: () = msg_send![lbl, setSelectable: NO];
    let _: () = msg_send![lbl, setStringValue: nsstring_id(text)];
    Some(lbl)
}

unsafe fn slider(x: f64, y: f64, target: id, action: Sel) -> Option<id> {
    let s: id = msg_send![get_class("NSSlider")?, alloc];
    let s: id = msg_send![s, initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(210.0, 24.0))];
    let _: () = msg_send![s, setMinValue: MIN_OPACITY as f64];
    let _: () = msg_send![s, setMaxValue: MAX_OPACITY as f64];
    let _: () = msg_send![s, setContinuous: YES];
    let _: () = msg_send![s, setTarget: target];
    let _: () = msg_send![s, setAction: action];
    Some(s)
}

unsafe fn checkbox(x: f64, y: f64, title: &str, target: id, action: Sel) -> Option<id> {
    let b: id = msg_send![get_class("NSButton")?, alloc];
    let b: id = msg_send![b, initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(320.0, 22.0))];
    let _: () = msg_send![b, setButtonType: NS_BUTTON_TYPE_SWITCH];
    let _: () = msg_send![b, setTitle: nsstring_id(title)];
    let _: () = msg_send![b, setTarget: target];
    let _: () = msg_send![b, setAction: action];
    Some(b)
}

unsafe fn text_field(x: f64, y: f64, w: f64, target: id, action: Sel) -> Option<id> {
    let tf: id = msg_send![get_class("NSTextField")?, alloc];
    let tf: id = msg_send![tf, initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(w, 24.0))];
    let _: () = msg_send![tf, setBezeled: YES];
    let _: () = msg_send![tf, setDrawsBackground: YES];
    let _: () = msg_send![tf, setEditable: YES];
    let _: () = msg_send![tf, setSelectable: YES];
    let _: () = msg_send![tf, setTarget: target];
    let _: () = msg_send![tf, setAction: action];
    Some(tf)
}

impl PreferencesView for AppKitPreferencesView {
    fn foreground_opacity_slider(&self) -> i32 {
        unsafe {
            let v: isize = msg_send![self.foreground_slider, integerValue];
            v as i32
        }
    }

    fn background_opacity_slider(&self) -> i32 {
        unsafe {
            let v: isize = msg_send![self.background_slider, integerValue];
            v as i32
        }
    }

    fn float_rulers_checkbox(&self) -> bool {
        unsafe { checkbox_state(self.float_checkbox) }
    }

    fn group_rulers_checkbox(&self) -> bool {
        unsafe { checkbox_state(self.group_checkbox) }
    }

    fn ruler_shadow_checkbox(&self) -> bool {
        unsafe { checkbox_state(self.shadow_checkbox) }
    }

    fn user_unit_screen_value_field(&self) -> f64 {
        unsafe { msg_send![self.screen_value_field, doubleValue] }
    }

    fn selected_unit_index(&self) -> i64 {
        unsafe {
            let idx: isize = msg_send![self.screen_unit_popup, indexOfSelectedItem];
            idx as i64
        }
    }

    fn user_unit_value_field(&self) -> f64 {
        unsafe { msg_send![self.user_value_field, doubleValue] }
    }

    fn user_unit_unit_field(&self) -> String {
        unsafe {
            let s: id = msg_send![self.user_unit_field, stringValue];
            string_from_ns(s)
        }
    }

    fn unit_popup_frame(&self) -> Option<Rect> {
        unsafe {
            let window: id = msg_send![self.screen_unit_popup, window];
            if window == nil {
                return None;
            }
            let bounds: NSRect = msg_send![self.screen_unit_popup, bounds];
            let in_window: NSRect = msg_send![self.screen_unit_popup, convertRect: bounds, toView: nil];
            let on_screen: NSRect = msg_send![window, convertRectToScreen: in_window];
            Some(rect_from_ns(on_screen))
        }
    }

    fn set_unit_titles(&mut self, titles: &[&str]) {
        unsafe {
            let _: () = msg_send![self.screen_unit_popup, removeAllItems];
            for title in titles {
                let _: () = msg_send![self.screen_unit_popup, addItemWithTitle: nsstring_id(title)];
            }
        }
    }

    fn show_foreground_opacity(&mut self, pct: i32, label: &str) {
        unsafe {
            let _: () = msg_send![self.foreground_slider, setIntegerValue: pct as isize];
            let _: () = msg_send![self.foreground_label, setStringValue: nsstring_id(label)];
        }
    }

    fn show_background_opacity(&mut self, pct: i32, label: &str) {
        unsafe {
            let _: () = msg_send![self.background_slider, setIntegerValue: pct as isize];
            let _: () = msg_send![self.background_label, setStringValue: nsstring_id(label)];
        }
    }

    fn show_float_rulers(&mut self, on: bool) {
        unsafe { set_checkbox_state(self.float_checkbox, on) }
    }

    fn show_group_rulers(&mut self, on: bool) {
        unsafe { set_checkbox_state(self.group_checkbox, on) }
    }

    fn show_ruler_shadow(&mut self, on: bool) {
        unsafe { set_checkbox_state(self.shadow_checkbox, on) }
    }

    fn show_user_unit_screen_value(&mut self, value: f64) {
        unsafe {
            let _: () = msg_send![self.screen_value_field, setDoubleValue: value];
        }
    }

    fn select_unit_index(&mut self, index: i64) {
        unsafe {
            let _: () = msg_send![self.screen_unit_popup, selectItemAtIndex: index as isize];
        }
    }

    fn show_user_unit_value(&mut self, value: f64) {
        unsafe {
            let _: () = msg_send![self.user_value_field, setDoubleValue: value];
        }
    }

    fn show_user_unit_unit(&mut self, name: &str) {
        unsafe {
            let _: () = msg_send![self.user_unit_field, setStringValue: nsstring_id(name)];
        }
    }

    fn present(&mut self) {
        unsafe {
            let app: id = NSApp();
            let _: () = msg_send![app, activateIgnoringOtherApps: YES];
            let _: () = msg_send![self.window, center];
            let _: () = msg_send![self.window, makeKeyAndOrderFront: nil];
        }
    }
}

unsafe fn checkbox_state(button: id) -> bool {
    let state: isize = msg_send![button, state];
    state == NS_CONTROL_STATE_ON
}

unsafe fn set_checkbox_state(button: id, on: bool) {
    let state: isize = if on { NS_CONTROL_STATE_ON } else { 0 };
    let _: () = msg_send![button, setState: state];
}
