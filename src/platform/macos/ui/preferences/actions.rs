//! Objective-C action target for the preferences window.
//!
//! AppKit controls send their actions to an instance of `FRPreferencesTarget`.
//! Each method forwards to the [`PreferencesController`] held in the
//! thread-local session, then drains the event bus.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::PreferencesController;
use crate::events::{self, AppEvent};
use crate::handlers::{dispatch_events, DispatchOutcome};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, sel, AnyObject, ClassBuilder, NSApp, Sel,
};
use crate::platform::macos::screens::ScreenDisplays;
use crate::storage::PrefsCache;

use super::view::AppKitPreferencesView;

pub type AppKitController = PreferencesController<AppKitPreferencesView, ScreenDisplays>;

struct Session {
    controller: AppKitController,
    cache: PrefsCache,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Hand the controller and its cache to the action target.
pub fn install_session(controller: AppKitController, cache: PrefsCache) {
    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(Session { controller, cache });
    });
}

fn with_controller(f: impl FnOnce(&AppKitController)) {
    SESSION.with(|cell| match cell.try_borrow() {
        Ok(session) => match session.as_ref() {
            Some(session) => f(&session.controller),
            None => log::warn!("preferences action without a session"),
        },
        Err(_) => log::warn!("preferences session busy, action dropped"),
    });
}

/// Dispatch everything queued on the event bus. Terminates the app on `Quit`.
pub fn pump_events() {
    let pending = events::drain_events();
    if pending.is_empty() {
        return;
    }

    let outcome = SESSION.with(|cell| match cell.try_borrow_mut() {
        Ok(mut session) => match session.as_mut() {
            Some(session) => {
                let prefs = Rc::clone(session.controller.prefs());
                let mut store = prefs.borrow_mut();
                dispatch_events(pending, &mut store, &mut session.cache)
            }
            None => DispatchOutcome::Continue,
        },
        Err(_) => {
            log::warn!("preferences session busy, {} events dropped", pending.len());
            DispatchOutcome::Continue
        }
    });

    if outcome == DispatchOutcome::Quit {
        log::info!("quitting");
        unsafe {
            let _: () = msg_send![NSApp(), terminate: nil];
        }
    }
}

/// Create an instance of the action target, registering its class on first use.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_target() -> Option<id> {
    let cls = match get_class("FRPreferencesTarget") {
        Some(cls) => cls,
        None => {
            let superclass = get_class("NSObject")?;
            let mut builder = ClassBuilder::new(c"FRPreferencesTarget", superclass)?;
            register_methods(&mut builder);
            builder.register()
        }
    };
    let target: id = msg_send![cls, new];
    if target == nil {
        None
    } else {
        Some(target)
    }
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    builder.add_method(
        sel!(setForegroundOpacity:),
        set_foreground_opacity as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setBackgroundOpacity:),
        set_background_opacity as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setFloatRulers:),
        set_float_rulers as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setGroupRulers:),
        set_group_rulers as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setRulerShadow:),
        set_ruler_shadow as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setUserScreenValue:),
        set_user_screen_value as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setUserScreenUnit:),
        set_user_screen_unit as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setUserUnitValue:),
        set_user_unit_value as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(setUserUnit:),
        set_user_unit as unsafe extern "C-unwind" fn(_, _, _),
    );

    // NSWindowDelegate
    builder.add_method(
        sel!(windowWillClose:),
        window_will_close as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Main menu
    builder.add_method(sel!(quit:), quit as unsafe extern "C-unwind" fn(_, _, _));
}

unsafe extern "C-unwind" fn set_foreground_opacity(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_foreground_opacity());
    pump_events();
}

unsafe extern "C-unwind" fn set_background_opacity(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_background_opacity());
    pump_events();
}

unsafe extern "C-unwind" fn set_float_rulers(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_float_rulers());
    pump_events();
}

unsafe extern "C-unwind" fn set_group_rulers(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_group_rulers());
    pump_events();
}

unsafe extern "C-unwind" fn set_ruler_shadow(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_ruler_shadow());
    pump_events();
}

unsafe extern "C-unwind" fn set_user_screen_value(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_user_unit_screen_value());
    pump_events();
}

unsafe extern "C-unwind" fn set_user_screen_unit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_user_unit_screen_unit());
    pump_events();
}

unsafe extern "C-unwind" fn set_user_unit_value(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_user_unit_value());
    pump_events();
}

unsafe extern "C-unwind" fn set_user_unit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    with_controller(|c| c.set_user_unit());
    pump_events();
}

unsafe extern "C-unwind" fn window_will_close(_this: &mut AnyObject, _cmd: Sel, _notification: id) {
    with_controller(|c| c.window_will_close());
    // The preferences window is the only window, closing it ends the app
    events::publish(AppEvent::Quit);
    pump_events();
}

unsafe extern "C-unwind" fn quit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    events::publish(AppEvent::Quit);
    pump_events();
}
