//! The preferences window: AppKit view, action target and the session
//! tying them to a [`PreferencesController`](crate::controller::PreferencesController).

pub mod actions;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::PreferencesController;
use crate::error::{FreeRulerError, Result};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nsstring_id, sel, NSApp};
use crate::platform::macos::screens::ScreenDisplays;
use crate::prefs::PrefsStore;
use crate::storage::PrefsCache;

pub use actions::{create_target, install_session, pump_events, AppKitController};
pub use view::AppKitPreferencesView;

// NSEventModifierFlagCommand
const COMMAND_MASK: u64 = 1 << 20;

/// Build the preferences window from the cached prefs and show it.
///
/// # Safety
/// Must be called from the main thread with a valid autorelease pool.
pub unsafe fn open_preferences(cache: PrefsCache) -> Result<()> {
    let target = create_target().ok_or(FreeRulerError::Platform("action target"))?;
    let view = AppKitPreferencesView::build(target)
        .ok_or(FreeRulerError::Platform("preferences window"))?;
    install_main_menu(target).ok_or(FreeRulerError::Platform("main menu"))?;

    let store = PrefsStore::shared(cache.prefs().clone());
    let mut controller: AppKitController =
        PreferencesController::new(Rc::new(RefCell::new(view)), store, ScreenDisplays);
    controller.window_did_load();
    controller.show_window();

    install_session(controller, cache);
    pump_events();
    Ok(())
}

/// App menu with a single Quit item routed through the event bus.
unsafe fn install_main_menu(target: id) -> Option<()> {
    let menu_cls = get_class("NSMenu")?;
    let item_cls = get_class("NSMenuItem")?;

    let main_menu: id = msg_send![menu_cls, new];
    let app_item: id = msg_send![item_cls, new];
    let _: () = msg_send![main_menu, addItem: app_item];

    let app_menu: id = msg_send![menu_cls, new];
    let _: () = msg_send![app_item, setSubmenu: app_menu];

    let quit_item: id = msg_send![item_cls, alloc];
    let quit_item: id = msg_send![
        quit_item,
        initWithTitle: nsstring_id("Quit Free Ruler"),
        action: sel!(quit:),
        keyEquivalent: nsstring_id("q")
    ];
    let _: () = msg_send![quit_item, setKeyEquivalentModifierMask: COMMAND_MASK];
    let _: () = msg_send![quit_item, setTarget: target];
    let _: () = msg_send![app_menu, addItem: quit_item];

    let _: () = msg_send![NSApp(), setMainMenu: main_menu];
    Some(())
}
