//! Preferences window controller.
//!
//! Binds the widgets of a [`PreferencesView`] to the shared [`PrefsStore`]:
//! action handlers copy a control's value into the store, and one store
//! listener per field copies the value back into its control.
//!
//! [`PrefsStore`]: crate::prefs::PrefsStore

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::view::{DisplayProvider, PreferencesView};
use crate::events::{self, AppEvent, EventPublisher};
use crate::model::{PrefField, Prefs};
use crate::prefs::{ObserverId, SharedPrefs};
use crate::units::{display_for_frame, DisplayInfo, Unit};

/// Text shown next to an opacity slider.
pub fn opacity_label(pct: i32) -> String {
    format!("{}%", pct)
}

/// Copy one preference into the control that displays it.
pub fn refresh_field<V: PreferencesView + ?Sized>(view: &mut V, prefs: &Prefs, field: PrefField) {
    match field {
        PrefField::ForegroundOpacity => view.show_foreground_opacity(
            prefs.foreground_opacity,
            &opacity_label(prefs.foreground_opacity),
        ),
        PrefField::BackgroundOpacity => view.show_background_opacity(
            prefs.background_opacity,
            &opacity_label(prefs.background_opacity),
        ),
        PrefField::FloatRulers => view.show_float_rulers(prefs.float_rulers),
        PrefField::GroupRulers => view.show_group_rulers(prefs.group_rulers),
        PrefField::RulerShadow => view.show_ruler_shadow(prefs.ruler_shadow),
        PrefField::UserUnitScreenValue => {
            view.show_user_unit_screen_value(prefs.user_unit_screen_value)
        }
        PrefField::UserUnitScreenUnit => {
            view.select_unit_index(prefs.user_unit_screen_unit.index())
        }
        PrefField::UserUnitValue => view.show_user_unit_value(prefs.user_unit_value),
        PrefField::UserUnitUnit => view.show_user_unit_unit(&prefs.user_unit_unit),
    }
}

pub struct PreferencesController<V: PreferencesView + 'static, D: DisplayProvider> {
    view: Rc<RefCell<V>>,
    prefs: SharedPrefs,
    displays: D,
    publisher: Option<EventPublisher>,
    observers: Vec<ObserverId>,
}

impl<V: PreferencesView + 'static, D: DisplayProvider> PreferencesController<V, D> {
    /// Create a controller that publishes on the global event bus.
    pub fn new(view: Rc<RefCell<V>>, prefs: SharedPrefs, displays: D) -> Self {
        Self {
            view,
            prefs,
            displays,
            publisher: events::publisher(),
            observers: Vec::new(),
        }
    }

    /// Publish lifecycle events on `publisher` instead of the global bus.
    pub fn with_publisher(mut self, publisher: EventPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn prefs(&self) -> &SharedPrefs {
        &self.prefs
    }

    // === Window lifecycle ===

    /// Fill the unit popup, subscribe to the store and show current values.
    pub fn window_did_load(&mut self) {
        let titles: Vec<&str> = Unit::ALL.iter().map(|u| u.title()).collect();
        self.view.borrow_mut().set_unit_titles(&titles);
        self.subscribe();
        self.update_view();
    }

    pub fn show_window(&self) {
        self.post(AppEvent::PreferencesWindowOpened);
        self.view.borrow_mut().present();
    }

    pub fn window_will_close(&self) {
        self.post(AppEvent::PreferencesWindowClosed);
    }

    fn post(&self, event: AppEvent) {
        log::debug!("{}", event.description());
        match &self.publisher {
            Some(publisher) => publisher.publish(event),
            None => events::publish(event),
        }
    }

    // === Observation ===

    /// Register one listener per field. Calling it again is a no-op.
    pub fn subscribe(&mut self) {
        if !self.observers.is_empty() {
            return;
        }
        let mut store = self.prefs.borrow_mut();
        for field in PrefField::ALL {
            let view: Weak<RefCell<V>> = Rc::downgrade(&self.view);
            let id = store.observe(field, move |prefs| {
                if let Some(view) = view.upgrade() {
                    refresh_field(&mut *view.borrow_mut(), prefs, field);
                }
            });
            self.observers.push(id);
        }
    }

    /// Remove this controller's listeners from the store.
    pub fn unsubscribe(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        match self.prefs.try_borrow_mut() {
            Ok(mut store) => {
                for id in self.observers.drain(..) {
                    store.remove_observer(id);
                }
            }
            Err(_) => log::warn!("prefs store busy, preferences listeners left registered"),
        }
    }

    // === Actions ===

    pub fn set_foreground_opacity(&self) {
        let pct = self.view.borrow().foreground_opacity_slider();
        log::debug!("foreground opacity {}", pct);
        if !self.prefs.borrow_mut().set_foreground_opacity(pct) {
            self.refresh(PrefField::ForegroundOpacity);
        }
    }

    pub fn set_background_opacity(&self) {
        let pct = self.view.borrow().background_opacity_slider();
        log::debug!("background opacity {}", pct);
        if !self.prefs.borrow_mut().set_background_opacity(pct) {
            self.refresh(PrefField::BackgroundOpacity);
        }
    }

    pub fn set_float_rulers(&self) {
        let on = self.view.borrow().float_rulers_checkbox();
        self.prefs.borrow_mut().set_float_rulers(on);
    }

    pub fn set_group_rulers(&self) {
        let on = self.view.borrow().group_rulers_checkbox();
        self.prefs.borrow_mut().set_group_rulers(on);
    }

    pub fn set_ruler_shadow(&self) {
        let on = self.view.borrow().ruler_shadow_checkbox();
        self.prefs.borrow_mut().set_ruler_shadow(on);
    }

    pub fn set_user_unit_screen_value(&self) {
        let value = self.view.borrow().user_unit_screen_value_field();
        if !self.prefs.borrow_mut().set_user_unit_screen_value(value) {
            // Rejected or unchanged: put the stored value back in the field
            self.refresh(PrefField::UserUnitScreenValue);
        }
    }

    /// The unit popup changed: switch the unit and rescale the value so it
    /// keeps covering the same length on the display under the popup.
    pub fn set_user_unit_screen_unit(&self) {
        let index = self.view.borrow().selected_unit_index();
        let unit = Unit::from_index(index);
        let screen = self.screen();
        if screen.is_none() {
            log::debug!("no display under the unit popup, using default density");
        }
        self.prefs
            .borrow_mut()
            .switch_user_unit_screen_unit(unit, screen.as_ref());
        // Invalid index or refused switch: show the stored unit again
        let stored = self.prefs.borrow().prefs().user_unit_screen_unit;
        if index != stored.index() {
            self.refresh(PrefField::UserUnitScreenUnit);
        }
    }

    pub fn set_user_unit_value(&self) {
        let value = self.view.borrow().user_unit_value_field();
        if !self.prefs.borrow_mut().set_user_unit_value(value) {
            self.refresh(PrefField::UserUnitValue);
        }
    }

    pub fn set_user_unit(&self) {
        let name = self.view.borrow().user_unit_unit_field();
        self.prefs.borrow_mut().set_user_unit_unit(&name);
    }

    // === Model -> view ===

    pub fn update_view(&self) {
        for field in PrefField::ALL {
            self.refresh(field);
        }
    }

    pub fn refresh(&self, field: PrefField) {
        let store = self.prefs.borrow();
        refresh_field(&mut *self.view.borrow_mut(), store.prefs(), field);
    }

    /// Display under the unit popup, if the window is on screen.
    pub fn screen(&self) -> Option<DisplayInfo> {
        let frame = self.view.borrow().unit_popup_frame()?;
        let displays = self.displays.displays();
        display_for_frame(&displays, &frame).copied()
    }
}

impl<V: PreferencesView + 'static, D: DisplayProvider> Drop for PreferencesController<V, D> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
