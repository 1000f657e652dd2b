//! Observable preferences store.
//!
//! Holds the [`Prefs`] record and a fixed table of listeners, one list per
//! [`PrefField`]. Every setter validates its input, writes the field and, when
//! the stored value actually changed, calls the listeners of that field with
//! the updated record.
//!
//! Listeners run synchronously inside the setter, while the store is borrowed.
//! They may read the record they are handed but must not write back into the
//! store.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{clamp_opacity, PrefField, Prefs};
use crate::units::{convert, DisplayInfo, Unit};

/// Callback invoked with the updated record.
pub type Listener = Box<dyn FnMut(&Prefs)>;

/// Store shared between the controller, the rulers and the dispatcher.
pub type SharedPrefs = Rc<RefCell<PrefsStore>>;

/// Handle returned by [`PrefsStore::observe`], used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub struct PrefsStore {
    prefs: Prefs,
    listeners: [Vec<(ObserverId, Listener)>; PrefField::ALL.len()],
    next_id: u64,
    dirty: bool,
}

impl PrefsStore {
    pub fn new(mut prefs: Prefs) -> Self {
        prefs.validate();
        Self {
            prefs,
            listeners: std::array::from_fn(|_| Vec::new()),
            next_id: 0,
            dirty: false,
        }
    }

    /// Wrap a new store for sharing on the UI thread.
    pub fn shared(prefs: Prefs) -> SharedPrefs {
        Rc::new(RefCell::new(Self::new(prefs)))
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    // === Observation ===

    /// Register `listener` for changes of `field`.
    pub fn observe<F>(&mut self, field: PrefField, listener: F) -> ObserverId
    where
        F: FnMut(&Prefs) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.listeners[field.slot()].push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        for list in self.listeners.iter_mut() {
            if let Some(pos) = list.iter().position(|(lid, _)| *lid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn observer_count(&self) -> usize {
        self.listeners.iter().map(Vec::len).sum()
    }

    fn notify(&mut self, field: PrefField) {
        log::trace!("pref changed: {}", field);
        let prefs = &self.prefs;
        for (_, listener) in self.listeners[field.slot()].iter_mut() {
            listener(prefs);
        }
    }

    fn assign<T: PartialEq>(
        &mut self,
        field: PrefField,
        value: T,
        slot: fn(&mut Prefs) -> &mut T,
    ) -> bool {
        let target = slot(&mut self.prefs);
        if *target == value {
            return false;
        }
        *target = value;
        self.dirty = true;
        self.notify(field);
        true
    }

    /// Whether any field changed since the last call. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Swap in a whole record, notifying every field that differs.
    pub fn replace(&mut self, mut prefs: Prefs) {
        prefs.validate();
        let changed = self.prefs.changed_fields(&prefs);
        if changed.is_empty() {
            return;
        }
        self.prefs = prefs;
        self.dirty = true;
        for field in changed {
            self.notify(field);
        }
    }

    // === Setters ===
    //
    // Each returns true when the stored value changed.

    pub fn set_foreground_opacity(&mut self, pct: i32) -> bool {
        self.assign(PrefField::ForegroundOpacity, clamp_opacity(pct), |p| {
            &mut p.foreground_opacity
        })
    }

    pub fn set_background_opacity(&mut self, pct: i32) -> bool {
        self.assign(PrefField::BackgroundOpacity, clamp_opacity(pct), |p| {
            &mut p.background_opacity
        })
    }

    pub fn set_float_rulers(&mut self, on: bool) -> bool {
        self.assign(PrefField::FloatRulers, on, |p| &mut p.float_rulers)
    }

    pub fn set_group_rulers(&mut self, on: bool) -> bool {
        self.assign(PrefField::GroupRulers, on, |p| &mut p.group_rulers)
    }

    pub fn set_ruler_shadow(&mut self, on: bool) -> bool {
        self.assign(PrefField::RulerShadow, on, |p| &mut p.ruler_shadow)
    }

    /// Non-finite values are rejected and leave the field untouched.
    pub fn set_user_unit_screen_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            log::warn!("ignoring non-finite user unit screen value {value}");
            return false;
        }
        self.assign(PrefField::UserUnitScreenValue, value, |p| {
            &mut p.user_unit_screen_value
        })
    }

    /// Changes only the tag; see [`Self::switch_user_unit_screen_unit`] to
    /// keep the represented length.
    pub fn set_user_unit_screen_unit(&mut self, unit: Unit) -> bool {
        self.assign(PrefField::UserUnitScreenUnit, unit, |p| {
            &mut p.user_unit_screen_unit
        })
    }

    /// Non-finite values are rejected and leave the field untouched.
    pub fn set_user_unit_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            log::warn!("ignoring non-finite user unit value {value}");
            return false;
        }
        self.assign(PrefField::UserUnitValue, value, |p| &mut p.user_unit_value)
    }

    pub fn set_user_unit_unit(&mut self, name: &str) -> bool {
        if self.prefs.user_unit_unit == name {
            return false;
        }
        self.assign(PrefField::UserUnitUnit, name.to_string(), |p| {
            &mut p.user_unit_unit
        })
    }

    /// Move the user unit screen value to `unit`, rescaling it so it still
    /// covers the same length on `surface`.
    ///
    /// The unit tag is written first, then the value, so value listeners
    /// already see the new unit. If either density is unusable or the
    /// rescaled value is not finite, nothing changes. Returns the stored value.
    pub fn switch_user_unit_screen_unit(&mut self, unit: Unit, surface: Option<&DisplayInfo>) -> f64 {
        let from = self.prefs.user_unit_screen_unit;
        let old = self.prefs.user_unit_screen_value;
        let usable = |scale: f64| scale.is_finite() && scale > 0.0;
        if !usable(from.scale(surface)) || !usable(unit.scale(surface)) {
            log::warn!("unusable display density, keeping {} {}", old, from);
            return old;
        }
        let value = convert(old, from, unit, surface);
        if !value.is_finite() {
            log::warn!("{} {} does not fit in {}, keeping it", old, from, unit);
            return old;
        }
        log::debug!("user unit screen value {} {} -> {} {}", old, from, value, unit);
        self.set_user_unit_screen_unit(unit);
        self.set_user_unit_screen_value(value);
        self.prefs.user_unit_screen_value
    }
}

impl Default for PrefsStore {
    fn default() -> Self {
        Self::new(Prefs::default())
    }
}
