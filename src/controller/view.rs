//! Seams between the preferences controller and the platform.

use crate::units::{DisplayInfo, Rect};

/// The widgets of the preferences window.
///
/// Getters read what the user entered; `show_*` setters display a preference.
/// Setters must not trigger the control's action, otherwise a model update
/// would loop back into the store.
pub trait PreferencesView {
    // === Input controls ===

    fn foreground_opacity_slider(&self) -> i32;
    fn background_opacity_slider(&self) -> i32;
    fn float_rulers_checkbox(&self) -> bool;
    fn group_rulers_checkbox(&self) -> bool;
    fn ruler_shadow_checkbox(&self) -> bool;
    fn user_unit_screen_value_field(&self) -> f64;
    /// Index of the selected unit popup item, -1 when nothing is selected.
    fn selected_unit_index(&self) -> i64;
    fn user_unit_value_field(&self) -> f64;
    fn user_unit_unit_field(&self) -> String;

    /// Frame of the unit popup in global screen coordinates, `None` while the
    /// window is not on screen.
    fn unit_popup_frame(&self) -> Option<Rect>;

    // === Display ===

    /// Replace the unit popup items.
    fn set_unit_titles(&mut self, titles: &[&str]);
    fn show_foreground_opacity(&mut self, pct: i32, label: &str);
    fn show_background_opacity(&mut self, pct: i32, label: &str);
    fn show_float_rulers(&mut self, on: bool);
    fn show_group_rulers(&mut self, on: bool);
    fn show_ruler_shadow(&mut self, on: bool);
    fn show_user_unit_screen_value(&mut self, value: f64);
    fn select_unit_index(&mut self, index: i64);
    fn show_user_unit_value(&mut self, value: f64);
    fn show_user_unit_unit(&mut self, name: &str);

    /// Bring the window to the front.
    fn present(&mut self);
}

/// Source of the displays currently attached.
pub trait DisplayProvider {
    fn displays(&self) -> Vec<DisplayInfo>;
}

/// A provider that knows no displays; conversions use default densities.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplays;

impl DisplayProvider for NoDisplays {
    fn displays(&self) -> Vec<DisplayInfo> {
        Vec::new()
    }
}

/// A fixed list of displays.
impl DisplayProvider for Vec<DisplayInfo> {
    fn displays(&self) -> Vec<DisplayInfo> {
        self.clone()
    }
}
