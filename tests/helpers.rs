use freeruler::controller::{opacity_label, refresh_field, PreferencesView};
use freeruler::model::{clamp_opacity, PrefField, Prefs};
use freeruler::{Rect, Unit};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

/// Records the last value shown for every field.
#[derive(Default)]
struct Shown {
    foreground: Option<(i32, String)>,
    background: Option<(i32, String)>,
    float_rulers: Option<bool>,
    group_rulers: Option<bool>,
    ruler_shadow: Option<bool>,
    screen_value: Option<f64>,
    unit_index: Option<i64>,
    user_value: Option<f64>,
    user_unit: Option<String>,
}

impl PreferencesView for Shown {
    fn foreground_opacity_slider(&self) -> i32 {
        0
    }
    fn background_opacity_slider(&self) -> i32 {
        0
    }
    fn float_rulers_checkbox(&self) -> bool {
        false
    }
    fn group_rulers_checkbox(&self) -> bool {
        false
    }
    fn ruler_shadow_checkbox(&self) -> bool {
        false
    }
    fn user_unit_screen_value_field(&self) -> f64 {
        0.0
    }
    fn selected_unit_index(&self) -> i64 {
        -1
    }
    fn user_unit_value_field(&self) -> f64 {
        0.0
    }
    fn user_unit_unit_field(&self) -> String {
        String::new()
    }
    fn unit_popup_frame(&self) -> Option<Rect> {
        None
    }
    fn set_unit_titles(&mut self, _titles: &[&str]) {}
    fn show_foreground_opacity(&mut self, pct: i32, label: &str) {
        self.foreground = Some((pct, label.to_string()));
    }
    fn show_background_opacity(&mut self, pct: i32, label: &str) {
        self.background = Some((pct, label.to_string()));
    }
    fn show_float_rulers(&mut self, on: bool) {
        self.float_rulers = Some(on);
    }
    fn show_group_rulers(&mut self, on: bool) {
        self.group_rulers = Some(on);
    }
    fn show_ruler_shadow(&mut self, on: bool) {
        self.ruler_shadow = Some(on);
    }
    fn show_user_unit_screen_value(&mut self, value: f64) {
        self.screen_value = Some(value);
    }
    fn select_unit_index(&mut self, index: i64) {
        self.unit_index = Some(index);
    }
    fn show_user_unit_value(&mut self, value: f64) {
        self.user_value = Some(value);
    }
    fn show_user_unit_unit(&mut self, name: &str) {
        self.user_unit = Some(name.to_string());
    }
    fn present(&mut self) {}
}

#[test]
fn opacity_label_is_percent() {
    assert_eq!(opacity_label(0), "0%");
    assert_eq!(opacity_label(90), "90%");
    assert_eq!(opacity_label(100), "100%");
}

#[test]
fn clamp_opacity_limits_low_and_high() {
    assert_eq!(clamp_opacity(-5), 0);
    assert_eq!(clamp_opacity(50), 50);
    assert_eq!(clamp_opacity(250), 100);
}

#[test]
fn unit_titles_follow_popup_order() {
    let titles: Vec<&str> = Unit::ALL.iter().map(|u| u.title()).collect();
    assert_eq!(titles, ["Pixels", "Millimeters", "Inches"]);
    for (i, unit) in Unit::ALL.iter().enumerate() {
        assert_eq!(unit.index(), i as i64);
    }
}

#[test]
fn pref_field_keys_are_stable() {
    assert_eq!(PrefField::ForegroundOpacity.key(), "foregroundOpacity");
    assert_eq!(PrefField::UserUnitScreenUnit.key(), "userUnitScreenUnit");
    assert_eq!(PrefField::UserUnitUnit.key(), "userUnitUnit");
}

#[test]
fn refresh_field_touches_only_its_control() {
    let prefs = Prefs::default();
    let mut view = Shown::default();

    refresh_field(&mut view, &prefs, PrefField::BackgroundOpacity);

    assert_eq!(view.background, Some((50, "50%".to_string())));
    assert!(view.foreground.is_none());
    assert!(view.screen_value.is_none());
}

#[test]
fn refresh_every_field_shows_defaults() {
    let prefs = Prefs::default();
    let mut view = Shown::default();

    for field in PrefField::ALL {
        refresh_field(&mut view, &prefs, field);
    }

    assert_eq!(view.foreground, Some((90, "90%".to_string())));
    assert_eq!(view.background, Some((50, "50%".to_string())));
    assert_eq!(view.float_rulers, Some(true));
    assert_eq!(view.group_rulers, Some(true));
    assert_eq!(view.ruler_shadow, Some(false));
    assert!(approx_eq(view.screen_value.unwrap(), 1.0));
    assert_eq!(view.unit_index, Some(0));
    assert!(approx_eq(view.user_value.unwrap(), 1.0));
    assert_eq!(view.user_unit.as_deref(), Some("units"));
}
