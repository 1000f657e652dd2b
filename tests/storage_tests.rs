//! Prefs file persistence and the close/quit dispatcher.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use freeruler::handlers::{dispatch_events, DispatchOutcome};
use freeruler::storage::{load_prefs, save_prefs};
use freeruler::{AppEvent, Prefs, PrefsCache, PrefsStore, Unit};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh directory under the system temp dir, unique per test.
fn scratch_dir() -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("freeruler-test-{}-{}", std::process::id(), n));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn missing_file_loads_defaults() {
    let dir = scratch_dir();
    let prefs = load_prefs(&dir.join("prefs.json")).unwrap();
    assert_eq!(prefs, Prefs::default());
}

#[test]
fn save_creates_directory_and_loads_back() {
    let dir = scratch_dir();
    let path = dir.join("nested").join("prefs.json");

    let mut prefs = Prefs::default();
    prefs.background_opacity = 20;
    prefs.user_unit_screen_unit = Unit::Millimeters;
    prefs.user_unit_unit = "feet".to_string();
    save_prefs(&path, &prefs).unwrap();

    assert!(path.exists());
    assert_eq!(load_prefs(&path).unwrap(), prefs);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn load_clamps_out_of_range_values() {
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("prefs.json");
    fs::write(&path, r#"{"foregroundOpacity": 400, "userUnitScreenUnit": 9}"#).unwrap();

    let prefs = load_prefs(&path).unwrap();
    assert_eq!(prefs.foreground_opacity, 100);
    assert_eq!(prefs.user_unit_screen_unit, Unit::Pixels);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_file_is_an_error_but_cache_opens_with_defaults() {
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("prefs.json");
    fs::write(&path, "not json").unwrap();

    assert!(load_prefs(&path).is_err());
    let cache = PrefsCache::open(&path);
    assert_eq!(cache.prefs(), &Prefs::default());
    assert!(!cache.is_dirty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn flush_writes_only_when_dirty() {
    let dir = scratch_dir();
    let path = dir.join("prefs.json");
    let mut cache = PrefsCache::open(&path);

    assert!(!cache.flush().unwrap());
    assert!(!path.exists());

    let mut prefs = cache.prefs().clone();
    prefs.ruler_shadow = true;
    cache.set(prefs.clone());
    assert!(cache.is_dirty());
    assert!(cache.flush().unwrap());
    assert!(!cache.is_dirty());
    assert_eq!(load_prefs(&path).unwrap(), prefs);

    // Same record again: nothing to write
    cache.set(prefs);
    assert!(!cache.flush().unwrap());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn in_memory_cache_never_writes() {
    let mut cache = PrefsCache::in_memory(Prefs::default());
    let mut prefs = Prefs::default();
    prefs.group_rulers = false;
    cache.set(prefs);
    assert!(cache.path().is_none());
    assert!(!cache.flush().unwrap());
    assert!(!cache.is_dirty());
}

#[test]
fn closing_window_persists_store_changes() {
    let dir = scratch_dir();
    let path = dir.join("prefs.json");
    let mut cache = PrefsCache::open(&path);
    let mut store = PrefsStore::new(cache.prefs().clone());

    store.set_foreground_opacity(15);
    let outcome = dispatch_events(
        [AppEvent::PreferencesWindowOpened, AppEvent::PreferencesWindowClosed],
        &mut store,
        &mut cache,
    );

    assert_eq!(outcome, DispatchOutcome::Continue);
    assert_eq!(load_prefs(&path).unwrap().foreground_opacity, 15);
    assert!(!store.take_dirty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn quit_persists_and_stops_dispatch() {
    let dir = scratch_dir();
    let path = dir.join("prefs.json");
    let mut cache = PrefsCache::open(&path);
    let mut store = PrefsStore::new(cache.prefs().clone());

    store.set_user_unit_value(2.5);
    let outcome = dispatch_events(
        [AppEvent::Quit, AppEvent::PreferencesWindowOpened],
        &mut store,
        &mut cache,
    );

    assert_eq!(outcome, DispatchOutcome::Quit);
    assert_eq!(load_prefs(&path).unwrap().user_unit_value, 2.5);
    let _ = fs::remove_dir_all(&dir);
}
