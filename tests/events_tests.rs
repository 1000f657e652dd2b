//! Global event bus. The bus is process-wide, so these tests run serially.

use serial_test::serial;

use freeruler::events::{drain_events, init_event_bus, publish, publisher};
use freeruler::AppEvent;

#[test]
#[serial]
fn init_is_idempotent() {
    init_event_bus();
    assert!(!init_event_bus());
    assert!(publisher().is_some());
}

#[test]
#[serial]
fn publish_then_drain_preserves_order() {
    init_event_bus();
    drain_events();

    publish(AppEvent::PreferencesWindowOpened);
    publisher().unwrap().publish(AppEvent::PreferencesWindowClosed);
    publish(AppEvent::Quit);

    assert_eq!(
        drain_events(),
        vec![
            AppEvent::PreferencesWindowOpened,
            AppEvent::PreferencesWindowClosed,
            AppEvent::Quit,
        ]
    );
    assert!(drain_events().is_empty());
}

#[test]
#[serial]
fn publisher_works_from_another_thread() {
    init_event_bus();
    drain_events();

    let publisher = publisher().unwrap();
    std::thread::spawn(move || publisher.publish(AppEvent::Quit))
        .join()
        .unwrap();

    assert_eq!(drain_events(), vec![AppEvent::Quit]);
}
