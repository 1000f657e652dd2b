//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events drained from the event bus and executes
//! the corresponding actions. It runs on the main thread after UI actions
//! and processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → persistence / quit
//! ```

use crate::events::AppEvent;
use crate::prefs::PrefsStore;
use crate::storage::PrefsCache;

/// What the main loop should do after a dispatch round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Quit,
}

/// Dispatch a batch of events in order.
///
/// Stops at the first `Quit`; later events are ignored.
pub fn dispatch_events<I>(events: I, store: &mut PrefsStore, cache: &mut PrefsCache) -> DispatchOutcome
where
    I: IntoIterator<Item = AppEvent>,
{
    for event in events {
        if dispatch_single_event(&event, store, cache) == DispatchOutcome::Quit {
            return DispatchOutcome::Quit;
        }
    }
    DispatchOutcome::Continue
}

fn dispatch_single_event(
    event: &AppEvent,
    store: &mut PrefsStore,
    cache: &mut PrefsCache,
) -> DispatchOutcome {
    log::debug!("dispatch: {}", event.description());

    if event.requires_persist() {
        persist(store, cache);
    }

    match event {
        AppEvent::PreferencesWindowOpened | AppEvent::PreferencesWindowClosed => {
            DispatchOutcome::Continue
        }
        AppEvent::Quit => DispatchOutcome::Quit,
    }
}

/// Copy changed prefs into the cache and flush it. Failures are logged.
pub fn persist(store: &mut PrefsStore, cache: &mut PrefsCache) {
    if store.take_dirty() {
        cache.set(store.prefs().clone());
    }
    match cache.flush() {
        Ok(true) => log::info!("preferences saved"),
        Ok(false) => {}
        Err(e) => log::error!("failed to save preferences: {}", e),
    }
}
