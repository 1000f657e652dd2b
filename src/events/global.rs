//! Global access to the application event bus.
//!
//! The bus is initialized once at application startup via `init_event_bus()`,
//! then any module can publish events via `publish()` or `publisher()`.
//!
//! # Design
//!
//! - `Sender` is stored in `OnceLock`; it is `Send + Sync`
//! - `Receiver` is stored in `Mutex`, only accessed from the main thread
//!
//! Unlike the local [`EventBus`](super::EventBus), nothing here panics when the
//! bus is missing: publishing before initialization logs and drops the event,
//! and draining returns nothing. Library code and tests can therefore run
//! without a bus.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

struct GlobalBus {
    sender: Sender<AppEvent>,
    receiver: Mutex<Receiver<AppEvent>>,
}

static BUS: OnceLock<GlobalBus> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns `false` if it was already initialized; the existing bus is kept.
pub fn init_event_bus() -> bool {
    let mut created = false;
    BUS.get_or_init(|| {
        created = true;
        let (sender, receiver) = mpsc::channel();
        GlobalBus {
            sender,
            receiver: Mutex::new(receiver),
        }
    });
    if !created {
        log::debug!("event bus already initialized");
    }
    created
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` if `init_event_bus()` has not been called.
pub fn publisher() -> Option<EventPublisher> {
    BUS.get()
        .map(|bus| EventPublisher::from_sender(bus.sender.clone()))
}

/// Publish an event to the global event bus.
pub fn publish(event: AppEvent) {
    match BUS.get() {
        Some(bus) => {
            log::trace!("publish {:?}", event);
            // Receiver lives in the static, so send cannot fail
            let _ = bus.sender.send(event);
        }
        None => log::warn!("event bus not initialized, dropping {:?}", event),
    }
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(bus) = BUS.get() else {
        return Vec::new();
    };
    let receiver = match bus.receiver.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
