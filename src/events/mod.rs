//! Event system for decoupled inter-module communication.
//!
//! This module provides a simple publish/subscribe mechanism using Rust's
//! standard library `mpsc` channels. The preferences window publishes
//! lifecycle events without knowing who persists preferences; the main
//! loop drains them and hands them to the dispatcher.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐
//! │   Preferences    │     │     App     │
//! │    Controller    │     │  Delegate   │
//! └────────┬─────────┘     └──────┬──────┘
//!          │ publish()            │ publish()
//!          ▼                      ▼
//! ┌─────────────────────────────────────────┐
//! │                EventBus                 │
//! │             (mpsc channel)              │
//! └────────────────────┬────────────────────┘
//!                      │ drain()
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │               Dispatcher                │
//! │          (persist prefs, quit)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use freeruler::events::{self, AppEvent};
//!
//! events::init_event_bus();
//! events::publish(AppEvent::PreferencesWindowOpened);
//!
//! for event in events::drain_events() {
//!     println!("{}", event.description());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
