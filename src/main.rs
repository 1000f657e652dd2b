#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc2 macros

#[cfg(target_os = "macos")]
mod macos_main;

use freeruler::events::init_event_bus;
use freeruler::logging::init_logger;
use freeruler::{Prefs, PrefsCache};

fn main() {
    init_logger();
    init_event_bus();

    let cache = match PrefsCache::open_default() {
        Ok(cache) => cache,
        Err(e) => {
            log::warn!("{}, preferences will not be saved", e);
            PrefsCache::in_memory(Prefs::default())
        }
    };

    run(cache);
}

#[cfg(target_os = "macos")]
fn run(cache: PrefsCache) {
    if let Err(e) = macos_main::run(cache) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_os = "macos"))]
fn run(_cache: PrefsCache) {
    log::error!("Free Ruler has no user interface for this platform");
    std::process::exit(1);
}
