//! Logger setup for the binary.

use env_logger::{Builder, Env};

/// Install the `env_logger` backend.
///
/// `RUST_LOG` overrides the default filter. Safe to call more than once;
/// later calls are ignored.
pub fn init_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("freeruler=info"));
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
