//! Logger initialization for embedding binaries.
//!
//! The core itself only uses the `log` facade; binaries call [`init`] early
//! in `main` to get `env_logger` output with a sensible default filter.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Respects `RUST_LOG` when set, defaults to info-level otherwise. This
/// function is idempotent; subsequent calls are ignored.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
    });
}
