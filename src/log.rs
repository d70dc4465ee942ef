// src/log.rs
//
// Logging front door. Call sites use the short `logf!` / `logd!` / `loge!`
// macros; they forward to `tracing`, and `init()` installs the subscriber.
use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::config::consts::LOG_LEVEL;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber. Later calls are no-ops, so tests and the
/// binary can both call it.
pub fn init() {
    INIT.get_or_init(|| {
        let installed = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(LOG_LEVEL))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        // An existing global subscriber keeps receiving our events.
        if let Err(e) = installed {
            eprintln!("logging: subscriber not installed: {e}");
        }
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
