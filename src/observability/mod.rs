//! Observability subsystem
//!
//! The library only talks to the `log` facade, using an [`Event`] as the
//! record target. Binaries that want structured output install the JSON
//! [`Logger`] with [`init`].
//!
//! # Usage
//!
//! ```ignore
//! use uddf::observability::{self, Event, Sink};
//!
//! observability::init(log::LevelFilter::Info, Sink::Stderr);
//! log::info!(target: Event::DecodeComplete.as_str(), "decoded");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity, Sink, Stream};

use std::sync::OnceLock;

use log::LevelFilter;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs the JSON logger as the global `log` backend.
///
/// Safe to call more than once; later calls only adjust the level and the
/// first sink stays in effect. Returns false when another backend was
/// installed before.
pub fn init(level: LevelFilter, sink: Sink) -> bool {
    let installed = *INSTALLED.get_or_init(|| {
        let logger = LOGGER.get_or_init(|| Logger::new(LevelFilter::Trace, sink));
        log::set_logger(logger).is_ok()
    });
    log::set_max_level(level);
    installed
}

/// Sink of the installed JSON logger, if any.
pub fn installed_sink() -> Option<Sink> {
    LOGGER.get().map(Logger::sink)
}
