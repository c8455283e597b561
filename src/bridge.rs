//! An opt-in bridge from the `log` crate's facade into a sink.

use log::{LevelFilter, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;
use std::sync::Mutex;

use crate::level::Level;
use crate::logger::Logger;

/// The installed bridge instance. Initialized in [`install_global()`] and
/// then set as the global logger using [`log::set_logger()`].
static BRIDGE_INSTANCE: OnceCell<LogBridge> = OnceCell::new();

/// Adapts a sink to the `log` crate's [`Log`][log::Log] trait. The sink sits
/// behind a mutex since `log` dispatches records through a shared reference
/// from any thread.
struct LogBridge {
    max_log_level: LevelFilter,
    sink: Mutex<Box<dyn Logger + Send>>,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_log_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let msg = record.args().to_string();
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // log::Log cannot surface errors, and a failing sink must not be
        // asked to log its own failure, so the result is dropped here.
        let _ = sink.log(severity_for(record.level()), &msg, &[record.target()]);
    }

    fn flush(&self) {}
}

/// Map the `log` crate's five levels onto the eight RFC 5424 severities.
fn severity_for(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARNING,
        log::Level::Info => Level::INFORMATIONAL,
        log::Level::Debug | log::Level::Trace => Level::DEBUG,
    }
}

/// Route the `log` crate's macros (`log::error!()` and friends) into the
/// given sink. The record's target, usually the emitting module path, is
/// passed along as a single context item.
///
/// This is the only global state in the crate and it is never set up
/// implicitly; a host that doesn't call this keeps a completely
/// instance-based logger. The `log` facade only accepts one logger per
/// process, so a second call fails with [`SetLoggerError`] and leaves the
/// first installation in place.
pub fn install_global(
    sink: Box<dyn Logger + Send>,
    max_log_level: LevelFilter,
) -> Result<(), SetLoggerError> {
    let bridge = BRIDGE_INSTANCE.get_or_init(|| LogBridge {
        max_log_level,
        sink: Mutex::new(sink),
    });
    log::set_max_level(bridge.max_log_level);

    log::set_logger(bridge)
}
