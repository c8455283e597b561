//! The logging trait, the message formatter, and the fan-out dispatcher.

use crate::console::StdoutLogger;
use crate::error::LogError;
use crate::level::Level;

/// A destination for leveled log messages. Implementors only need to provide
/// [`log()`][Self::log()]; the eight fixed-level methods all delegate to it
/// with their corresponding severity.
///
/// Every call is synchronous and runs to completion or returns an error.
/// Sinks take `&mut self`, so a single instance is exclusively held by one
/// caller at a time; if a destination needs to be shared across threads, the
/// caller serializes access to the sink itself.
pub trait Logger {
    /// Log a message with the given severity. The context strings are
    /// rendered after the message, in order. Fails with
    /// [`LogError::UndefinedLevel`] when `level` is not one of the eight
    /// defined constants, in which case nothing is written.
    fn log(&mut self, level: Level, msg: &str, context: &[&str]) -> Result<(), LogError>;

    /// The system is unusable. This never exits or panics by itself;
    /// managing program exit is up to the caller.
    fn emergency(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::EMERGENCY, msg, context)
    }

    /// Action must be taken immediately.
    fn alert(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::ALERT, msg, context)
    }

    /// Critical conditions.
    fn critical(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::CRITICAL, msg, context)
    }

    /// Error conditions.
    fn error(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::ERROR, msg, context)
    }

    /// Warning conditions.
    fn warning(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::WARNING, msg, context)
    }

    /// Normal but significant condition.
    fn notice(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::NOTICE, msg, context)
    }

    /// Informational messages.
    fn informational(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::INFORMATIONAL, msg, context)
    }

    /// Debug-level messages.
    fn debug(&mut self, msg: &str, context: &[&str]) -> Result<(), LogError> {
        self.log(Level::DEBUG, msg, context)
    }
}

/// Render a log call as a single display line of the form `[<Name>] <msg>`,
/// with each context string appended in order behind a `", "` separator.
/// Propagates the [`LogError::UndefinedLevel`] from [`Level::name()`]
/// unchanged when the level is invalid.
///
/// This function is pure: deterministic, no side effects, order-preserving
/// over the context sequence.
pub fn format_message(level: Level, msg: &str, context: &[&str]) -> Result<String, LogError> {
    let mut line = format!("[{}] {}", level.name()?, msg);
    for extra in context {
        line.push_str(", ");
        line.push_str(extra);
    }

    Ok(line)
}

/// A sink that forwards every call to an ordered list of child sinks.
///
/// Dispatch is strictly sequential in construction order, with identical
/// arguments for every child. The first child error aborts the iteration and
/// is returned as-is; later children are not invoked. There is no
/// partial-failure aggregation and no retry, so side effects always appear
/// in child order and each child sees at most one call per dispatch. A
/// best-effort-to-all-sinks dispatcher would be a different type; this one
/// is deliberately fail-fast.
///
/// ```no_run
/// use teelog::{FanOutLogger, Logger, NilLogger};
///
/// let mut logger = FanOutLogger::new(vec![Box::new(NilLogger)]);
/// logger.error("something broke", &["request-id=42"]).unwrap();
/// ```
pub struct FanOutLogger {
    /// The child sinks, in dispatch order. Never modified after
    /// construction.
    children: Vec<Box<dyn Logger + Send>>,
}

impl FanOutLogger {
    /// Construct a fan-out sink over the given children, preserving their
    /// order. If `children` is empty the fan-out defaults to a single
    /// [`StdoutLogger`], so an unconfigured logger still prints somewhere.
    pub fn new(children: Vec<Box<dyn Logger + Send>>) -> FanOutLogger {
        if children.is_empty() {
            FanOutLogger {
                children: vec![Box::new(StdoutLogger::new())],
            }
        } else {
            FanOutLogger { children }
        }
    }
}

impl Logger for FanOutLogger {
    fn log(&mut self, level: Level, msg: &str, context: &[&str]) -> Result<(), LogError> {
        for child in &mut self.children {
            child.log(level, msg, context)?;
        }

        Ok(())
    }
}
