//! The RFC 5424 severity model.

use std::fmt::Display;

use crate::error::LogError;

/// The severity of a log message, following the eight RFC 5424 levels.
/// [`Level::EMERGENCY`] is the most severe, [`Level::DEBUG`] the least. The
/// derived ordering follows the numeric values, so `EMERGENCY < DEBUG`.
///
/// This is a thin wrapper around the numeric severity rather than a closed
/// enum so that out-of-range values can flow through
/// [`Logger::log()`][crate::Logger::log()] and be rejected with
/// [`LogError::UndefinedLevel`] instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    /// The system is unusable. Usage should accompany instances that cause a
    /// restart or program exit. A [`Logger`][crate::Logger] itself never
    /// panics or exits as part of an emergency call; managing program exit is
    /// up to the caller.
    pub const EMERGENCY: Level = Level(0);
    /// Action must be taken immediately.
    pub const ALERT: Level = Level(1);
    /// Critical conditions.
    pub const CRITICAL: Level = Level(2);
    /// Error conditions.
    pub const ERROR: Level = Level(3);
    /// Warning conditions.
    pub const WARNING: Level = Level(4);
    /// Normal but significant condition.
    pub const NOTICE: Level = Level(5);
    /// Informational messages.
    pub const INFORMATIONAL: Level = Level(6);
    /// Debug-level messages.
    pub const DEBUG: Level = Level(7);

    /// Construct a level from its numeric severity. Values outside `0..=7`
    /// yield a level that fails [`name()`][Self::name()] resolution.
    pub const fn from_value(value: i32) -> Level {
        Level(value)
    }

    /// The numeric severity value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The canonical name for this level. This is the single validation
    /// point all formatting and dispatch relies on: any value outside the
    /// eight defined constants fails with [`LogError::UndefinedLevel`], and
    /// no sink emits a line for such a level.
    pub fn name(self) -> Result<&'static str, LogError> {
        match self {
            Level::EMERGENCY => Ok("Emergency"),
            Level::ALERT => Ok("Alert"),
            Level::CRITICAL => Ok("Critical"),
            Level::ERROR => Ok("Error"),
            Level::WARNING => Ok("Warning"),
            Level::NOTICE => Ok("Notice"),
            Level::INFORMATIONAL => Ok("Informational"),
            Level::DEBUG => Ok("Debug"),
            _ => Err(LogError::UndefinedLevel(self)),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Ok(name) => f.write_str(name),
            Err(_) => write!(f, "Undefined({})", self.0),
        }
    }
}
