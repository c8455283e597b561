//! The error type shared by every sink.

use std::error::Error;
use std::fmt::Display;

use crate::level::Level;

/// An error raised while dispatching a log call. There are exactly two kinds:
/// an undefined severity level, and a failed write to a sink's destination.
/// Both are surfaced to the immediate caller as-is. This crate never retries,
/// and never logs its own failures since a sink cannot safely be asked to log
/// that it is failing.
#[derive(Debug)]
pub enum LogError {
    /// The severity value is not one of the eight defined levels.
    UndefinedLevel(Level),
    /// Writing to the sink's destination failed. The underlying error is
    /// passed through verbatim.
    Write(std::io::Error),
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LogError::UndefinedLevel(_) => None,
            LogError::Write(error) => Some(error),
        }
    }
}

impl Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::UndefinedLevel(level) => {
                write!(f, "Undefined log level {}", level.value())
            }
            LogError::Write(error) => write!(f, "Could not write log message ({error})"),
        }
    }
}

impl From<std::io::Error> for LogError {
    fn from(error: std::io::Error) -> Self {
        LogError::Write(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn write_errors_keep_their_source() {
        let error = LogError::from(std::io::Error::new(ErrorKind::BrokenPipe, "gone"));
        match &error {
            LogError::Write(inner) => assert_eq!(inner.kind(), ErrorKind::BrokenPipe),
            other => panic!("expected Write, got {other:?}"),
        }
        assert!(error.source().is_some());
    }

    #[test]
    fn undefined_level_mentions_the_value() {
        let error = LogError::UndefinedLevel(Level::from_value(-1));
        assert_eq!(error.to_string(), "Undefined log level -1");
    }
}
