//! The default console sink, bound to the process's standard output.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::LogError;
use crate::level::Level;
use crate::logger::Logger;

/// The timestamp prefix on every console line, local time.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");

/// A sink that writes to standard output, prefixing each line with a
/// timestamp and coloring the severity tag when stdout is attached to a
/// terminal that supports it. This is the sink an empty
/// [`FanOutLogger`][crate::FanOutLogger] defaults to.
///
/// Aside from the timestamp prefix and the optional color escapes, the line
/// is the same `[<Name>] <msg>, <context>...` shape the formatter produces,
/// so grepping for a level tag works on both terminal and redirected output.
pub struct StdoutLogger {
    stream: StandardStream,
}

impl StdoutLogger {
    /// Construct a sink for the process's standard output, with color
    /// support determined by the environment.
    pub fn new() -> StdoutLogger {
        StdoutLogger {
            stream: StandardStream::stdout(stdout_color_support()),
        }
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        StdoutLogger::new()
    }
}

impl Logger for StdoutLogger {
    fn log(&mut self, level: Level, msg: &str, context: &[&str]) -> Result<(), LogError> {
        // Resolve the name before touching the stream so an undefined level
        // never emits a partial line.
        let name = level.name()?;

        write!(self.stream, "{} ", timestamp())?;

        let mut tag_color = ColorSpec::new();
        tag_color.set_fg(Some(level_color(level))).set_bold(true);
        self.stream.set_color(&tag_color)?;
        write!(self.stream, "[{name}]")?;
        self.stream.reset()?;

        write!(self.stream, " {msg}")?;
        for extra in context {
            write!(self.stream, ", {extra}")?;
        }
        writeln!(self.stream)?;
        self.stream.flush()?;

        Ok(())
    }
}

/// The current local time in `YYYY/MM/DD HH:MM:SS` form, falling back to UTC
/// when the local offset cannot be determined (which happens in multithreaded
/// processes on some Unixes).
fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(TIMESTAMP_FORMAT).unwrap_or_default()
}

/// The tag color for a defined severity level.
fn level_color(level: Level) -> Color {
    match level {
        Level::EMERGENCY | Level::ALERT | Level::CRITICAL | Level::ERROR => Color::Red,
        Level::WARNING => Color::Yellow,
        Level::NOTICE | Level::INFORMATIONAL => Color::Green,
        _ => Color::Cyan,
    }
}

/// Whether to use colors when outputting to STDOUT. Considers the `CLICOLOR`,
/// `CLICOLOR_FORCE`, and `NO_COLOR` environment variables, and whether or not
/// STDOUT is attached to a real TTY.
fn stdout_color_support() -> ColorChoice {
    if let Ok(value) = std::env::var("CLICOLOR_FORCE") {
        if value.trim() != "0" {
            return ColorChoice::Always;
        }
    }

    if let Ok(value) = std::env::var("NO_COLOR") {
        if value.trim() != "0" {
            return ColorChoice::Never;
        }
    }

    if let Ok(value) = std::env::var("CLICOLOR") {
        if value.trim() == "0" {
            return ColorChoice::Never;
        }
    }

    // If `CLICOLOR` is unset or set to a truthy value, and colors aren't
    // forced, then terminal support determines whether or not colors are used
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_the_expected_shape() {
        let stamp = timestamp();
        // YYYY/MM/DD HH:MM:SS
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "/");
        assert_eq!(&stamp[7..8], "/");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    fn undefined_level_writes_nothing_and_fails() {
        let mut logger = StdoutLogger::new();
        assert!(matches!(
            logger.log(Level::from_value(8), "m", &[]),
            Err(LogError::UndefinedLevel(_))
        ));
    }

    #[test]
    fn defined_levels_log_successfully() {
        let mut logger = StdoutLogger::new();
        logger.debug("console sink smoke test", &["ctx"]).unwrap();
    }
}
