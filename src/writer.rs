//! A sink that writes formatted lines to a byte destination.

use std::io::Write;

use crate::error::LogError;
use crate::level::Level;
use crate::logger::{format_message, Logger};

/// A sink that owns a single byte-oriented destination for its lifetime and
/// writes one formatted line per call, terminated by a newline.
///
/// A formatting failure (an undefined level) returns before anything is
/// written; a destination write failure surfaces as [`LogError::Write`] with
/// the underlying error untouched. Calls block only as long as the
/// destination's own `write` blocks; this sink adds no buffering or timeout
/// of its own.
pub struct WriterLogger<W: Write> {
    writer: W,
}

impl<W: Write> WriterLogger<W> {
    /// Construct a sink writing to the given destination. The destination is
    /// exclusively owned by this sink until [`into_inner()`][Self::into_inner()].
    pub fn new(writer: W) -> WriterLogger<W> {
        WriterLogger { writer }
    }

    /// A shared reference to the underlying destination.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// A mutable reference to the underlying destination. Writing to it
    /// directly interleaves with logged lines.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the sink and return the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Logger for WriterLogger<W> {
    fn log(&mut self, level: Level, msg: &str, context: &[&str]) -> Result<(), LogError> {
        let line = format_message(level, msg, context)?;
        writeln!(self.writer, "{line}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    /// A destination whose writes always fail.
    struct BrokenDestination;

    impl Write for BrokenDestination {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::WouldBlock, "nope"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_terminated_line_per_call() {
        let mut logger = WriterLogger::new(Vec::new());
        logger.debug("M", &[]).unwrap();
        logger.error("m", &["c1", "c2"]).unwrap();

        let written = String::from_utf8(logger.into_inner()).unwrap();
        assert_eq!(written, "[Debug] M\n[Error] m, c1, c2\n");
    }

    #[test]
    fn undefined_level_writes_nothing() {
        let mut logger = WriterLogger::new(Vec::new());
        assert!(matches!(
            logger.log(Level::from_value(-1), "m", &[]),
            Err(LogError::UndefinedLevel(_))
        ));
        assert!(logger.get_ref().is_empty());
    }

    #[test]
    fn destination_errors_pass_through() {
        let mut logger = WriterLogger::new(BrokenDestination);
        match logger.informational("m", &[]) {
            Err(LogError::Write(error)) => assert_eq!(error.kind(), ErrorKind::WouldBlock),
            other => panic!("expected Write, got {other:?}"),
        }
    }

    #[test]
    fn every_convenience_method_reaches_the_destination() {
        let mut logger = WriterLogger::new(Vec::new());
        logger.emergency("m", &[]).unwrap();
        logger.alert("m", &[]).unwrap();
        logger.critical("m", &[]).unwrap();
        logger.error("m", &[]).unwrap();
        logger.warning("m", &[]).unwrap();
        logger.notice("m", &[]).unwrap();
        logger.informational("m", &[]).unwrap();
        logger.debug("m", &[]).unwrap();

        let written = String::from_utf8(logger.into_inner()).unwrap();
        let tags: Vec<&str> = written
            .lines()
            .map(|line| line.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(
            tags,
            [
                "[Emergency]",
                "[Alert]",
                "[Critical]",
                "[Error]",
                "[Warning]",
                "[Notice]",
                "[Informational]",
                "[Debug]"
            ]
        );
    }
}
