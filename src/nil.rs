//! A sink that discards everything.

use crate::error::LogError;
use crate::level::Level;
use crate::logger::Logger;

/// A sink that does nothing. Every call succeeds without any observable
/// effect. Useful wherever a [`Logger`] is required but no output is wanted,
/// like silencing a dependency while testing unrelated logic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NilLogger;

impl NilLogger {
    pub fn new() -> NilLogger {
        NilLogger
    }
}

impl Logger for NilLogger {
    fn log(&mut self, _level: Level, _msg: &str, _context: &[&str]) -> Result<(), LogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_call_succeeds_silently() {
        let mut logger = NilLogger::new();
        logger.emergency("m", &[]).unwrap();
        logger.alert("m", &[]).unwrap();
        logger.critical("m", &[]).unwrap();
        logger.error("m", &["c"]).unwrap();
        logger.warning("m", &[]).unwrap();
        logger.notice("m", &[]).unwrap();
        logger.informational("m", &[]).unwrap();
        logger.debug("m", &[]).unwrap();
        // Even undefined levels are accepted since nothing gets formatted.
        logger.log(Level::from_value(-1), "m", &[]).unwrap();
    }
}
