//! A minimal leveled-logging facade built around the eight RFC 5424
//! severities, similar to syslog and PHP's PSR-3. Teams already using
//! RFC 5424 or PSR-3 conventions elsewhere (for example in PHP services)
//! get the same level vocabulary here. See
//! <https://tools.ietf.org/html/rfc5424> and
//! <https://www.php-fig.org/psr/psr-3/>.
//!
//! Everything revolves around one trait, [`Logger`], with three shipped
//! sinks: [`StdoutLogger`] writes timestamped lines to standard output,
//! [`NilLogger`] discards everything, and [`FanOutLogger`] broadcasts each
//! call to an ordered list of child sinks, stopping at the first failure.
//! [`WriterLogger`] adapts any [`std::io::Write`] destination. Hosts that
//! use the `log` crate's macros can route them into a sink with
//! [`install_global()`]; nothing global exists unless that is called.

mod bridge;
mod console;
mod error;
mod level;
mod logger;
mod nil;
mod writer;

pub use bridge::install_global;
pub use console::StdoutLogger;
pub use error::LogError;
pub use level::Level;
pub use logger::{format_message, FanOutLogger, Logger};
pub use nil::NilLogger;
pub use writer::WriterLogger;
