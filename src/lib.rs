//! # scanlog
//!
//! Severity-tagged console logging and the scan driver that uses it.
//!
//! Every log call writes one `[<LEVEL>] <message>` line, where the level is
//! `INFO`, `WARNING`, `ERROR` or `RESULT`. Messages use `format!` syntax and
//! are checked at compile time.
//!
//! ```
//! use scanlog::prelude::*;
//! use scanlog::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().sink(sink.clone()).build();
//!
//! info!(logger, "Program started").unwrap();
//! assert_eq!(sink.contents(), "[INFO] Program started\n");
//! ```

pub mod core;
pub mod driver;
pub mod macros;
pub mod scan;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogLine, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Severity, Sink,
    };
    pub use crate::scan::{NoopScanner, Scanner};
    pub use crate::sinks::{ConsoleSink, MemorySink};
}

pub use crate::core::{
    LogLine, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Severity, Sink,
};
pub use crate::scan::{NoopScanner, Scanner};
pub use crate::sinks::{ConsoleSink, MemorySink};
