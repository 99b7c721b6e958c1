//! Logging macros with `format!` syntax.
//!
//! Each macro formats through `format_args!`, so argument counts and types
//! are checked at compile time, and evaluates to the `Result` of the log call.
//!
//! # Examples
//!
//! ```
//! use scanlog::prelude::*;
//! use scanlog::{info, result};
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! info!(logger, "Program started").unwrap();
//!
//! let infected = 0;
//! result!(logger, "{} infected files", infected).unwrap();
//! ```

/// Log a message at an explicit severity.
///
/// ```
/// # use scanlog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use scanlog::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a result-level message, used for outcomes the user asked for.
///
/// ```
/// # use scanlog::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use scanlog::result;
/// result!(logger, "Scanned {} files", 12).unwrap();
/// ```
#[macro_export]
macro_rules! result {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Result, $($arg)+)
    };
}
