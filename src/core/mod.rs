//! Core logger types and traits

pub mod error;
pub mod log_line;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod sink;

pub use error::{LoggerError, Result};
pub use log_line::LogLine;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::Sink;
