//! Error types for the logger

use super::severity::Severity;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A `Display` impl failed while the message was being formatted
    #[error("Formatting failed for {severity} message")]
    Formatting { severity: Severity },

    /// Sink error with sink name
    #[error("Sink '{name}' failed: {message}")]
    Sink { name: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a formatting error
    pub fn formatting(severity: Severity) -> Self {
        LoggerError::Formatting { severity }
    }

    /// Create a sink error
    pub fn sink(name: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Sink {
            name: name.into(),
            message: message.into(),
        }
    }
}
