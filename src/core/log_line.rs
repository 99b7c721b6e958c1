//! Rendered log line

use super::error::{LoggerError, Result};
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// One formatted message together with its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    pub severity: Severity,
    pub message: String,
}

impl LogLine {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Format `args` into a new line.
    ///
    /// Unlike `format!`, which panics when a `Display` impl reports an error,
    /// this returns [`LoggerError::Formatting`] so the caller sees it.
    pub fn format(severity: Severity, args: fmt::Arguments<'_>) -> Result<Self> {
        let mut message = String::new();
        message
            .write_fmt(args)
            .map_err(|_| LoggerError::formatting(severity))?;
        Ok(Self { severity, message })
    }

    /// Replace newlines, carriage returns and tabs with escape sequences
    /// so one call can never produce more than one output line.
    #[must_use]
    pub fn escape_control_chars(mut self) -> Self {
        if self.message.contains(['\n', '\r', '\t']) {
            self.message = self
                .message
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t");
        }
        self
    }

    /// `[<LEVEL>] <message>`, without the trailing newline
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.prefix(), self.message)
    }
}
