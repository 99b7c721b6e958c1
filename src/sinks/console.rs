//! Console sink implementation

use crate::core::{LogLine, LoggerError, Result, Sink};
use colored::Colorize;
use std::io::{self, Write};

/// Writes `[<LEVEL>] <message>` lines to the process's standard streams.
///
/// By default every severity goes to stdout uncolored. Writes go through
/// locked handles with `writeln!`, so a closed stream turns into an error
/// for the logger to count rather than a panic.
pub struct ConsoleSink {
    use_colors: bool,
    stderr_for_problems: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            stderr_for_problems: false,
        }
    }

    /// Color the severity prefix
    ///
    /// # Example
    ///
    /// ```
    /// use scanlog::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Route Warning and Error lines to stderr instead of stdout
    #[must_use]
    pub fn with_stderr_for_problems(mut self, enabled: bool) -> Self {
        self.stderr_for_problems = enabled;
        self
    }

    fn format_line(&self, line: &LogLine) -> String {
        if self.use_colors {
            format!(
                "{} {}",
                line.severity.prefix().color(line.severity.color()),
                line.message
            )
        } else {
            line.render()
        }
    }

    fn uses_stderr(&self, line: &LogLine) -> bool {
        self.stderr_for_problems && line.severity.is_problem()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &LogLine) -> Result<()> {
        let output = self.format_line(line);

        let written = if self.uses_stderr(line) {
            writeln!(io::stderr().lock(), "{}", output)
        } else {
            writeln!(io::stdout().lock(), "{}", output)
        };

        written.map_err(|e| LoggerError::io_operation("writing to console", output, e))
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
