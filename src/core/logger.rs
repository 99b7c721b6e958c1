//! Main logger implementation

use super::{
    error::Result, log_line::LogLine, metrics::LoggerMetrics, severity::Severity, sink::Sink,
};
use crate::sinks::ConsoleSink;
use parking_lot::Mutex;
use std::fmt;

/// Severity-tagged line logger.
///
/// Every call formats its arguments, prefixes the severity tag and hands the
/// line to each sink in order. A formatting failure is returned to the
/// caller; sink failures are reported on stderr and counted in
/// [`LoggerMetrics`], never returned.
pub struct Logger {
    sinks: Mutex<Vec<Box<dyn Sink>>>,
    escape_control_chars: bool,
    metrics: LoggerMetrics,
}

impl Logger {
    /// A logger with no sinks; lines are formatted and discarded
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: Mutex::new(Vec::new()),
            escape_control_chars: false,
            metrics: LoggerMetrics::new(),
        }
    }

    /// A logger writing plain lines to stdout
    #[must_use]
    pub fn console() -> Self {
        Self::builder().build()
    }

    pub fn add_sink(&mut self, sink: Box<dyn Sink>) {
        self.sinks.get_mut().push(sink);
    }

    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        let line = match LogLine::format(severity, args) {
            Ok(line) => line,
            Err(e) => {
                self.metrics.record_formatting_error();
                return Err(e);
            }
        };

        let line = if self.escape_control_chars {
            line.escape_control_chars()
        } else {
            line
        };

        self.dispatch(&line);
        Ok(())
    }

    /// Hand a line to every sink with per-sink panic isolation
    ///
    /// A failing or panicking sink does not stop the remaining sinks from
    /// receiving the line.
    fn dispatch(&self, line: &LogLine) {
        let mut sinks = self.sinks.lock();
        let mut has_error = false;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            let write_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.write_line(line)
            }));

            match write_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                         Other sinks continue to function.",
                        idx,
                        sink.name(),
                        panic_message(&*panic_info)
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_failed();
        } else {
            self.metrics.record_written();
        }
    }

    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Info, args)
    }

    #[inline]
    pub fn warning(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Warning, args)
    }

    #[inline]
    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Error, args)
    }

    #[inline]
    pub fn result(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Result, args)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.lock().len()
    }

    /// Flush every sink, isolating panics the same way writes are isolated
    ///
    /// Every sink is flushed even if an earlier one fails; the first error
    /// is returned.
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        let mut first_error = None;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            let flush_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.flush()));

            match flush_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} ({}) panicked during flush: {}. \
                         Other sinks continue to function.",
                        idx,
                        sink.name(),
                        panic_message(&*panic_info)
                    );
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use scanlog::prelude::*;
///
/// let logger = Logger::builder()
///     .sink(ConsoleSink::new().with_colors(false))
///     .escape_control_chars(true)
///     .build();
/// ```
pub struct LoggerBuilder {
    sinks: Vec<Box<dyn Sink>>,
    escape_control_chars: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            escape_control_chars: false,
        }
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Escape `\n`, `\r` and `\t` in messages so each call stays on one line
    ///
    /// Off by default, in which case the message is written exactly as
    /// `format!` would produce it.
    #[must_use = "builder methods return a new value"]
    pub fn escape_control_chars(mut self, enabled: bool) -> Self {
        self.escape_control_chars = enabled;
        self
    }

    /// Build the Logger
    ///
    /// Falls back to a single [`ConsoleSink`] when no sink was added.
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.escape_control_chars = self.escape_control_chars;

        if self.sinks.is_empty() {
            logger.add_sink(Box::new(ConsoleSink::new()));
        }
        for sink in self.sinks {
            logger.add_sink(sink);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::sinks::MemorySink;

    struct FailingSink;

    impl Sink for FailingSink {
        fn write_line(&mut self, _line: &LogLine) -> Result<()> {
            Err(LoggerError::sink("failing", "always fails"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingSink;

    impl Sink for PanickingSink {
        fn write_line(&mut self, _line: &LogLine) -> Result<()> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> Result<()> {
            panic!("flush exploded");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_builder_defaults_to_console() {
        let logger = Logger::builder().build();
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_builder_with_sink_skips_console() {
        let logger = Logger::builder().sink(MemorySink::new()).build();
        assert_eq!(logger.sink_count(), 1);
    }

    #[test]
    fn test_new_has_no_sinks() {
        let logger = Logger::new();
        assert_eq!(logger.sink_count(), 0);
        logger.info(format_args!("discarded")).unwrap();
        assert_eq!(logger.metrics().lines_written(), 1);
    }

    #[test]
    fn test_log_writes_prefixed_line() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.log(Severity::Result, format_args!("{} files", 3)).unwrap();

        assert_eq!(sink.contents(), "[RESULT] 3 files\n");
    }

    #[test]
    fn test_wrappers_match_log() {
        let direct = MemorySink::new();
        let wrapped = MemorySink::new();
        let direct_logger = Logger::builder().sink(direct.clone()).build();
        let wrapped_logger = Logger::builder().sink(wrapped.clone()).build();

        for severity in Severity::ALL {
            direct_logger.log(severity, format_args!("n={}", 7)).unwrap();
        }
        wrapped_logger.info(format_args!("n={}", 7)).unwrap();
        wrapped_logger.warning(format_args!("n={}", 7)).unwrap();
        wrapped_logger.error(format_args!("n={}", 7)).unwrap();
        wrapped_logger.result(format_args!("n={}", 7)).unwrap();

        assert_eq!(direct.contents(), wrapped.contents());
    }

    #[test]
    fn test_formatting_error_writes_nothing() {
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        let err = logger.error(format_args!("bad: {}", Broken)).unwrap_err();
        assert!(matches!(err, LoggerError::Formatting { .. }));
        assert!(sink.is_empty());
        assert_eq!(logger.metrics().formatting_errors(), 1);
        assert_eq!(logger.metrics().lines_written(), 0);
    }

    #[test]
    fn test_sink_failure_is_not_surfaced() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .sink(FailingSink)
            .sink(sink.clone())
            .build();

        assert!(logger.warning(format_args!("still delivered")).is_ok());
        assert_eq!(sink.lines(), vec!["[WARNING] still delivered".to_string()]);
        assert_eq!(logger.metrics().failed_writes(), 1);
    }

    #[test]
    fn test_sink_panic_is_isolated() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .sink(PanickingSink)
            .sink(sink.clone())
            .build();

        assert!(logger.info(format_args!("survives")).is_ok());
        assert!(logger.info(format_args!("again")).is_ok());
        assert_eq!(sink.lines().len(), 2);
        assert_eq!(logger.metrics().failed_writes(), 2);
    }

    #[test]
    fn test_escape_control_chars() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .sink(sink.clone())
            .escape_control_chars(true)
            .build();

        logger.info(format_args!("line one\nline two")).unwrap();
        assert_eq!(sink.contents(), "[INFO] line one\\nline two\n");
    }

    #[test]
    fn test_control_chars_kept_by_default() {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(sink.clone()).build();

        logger.info(format_args!("a\tb")).unwrap();
        assert_eq!(sink.contents(), "[INFO] a\tb\n");
    }

    #[test]
    fn test_flush_panic_is_isolated() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        struct CountingFlush(Arc<AtomicUsize>);

        impl Sink for CountingFlush {
            fn write_line(&mut self, _line: &LogLine) -> Result<()> {
                Ok(())
            }

            fn flush(&mut self) -> Result<()> {
                self.0.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }

            fn name(&self) -> &str {
                "counting"
            }
        }

        let flushes = Arc::new(AtomicUsize::new(0));
        let logger = Logger::builder()
            .sink(PanickingSink)
            .sink(CountingFlush(Arc::clone(&flushes)))
            .build();

        assert!(logger.flush().is_ok());
        assert_eq!(flushes.load(Ordering::Relaxed), 1);

        // Drop flushes again and must not abort on the panicking sink
        drop(logger);
        assert_eq!(flushes.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_flush_returns_sink_error() {
        struct FailingFlush;

        impl Sink for FailingFlush {
            fn write_line(&mut self, _line: &LogLine) -> Result<()> {
                Ok(())
            }

            fn flush(&mut self) -> Result<()> {
                Err(LoggerError::sink("failing-flush", "disk gone"))
            }

            fn name(&self) -> &str {
                "failing-flush"
            }
        }

        let sink = MemorySink::new();
        let logger = Logger::builder()
            .sink(FailingFlush)
            .sink(sink.clone())
            .build();

        let err = logger.flush().unwrap_err();
        assert!(matches!(err, LoggerError::Sink { .. }));
    }
}
