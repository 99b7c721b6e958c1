//! In-memory capture sink

use crate::core::{LogLine, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects rendered lines in memory.
///
/// Clones share one buffer, so a test can keep a handle while the logger
/// owns another.
///
/// ```
/// use scanlog::prelude::*;
/// use scanlog::info;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).build();
///
/// info!(logger, "Value: {}", 42).unwrap();
/// assert_eq!(sink.contents(), "[INFO] Value: 42\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, line terminators included
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, line: &LogLine) -> Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.push_str(&line.render());
        buffer.push('\n');
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_line(&LogLine::new(Severity::Info, "one")).unwrap();
        writer.write_line(&LogLine::new(Severity::Result, "two")).unwrap();

        assert_eq!(sink.contents(), "[INFO] one\n[RESULT] two\n");
        assert_eq!(sink.lines(), vec!["[INFO] one", "[RESULT] two"]);

        sink.clear();
        assert!(writer.is_empty());
    }
}
