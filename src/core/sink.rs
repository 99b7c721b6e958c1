//! Sink trait for log output destinations

use super::{error::Result, log_line::LogLine};

pub trait Sink: Send {
    /// Write one rendered line followed by a line terminator
    fn write_line(&mut self, line: &LogLine) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
