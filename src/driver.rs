//! Program sequence: announce start, scan the example input, announce finish.

use crate::core::{Logger, Result};
use crate::scan::Scanner;
use crate::{error, info};
use std::process::ExitCode;

/// The fixed input handed to the scanner
pub const EXAMPLE_INPUT: &str = "example input";

/// Run the start, scan, finish sequence.
///
/// The scanner is called exactly once with [`EXAMPLE_INPUT`]. A scan error is
/// logged at error severity and does not stop the sequence. The finish line
/// is always attempted; afterwards the first logger error, if any, is
/// returned.
pub fn run<S: Scanner>(logger: &Logger, scanner: &mut S) -> Result<()> {
    let started = info!(logger, "Program started");

    let reported = match scanner.scan(EXAMPLE_INPUT) {
        Ok(_) => Ok(()),
        Err(e) => error!(logger, "Scan failed: {}", e),
    };

    let finished = info!(logger, "Program finished");

    started.and(reported).and(finished)
}

/// Run the sequence as a process would: logger errors are reported on
/// stderr and the exit status is always success.
pub fn execute<S: Scanner>(logger: &Logger, scanner: &mut S) -> ExitCode {
    if let Err(e) = run(logger, scanner) {
        eprintln!("[LOGGER ERROR] {}", e);
    }

    if let Err(e) = logger.flush() {
        eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
    }

    ExitCode::SUCCESS
}
