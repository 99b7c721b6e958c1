use scanlog::driver;
use scanlog::prelude::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let logger = Logger::console();
    driver::execute(&logger, &mut NoopScanner)
}
