//! # Checkout Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr)
//! 2. Parse arguments
//! 3. Load the price list and price the basket (lib.rs)
//!
//! Exit codes: 0 success, 1 pricing/config/I/O failure, 2 usage error.

use std::io;
use std::process::ExitCode;

use checkout_cli::{Args, CliError, USAGE};
use tracing::error;

fn main() -> ExitCode {
    checkout_cli::init_tracing();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    match checkout_cli::run(args, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(msg)) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Checkout failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
