//! Flickers CLI: calculator, unit converter and history from the terminal
//!
//! ## Usage
//!
//! ```bash
//! flickers calc 2 + 3 x 4 =                # Keypad sequence, prints 20
//! flickers calc 9 0 sin                    # Scientific keys, prints 1
//! flickers convert length м см 1.5         # Unit conversion
//! flickers convert numeral DEC HEX 255     # Numeral bases
//! flickers history --limit 5               # Most recent calculations
//! flickers --format json bmi 70 1.75       # JSON output
//! ```

use clap::Parser;
use flickers_cli::{build_config, dispatch, logging, Cli, CliResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init_logging(&config)?;
    tracing::debug!(?config, "configuration resolved");

    dispatch(&config, &cli.command)
}
