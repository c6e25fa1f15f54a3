//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Printer;

/// Execute the config command: print the resolved configuration as JSON
pub fn execute_config(config: &CliConfig) -> CliResult<()> {
    Printer::new(config).json(config)
}
