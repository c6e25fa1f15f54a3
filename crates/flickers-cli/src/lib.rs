//! Flickers CLI Library
//!
//! Command-line front end for the Flickers Calculator core: forwards key
//! sequences to the calculator, conversion requests to the converter, and
//! keeps history and theme in a JSON data file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    BmiArgs, CalcArgs, Cli, ColorArg, Commands, ConvertArgs, DiscountArgs, FormatArg, HistoryArgs,
    ThemeArgs, UnitsArgs, UpdateCheckArgs,
};
pub use config::{
    CliConfig, ColorChoice, OutputFormat, Verbosity, DEFAULT_DATA_FILE, DEFAULT_HISTORY_LINES,
};
pub use error::{CliError, CliResult};
pub use output::Printer;

/// Builds the configuration from parsed arguments
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    let mut config = CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_format(cli.format.into())
        .with_log_format(cli.log_format.into());
    if let Some(path) = &cli.data {
        config = config.with_data_path(path);
    }
    config
}

/// Runs the parsed command
pub fn dispatch(config: &CliConfig, command: &Commands) -> CliResult<()> {
    match command {
        Commands::Calc(args) => handlers::execute_calc(config, args),
        Commands::Convert(args) => handlers::execute_convert(config, args),
        Commands::Discount(args) => handlers::execute_discount(config, args),
        Commands::Bmi(args) => handlers::execute_bmi(config, args),
        Commands::Units(args) => handlers::execute_units(config, args),
        Commands::History(args) => handlers::execute_history(config, args),
        Commands::Theme(args) => handlers::execute_theme(config, args),
        Commands::Config => handlers::execute_config(config),
        Commands::UpdateCheck(args) => handlers::execute_update_check(config, args),
    }
}
