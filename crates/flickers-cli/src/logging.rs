//! Structured logging on stderr
//!
//! `RUST_LOG` wins when set; otherwise the level follows `-q`/`-v`.

use crate::config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Filter directive from an optional `RUST_LOG` value and the verbosity
#[must_use]
pub fn filter_directive(rust_log: Option<&str>, verbosity: Verbosity) -> String {
    match rust_log.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => verbosity.log_level().to_string(),
    }
}

/// Builds the event filter, falling back to the verbosity level when the
/// directive does not parse
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(rust_log.as_deref(), verbosity);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(verbosity.log_level()))
}

fn stderr_ansi(color: ColorChoice) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => console::Term::stderr().is_term(),
    }
}

/// Installs the global subscriber
pub fn init_logging(config: &CliConfig) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.verbosity))
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.log_format {
        OutputFormat::Json => builder.json().try_init(),
        OutputFormat::Text => builder.with_ansi(stderr_ansi(config.color)).try_init(),
    };
    installed.map_err(|e| CliError::config(format!("cannot install logger: {e}")))
}
