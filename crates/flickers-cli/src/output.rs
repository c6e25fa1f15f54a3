//! Result rendering on stdout

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use console::{style, Term};
use serde::Serialize;

/// Writes command results as text or JSON
#[derive(Debug)]
pub struct Printer {
    term: Term,
    /// Result format
    pub format: OutputFormat,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Printer {
    /// Create a printer for the given configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            term: Term::stdout(),
            format: config.format,
            use_color: config.use_color(),
            quiet: config.verbosity.is_quiet(),
        }
    }

    /// Returns true if results go out as JSON
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.format.is_json()
    }

    /// Print one JSON document
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.term.write_line(&json)?;
        Ok(())
    }

    /// Print the primary result line; shown even in quiet mode
    pub fn result(&self, value: &str) -> CliResult<()> {
        let line = if self.use_color {
            style(value).bold().to_string()
        } else {
            value.to_string()
        };
        self.term.write_line(&line)?;
        Ok(())
    }

    /// Print a secondary detail line
    pub fn detail(&self, text: &str) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.use_color {
            style(text).dim().to_string()
        } else {
            text.to_string()
        };
        self.term.write_line(&line)?;
        Ok(())
    }

    /// Print a labelled value, e.g. `length: м, см`
    pub fn field(&self, label: &str, value: &str) -> CliResult<()> {
        let label = if self.use_color {
            style(label).cyan().bold().to_string()
        } else {
            label.to_string()
        };
        self.term.write_line(&format!("{label}: {value}"))?;
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };
        self.term.write_line(&format!("{prefix} {message}"))?;
        Ok(())
    }

    /// Print an informational message
    pub fn info(&self, message: &str) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };
        self.term.write_line(&format!("{prefix} {message}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};

    #[test]
    fn test_printer_from_config() {
        let config = CliConfig::new()
            .with_format(OutputFormat::Json)
            .with_color(ColorChoice::Always)
            .with_verbosity(Verbosity::Quiet);
        let printer = Printer::new(&config);
        assert!(printer.is_json());
        assert!(!printer.use_color);
        assert!(printer.quiet);
    }

    #[test]
    fn test_text_printer_colors() {
        let config = CliConfig::new().with_color(ColorChoice::Always);
        let printer = Printer::new(&config);
        assert!(!printer.is_json());
        assert!(printer.use_color);
        assert!(!printer.quiet);
    }
}
