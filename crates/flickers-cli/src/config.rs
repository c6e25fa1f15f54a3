//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Data file used when neither `--data` nor `FLICKERS_DATA` is given
pub const DEFAULT_DATA_FILE: &str = "flickers.json";

/// History lines shown by default, matching the history panel
pub const DEFAULT_HISTORY_LINES: usize = 10;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - engine transitions
    Debug,
    /// Trace - every key press
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }

    /// Log level directive used when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().is_term(),
        }
    }
}

/// Result and log rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl OutputFormat {
    /// Check if JSON
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Result output format
    pub format: OutputFormat,
    /// Log line format
    pub log_format: OutputFormat,
    /// Data file holding history and theme
    pub data_path: PathBuf,
    /// History lines shown by `history`
    pub history_lines: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            format: OutputFormat::Text,
            log_format: OutputFormat::Text,
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            history_lines: DEFAULT_HISTORY_LINES,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set result format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set log format
    #[must_use]
    pub const fn with_log_format(mut self, format: OutputFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Set data file
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Set history lines
    #[must_use]
    pub const fn with_history_lines(mut self, lines: usize) -> Self {
        self.history_lines = lines;
        self
    }

    /// Data file path
    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Whether result output should be colored
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.format == OutputFormat::Text && self.color.should_color()
    }
}
