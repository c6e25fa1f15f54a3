//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Flickers: keypad calculator, unit converter and calculation history
#[derive(Parser, Debug)]
#[command(name = "flickers")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format for results
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Log line format on stderr
    #[arg(long, default_value = "text", global = true)]
    pub log_format: FormatArg,

    /// Data file holding history and theme
    #[arg(long, env = "FLICKERS_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of calculator keys
    ///
    /// Keys are separated by spaces: digits and numbers (`12.5`), operators
    /// (`+ - * /`), `=`, `C`, `DEL`, `%`, and scientific keys
    /// (`sin cos tan ln log sqrt pi e x²`). Each `=` is recorded in history.
    Calc(CalcArgs),

    /// Convert a value between two units
    Convert(ConvertArgs),

    /// Price after a percentage discount
    Discount(DiscountArgs),

    /// Body-mass index from weight (kg) and height (m)
    Bmi(BmiArgs),

    /// List converter categories and their units
    Units(UnitsArgs),

    /// Show or clear calculation history
    History(HistoryArgs),

    /// Show or set the theme preference
    Theme(ThemeArgs),

    /// Show resolved configuration
    Config,

    /// Check a release document for a newer version
    UpdateCheck(UpdateCheckArgs),
}

/// Arguments for the calc command
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Keys to press, in order
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

impl CalcArgs {
    /// Keys joined into one whitespace-separated sequence
    #[must_use]
    pub fn sequence(&self) -> String {
        self.keys.join(" ")
    }
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Category (mass, speed, pressure, temperature, length, volume,
    /// currency, time, area, numeral)
    pub category: String,

    /// Source unit
    pub from: String,

    /// Target unit
    pub to: String,

    /// Value to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for the discount command
#[derive(Parser, Debug)]
pub struct DiscountArgs {
    /// Original price
    #[arg(allow_hyphen_values = true)]
    pub price: f64,

    /// Discount in percent
    #[arg(allow_hyphen_values = true)]
    pub percent: f64,
}

/// Arguments for the bmi command
#[derive(Parser, Debug)]
pub struct BmiArgs {
    /// Weight in kilograms
    pub weight: f64,

    /// Height in metres
    pub height: f64,
}

/// Arguments for the units command
#[derive(Parser, Debug)]
pub struct UnitsArgs {
    /// Only list this category
    pub category: Option<String>,
}

/// Arguments for the history command
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Remove every entry
    #[arg(long)]
    pub clear: bool,

    /// Number of entries to show (default from config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for the theme command
#[derive(Parser, Debug)]
pub struct ThemeArgs {
    /// Theme to select (purple, blue, green, dark, light)
    pub name: Option<String>,
}

/// Arguments for the update-check command
#[derive(Parser, Debug)]
pub struct UpdateCheckArgs {
    /// Release document (latest-release JSON)
    #[arg(long)]
    pub release: PathBuf,

    /// Version to compare against (defaults to this build)
    #[arg(long)]
    pub current: Option<String>,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Text or JSON
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::config::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
