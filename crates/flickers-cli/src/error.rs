//! Error types for the CLI

use flickers_core::convert::ConversionError;
use flickers_core::store::StoreError;
use flickers_core::update::UpdateError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file error
    #[error("Data file error: {0}")]
    Store(#[from] StoreError),

    /// Conversion rejected
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// Update check failed
    #[error("Update check failed: {0}")]
    Update(#[from] UpdateError),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<flickers_core::calc::UnknownKey> for CliError {
    fn from(err: flickers_core::calc::UnknownKey) -> Self {
        Self::invalid_argument(err.to_string())
    }
}

impl From<flickers_core::theme::UnknownTheme> for CliError {
    fn from(err: flickers_core::theme::UnknownTheme) -> Self {
        Self::invalid_argument(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use flickers_core::calc::UnknownKey;
    use flickers_core::convert::Category;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad config");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert_eq!(err.to_string(), "Invalid argument: bad arg");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_unknown_key_is_invalid_argument() {
        let err: CliError = UnknownKey("^".into()).into();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "Invalid argument: Unknown key: ^");
    }

    #[test]
    fn test_conversion_error_from() {
        let err: CliError = ConversionError::UnknownUnit {
            category: Category::Length,
            unit: "parsec".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Conversion failed: Unknown unit 'parsec' for length"
        );
    }
}
