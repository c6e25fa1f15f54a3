//! Update-check command handler

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Printer;
use crate::UpdateCheckArgs;
use flickers_core::update::{check_for_update, Release, ReleaseFeed, UpdateError, UpdateStatus, Version};
use std::fs;
use std::path::PathBuf;

/// Release feed read from a saved latest-release document
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Creates a feed reading `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReleaseFeed for FileFeed {
    fn latest(&self) -> Result<Release, UpdateError> {
        let json = fs::read_to_string(&self.path)
            .map_err(|e| UpdateError::Feed(format!("{}: {e}", self.path.display())))?;
        Release::from_json(&json)
    }
}

/// Runs the check against the release document
pub fn run_update_check(args: &UpdateCheckArgs) -> CliResult<(Version, UpdateStatus)> {
    let current = match &args.current {
        Some(text) => text
            .parse::<Version>()
            .map_err(|e| CliError::invalid_argument(e.to_string()))?,
        None => Version::current(),
    };
    let status = check_for_update(current, &FileFeed::new(&args.release))?;
    Ok((current, status))
}

/// Execute the update-check command
pub fn execute_update_check(config: &CliConfig, args: &UpdateCheckArgs) -> CliResult<()> {
    let (current, status) = run_update_check(args)?;
    let printer = Printer::new(config);
    if printer.is_json() {
        return printer.json(&status);
    }
    match status {
        UpdateStatus::UpToDate => printer.success(&format!("Up to date ({current})")),
        UpdateStatus::Available {
            version,
            download_url,
            notes,
        } => {
            printer.result(&format!("Update available: {current} -> {version}"))?;
            if let Some(url) = download_url {
                printer.field("Download", &url)?;
            }
            if let Some(notes) = notes.filter(|n| !n.trim().is_empty()) {
                printer.detail(notes.trim())?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn release_file(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("latest.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_update_available() {
        let dir = TempDir::new().unwrap();
        let args = UpdateCheckArgs {
            release: release_file(&dir, r#"{"tag_name":"v2.0.0","body":"New converter","assets":[]}"#),
            current: Some("1.0.0".into()),
        };
        let (current, status) = run_update_check(&args).unwrap();
        assert_eq!(current, Version::new(1, 0, 0));
        assert!(status.has_update());
    }

    #[test]
    fn test_up_to_date() {
        let dir = TempDir::new().unwrap();
        let args = UpdateCheckArgs {
            release: release_file(&dir, r#"{"message":"Not Found"}"#),
            current: None,
        };
        let (_, status) = run_update_check(&args).unwrap();
        assert_eq!(status, UpdateStatus::UpToDate);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let args = UpdateCheckArgs {
            release: dir.path().join("missing.json"),
            current: None,
        };
        assert!(matches!(
            run_update_check(&args),
            Err(CliError::Update(UpdateError::Feed(_)))
        ));
    }

    #[test]
    fn test_bad_current_version() {
        let dir = TempDir::new().unwrap();
        let args = UpdateCheckArgs {
            release: release_file(&dir, "{}"),
            current: Some("one".into()),
        };
        assert!(matches!(
            run_update_check(&args),
            Err(CliError::InvalidArgument { .. })
        ));
    }
}
