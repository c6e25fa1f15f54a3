//! Update check against a release feed
//!
//! The feed itself (network, file, fixture) sits behind [`ReleaseFeed`]; this
//! module only decides whether the latest release is newer than the running
//! version.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Version of this crate
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release feed queried by the desktop updater
pub const RELEASE_FEED_URL: &str =
    "https://api.github.com/repos/Rimix98/Flickers-Calculator/releases/latest";

/// Malformed version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid version: {0}")]
pub struct VersionError(pub String);

/// Update check failures
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Feed could not be read
    #[error("Release feed error: {0}")]
    Feed(String),

    /// Feed body is not a release document
    #[error("Malformed release: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Release tag is not a version
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    /// Major component
    pub major: u64,
    /// Minor component
    pub minor: u64,
    /// Patch component
    pub patch: u64,
}

impl Version {
    /// Creates a version
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Version of the running build
    #[must_use]
    pub fn current() -> Self {
        CURRENT_VERSION.parse().unwrap_or_default()
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parses `1.2.3`, tolerating a leading `v` and missing trailing
    /// components; anything past the third component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let text = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);
        if text.is_empty() {
            return Err(VersionError(s.to_string()));
        }
        let mut parts = [0u64; 3];
        for (slot, part) in parts.iter_mut().zip(text.split('.')) {
            *slot = part.parse().map_err(|_| VersionError(s.to_string()))?;
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Downloadable release asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Direct download URL
    pub browser_download_url: String,
}

/// Latest-release document as served by the feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Release tag, e.g. `v1.2.0`
    #[serde(default)]
    pub tag_name: Option<String>,
    /// Release notes
    #[serde(default)]
    pub body: Option<String>,
    /// Attached assets; the first is the installer
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Error text the API returns instead of a release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Release {
    /// Parses a release document
    pub fn from_json(json: &str) -> Result<Self, UpdateError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Source of the latest release
pub trait ReleaseFeed {
    /// Fetches the latest release document
    fn latest(&self) -> Result<Release, UpdateError>;
}

/// Outcome of an update check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateStatus {
    /// Running version is the latest, or no release is published
    UpToDate,
    /// A newer release exists
    Available {
        /// Released version
        version: Version,
        /// Installer URL, if an asset is attached
        download_url: Option<String>,
        /// Release notes
        notes: Option<String>,
    },
}

impl UpdateStatus {
    /// Returns true if a newer release exists
    #[must_use]
    pub const fn has_update(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Compares the feed's latest release against `current`.
///
/// An API error message or a release without a tag counts as up to date.
pub fn check_for_update(
    current: Version,
    feed: &dyn ReleaseFeed,
) -> Result<UpdateStatus, UpdateError> {
    let release = feed.latest()?;
    if let Some(message) = &release.message {
        tracing::info!(%message, "release feed returned an error message");
        return Ok(UpdateStatus::UpToDate);
    }
    let Some(tag) = release.tag_name.as_deref() else {
        tracing::info!("no releases published");
        return Ok(UpdateStatus::UpToDate);
    };
    let latest: Version = tag.parse()?;
    tracing::debug!(%current, %latest, "compared versions");
    if latest > current {
        Ok(UpdateStatus::Available {
            version: latest,
            download_url: release
                .assets
                .into_iter()
                .next()
                .map(|asset| asset.browser_download_url),
            notes: release.body,
        })
    } else {
        Ok(UpdateStatus::UpToDate)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedFeed(&'static str);

    impl ReleaseFeed for FixedFeed {
        fn latest(&self) -> Result<Release, UpdateError> {
            Release::from_json(self.0)
        }
    }

    #[derive(Debug)]
    struct OfflineFeed;

    impl ReleaseFeed for OfflineFeed {
        fn latest(&self) -> Result<Release, UpdateError> {
            Err(UpdateError::Feed("connection refused".into()))
        }
    }

    // ===== Version =====

    #[test]
    fn test_version_parse() {
        assert_eq!("1.2.3".parse::<Version>().unwrap(), Version::new(1, 2, 3));
        assert_eq!("v2.0.1".parse::<Version>().unwrap(), Version::new(2, 0, 1));
        assert_eq!("1.4".parse::<Version>().unwrap(), Version::new(1, 4, 0));
        assert_eq!("3".parse::<Version>().unwrap(), Version::new(3, 0, 0));
    }

    #[test]
    fn test_version_parse_errors() {
        assert!("".parse::<Version>().is_err());
        assert!("v".parse::<Version>().is_err());
        assert!("1.x.0".parse::<Version>().is_err());
        assert!("1..2".parse::<Version>().is_err());
    }

    #[test]
    fn test_version_order_is_numeric() {
        let a: Version = "1.10.0".parse().unwrap();
        let b: Version = "1.9.9".parse().unwrap();
        assert!(a > b);
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert_eq!(Version::new(1, 0, 0), "v1.0".parse().unwrap());
    }

    #[test]
    fn test_current_version() {
        assert_eq!(Version::current().to_string(), CURRENT_VERSION);
    }

    #[test]
    fn test_version_serde_as_string() {
        let json = serde_json::to_string(&Version::new(1, 2, 0)).unwrap();
        assert_eq!(json, "\"1.2.0\"");
        let back: Version = serde_json::from_str("\"v1.2.0\"").unwrap();
        assert_eq!(back, Version::new(1, 2, 0));
    }

    // ===== check_for_update =====

    #[test]
    fn test_newer_release_available() {
        let feed = FixedFeed(
            r#"{"tag_name":"v1.1.0","body":"Bug fixes","assets":[{"browser_download_url":"https://example.invalid/setup.exe"}]}"#,
        );
        let status = check_for_update(Version::new(1, 0, 0), &feed).unwrap();
        assert_eq!(
            status,
            UpdateStatus::Available {
                version: Version::new(1, 1, 0),
                download_url: Some("https://example.invalid/setup.exe".into()),
                notes: Some("Bug fixes".into()),
            }
        );
        assert!(status.has_update());
    }

    #[test]
    fn test_same_or_older_release() {
        let feed = FixedFeed(r#"{"tag_name":"v1.0.0","assets":[]}"#);
        assert_eq!(
            check_for_update(Version::new(1, 0, 0), &feed).unwrap(),
            UpdateStatus::UpToDate
        );
        assert_eq!(
            check_for_update(Version::new(1, 2, 0), &feed).unwrap(),
            UpdateStatus::UpToDate
        );
    }

    #[test]
    fn test_release_without_assets() {
        let feed = FixedFeed(r#"{"tag_name":"2.0.0"}"#);
        match check_for_update(Version::new(1, 0, 0), &feed).unwrap() {
            UpdateStatus::Available { download_url, notes, .. } => {
                assert!(download_url.is_none());
                assert!(notes.is_none());
            }
            UpdateStatus::UpToDate => panic!("expected an update"),
        }
    }

    #[test]
    fn test_api_message_is_up_to_date() {
        let feed = FixedFeed(r#"{"message":"Not Found"}"#);
        assert_eq!(
            check_for_update(Version::new(1, 0, 0), &feed).unwrap(),
            UpdateStatus::UpToDate
        );
    }

    #[test]
    fn test_missing_tag_is_up_to_date() {
        let feed = FixedFeed("{}");
        assert!(!check_for_update(Version::new(1, 0, 0), &feed)
            .unwrap()
            .has_update());
    }

    #[test]
    fn test_feed_errors_propagate() {
        assert!(matches!(
            check_for_update(Version::new(1, 0, 0), &OfflineFeed),
            Err(UpdateError::Feed(_))
        ));
        assert!(matches!(
            check_for_update(Version::new(1, 0, 0), &FixedFeed("not json")),
            Err(UpdateError::Malformed(_))
        ));
        assert!(matches!(
            check_for_update(Version::new(1, 0, 0), &FixedFeed(r#"{"tag_name":"latest"}"#)),
            Err(UpdateError::Version(_))
        ));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&UpdateStatus::UpToDate).unwrap();
        assert_eq!(json, r#"{"status":"up_to_date"}"#);
    }
}
