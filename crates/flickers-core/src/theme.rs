//! Theme preference
//!
//! Only the stored name lives here; applying a theme is up to the front end.

use crate::store::{KeyValueStore, StoreResult, THEME_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default theme
    #[default]
    Purple,
    /// Blue accent
    Blue,
    /// Green accent
    Green,
    /// Dark background
    Dark,
    /// Light background
    Light,
}

/// Theme name that is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme: {0} (expected purple, blue, green, dark or light)")]
pub struct UnknownTheme(pub String);

impl Theme {
    /// All themes in picker order
    pub const ALL: [Self; 5] = [Self::Purple, Self::Blue, Self::Green, Self::Dark, Self::Light];

    /// Stored name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Reads the stored theme, falling back to the default when the key is
    /// missing, unknown or the store fails
    #[must_use]
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(name)) => name.parse().unwrap_or_else(|e: UnknownTheme| {
                tracing::warn!(error = %e, "ignoring stored theme");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "theme store unavailable");
                Self::default()
            }
        }
    }

    /// Writes the theme name to the store
    pub fn save(self, store: &mut dyn KeyValueStore) -> StoreResult<()> {
        tracing::debug!(theme = %self, "saving theme");
        store.set(THEME_KEY, self.name())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
