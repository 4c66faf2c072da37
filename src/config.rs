//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings from there.
//! This provides the scroll timing constants, motion preferences and header layout.

use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::tracker::TrackerTiming;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug)]
/// Viewer preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Minimum spacing between processed scroll signals, in milliseconds.
    pub throttle_ms: u64,
    #[facet(default = 1000)]
    /// How long scroll signals are ignored after a navigation scroll starts, in milliseconds.
    pub settle_ms: u64,
    #[facet(default = 450)]
    /// Duration of the smooth scroll to a section, in milliseconds.
    pub scroll_duration_ms: u64,
    #[facet(default = 1200)]
    /// How long the copy button shows its outcome, in milliseconds.
    pub copy_feedback_ms: u64,
    #[facet(default = 16)]
    /// Interval between animation frames, in milliseconds.
    pub frame_ms: u64,
    #[facet(default = 3)]
    /// Rows moved per arrow key or mouse wheel notch.
    pub scroll_step: u16,
    #[facet(default = 4)]
    /// Number of section links in the header.
    pub header_links: usize,
    #[facet(default = false)]
    /// Jump to sections instead of animating the scroll.
    pub reduced_motion: bool,
}

impl Config {
    #[must_use]
    /// Built-in defaults.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn defaults() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }

    /// Load configuration from `path`, or from folio.toml in the working directory.
    ///
    /// A missing folio.toml yields the defaults; a missing explicit path does not.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path cannot be read or if the file does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, contents) = match path {
            Some(path) => (path.to_path_buf(), fs::read_to_string(path)?),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                match fs::read_to_string(&path) {
                    Ok(contents) => (path, contents),
                    Err(_) => return Ok(Self::defaults()),
                }
            }
        };

        let config = facet_toml::from_str::<Self>(&contents).map_err(|e| Error::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    #[must_use]
    /// Throttle and settle windows for the active section tracker.
    pub fn timing(&self) -> TrackerTiming {
        TrackerTiming {
            throttle: Duration::from_millis(self.throttle_ms),
            settle: Duration::from_millis(self.settle_ms),
        }
    }

    #[must_use]
    /// Duration of the smooth scroll to a section.
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    #[must_use]
    /// Feedback window of the copy button.
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    #[must_use]
    /// Interval between animation frames, never zero.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
