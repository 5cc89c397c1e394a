//! Configuration loading and parsing for `release-reminder.toml` files.
use color_eyre::eyre::WrapErr;
use log::*;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::{
    chat::matcher::DEFAULT_MATCH_THRESHOLD, result::Result,
    schedule::DEFAULT_REMINDER_HOUR,
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "release-reminder.toml";
/// Source branch of the release candidate pull request.
pub const DEFAULT_RELEASE_BRANCH: &str = "release-candidate";
/// Prefix stripped from the release pull request title to get the version.
pub const DEFAULT_RELEASE_TITLE_PREFIX: &str = "Release ";

/// Root configuration structure for `release-reminder.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct Config {
    /// Branch the release pull request is opened from.
    pub release_branch: String,
    /// Title prefix preceding the version, e.g. "Release ".
    pub release_title_prefix: String,
    /// Hour of the next business day the reminder is posted at.
    pub reminder_hour: u32,
    /// Minimum edit similarity for matching an author to a chat account.
    pub match_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            release_branch: DEFAULT_RELEASE_BRANCH.into(),
            release_title_prefix: DEFAULT_RELEASE_TITLE_PREFIX.into(),
            reminder_hour: DEFAULT_REMINDER_HOUR,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl Config {
    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from `path`, or from `release-reminder.toml` in the
    /// working directory when no path is given. Only the implicit default
    /// file may be absent.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let (file_path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !explicit && !fs::try_exists(file_path).await? {
            info!("no configuration found: using default");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(file_path).await.wrap_err_with(|| {
            format!("failed to read config file: {}", file_path.display())
        })?;

        debug!("loading configuration from {}", file_path.display());

        Self::parse(&content).wrap_err_with(|| {
            format!("failed to parse config file: {}", file_path.display())
        })
    }
}
