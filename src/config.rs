//! Startup configuration
//!
//! Values come from CLI flags with environment-variable fallbacks. All three
//! are required; a missing value aborts the process before the pipeline runs.

use crate::error::{FeedError, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable holding the store connection string
pub const MONGODB_URI_VAR: &str = "ZUNKA_MONGODB_URI";
/// Environment variable holding the root directory for logs
pub const ZUNKA_PATH_VAR: &str = "ZUNKAPATH";
/// Environment variable holding the root directory for the feed output
pub const SITE_PATH_VAR: &str = "ZUNKA_SITE_PATH";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string for the product store
    pub mongodb_uri: String,
    /// Directory the log file is written to (`<ZUNKAPATH>/log/zoom`)
    pub log_dir: PathBuf,
    /// Directory the feed files are written to (`<ZUNKA_SITE_PATH>/dist/xml/zoom`)
    pub xml_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from CLI overrides, falling back to the environment
    pub fn resolve(
        mongodb_uri: Option<String>,
        zunka_path: Option<String>,
        site_path: Option<String>,
    ) -> Result<Self> {
        Self::from_values(
            mongodb_uri.or_else(|| env_value(MONGODB_URI_VAR)),
            zunka_path.or_else(|| env_value(ZUNKA_PATH_VAR)),
            site_path.or_else(|| env_value(SITE_PATH_VAR)),
        )
    }

    fn from_values(
        mongodb_uri: Option<String>,
        zunka_path: Option<String>,
        site_path: Option<String>,
    ) -> Result<Self> {
        let mongodb_uri = require(mongodb_uri, MONGODB_URI_VAR)?;
        let zunka_path = require(zunka_path, ZUNKA_PATH_VAR)?;
        let site_path = require(site_path, SITE_PATH_VAR)?;

        Ok(Self {
            mongodb_uri,
            log_dir: PathBuf::from(zunka_path).join("log").join("zoom"),
            xml_dir: PathBuf::from(site_path)
                .join("dist")
                .join("xml")
                .join("zoom"),
        })
    }

    /// Create the log and feed directories if they do not exist yet
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.log_dir)?;
        fs::create_dir_all(&self.xml_dir)?;
        Ok(())
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn require(value: Option<String>, name: &str) -> Result<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| FeedError::Config(name.to_string()))
}
