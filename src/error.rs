//! Error types for the feed export

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Unified error type for feed export operations
///
/// Every variant is fatal to the run: the pipeline never retries and never
/// publishes a partial feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Required configuration value is missing
    #[error("{0} not defined")]
    Config(String),
    /// Product store unreachable, refused the connection, or failed a query
    #[error("product store error: {0}")]
    Connection(#[source] mongodb::error::Error),
    /// A bounded store operation exceeded its deadline
    #[error("{operation} did not finish within {limit:?}")]
    Timeout {
        operation: &'static str,
        limit: Duration,
    },
    /// A catalog document does not match the expected record shape
    #[error("catalog record decode failed: {0}")]
    Decode(#[source] mongodb::error::Error),
    /// Feed document serialization failed
    #[error("feed serialization failed: {0}")]
    Encode(#[from] quick_xml::SeError),
    /// Archive or feed file read/write failed
    #[error("feed file I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl FeedError {
    pub(crate) fn timeout(operation: &'static str, limit: Duration) -> Self {
        FeedError::Timeout { operation, limit }
    }
}

/// Result alias for feed export operations
pub type Result<T> = std::result::Result<T, FeedError>;
