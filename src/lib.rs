//! Zoom Feed - marketplace XML export
//!
//! This application reads the commercializable product catalog from the
//! store's MongoDB database, renders the Zoom marketplace XML feed, and
//! publishes it only when its content changed since the last run.

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod publish;
pub mod store;
pub mod zoom;

pub use config::Config;
pub use error::{FeedError, Result};
