//! Run orchestration
//!
//! One linear pass: connect, read, derive, serialize, publish, disconnect.
//! Any failure aborts the run; re-running is left to the external
//! scheduler. Disconnect is best-effort and only reached on success.

use crate::config::Config;
use crate::error::Result;
use crate::publish;
use crate::store::{CatalogProduct, StoreSession};
use crate::zoom::product::FeedProduct;
use crate::zoom::xml::{self, FeedDocument};
use chrono::Local;
use std::path::PathBuf;

/// What a completed run produced
#[derive(Debug)]
pub struct RunSummary {
    pub product_count: usize,
    pub archive_path: PathBuf,
    pub feed_updated: bool,
}

/// Run the full export once
pub async fn run(config: &Config) -> Result<RunSummary> {
    let session = StoreSession::connect(&config.mongodb_uri).await?;

    let products = session.fetch_commercializable().await?;
    log::info!("{} products to be commercialized", products.len());

    let feed = render_feed(&products)?;
    let outcome = publish::publish(&config.xml_dir, feed.as_bytes(), &Local::now())?;

    session.disconnect().await;

    Ok(RunSummary {
        product_count: products.len(),
        archive_path: outcome.archive_path,
        feed_updated: outcome.updated,
    })
}

/// Derive feed records from the catalog and render the marketplace document
pub fn render_feed(products: &[CatalogProduct]) -> Result<String> {
    let records = products.iter().map(FeedProduct::from_catalog).collect();
    xml::render(&FeedDocument::new(records))
}
