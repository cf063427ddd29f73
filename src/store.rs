//! Product store access
//!
//! Connects to the store's MongoDB instance and reads the catalog records
//! eligible for the feed. Every store operation runs under an explicit
//! deadline; exceeding one aborts the run.

use crate::error::{FeedError, Result};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

const STORE_DATABASE: &str = "zunka";
const PRODUCTS_COLLECTION: &str = "products";

/// Deadline for establishing the client connection
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Deadline for the post-connect ping
pub const PING_TIMEOUT: Duration = Duration::from_secs(2);
/// Deadline for the catalog query and cursor drain
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(3);

/// One raw catalog record, as stored by the site
///
/// Fields other than `_id` default when absent so the restricted projection
/// never fails a decode on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogProduct {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "storeProductTitle", default)]
    pub title: String,
    #[serde(rename = "storeProductCategory", default)]
    pub category: String,
    #[serde(rename = "storeProductDetail", default)]
    pub detail: String,
    #[serde(rename = "storeProductTechnicalInformation", default)]
    pub technical_information: String,
    #[serde(rename = "storeProductPrice", default)]
    pub price: f64,
    #[serde(default)]
    pub ean: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "dealerName", default)]
    pub dealer_name: String,
}

/// Open connection to the product store
pub struct StoreSession {
    client: Client,
}

impl StoreSession {
    /// Connect to the store and verify it answers a ping
    pub async fn connect(uri: &str) -> Result<Self> {
        let connect = async {
            let mut options = ClientOptions::parse(uri).await?;
            options.connect_timeout = Some(CONNECT_TIMEOUT);
            options.server_selection_timeout = Some(CONNECT_TIMEOUT);
            Client::with_options(options)
        };
        let client = timeout(CONNECT_TIMEOUT, connect)
            .await
            .map_err(|_| FeedError::timeout("store connect", CONNECT_TIMEOUT))?
            .map_err(FeedError::Connection)?;

        let store_db = client.database(STORE_DATABASE);
        let ping = store_db.run_command(doc! { "ping": 1 });
        timeout(PING_TIMEOUT, ping)
            .await
            .map_err(|_| FeedError::timeout("store ping", PING_TIMEOUT))?
            .map_err(FeedError::Connection)?;

        log::info!("Connected to product store");
        Ok(Self { client })
    }

    /// Fetch all catalog records eligible for the feed, in the store's
    /// natural retrieval order
    ///
    /// The server-side cursor is released on every exit path: the driver
    /// kills it when the cursor is dropped.
    pub async fn fetch_commercializable(&self) -> Result<Vec<CatalogProduct>> {
        let collection: Collection<CatalogProduct> = self
            .client
            .database(STORE_DATABASE)
            .collection(PRODUCTS_COLLECTION);

        let scan = async {
            let mut cursor = collection
                .find(eligibility_filter())
                .projection(catalog_projection())
                .max_time(SCAN_TIMEOUT)
                .await?;

            let mut products = Vec::new();
            while let Some(product) = cursor.try_next().await? {
                products.push(product);
            }
            Ok::<_, mongodb::error::Error>(products)
        };

        timeout(SCAN_TIMEOUT, scan)
            .await
            .map_err(|_| FeedError::timeout("catalog scan", SCAN_TIMEOUT))?
            .map_err(read_error)
    }

    /// Best-effort shutdown of the client
    pub async fn disconnect(self) {
        self.client.shutdown().await;
        log::info!("Disconnected from product store");
    }
}

/// Only commercializable, in-stock, priced records with a non-blank title
/// are visible to the feed
fn eligibility_filter() -> Document {
    doc! {
        "storeProductCommercialize": true,
        "storeProductQtd": { "$gt": 0 },
        "storeProductPrice": { "$gt": 0 },
        "storeProductTitle": { "$regex": r"\S" },
    }
}

/// Restrict the scan to the fields the feed derives from
fn catalog_projection() -> Document {
    doc! {
        "storeProductTitle": true,
        "storeProductCategory": true,
        "storeProductDetail": true,
        "storeProductTechnicalInformation": true,
        "storeProductPrice": true,
        "ean": true,
        "images": true,
        "dealerName": true,
    }
}

fn read_error(err: mongodb::error::Error) -> FeedError {
    if matches!(*err.kind, ErrorKind::BsonDeserialization(_)) {
        FeedError::Decode(err)
    } else {
        FeedError::Connection(err)
    }
}

#[cfg(test)]
pub use tests::make_test_catalog_product;
