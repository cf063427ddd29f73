//! Zoom Feed - marketplace XML export
//!
//! Reads the commercializable catalog from MongoDB, renders the Zoom XML
//! feed, and publishes it when the content changed since the last run.
//! Runs once per invocation; scheduling is external.

use clap::Parser;
use std::process;
use std::time::Instant;
use zoom_feed::{pipeline, Config};

/// Zoom marketplace feed exporter - reads the product catalog and publishes the XML feed
#[derive(Parser, Debug)]
#[command(name = "zoom_feed")]
#[command(version, about, long_about = None)]
struct Args {
    /// MongoDB connection string (default: ZUNKA_MONGODB_URI)
    #[arg(long)]
    mongodb_uri: Option<String>,

    /// Root directory for logs, written under <path>/log/zoom (default: ZUNKAPATH)
    #[arg(long)]
    zunka_path: Option<String>,

    /// Root directory for the feed, written under <path>/dist/xml/zoom (default: ZUNKA_SITE_PATH)
    #[arg(long)]
    site_path: Option<String>,
}

#[tokio::main]
async fn main() {
    let started = Instant::now();
    let args = Args::parse();

    let config = match Config::resolve(args.mongodb_uri, args.zunka_path, args.site_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("zoom_feed: {err}");
            process::exit(1);
        }
    };
    if let Err(err) = config.ensure_directories() {
        eprintln!("zoom_feed: {err}");
        process::exit(1);
    }
    if let Err(err) = zoom_feed::logging::init(&config.log_dir) {
        eprintln!("zoom_feed: failed to open log file: {err}");
        process::exit(1);
    }

    log::info!(
        "*** Starting zoom_feed (version {}) ***",
        env!("CARGO_PKG_VERSION")
    );

    match pipeline::run(&config).await {
        Ok(summary) => {
            if summary.feed_updated {
                log::info!("Published feed with {} products", summary.product_count);
            } else {
                log::info!(
                    "Feed unchanged with {} products, archive kept at {}",
                    summary.product_count,
                    summary.archive_path.display()
                );
            }
        }
        Err(err) => {
            log::error!("Feed export failed: {err}");
            process::exit(1);
        }
    }

    log::info!("Time to process {}ms", started.elapsed().as_millis());
}
