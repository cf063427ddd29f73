//! Feed publication
//!
//! Every run writes a timestamped archive copy. The feed file the
//! marketplace ingests is only rewritten when its content changed, so an
//! unchanged catalog does not re-trigger Zoom's ingestion pipeline.

use crate::error::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name the marketplace ingests
pub const CURRENT_FEED_FILE: &str = "zoom-produtos.xml";

const ARCHIVE_BASE_NAME: &str = "zoom-produtos";

/// What a publication run did
#[derive(Debug)]
pub struct PublishOutcome {
    /// Archive copy written this run
    pub archive_path: PathBuf,
    /// The feed file the marketplace reads
    pub current_path: PathBuf,
    /// Whether the feed file was (re)written
    pub updated: bool,
}

/// Write the archive copy and, when content changed, the feed file
///
/// A missing feed file is not an error: it counts as "always different"
/// and is created.
pub fn publish(
    xml_dir: &Path,
    feed: &[u8],
    generated_at: &DateTime<Local>,
) -> Result<PublishOutcome> {
    let archive_path = xml_dir.join(archive_file_name(generated_at));
    fs::write(&archive_path, feed)?;
    log::info!("Saved feed archive {}", archive_path.display());

    let current_path = xml_dir.join(CURRENT_FEED_FILE);
    let unchanged = match fs::read(&current_path) {
        Ok(previous) => previous == feed,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("No previously published feed at {}", current_path.display());
            false
        }
        Err(err) => return Err(err.into()),
    };

    if unchanged {
        log::info!("XML not changed, keeping {}", current_path.display());
    } else {
        fs::write(&current_path, feed)?;
        log::info!("Saved feed file {}", current_path.display());
    }

    Ok(PublishOutcome {
        archive_path,
        current_path,
        updated: !unchanged,
    })
}

/// Archive name: base name plus generation timestamp, minute granularity
fn archive_file_name(generated_at: &DateTime<Local>) -> String {
    format!(
        "{ARCHIVE_BASE_NAME}-{}.xml",
        generated_at.format("%Y-%m-%d-%H%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 4, hour, minute, 0).unwrap()
    }

    #[test]
    fn archive_name_has_minute_granularity() {
        assert_eq!(
            archive_file_name(&timestamp(15, 4)),
            "zoom-produtos-2026-08-04-1504.xml"
        );
    }

    #[test]
    fn first_publish_creates_feed_and_archive() {
        let dir = tempfile::tempdir().unwrap();

        let outcome = publish(dir.path(), b"<feed/>", &timestamp(10, 0)).unwrap();
        assert!(outcome.updated);
        assert_eq!(fs::read(&outcome.archive_path).unwrap(), b"<feed/>");
        assert_eq!(fs::read(&outcome.current_path).unwrap(), b"<feed/>");
    }

    #[test]
    fn unchanged_content_keeps_feed_but_archives_again() {
        let dir = tempfile::tempdir().unwrap();

        let first = publish(dir.path(), b"<feed/>", &timestamp(10, 0)).unwrap();
        let second = publish(dir.path(), b"<feed/>", &timestamp(10, 5)).unwrap();

        assert!(first.updated);
        assert!(!second.updated);
        assert_ne!(first.archive_path, second.archive_path);
        assert!(first.archive_path.exists());
        assert!(second.archive_path.exists());
        assert_eq!(fs::read(&second.current_path).unwrap(), b"<feed/>");
    }

    #[test]
    fn changed_content_overwrites_feed() {
        let dir = tempfile::tempdir().unwrap();

        publish(dir.path(), b"<feed/>", &timestamp(10, 0)).unwrap();
        let outcome = publish(dir.path(), b"<feed>2</feed>", &timestamp(10, 5)).unwrap();

        assert!(outcome.updated);
        assert_eq!(fs::read(&outcome.current_path).unwrap(), b"<feed>2</feed>");
    }
}
