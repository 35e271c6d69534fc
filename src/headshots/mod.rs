//! Player headshot downloads from the Sleeper and ESPN image CDNs.
//!
//! Files are cached flat on disk: an image that already exists (as `.jpg` or
//! `.png`) is never fetched again.

pub mod columns;
pub mod espn;
pub mod pool;

use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::{
    core::{existing_with_extensions, fetch_image, http::build_client, write_bytes},
    Result,
};

pub use columns::{detect_columns, top_by_fpts, DetectedColumns};
pub use pool::download_all;

pub const SLEEPER_CDN_BASE: &str = "https://sleepercdn.com/content/nfl/players";

/// Sleeper serves most headshots as JPEG; a few only as PNG.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Polite pause after each player.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(20);

pub const DEFAULT_WORKERS: usize = 16;

/// What happened to one player's headshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Skipped,
    Missing,
}

/// Running totals across a download batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub saved: usize,
    pub skipped: usize,
    pub missing: usize,
}

impl DownloadSummary {
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Saved(_) => self.saved += 1,
            DownloadOutcome::Skipped => self.skipped += 1,
            DownloadOutcome::Missing => self.missing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.saved + self.skipped + self.missing
    }
}

/// Candidate CDN URLs for a player, in the order they are tried.
pub fn sleeper_cdn_urls(cdn_base: &str, player_id: &str) -> Vec<String> {
    let base = cdn_base.trim_end_matches('/');
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| format!("{}/{}.{}", base, player_id, ext))
        .collect()
}

/// Existing headshot for `player_id` in `dir`, if any.
pub fn existing_headshot(dir: &Path, player_id: &str) -> Option<PathBuf> {
    existing_with_extensions(dir, player_id, &IMAGE_EXTENSIONS)
}

/// Downloads Sleeper CDN headshots into per-position directories.
#[derive(Clone)]
pub struct HeadshotDownloader {
    client: Client,
    cdn_base: String,
}

impl HeadshotDownloader {
    pub fn new() -> Result<Self> {
        Self::with_cdn_base(SLEEPER_CDN_BASE)
    }

    pub fn with_cdn_base(cdn_base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client(
                concat!("ffl-assets/", env!("CARGO_PKG_VERSION")),
                crate::core::http::DEFAULT_TIMEOUT,
            )?,
            cdn_base: cdn_base.into(),
        })
    }

    /// Fetch `url` into `dest`. Any failure (transport, status, empty body,
    /// write) is reported as `false`.
    pub async fn try_download(&self, url: &str, dest: &Path) -> bool {
        match fetch_image(&self.client, url).await {
            Ok(Some(body)) => match write_bytes(dest, &body.bytes) {
                Ok(()) => {
                    debug!(url, content_type = ?body.content_type, bytes = body.bytes.len(), "saved");
                    true
                }
                Err(e) => {
                    debug!(dest = %dest.display(), error = %e, "write failed");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                debug!(url, error = %e, "request failed");
                false
            }
        }
    }

    /// Skip if present, else try `.jpg` then `.png`.
    pub async fn download(&self, player_id: &str, dir: &Path) -> DownloadOutcome {
        if existing_headshot(dir, player_id).is_some() {
            return DownloadOutcome::Skipped;
        }

        let urls = sleeper_cdn_urls(&self.cdn_base, player_id);
        for (url, ext) in urls.iter().zip(IMAGE_EXTENSIONS) {
            let dest = dir.join(format!("{}.{}", player_id, ext));
            if self.try_download(url, &dest).await {
                return DownloadOutcome::Saved(dest);
            }
        }
        DownloadOutcome::Missing
    }
}
