//! ESPN headshots, keyed by ESPN player id from a published CSV.

use reqwest::{header::CONTENT_TYPE, Client};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{
    core::{fetch_text, http::build_client, http::DEFAULT_TIMEOUT, write_bytes},
    FflError, Result,
};

pub const ESPN_IDS_CSV_URL: &str =
    "https://raw.githubusercontent.com/KoBeWa/Scrape/master/output/espn_players.csv";
pub const ESPN_ID_COLUMN: &str = "espn_id";
pub const ESPN_CDN_BASE: &str = "https://a.espncdn.com";

/// `;` when the header line uses only semicolons, otherwise `,`.
pub fn detect_delimiter(first_line: &str) -> u8 {
    if first_line.contains(';') && !first_line.contains(',') {
        b';'
    } else {
        b','
    }
}

/// Unique, trimmed, non-empty ids from `id_column`, in sorted order.
pub fn parse_id_csv(text: &str, id_column: &str) -> Result<BTreeSet<String>> {
    let first_line = text.lines().next().ok_or(FflError::EmptyCsv)?;
    let delimiter = detect_delimiter(first_line);
    info!(delimiter = %(delimiter as char), "detected CSV delimiter");

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let idx = headers
        .iter()
        .position(|h| h == id_column)
        .ok_or_else(|| FflError::MissingCsvColumn {
            column: id_column.to_string(),
            found: headers.clone(),
        })?;

    let mut ids = BTreeSet::new();
    let mut rows = 0usize;
    for record in rdr.records() {
        let record = record?;
        rows += 1;
        if let Some(id) = record.get(idx).map(str::trim).filter(|id| !id.is_empty()) {
            ids.insert(id.to_string());
        }
    }
    info!(rows, unique_ids = ids.len(), "ESPN id CSV loaded");
    Ok(ids)
}

/// ESPN combiner URL for a 350x254 headshot.
pub fn espn_headshot_url(cdn_base: &str, player_id: &str) -> String {
    format!(
        "{}/combiner/i?img=/i/headshots/nfl/players/full/{}.png&w=350&h=254",
        cdn_base.trim_end_matches('/'),
        player_id
    )
}

/// Result of one ESPN headshot attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EspnOutcome {
    Saved(PathBuf),
    AlreadyPresent(PathBuf),
    HttpStatus(u16),
    NotAnImage(String),
    RequestFailed(String),
}

impl EspnOutcome {
    /// Existing files count as success.
    pub fn is_success(&self) -> bool {
        matches!(self, EspnOutcome::Saved(_) | EspnOutcome::AlreadyPresent(_))
    }
}

/// Sequential ESPN downloader sharing one connection pool.
pub struct EspnHeadshots {
    client: Client,
    cdn_base: String,
}

impl EspnHeadshots {
    pub fn new() -> Result<Self> {
        Self::with_cdn_base(ESPN_CDN_BASE)
    }

    pub fn with_cdn_base(cdn_base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client(concat!("ffl-assets/", env!("CARGO_PKG_VERSION")), DEFAULT_TIMEOUT)?,
            cdn_base: cdn_base.into(),
        })
    }

    /// Fetch the id list CSV.
    pub async fn fetch_ids(&self, csv_url: &str, id_column: &str) -> Result<BTreeSet<String>> {
        info!(url = csv_url, "loading ESPN id CSV");
        let text = fetch_text(&self.client, csv_url).await?;
        parse_id_csv(&text, id_column)
    }

    /// Download `<out_dir>/<id>.png` unless it already exists.
    pub async fn download(&self, player_id: &str, out_dir: &Path) -> EspnOutcome {
        let dest = out_dir.join(format!("{}.png", player_id));
        if dest.exists() {
            return EspnOutcome::AlreadyPresent(dest);
        }

        let url = espn_headshot_url(&self.cdn_base, player_id);
        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => return EspnOutcome::RequestFailed(e.to_string()),
        };
        if resp.status() != reqwest::StatusCode::OK {
            return EspnOutcome::HttpStatus(resp.status().as_u16());
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.starts_with("image") {
            return EspnOutcome::NotAnImage(content_type);
        }

        let bytes = match resp.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return EspnOutcome::RequestFailed(e.to_string()),
        };
        match write_bytes(&dest, &bytes) {
            Ok(()) => EspnOutcome::Saved(dest),
            Err(e) => {
                warn!(dest = %dest.display(), error = %e, "write failed");
                EspnOutcome::RequestFailed(e.to_string())
            }
        }
    }
}
