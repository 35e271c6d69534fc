//! Headshots for the top-N projected players of each position CSV.

use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::{
    fantasypros::ProjectionTable,
    headshots::{detect_columns, top_by_fpts, DownloadOutcome, HeadshotDownloader},
    matching::{clean_player_name, PlayerIndex},
    sleeper::SleeperClient,
    Position, Result,
};

use super::load_players;

pub const DEFAULT_TOP: usize = 50;

#[derive(Debug, Clone)]
pub struct HeadshotsTopParams {
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub top: usize,
    pub refresh: bool,
    pub no_cache: bool,
    pub cache_max_age: Duration,
}

/// Per-position match counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionStats {
    pub seen: usize,
    pub missed: usize,
}

impl PositionStats {
    pub fn hits(&self) -> usize {
        self.seen - self.missed
    }
}

/// Read one position CSV and keep its best `top` rows together with the
/// detected player column.
fn top_rows(csv_path: &Path, top: usize) -> Result<(ProjectionTable, String)> {
    let table = ProjectionTable::read_csv_file(csv_path)?;
    let source = csv_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let columns = detect_columns(&table, &source)?;
    Ok((top_by_fpts(&table, &columns.fpts, top), columns.player))
}

async fn process_position(
    downloader: &HeadshotDownloader,
    index: &PlayerIndex,
    position: Position,
    table: &ProjectionTable,
    player_column: &str,
    assets_dir: &Path,
) -> PositionStats {
    let mut stats = PositionStats::default();
    let out_dir = assets_dir.join(position.to_string());

    for row in 0..table.len() {
        let name = clean_player_name(table.cell(row, player_column).unwrap_or(""));
        if name.is_empty() {
            continue;
        }
        stats.seen += 1;

        let mut player_id = index.guess(&name);
        if player_id.is_none() && position == Position::DST {
            player_id = table
                .cell(row, "team")
                .and_then(|team| index.guess_team(team));
        }

        let Some(player_id) = player_id else {
            println!("[MISS] {:<3}  {}  -> no Sleeper id found", position, name);
            stats.missed += 1;
            continue;
        };

        match downloader.download(player_id, &out_dir).await {
            DownloadOutcome::Skipped => {}
            DownloadOutcome::Saved(_) => println!("[OK ] {:<3}  {}  ->  {}", position, name, player_id),
            DownloadOutcome::Missing => {
                println!("[FAIL] {:<3}  {}  ->  {} (no image found)", position, name, player_id);
                stats.missed += 1;
            }
        }
    }
    stats
}

/// Walk `<data_dir>/<pos>.csv` for every position. Missing files and files
/// without recognizable columns are reported and skipped.
pub async fn download_top_headshots(
    downloader: &HeadshotDownloader,
    index: &PlayerIndex,
    data_dir: &Path,
    assets_dir: &Path,
    top: usize,
) -> Vec<(Position, PositionStats)> {
    let mut results = Vec::with_capacity(Position::ALL.len());

    for position in Position::ALL {
        let csv_path = data_dir.join(format!("{}.csv", position.file_stem()));
        if !csv_path.exists() {
            warn!(%position, path = %csv_path.display(), "projection CSV missing");
            results.push((position, PositionStats::default()));
            continue;
        }

        info!(%position, path = %csv_path.display(), "reading projections");
        let stats = match top_rows(&csv_path, top) {
            Ok((table, player_column)) => {
                process_position(downloader, index, position, &table, &player_column, assets_dir)
                    .await
            }
            Err(e) => {
                error!(%position, error = %e, "could not process CSV");
                PositionStats::default()
            }
        };
        results.push((position, stats));
    }
    results
}

/// Handle the `headshots top` command
pub async fn handle_headshots_top(params: HeadshotsTopParams) -> Result<()> {
    println!("Loading the Sleeper player list...");
    let sleeper = SleeperClient::new()?;
    let players = load_players(
        &sleeper,
        params.refresh,
        params.no_cache,
        params.cache_max_age,
    )
    .await?;
    let index = PlayerIndex::build(&players);
    info!(players = index.len(), "player index built");

    let downloader = HeadshotDownloader::new()?;
    let results = download_top_headshots(
        &downloader,
        &index,
        &params.data_dir,
        &params.assets_dir,
        params.top,
    )
    .await;

    println!();
    println!("[SUMMARY]");
    for (position, stats) in &results {
        println!(
            "{}: seen={}, missed={}, hits={}",
            position,
            stats.seen,
            stats.missed,
            stats.hits()
        );
    }
    println!();
    println!("Done.");
    Ok(())
}
