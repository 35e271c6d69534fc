//! Headshots for every Sleeper player at a skill position.

use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::{
    headshots::{download_all, DownloadOutcome, DownloadSummary, HeadshotDownloader},
    sleeper::{players_by_position, SleeperClient, SleeperPlayers},
    Position, Result,
};

use super::load_players;

/// A progress line is printed each time this many new files have been saved.
const PROGRESS_EVERY: usize = 250;

#[derive(Debug, Clone)]
pub struct HeadshotsAllParams {
    pub assets_dir: PathBuf,
    pub workers: usize,
    pub pause: Duration,
    pub refresh: bool,
    pub no_cache: bool,
    pub cache_max_age: Duration,
}

/// Download headshots for every QB/RB/WR/TE/K in `players`.
pub async fn download_all_headshots(
    downloader: &HeadshotDownloader,
    players: &SleeperPlayers,
    assets_dir: &Path,
    workers: usize,
    pause: Duration,
) -> DownloadSummary {
    let tasks = players_by_position(players, &Position::WITH_HEADSHOTS);
    println!(
        "Players to process: {} (positions: {})",
        tasks.len(),
        Position::WITH_HEADSHOTS
            .iter()
            .map(Position::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!(tasks = tasks.len(), workers, "starting headshot downloads");

    download_all(
        downloader,
        tasks,
        assets_dir,
        workers,
        pause,
        |_, _, outcome, summary| {
            if matches!(outcome, DownloadOutcome::Saved(_)) && summary.saved % PROGRESS_EVERY == 0 {
                println!("[OK] so far: {} saved", summary.saved);
            }
        },
    )
    .await
}

fn print_summary(summary: &DownloadSummary) {
    println!();
    println!("[SUMMARY]");
    println!("Newly saved: {}", summary.saved);
    println!("Already present (skipped): {}", summary.skipped);
    println!("Not found / failed: {}", summary.missing);
    println!("Processed: {}", summary.total());
    println!();
    println!("Note on DST/DEF:");
    println!("- Team defenses usually have no individual headshots and are not downloaded.");
}

/// Handle the `headshots all` command
pub async fn handle_headshots_all(params: HeadshotsAllParams) -> Result<()> {
    println!("Loading the full Sleeper player list...");
    let sleeper = SleeperClient::new()?;
    let players = load_players(
        &sleeper,
        params.refresh,
        params.no_cache,
        params.cache_max_age,
    )
    .await?;

    let downloader = HeadshotDownloader::new()?;
    let summary = download_all_headshots(
        &downloader,
        &players,
        &params.assets_dir,
        params.workers,
        params.pause,
    )
    .await;

    print_summary(&summary);
    Ok(())
}
