//! FantasyPros projections → one CSV per position.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    fantasypros::{output_dir, FantasyProsClient},
    Position, Result, Season, Week,
};

#[derive(Debug, Clone)]
pub struct ProjectionsParams {
    pub outdir: PathBuf,
    pub season: Season,
    /// `None` scrapes whatever week FantasyPros currently shows.
    pub week: Option<Week>,
}

/// Scrape every position in order and write `<pos>.csv`. The first failing
/// position aborts the run.
pub async fn fetch_projections(
    client: &FantasyProsClient,
    outdir: &Path,
    season: Season,
    week: Option<Week>,
) -> Result<Vec<PathBuf>> {
    let dir = output_dir(outdir, season, week);
    let mut written = Vec::with_capacity(Position::ALL.len());

    for position in Position::ALL {
        let table = client.fetch_position(position, season, week).await?;
        let path = dir.join(format!("{}.csv", position.file_stem()));
        table.write_csv_file(&path)?;
        info!(%position, rows = table.len(), path = %path.display(), "projections written");
        println!("[OK] {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Handle the projections command
pub async fn handle_projections(params: ProjectionsParams) -> Result<()> {
    match params.week {
        Some(week) => println!("Fetching FantasyPros projections for {} week {}", params.season, week),
        None => println!("Fetching current FantasyPros projections for {}", params.season),
    }

    let client = FantasyProsClient::new()?;
    let written = fetch_projections(&client, &params.outdir, params.season, params.week).await?;
    println!("✓ {} projection files written", written.len());
    Ok(())
}
