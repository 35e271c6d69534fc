//! ESPN headshots for every id in the published ESPN id CSV.

use std::path::{Path, PathBuf};
use tracing::warn;

use crate::{
    headshots::espn::{EspnHeadshots, EspnOutcome},
    Result,
};

#[derive(Debug, Clone)]
pub struct HeadshotsEspnParams {
    pub csv_url: String,
    pub id_column: String,
    /// Images land in `<assets_dir>/espn/`.
    pub assets_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EspnSummary {
    pub success: usize,
    pub failed: usize,
}

/// `<assets_dir>/espn`
pub fn espn_output_dir(assets_dir: &Path) -> PathBuf {
    assets_dir.join("espn")
}

/// Fetch the id list and download each headshot in id order, one at a time.
pub async fn download_espn_headshots(
    espn: &EspnHeadshots,
    csv_url: &str,
    id_column: &str,
    out_dir: &Path,
) -> Result<EspnSummary> {
    let ids = espn.fetch_ids(csv_url, id_column).await?;
    println!("{} unique ESPN ids found.", ids.len());

    let total = ids.len();
    let mut summary = EspnSummary::default();
    for (i, id) in ids.iter().enumerate() {
        println!("[{}/{}] Fetching headshot for id {} ...", i + 1, total, id);
        let outcome = espn.download(id, out_dir).await;
        match &outcome {
            EspnOutcome::Saved(_) => println!("  -> {}.png saved.", id),
            EspnOutcome::AlreadyPresent(_) => println!("  -> {}.png already exists, skipping.", id),
            EspnOutcome::HttpStatus(status) => println!("  !! No image for id {} (HTTP {})", id, status),
            EspnOutcome::NotAnImage(content_type) => {
                println!("  !! Response for id {} is not an image (Content-Type: {})", id, content_type)
            }
            EspnOutcome::RequestFailed(e) => {
                warn!(id = %id, error = %e, "ESPN request failed");
                println!("  !! Request failed for id {}: {}", id, e)
            }
        }

        if outcome.is_success() {
            summary.success += 1;
        } else {
            summary.failed += 1;
        }
    }
    Ok(summary)
}

/// Handle the `headshots espn` command
pub async fn handle_headshots_espn(params: HeadshotsEspnParams) -> Result<()> {
    let out_dir = espn_output_dir(&params.assets_dir);
    std::fs::create_dir_all(&out_dir)?;

    println!("Loading CSV from {} ...", params.csv_url);
    let espn = EspnHeadshots::new()?;
    let summary =
        download_espn_headshots(&espn, &params.csv_url, &params.id_column, &out_dir).await?;

    println!();
    println!("Done.");
    println!("Succeeded: {}", summary.success);
    println!("Failed: {}", summary.failed);
    println!("Images are in: {}", out_dir.display());
    Ok(())
}
