//! Bounded parallel download pool.

use futures::stream::{self, StreamExt};
use std::{path::Path, time::Duration};

use super::{DownloadOutcome, DownloadSummary, HeadshotDownloader};
use crate::Position;

/// Download every `(position, player_id)` into `<out_dir>/<POS>/` with at
/// most `workers` requests in flight.
///
/// `on_outcome` sees each result as it completes together with the running
/// totals. Players that actually hit the network are followed by `pause`.
pub async fn download_all<F>(
    downloader: &HeadshotDownloader,
    tasks: Vec<(Position, String)>,
    out_dir: &Path,
    workers: usize,
    pause: Duration,
    mut on_outcome: F,
) -> DownloadSummary
where
    F: FnMut(Position, &str, &DownloadOutcome, &DownloadSummary),
{
    let mut results = stream::iter(tasks.into_iter().map(|(position, player_id)| {
        let dir = out_dir.join(position.to_string());
        async move {
            let outcome = downloader.download(&player_id, &dir).await;
            if outcome != DownloadOutcome::Skipped && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
            (position, player_id, outcome)
        }
    }))
    .buffer_unordered(workers.max(1));

    let mut summary = DownloadSummary::default();
    while let Some((position, player_id, outcome)) = results.next().await {
        summary.record(&outcome);
        on_outcome(position, &player_id, &outcome, &summary);
    }
    summary
}
