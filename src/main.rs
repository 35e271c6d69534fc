//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ffl_assets::{
    cli::{resolve_week, Commands, FflAssets, HeadshotsCmd},
    commands::{
        headshots_all::{handle_headshots_all, HeadshotsAllParams},
        headshots_espn::{handle_headshots_espn, HeadshotsEspnParams},
        headshots_top::{handle_headshots_top, HeadshotsTopParams},
        projections::{handle_projections, ProjectionsParams},
        weekly_report::{handle_weekly_report, WeeklyReportParams},
    },
    fantasypros::output_dir,
    Season,
};
use std::{path::Path, time::Duration};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let app = FflAssets::parse();

    match app.command {
        Commands::Projections { outdir, year, week } => handle_projections(ProjectionsParams {
            outdir,
            season: year,
            week: resolve_week(week.as_deref()),
        })
        .await
        .context("projections failed")?,

        Commands::Headshots { cmd } => match cmd {
            HeadshotsCmd::All {
                assets,
                workers,
                pause_ms,
                cache,
            } => handle_headshots_all(HeadshotsAllParams {
                assets_dir: assets,
                workers,
                pause: Duration::from_millis(pause_ms),
                refresh: cache.refresh,
                no_cache: cache.no_cache,
                cache_max_age: cache.max_age(),
            })
            .await
            .context("headshots all failed")?,

            HeadshotsCmd::Top {
                data_dir,
                assets,
                top,
                cache,
            } => handle_headshots_top(HeadshotsTopParams {
                data_dir: data_dir
                    .unwrap_or_else(|| output_dir(Path::new("data"), Season::default(), None)),
                assets_dir: assets,
                top,
                refresh: cache.refresh,
                no_cache: cache.no_cache,
                cache_max_age: cache.max_age(),
            })
            .await
            .context("headshots top failed")?,

            HeadshotsCmd::Espn {
                csv_url,
                id_column,
                assets,
            } => handle_headshots_espn(HeadshotsEspnParams {
                csv_url,
                id_column,
                assets_dir: assets,
            })
            .await
            .context("ESPN headshots failed")?,
        },

        Commands::WeeklyReport {
            league_id,
            week,
            api_key,
            model,
            outdir,
            language,
            tone,
            owner_aliases,
            cache,
        } => handle_weekly_report(WeeklyReportParams {
            api_key,
            league_id,
            week: resolve_week(week.as_deref()),
            model,
            outdir,
            language,
            tone,
            owner_aliases,
            refresh: cache.refresh,
            no_cache: cache.no_cache,
            cache_max_age: cache.max_age(),
        })
        .await
        .context("weekly report failed")?,
    }

    Ok(())
}
