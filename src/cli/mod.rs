//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::{
    commands::headshots_top::DEFAULT_TOP,
    headshots::{
        espn::{ESPN_IDS_CSV_URL, ESPN_ID_COLUMN},
        DEFAULT_PAUSE, DEFAULT_WORKERS,
    },
    report::{Language, Tone, DEFAULT_MODEL},
    sleeper::DEFAULT_PLAYERS_MAX_AGE_HOURS,
};
use types::{LeagueId, Season, Week};

/// Sleeper players-dump caching shared by the commands that need it.
#[derive(Debug, Args)]
pub struct PlayersCache {
    /// Re-download the Sleeper players list even if a cached copy exists.
    #[clap(long)]
    pub refresh: bool,

    /// Do not read or write the players cache.
    #[clap(long)]
    pub no_cache: bool,

    /// Re-download the cached players list once it is older than this.
    #[clap(long, default_value_t = DEFAULT_PLAYERS_MAX_AGE_HOURS)]
    pub cache_max_age_hours: u64,
}

impl PlayersCache {
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.cache_max_age_hours * 60 * 60)
    }
}

/// Parse the lenient week value: anything but a week number means "current".
pub fn resolve_week(raw: Option<&str>) -> Option<Week> {
    raw.and_then(Week::from_env_value)
}

#[derive(Debug, Subcommand)]
pub enum HeadshotsCmd {
    /// Download headshots for every Sleeper QB/RB/WR/TE/K.
    All {
        /// Root of the per-position image folders.
        #[clap(long, default_value = "assets/players")]
        assets: PathBuf,

        /// Concurrent downloads.
        #[clap(long, short, default_value_t = DEFAULT_WORKERS)]
        workers: usize,

        /// Pause after each downloaded player, in milliseconds.
        #[clap(long, default_value_t = DEFAULT_PAUSE.as_millis() as u64)]
        pause_ms: u64,

        #[clap(flatten)]
        cache: PlayersCache,
    },

    /// Download headshots for the top projected players of each position CSV.
    Top {
        /// Directory holding `qb.csv`, `rb.csv`, ... (default `data/<year>/week_current`).
        #[clap(long)]
        data_dir: Option<PathBuf>,

        /// Root of the per-position image folders.
        #[clap(long, default_value = "assets/players")]
        assets: PathBuf,

        /// How many players per position.
        #[clap(long, short = 'n', default_value_t = DEFAULT_TOP)]
        top: usize,

        #[clap(flatten)]
        cache: PlayersCache,
    },

    /// Download ESPN headshots for every id in the ESPN id CSV.
    Espn {
        /// CSV listing ESPN player ids.
        #[clap(long, default_value = ESPN_IDS_CSV_URL)]
        csv_url: String,

        /// Name of the id column.
        #[clap(long, default_value = ESPN_ID_COLUMN)]
        id_column: String,

        /// Images are written to `<assets>/espn/`.
        #[clap(long, default_value = "assets/players")]
        assets: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape FantasyPros projections into one CSV per position.
    Projections {
        /// Output root; files go to `<outdir>/<year>/week_NN/` or `week_current/`.
        #[clap(long, default_value = "data")]
        outdir: PathBuf,

        /// Season year (e.g. 2025).
        #[clap(long, short, default_value_t = Season::default())]
        year: Season,

        /// Week to scrape (or set `WEEK`). Empty or non-numeric means current.
        #[clap(long, short, env = "WEEK")]
        week: Option<String>,
    },

    /// Download player headshots.
    Headshots {
        #[clap(subcommand)]
        cmd: HeadshotsCmd,
    },

    /// Write a markdown report of a Sleeper league week.
    WeeklyReport {
        /// Sleeper league id (or set `SLEEPER_LEAGUE_ID`).
        #[clap(long, short, env = "SLEEPER_LEAGUE_ID")]
        league_id: Option<LeagueId>,

        /// Week to report (or set `WEEK`); defaults to the current NFL week.
        #[clap(long, short, env = "WEEK")]
        week: Option<String>,

        /// OpenAI API key (or set `OPENAI_API_KEY`).
        #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Chat model.
        #[clap(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
        model: String,

        /// Directory for `week-NN.md`.
        #[clap(long, env = "OUTPUT_DIR", default_value = "reports")]
        outdir: PathBuf,

        /// Report language: `de`, anything else means English.
        #[clap(long, env = "LANGUAGE", default_value_t = Language::De)]
        language: Language,

        #[clap(long, env = "TONE", value_enum, default_value_t = Tone::Witzig)]
        tone: Tone,

        /// JSON object mapping team names / display names / usernames to owner names.
        #[clap(long, env = "OWNER_ALIASES_FILE")]
        owner_aliases: Option<PathBuf>,

        #[clap(flatten)]
        cache: PlayersCache,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ffl-assets",
    about = "Fantasy football projections, headshots and league reports"
)]
pub struct FflAssets {
    #[clap(subcommand)]
    pub command: Commands,
}
