//! Weekly league report written to markdown.

use chrono::Utc;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::{
    core::write_string,
    report::{
        complete_or_fallback, player_names, report_path, roster_owner_map, summarize_matchups,
        system_prompt, user_prompt, wrap_as_markdown, ChatMessage, Language, OpenAiClient,
        OwnerAliases, PlayerNames, Tone,
    },
    sleeper::{load_or_fetch_players, SleeperClient},
    FflError, LeagueId, Result, Week,
};

use super::players_cache_path;

/// Raw command-line / environment input.
#[derive(Debug, Clone)]
pub struct WeeklyReportParams {
    pub api_key: Option<String>,
    pub league_id: Option<LeagueId>,
    pub week: Option<Week>,
    pub model: String,
    pub outdir: PathBuf,
    pub language: Language,
    pub tone: Tone,
    pub owner_aliases: Option<PathBuf>,
    pub refresh: bool,
    pub no_cache: bool,
    pub cache_max_age: Duration,
}

/// Everything the report run needs once required values are present.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub league_id: LeagueId,
    /// `None` uses the week Sleeper reports as current.
    pub week: Option<Week>,
    pub model: String,
    pub outdir: PathBuf,
    pub language: Language,
    pub tone: Tone,
    pub aliases: OwnerAliases,
    pub players_cache: Option<PathBuf>,
    pub refresh: bool,
    pub players_max_age: Duration,
}

async fn load_player_names(sleeper: &SleeperClient, settings: &ReportSettings) -> PlayerNames {
    let players = load_or_fetch_players(
        sleeper,
        settings.players_cache.as_deref(),
        settings.refresh,
        settings.players_max_age,
    )
    .await;
    match players {
        Ok(players) => player_names(&players),
        Err(e) => {
            warn!(error = %e, "could not load players map, using ids as names");
            PlayerNames::new()
        }
    }
}

/// Gather the week's league data, ask the model for a write-up and save it.
/// Returns the written file.
pub async fn write_weekly_report(
    sleeper: &SleeperClient,
    openai: &OpenAiClient,
    settings: &ReportSettings,
) -> Result<PathBuf> {
    let state = sleeper.nfl_state().await?;
    let week = match settings.week {
        Some(week) => week,
        None => Week::new(state.week)?,
    };

    let league = sleeper.league(&settings.league_id).await?;
    let users = sleeper.users(&settings.league_id).await?;
    let rosters = sleeper.rosters(&settings.league_id).await?;
    let owners = roster_owner_map(&users, &rosters);
    let raw = sleeper.matchups(&settings.league_id, week).await?;
    let names = load_player_names(sleeper, settings).await;

    let matchups = summarize_matchups(&raw, &owners, &settings.aliases, &names);
    println!("Matchups for week {} → {} pairings", week, matchups.len());

    let league_name = league.name.as_deref().unwrap_or("Sleeper League");
    let messages = [
        ChatMessage::system(system_prompt(settings.tone, settings.language)),
        ChatMessage::user(user_prompt(league_name, &state.season, week, &matchups)),
    ];
    let text = complete_or_fallback(openai, &settings.model, &messages, &matchups).await?;

    let path = report_path(&settings.outdir, week);
    write_string(&path, &wrap_as_markdown(week, &text, Utc::now()))?;
    info!(path = %path.display(), %week, "weekly report written");
    Ok(path)
}

fn require<T>(value: Option<T>, env_var: &str) -> Result<T> {
    value.ok_or_else(|| FflError::MissingEnv {
        env_var: env_var.to_string(),
    })
}

/// Handle the weekly-report command
pub async fn handle_weekly_report(params: WeeklyReportParams) -> Result<()> {
    let api_key = require(params.api_key.filter(|k| !k.is_empty()), "OPENAI_API_KEY")?;
    let league_id = require(params.league_id, "SLEEPER_LEAGUE_ID")?;

    let aliases = match &params.owner_aliases {
        Some(path) => OwnerAliases::load(path)?,
        None => OwnerAliases::default(),
    };

    let settings = ReportSettings {
        league_id,
        week: params.week,
        model: params.model,
        outdir: params.outdir,
        language: params.language,
        tone: params.tone,
        aliases,
        players_cache: players_cache_path(params.no_cache),
        refresh: params.refresh,
        players_max_age: params.cache_max_age,
    };

    let sleeper = SleeperClient::new()?;
    let openai = OpenAiClient::new(api_key)?;
    let path = write_weekly_report(&sleeper, &openai, &settings).await?;
    println!("✓ Weekly report written: {}", path.display());
    Ok(())
}
