//! Command implementations for the ffl-assets CLI

pub mod headshots_all;
pub mod headshots_espn;
pub mod headshots_top;
pub mod projections;
pub mod weekly_report;

use std::path::PathBuf;
use std::time::Duration;

use crate::{
    core::sleeper_players_path,
    sleeper::{load_or_fetch_players, SleeperClient, SleeperPlayers},
    Result,
};

/// Where the players dump is cached, or `None` when caching is off.
pub fn players_cache_path(no_cache: bool) -> Option<PathBuf> {
    (!no_cache).then(sleeper_players_path)
}

/// Load the Sleeper players map the way every command does.
pub async fn load_players(
    client: &SleeperClient,
    refresh: bool,
    no_cache: bool,
    max_age: Duration,
) -> Result<SleeperPlayers> {
    let cache = players_cache_path(no_cache);
    load_or_fetch_players(client, cache.as_deref(), refresh, max_age).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_cache_path() {
        assert!(players_cache_path(true).is_none());
        let path = players_cache_path(false).unwrap();
        assert!(path.ends_with("ffl-assets/sleeper-players-nfl.json"));
    }
}
