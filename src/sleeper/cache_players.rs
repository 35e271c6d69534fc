// src/sleeper/cache_players.rs
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use super::{http::SleeperClient, types::SleeperPlayers};
use crate::core::{file_age, try_read_to_string, write_string};
use crate::Result;

/// Sleeper adds players during the season; a day-old dump is re-fetched.
pub const DEFAULT_PLAYERS_MAX_AGE_HOURS: u64 = 24;

/// Load the Sleeper players dump.
///
/// With a cache path, read it first unless `refresh` is set or the file is
/// older than `max_age`; on a miss (or an unparsable file) fetch from Sleeper
/// and rewrite the cache. Without a cache path, always fetch.
pub async fn load_or_fetch_players(
    client: &SleeperClient,
    cache_path: Option<&Path>,
    refresh: bool,
    max_age: Duration,
) -> Result<SleeperPlayers> {
    let Some(path) = cache_path else {
        return client.players().await;
    };

    // 1) Try cache (unless refresh or stale)
    let stale = match file_age(path) {
        Some(age) if age > max_age => {
            info!(path = %path.display(), age_secs = age.as_secs(), "players cache is stale");
            true
        }
        _ => false,
    };
    if !refresh && !stale {
        if let Some(s) = try_read_to_string(path) {
            match serde_json::from_str::<SleeperPlayers>(&s) {
                Ok(players) => {
                    info!(path = %path.display(), count = players.len(), "players loaded from cache");
                    return Ok(players);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "ignoring unreadable players cache"),
            }
        }
    }

    // 2) Fetch from API
    let raw = client.players_raw().await?;
    let players: SleeperPlayers = serde_json::from_str(&raw)?;

    // 3) Write cache
    if let Err(e) = write_string(path, &raw) {
        warn!(path = %path.display(), error = %e, "could not write players cache");
    }

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::PlayerIndex;
    use serde_json::json;
    use std::time::SystemTime;
    use tempfile::tempdir;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const DAY: Duration = Duration::from_secs(DEFAULT_PLAYERS_MAX_AGE_HOURS * 60 * 60);

    async fn mock_players(server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "4046": {"full_name": "Josh Allen", "position": "QB"}
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_cache_miss_fetches_and_writes() {
        let server = MockServer::start().await;
        mock_players(&server, 1).await;
        let dir = tempdir().unwrap();
        let cache = dir.path().join("players.json");

        let client = SleeperClient::with_base_url(server.uri()).unwrap();
        let players = load_or_fetch_players(&client, Some(&cache), false, DAY)
            .await
            .unwrap();

        assert_eq!(players.len(), 1);
        assert!(cache.exists());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let server = MockServer::start().await;
        mock_players(&server, 0).await;
        let dir = tempdir().unwrap();
        let cache = dir.path().join("players.json");
        write_string(&cache, r#"{"1": {"full_name": "Cached Guy"}}"#).unwrap();

        let client = SleeperClient::with_base_url(server.uri()).unwrap();
        let players = load_or_fetch_players(&client, Some(&cache), false, DAY)
            .await
            .unwrap();

        assert_eq!(players["1"].full_name.as_deref(), Some("Cached Guy"));
    }

    #[tokio::test]
    async fn test_refresh_and_corrupt_cache_fetch() {
        let server = MockServer::start().await;
        mock_players(&server, 2).await;
        let dir = tempdir().unwrap();
        let cache = dir.path().join("players.json");
        let client = SleeperClient::with_base_url(server.uri()).unwrap();

        write_string(&cache, r#"{"1": {"full_name": "Cached Guy"}}"#).unwrap();
        let refreshed = load_or_fetch_players(&client, Some(&cache), true, DAY)
            .await
            .unwrap();
        assert!(refreshed.contains_key("4046"));

        write_string(&cache, "not json").unwrap();
        let recovered = load_or_fetch_players(&client, Some(&cache), false, DAY)
            .await
            .unwrap();
        assert!(recovered.contains_key("4046"));
    }

    #[tokio::test]
    async fn test_no_cache_path_always_fetches() {
        let server = MockServer::start().await;
        mock_players(&server, 1).await;

        let client = SleeperClient::with_base_url(server.uri()).unwrap();
        let players = load_or_fetch_players(&client, None, false, DAY).await.unwrap();
        assert_eq!(players.len(), 1);
    }

    #[tokio::test]
    async fn test_stale_cache_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "1": {"full_name": "Old Guy"},
                "9999": {"full_name": "New Rookie"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempdir().unwrap();
        let cache = dir.path().join("players.json");
        write_string(&cache, r#"{"1": {"full_name": "Old Guy"}}"#).unwrap();
        std::fs::File::options()
            .write(true)
            .open(&cache)
            .unwrap()
            .set_modified(SystemTime::now() - 2 * DAY)
            .unwrap();

        let client = SleeperClient::with_base_url(server.uri()).unwrap();
        let players = load_or_fetch_players(&client, Some(&cache), false, DAY)
            .await
            .unwrap();

        let index = PlayerIndex::build(&players);
        assert_eq!(index.guess("New Rookie"), Some("9999"));
        assert!(try_read_to_string(&cache).unwrap().contains("New Rookie"));
    }
}
