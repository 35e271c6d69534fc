//! Sleeper REST client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{League, LeagueUser, Matchup, NflState, Roster, SleeperPlayers};
use crate::{core::http::build_client, LeagueId, Result, Week};

/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// The full players dump is several megabytes.
const PLAYERS_TIMEOUT: Duration = Duration::from_secs(120);

/// Thin client over the public Sleeper read API.
#[derive(Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SLEEPER_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client(concat!("ffl-assets/", env!("CARGO_PKG_VERSION")), PLAYERS_TIMEOUT)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, "GET");
        let value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(value)
    }

    /// Every NFL player Sleeper knows, keyed by player id.
    pub async fn players(&self) -> Result<SleeperPlayers> {
        self.get_json("players/nfl").await
    }

    /// Raw players payload, for writing to the disk cache untouched.
    pub async fn players_raw(&self) -> Result<String> {
        let url = format!("{}/players/nfl", self.base_url);
        let text = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }

    pub async fn nfl_state(&self) -> Result<NflState> {
        self.get_json("state/nfl").await
    }

    pub async fn league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_json(&format!("league/{}", league_id)).await
    }

    pub async fn users(&self, league_id: &LeagueId) -> Result<Vec<LeagueUser>> {
        self.get_json(&format!("league/{}/users", league_id)).await
    }

    pub async fn rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("league/{}/rosters", league_id)).await
    }

    pub async fn matchups(&self, league_id: &LeagueId, week: Week) -> Result<Vec<Matchup>> {
        self.get_json(&format!("league/{}/matchups/{}", league_id, week))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn league_id() -> LeagueId {
        "1180276953741729792".parse().unwrap()
    }

    #[tokio::test]
    async fn test_players() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "4046": {"full_name": "Josh Allen", "position": "QB", "team": "BUF"}
            })))
            .mount(&server)
            .await;

        let client = SleeperClient::with_base_url(server.uri()).unwrap();
        let players = client.players().await.unwrap();
        assert_eq!(players["4046"].full_name.as_deref(), Some("Josh Allen"));
    }

    #[tokio::test]
    async fn test_matchups_path_includes_week() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/league/1180276953741729792/matchups/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"roster_id": 1, "matchup_id": 1, "points": 99.1}
            ])))
            .mount(&server)
            .await;

        let client = SleeperClient::with_base_url(server.uri()).unwrap();
        let matchups = client
            .matchups(&league_id(), Week::new(5).unwrap())
            .await
            .unwrap();
        assert_eq!(matchups.len(), 1);
        assert_eq!(matchups[0].points, Some(99.1));
    }

    #[tokio::test]
    async fn test_error_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/state/nfl"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = SleeperClient::with_base_url(server.uri()).unwrap();
        assert!(client.nfl_state().await.is_err());
    }
}
