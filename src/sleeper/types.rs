//! Serde models for the Sleeper payloads this crate reads.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::Position;

/// One entry of `GET /players/nfl`. Only the fields the fetchers read.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SleeperPlayer {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub fantasy_positions: Option<Vec<String>>,
    #[serde(default)]
    pub team: Option<String>,
}

impl SleeperPlayer {
    /// `position`, falling back to the first fantasy position.
    pub fn primary_position(&self) -> Option<&str> {
        self.position
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| {
                self.fantasy_positions
                    .as_ref()
                    .and_then(|fps| fps.first())
                    .map(String::as_str)
            })
    }

    /// Name shown in reports: full name, else "first last".
    pub fn display_name(&self) -> Option<String> {
        if let Some(full) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return Some(full.to_string());
        }
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        let joined = format!("{} {}", first, last).trim().to_string();
        (!joined.is_empty()).then_some(joined)
    }
}

/// Player id to player, as served by Sleeper. Sorted so iteration is stable.
pub type SleeperPlayers = BTreeMap<String, SleeperPlayer>;

/// Player ids grouped by headshot position, filtered to `wanted`.
pub fn players_by_position(
    players: &SleeperPlayers,
    wanted: &[Position],
) -> Vec<(Position, String)> {
    players
        .iter()
        .filter_map(|(id, p)| {
            let pos: Position = p.primary_position()?.parse().ok()?;
            wanted.contains(&pos).then(|| (pos, id.clone()))
        })
        .collect()
}

/// `GET /state/nfl`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NflState {
    pub week: u16,
    #[serde(default)]
    pub season: String,
}

/// `GET /league/<id>`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /league/<id>/users`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// `GET /league/<id>/rosters`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatchupMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// Sleeper sends `null` for lists and maps it has nothing for.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One side of a matchup from `GET /league/<id>/matchups/<week>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matchup {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players_points: HashMap<String, f64>,
    #[serde(default)]
    pub metadata: Option<MatchupMetadata>,
}

impl Matchup {
    pub fn team_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref())
            .filter(|n| !n.is_empty())
    }
}
