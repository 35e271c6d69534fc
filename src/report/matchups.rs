//! Pairing Sleeper matchup entries into head-to-head summaries.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::owners::{pretty_owner_name, OwnerAliases, OwnerInfo};
use crate::sleeper::{Matchup, SleeperPlayers};

/// Player id → display name.
pub type PlayerNames = HashMap<String, String>;

/// How many top scorers are listed per team.
const TOP_PLAYERS: usize = 3;

const BYE_TEAM: &str = "BYE / n/a";

pub fn player_names(players: &SleeperPlayers) -> PlayerNames {
    players
        .iter()
        .filter_map(|(id, p)| p.display_name().map(|name| (id.clone(), name)))
        .collect()
}

/// Group entries by `matchup_id`, keeping first-seen order. Entries without
/// an id are never paired with each other.
pub fn group_matchups(raw: &[Matchup]) -> Vec<Vec<&Matchup>> {
    let mut groups: Vec<Vec<&Matchup>> = Vec::new();
    let mut slot_by_id: HashMap<u32, usize> = HashMap::new();

    for m in raw {
        match m.matchup_id {
            Some(id) => match slot_by_id.get(&id) {
                Some(&slot) => groups[slot].push(m),
                None => {
                    slot_by_id.insert(id, groups.len());
                    groups.push(vec![m]);
                }
            },
            None => groups.push(vec![m]),
        }
    }
    groups
}

/// Lower roster id plays at home.
pub fn split_home_away<'a>(group: &[&'a Matchup]) -> Option<(&'a Matchup, Option<&'a Matchup>)> {
    match group {
        [] => None,
        [only] => Some((*only, None)),
        [a, b, ..] if a.roster_id <= b.roster_id => Some((*a, Some(*b))),
        [a, b, ..] => Some((*b, Some(*a))),
    }
}

pub fn starters_names(starters: &[String], names: &PlayerNames) -> Vec<String> {
    starters
        .iter()
        .map(|id| names.get(id).cloned().unwrap_or_else(|| id.clone()))
        .collect()
}

/// Best three scorers as `"Name (12.3)"`.
pub fn top_players(matchup: &Matchup, names: &PlayerNames) -> Vec<String> {
    let mut entries: Vec<(&String, f64)> = matchup
        .players_points
        .iter()
        .map(|(id, pts)| (id, *pts))
        .collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    entries
        .into_iter()
        .take(TOP_PLAYERS)
        .map(|(id, pts)| {
            let name = names.get(id).map(String::as_str).unwrap_or(id);
            format!("{} ({:.1})", name, pts)
        })
        .collect()
}

/// One team's side of a pairing, as sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSide {
    pub roster_id: Option<u32>,
    pub team_name: String,
    pub owner: String,
    pub points: f64,
    pub top: Vec<String>,
    pub starters: Vec<String>,
}

impl TeamSide {
    fn from_matchup(
        m: &Matchup,
        owners: &HashMap<u32, OwnerInfo>,
        aliases: &OwnerAliases,
        names: &PlayerNames,
    ) -> Self {
        let info = owners.get(&m.roster_id).cloned().unwrap_or_default();
        Self {
            roster_id: Some(m.roster_id),
            team_name: m
                .team_name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Team {}", m.roster_id)),
            owner: pretty_owner_name(
                m.team_name(),
                Some(info.display_name.as_str()),
                Some(info.username.as_str()),
                aliases,
            ),
            points: m.points.unwrap_or(0.0),
            top: top_players(m, names),
            starters: starters_names(&m.starters, names),
        }
    }

    fn bye() -> Self {
        Self {
            roster_id: None,
            team_name: BYE_TEAM.to_string(),
            owner: "UNKNOWN".to_string(),
            points: 0.0,
            top: Vec::new(),
            starters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSummary {
    pub home: TeamSide,
    pub away: TeamSide,
}

/// Build the per-pairing payload for one week.
pub fn summarize_matchups(
    raw: &[Matchup],
    owners: &HashMap<u32, OwnerInfo>,
    aliases: &OwnerAliases,
    names: &PlayerNames,
) -> Vec<MatchupSummary> {
    group_matchups(raw)
        .iter()
        .filter_map(|group| split_home_away(group))
        .map(|(home, away)| MatchupSummary {
            home: TeamSide::from_matchup(home, owners, aliases, names),
            away: away
                .map(|a| TeamSide::from_matchup(a, owners, aliases, names))
                .unwrap_or_else(TeamSide::bye),
        })
        .collect()
}
