//! Roster ownership and friendly owner names.

use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

use crate::{
    sleeper::{LeagueUser, Roster},
    Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerInfo {
    pub display_name: String,
    pub username: String,
}

impl Default for OwnerInfo {
    fn default() -> Self {
        Self {
            display_name: "Unknown".to_string(),
            username: String::new(),
        }
    }
}

/// Roster id → the owning user's display name and username.
pub fn roster_owner_map(users: &[LeagueUser], rosters: &[Roster]) -> HashMap<u32, OwnerInfo> {
    let user_by_id: HashMap<&str, &LeagueUser> =
        users.iter().map(|u| (u.user_id.as_str(), u)).collect();

    rosters
        .iter()
        .map(|r| {
            let user = r
                .owner_id
                .as_deref()
                .and_then(|id| user_by_id.get(id).copied());
            let info = OwnerInfo {
                display_name: user
                    .and_then(|u| u.display_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                username: user.and_then(|u| u.username.clone()).unwrap_or_default(),
            };
            (r.roster_id, info)
        })
        .collect()
}

/// Lower-cased team name / display name / username → preferred owner name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct OwnerAliases(HashMap<String, String>);

impl From<HashMap<String, String>> for OwnerAliases {
    fn from(raw: HashMap<String, String>) -> Self {
        Self(
            raw.into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v))
                .collect(),
        )
    }
}

impl OwnerAliases {
    /// Read a JSON object of alias → name.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.trim().to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Owner name for display.
///
/// The first of team name, display name, username found in `aliases` wins;
/// otherwise the display name in caps, then the username in caps, then
/// `UNKNOWN`.
pub fn pretty_owner_name(
    team_name: Option<&str>,
    display_name: Option<&str>,
    username: Option<&str>,
    aliases: &OwnerAliases,
) -> String {
    let candidates = [team_name, display_name, username];
    if let Some(alias) = candidates
        .iter()
        .flatten()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .find_map(|c| aliases.get(c))
    {
        return alias.to_string();
    }

    display_name
        .filter(|d| !d.is_empty())
        .or(username.filter(|u| !u.is_empty()))
        .map(str::to_uppercase)
        .unwrap_or_else(|| "UNKNOWN".to_string())
}
