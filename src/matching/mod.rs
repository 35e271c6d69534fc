//! Player identity matching.
//!
//! Scraped tables carry free-text names ("Marvin Harrison Jr. ARI"); headshots
//! are keyed by Sleeper player id. Matching is a normalize-then-lookup chain
//! over two name indexes with a single suffix-stripping retry.

use rayon::prelude::*;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::sleeper::SleeperPlayers;

#[cfg(test)]
mod tests;

static TEAM_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\(?([A-Z]{2,3})\)?$").expect("valid regex"));
static NAME_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(jr|sr|ii|iii|iv)\b\.?").expect("valid regex"));

/// ASCII-fold, lower-case, trim and collapse whitespace.
pub fn normalize_text(s: &str) -> String {
    deunicode::deunicode(s)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a CSV header so differently-flattened spellings compare equal.
pub fn normalize_column(c: &str) -> String {
    let c = c
        .replace('"', "'")
        .replace(['(', ')'], " ")
        .replace(',', " ");
    normalize_text(&c)
}

/// Strip a trailing team abbreviation (`" BUF"` or `" (BUF)"`) from a name.
pub fn clean_player_name(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let name = TEAM_SUFFIX.replace(raw, "");
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove generational suffixes (`Jr.`, `III`, ...).
pub fn strip_name_suffixes(name: &str) -> String {
    NAME_SUFFIX.replace_all(name, "").trim().to_string()
}

/// Sort key for ids sharing a name: numeric Sleeper ids by value (lower ids
/// belong to longer-tenured players), team codes after them.
fn id_rank(id: &str) -> (u64, &str) {
    (id.parse().unwrap_or(u64::MAX), id)
}

/// Normalized-name lookup over the Sleeper players dump.
#[derive(Debug, Default)]
pub struct PlayerIndex {
    full_name: HashMap<String, Vec<String>>,
    first_last: HashMap<String, Vec<String>>,
    ids: HashSet<String>,
}

impl PlayerIndex {
    /// Index every player by normalized full name and by "first last".
    /// Ids under one key are ranked numerically; the lowest one wins.
    pub fn build(players: &SleeperPlayers) -> Self {
        let keyed: Vec<(String, Option<String>, Option<String>)> = players
            .par_iter()
            .map(|(id, p)| {
                let full = p
                    .full_name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .map(normalize_text);
                let first = p.first_name.as_deref().unwrap_or("");
                let last = p.last_name.as_deref().unwrap_or("");
                let first_last = (!first.is_empty() || !last.is_empty())
                    .then(|| normalize_text(&format!("{} {}", first, last)));
                (id.clone(), full, first_last)
            })
            .collect();

        let mut index = PlayerIndex::default();
        for (id, full, first_last) in keyed {
            if let Some(key) = full {
                index.full_name.entry(key).or_default().push(id.clone());
            }
            if let Some(key) = first_last {
                index.first_last.entry(key).or_default().push(id.clone());
            }
            index.ids.insert(id);
        }
        for ids in index
            .full_name
            .values_mut()
            .chain(index.first_last.values_mut())
        {
            ids.sort_by(|a, b| id_rank(a).cmp(&id_rank(b)));
        }
        index
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn lookup(&self, normalized: &str) -> Option<&str> {
        self.full_name
            .get(normalized)
            .or_else(|| self.first_last.get(normalized))
            .and_then(|ids| ids.first())
            .map(String::as_str)
    }

    /// Best-effort id for a display name.
    ///
    /// Full-name index first, then first-last; failing both, retry once with
    /// generational suffixes removed.
    pub fn guess(&self, player_name: &str) -> Option<&str> {
        if let Some(id) = self.lookup(&normalize_text(player_name)) {
            return Some(id);
        }
        let cleaned = strip_name_suffixes(player_name);
        if cleaned != player_name {
            return self.lookup(&normalize_text(&cleaned));
        }
        None
    }

    /// Team defenses: match the name, else treat the team code as the id.
    pub fn guess_team(&self, team: &str) -> Option<&str> {
        let team = team.trim();
        if team.is_empty() {
            return None;
        }
        self.guess(team)
            .or_else(|| self.ids.get(&team.to_uppercase()).map(String::as_str))
    }
}
