//! Column and value normalization for scraped projection tables.

use regex::Regex;
use std::sync::LazyLock;

use super::{html::collapse_whitespace, table::ProjectionTable};

static PLAYER_TEAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\s+([A-Z]{2,3})$").expect("valid regex"));
static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("valid regex"));
static PAREN_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("valid regex"));
static WEEK_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWeek\s+(\d{1,2})\b").expect("valid regex"));

pub const PLAYER_COLUMN: &str = "Player";
pub const DEFENSE_COLUMN: &str = "Defense (DST)";
pub const FPTS_COLUMN: &str = "FPTS";

/// Collapse whitespace in header names and drop fully blank rows.
pub fn normalize_columns(table: &mut ProjectionTable) {
    for header in &mut table.headers {
        *header = collapse_whitespace(header);
    }
    table.drop_empty_rows();
}

/// Split `"Josh Allen BUF"` into `("Josh Allen", "BUF")`.
pub fn split_player_team(value: &str) -> Option<(String, String)> {
    let caps = PLAYER_TEAM.captures(value)?;
    Some((caps[1].trim().to_string(), caps[2].to_string()))
}

/// Add `player_name` and `team` columns.
///
/// A `Player` column is split on its trailing team abbreviation. A
/// `Defense (DST)` column becomes `player_name`, with the team taken from the
/// parenthesized part.
pub fn add_player_team_columns(table: &mut ProjectionTable) {
    if let Some(idx) = table.column_index(PLAYER_COLUMN) {
        let (names, teams): (Vec<String>, Vec<String>) = table
            .rows
            .iter()
            .map(|row| split_player_team(&row[idx]).unwrap_or_default())
            .unzip();
        table.set_column("player_name", names);
        table.set_column("team", teams);
    }

    if table.rename_column(DEFENSE_COLUMN, "player_name") {
        let Some(idx) = table.column_index("player_name") else {
            return;
        };
        let teams: Vec<String> = table
            .rows
            .iter()
            .map(|row| {
                PAREN_GROUP
                    .captures(&row[idx])
                    .map(|c| c[1].to_string())
                    .unwrap_or_default()
            })
            .collect();
        for row in &mut table.rows {
            let cleaned = PAREN_STRIP.replace_all(&row[idx], "").trim().to_string();
            row[idx] = cleaned;
        }
        table.set_column("team", teams);
    }
}

/// Make sure there is a column named exactly `FPTS`.
///
/// Takes the first column starting with `FPTS`, else one whose last word is
/// `FPTS` (flattened group headers such as `MISC FPTS`).
pub fn ensure_fpts(table: &mut ProjectionTable) {
    if table.has_column(FPTS_COLUMN) {
        return;
    }
    let candidate = table
        .headers
        .iter()
        .find(|h| h.to_uppercase().starts_with(FPTS_COLUMN))
        .or_else(|| {
            table.headers.iter().find(|h| {
                h.split_whitespace()
                    .last()
                    .is_some_and(|w| w.eq_ignore_ascii_case(FPTS_COLUMN))
            })
        })
        .cloned();
    if let Some(candidate) = candidate {
        table.rename_column(&candidate, FPTS_COLUMN);
    }
}

/// Week number announced on the page (`"Week 7 Projections"`).
pub fn detect_week_from_header(html: &str) -> Option<u16> {
    WEEK_HEADER
        .captures(html)
        .and_then(|c| c[1].parse::<u16>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_split_player_team() {
        assert_eq!(
            split_player_team("Josh Allen BUF"),
            Some(("Josh Allen".to_string(), "BUF".to_string()))
        );
        assert_eq!(
            split_player_team("Amon-Ra St. Brown DET"),
            Some(("Amon-Ra St. Brown".to_string(), "DET".to_string()))
        );
        assert_eq!(split_player_team("Free Agent"), None);
        assert_eq!(split_player_team("Marvin Harrison Jr. ARI").unwrap().0, "Marvin Harrison Jr.");
    }

    #[test]
    fn test_normalize_columns() {
        let mut table = ProjectionTable::new(
            s(&[" Player ", "PASSING   YDS"]),
            vec![s(&["", ""]), s(&["Josh Allen BUF", "250"])],
        );
        normalize_columns(&mut table);
        assert_eq!(table.headers, s(&["Player", "PASSING YDS"]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_add_player_team_columns_for_players() {
        let mut table = ProjectionTable::new(
            s(&["Player", "FPTS"]),
            vec![s(&["Josh Allen BUF", "23.4"]), s(&["Unknown", "1.0"])],
        );
        add_player_team_columns(&mut table);

        assert_eq!(table.headers, s(&["Player", "FPTS", "player_name", "team"]));
        assert_eq!(table.cell(0, "player_name"), Some("Josh Allen"));
        assert_eq!(table.cell(0, "team"), Some("BUF"));
        assert_eq!(table.cell(1, "player_name"), Some(""));
        assert_eq!(table.cell(1, "team"), Some(""));
    }

    #[test]
    fn test_add_player_team_columns_for_defense() {
        let mut table = ProjectionTable::new(
            s(&["Defense (DST)", "FPTS"]),
            vec![s(&["Buffalo Bills (BUF)", "9.0"])],
        );
        add_player_team_columns(&mut table);

        assert_eq!(table.headers, s(&["player_name", "FPTS", "team"]));
        assert_eq!(table.cell(0, "player_name"), Some("Buffalo Bills"));
        assert_eq!(table.cell(0, "team"), Some("BUF"));
    }

    #[test]
    fn test_ensure_fpts_renames_prefixed_column() {
        let mut table = ProjectionTable::new(s(&["Player", "MISC FL", "fpts misc"]), vec![]);
        ensure_fpts(&mut table);
        assert_eq!(table.headers, s(&["Player", "MISC FL", "FPTS"]));

        let mut grouped = ProjectionTable::new(s(&["Player", "MISC FL", "MISC FPTS"]), vec![]);
        ensure_fpts(&mut grouped);
        assert_eq!(grouped.headers, s(&["Player", "MISC FL", "FPTS"]));

        let mut exact = ProjectionTable::new(s(&["FPTS", "FPTS2"]), vec![]);
        ensure_fpts(&mut exact);
        assert_eq!(exact.headers, s(&["FPTS", "FPTS2"]));
    }

    #[test]
    fn test_detect_week_from_header() {
        assert_eq!(detect_week_from_header("<h1>Week 7 QB Projections</h1>"), Some(7));
        assert_eq!(detect_week_from_header("WEEK  12 rankings"), Some(12));
        assert_eq!(detect_week_from_header("Weekly projections"), None);
        assert_eq!(detect_week_from_header("Week 123"), None);
    }
}
