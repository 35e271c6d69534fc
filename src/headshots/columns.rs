//! Column detection for projection CSVs written by older and newer scrapers.

use std::cmp::Ordering;

use crate::{fantasypros::ProjectionTable, matching::normalize_column, FflError, Result};

/// Normalized header spellings of the player column, in priority order.
const PLAYER_CANDIDATES: [&str; 4] = [
    "player",
    "unnamed: 0_level_0 player",
    "defense dst",
    "defense (dst)",
];

/// Real header names of the detected columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedColumns {
    pub player: String,
    pub fpts: String,
}

/// Find the player and FPTS columns.
pub fn detect_columns(table: &ProjectionTable, source_name: &str) -> Result<DetectedColumns> {
    let normalized: Vec<(String, &String)> = table
        .headers
        .iter()
        .map(|h| (normalize_column(h), h))
        .collect();

    let player = PLAYER_CANDIDATES
        .iter()
        .find_map(|cand| {
            normalized
                .iter()
                .find(|(n, _)| n == cand)
                .map(|(_, orig)| (*orig).clone())
        })
        .or_else(|| {
            normalized
                .iter()
                .find(|(n, _)| n.contains("player"))
                .map(|(_, orig)| (*orig).clone())
        })
        .ok_or_else(|| FflError::MissingColumn {
            column: "player".to_string(),
            source_name: source_name.to_string(),
        })?;

    let fpts = normalized
        .iter()
        .find(|(n, _)| n.contains("fpts"))
        .map(|(_, orig)| (*orig).clone())
        .ok_or_else(|| FflError::MissingColumn {
            column: "FPTS".to_string(),
            source_name: source_name.to_string(),
        })?;

    Ok(DetectedColumns { player, fpts })
}

/// Parse a projection cell: `"1,234.5"` → 1234.5. Blank or text → `None`.
pub fn parse_points(cell: &str) -> Option<f64> {
    cell.trim().replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Top `n` rows by `fpts_column`, highest first. Rows whose value is not a
/// number sort after every numeric row.
pub fn top_by_fpts(table: &ProjectionTable, fpts_column: &str, n: usize) -> ProjectionTable {
    let mut top = table.clone();
    if let Some(idx) = table.column_index(fpts_column) {
        // sort_by is stable, so equal scores keep file order
        top.rows.sort_by(|a, b| {
            match (parse_points(&a[idx]), parse_points(&b[idx])) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
    top.truncate(n);
    top
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn test_detect_plain_columns() {
        let table = ProjectionTable::new(s(&["position", "Player", "FPTS"]), vec![]);
        let cols = detect_columns(&table, "qb.csv").unwrap();
        assert_eq!(cols.player, "Player");
        assert_eq!(cols.fpts, "FPTS");
    }

    #[test]
    fn test_detect_multiindex_style_columns() {
        let table = ProjectionTable::new(
            s(&[
                "('Unnamed: 0_level_0', 'Player')",
                "('MISC', 'FPTS')",
                "player_name",
            ]),
            vec![],
        );
        let cols = detect_columns(&table, "wr.csv").unwrap();
        assert_eq!(cols.player, "('Unnamed: 0_level_0', 'Player')");
        assert_eq!(cols.fpts, "('MISC', 'FPTS')");
    }

    #[test]
    fn test_detect_defense_column_priority() {
        let table = ProjectionTable::new(s(&["Defense (DST)", "player_name", "FPTS"]), vec![]);
        let cols = detect_columns(&table, "dst.csv").unwrap();
        assert_eq!(cols.player, "Defense (DST)");
    }

    #[test]
    fn test_detect_missing_columns() {
        let no_player = ProjectionTable::new(s(&["team", "FPTS"]), vec![]);
        match detect_columns(&no_player, "k.csv") {
            Err(FflError::MissingColumn { column, source_name }) => {
                assert_eq!(column, "player");
                assert_eq!(source_name, "k.csv");
            }
            other => panic!("Expected MissingColumn, got {:?}", other),
        }

        let no_fpts = ProjectionTable::new(s(&["Player", "PTS"]), vec![]);
        assert!(matches!(
            detect_columns(&no_fpts, "k.csv"),
            Err(FflError::MissingColumn { column, .. }) if column == "FPTS"
        ));
    }

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points(" 23.4 "), Some(23.4));
        assert_eq!(parse_points("1,234.5"), Some(1234.5));
        assert_eq!(parse_points(""), None);
        assert_eq!(parse_points("n/a"), None);
        assert_eq!(parse_points("NaN"), None);
    }

    #[test]
    fn test_top_by_fpts_sorts_numerically_and_truncates() {
        let table = ProjectionTable::new(
            s(&["Player", "FPTS"]),
            vec![
                s(&["A", "9.5"]),
                s(&["B", "n/a"]),
                s(&["C", "10.1"]),
                s(&["D", "100"]),
                s(&["E", "9.5"]),
            ],
        );

        let top = top_by_fpts(&table, "FPTS", 4);
        let names: Vec<&str> = top.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["D", "C", "A", "E"]);

        let all = top_by_fpts(&table, "FPTS", 50);
        assert_eq!(all.rows.last().unwrap()[0], "B");
    }
}
