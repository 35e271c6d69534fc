//! FantasyPros weekly projections: fetch the per-position page, pull out the
//! data table, normalize a few columns, and tag rows with position/season/week.

pub mod html;
pub mod normalize;
pub mod table;

use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{
    core::http::{build_client, fetch_text, BROWSER_USER_AGENT, DEFAULT_TIMEOUT},
    Position, Result, Season, Week,
};

pub use html::read_table_from_html;
pub use normalize::{add_player_team_columns, detect_week_from_header, ensure_fpts, normalize_columns};
pub use table::ProjectionTable;

pub const FANTASYPROS_BASE_URL: &str = "https://www.fantasypros.com/nfl/projections";

/// Page URL for a position, with `?week=N` when a week is requested.
pub fn position_url(base_url: &str, position: Position, week: Option<Week>) -> String {
    let url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        position.fantasypros_page()
    );
    match week {
        Some(week) => format!("{}?week={}", url, week),
        None => url,
    }
}

/// `<outdir>/<year>/week_NN` or `<outdir>/<year>/week_current`.
pub fn output_dir(outdir: &Path, season: Season, week: Option<Week>) -> PathBuf {
    let week_dirname = match week {
        Some(week) => format!("week_{}", week.padded()),
        None => "week_current".to_string(),
    };
    outdir.join(season.to_string()).join(week_dirname)
}

/// Turn a projections page into the CSV-ready table.
///
/// Leading columns `position`, `season`, `week` are inserted; the week is the
/// one announced on the page, else the requested one, else blank.
pub fn build_projection_table(
    html: &str,
    position: Position,
    season: Season,
    requested_week: Option<Week>,
) -> Result<ProjectionTable> {
    let mut table = read_table_from_html(html)?;
    normalize_columns(&mut table);
    add_player_team_columns(&mut table);
    ensure_fpts(&mut table);

    let week = detect_week_from_header(html)
        .or(requested_week.map(|w| w.as_u16()))
        .map(|w| w.to_string())
        .unwrap_or_default();

    table.insert_constant_column(0, "position", &position.to_string());
    table.insert_constant_column(1, "season", &season.to_string());
    table.insert_constant_column(2, "week", &week);
    Ok(table)
}

/// Client for the FantasyPros projection pages.
pub struct FantasyProsClient {
    client: Client,
    base_url: String,
}

impl FantasyProsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FANTASYPROS_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client(BROWSER_USER_AGENT, DEFAULT_TIMEOUT)?,
            base_url: base_url.into(),
        })
    }

    /// Fetch and normalize one position's projections.
    pub async fn fetch_position(
        &self,
        position: Position,
        season: Season,
        week: Option<Week>,
    ) -> Result<ProjectionTable> {
        let url = position_url(&self.base_url, position, week);
        info!(%position, url = %url, "fetching projections");
        let html = fetch_text(&self.client, &url).await?;
        build_projection_table(&html, position, season, week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_url() {
        assert_eq!(
            position_url(FANTASYPROS_BASE_URL, Position::QB, None),
            "https://www.fantasypros.com/nfl/projections/qb.php"
        );
        assert_eq!(
            position_url("http://localhost/", Position::DST, Some(Week::new(5).unwrap())),
            "http://localhost/dst.php?week=5"
        );
    }

    #[test]
    fn test_output_dir() {
        let base = Path::new("data");
        assert_eq!(
            output_dir(base, Season::new(2025), None),
            PathBuf::from("data/2025/week_current")
        );
        assert_eq!(
            output_dir(base, Season::new(2025), Some(Week::new(3).unwrap())),
            PathBuf::from("data/2025/week_03")
        );
    }

    #[test]
    fn test_build_projection_table_prefers_detected_week() {
        let html = r#"<h2>Week 9 Kicker Projections</h2>
            <table><thead><tr><th>Player</th><th>FG</th><th>FPTS</th></tr></thead>
            <tbody><tr><td>Justin Tucker BAL</td><td>2.0</td><td>8.1</td></tr></tbody></table>"#;

        let table = build_projection_table(
            html,
            Position::K,
            Season::new(2025),
            Some(Week::new(4).unwrap()),
        )
        .unwrap();

        assert_eq!(
            table.headers,
            vec!["position", "season", "week", "Player", "FG", "FPTS", "player_name", "team"]
        );
        assert_eq!(
            table.rows[0],
            vec!["K", "2025", "9", "Justin Tucker BAL", "2.0", "8.1", "Justin Tucker", "BAL"]
        );
    }

    #[test]
    fn test_build_projection_table_blank_week_when_unknown() {
        let html = "<table><tr><th>Player</th><th>FPTS</th></tr><tr><td>A B KC</td><td>1</td></tr></table>";
        let table = build_projection_table(html, Position::TE, Season::new(2024), None).unwrap();
        assert_eq!(table.cell(0, "week"), Some(""));
        assert_eq!(table.cell(0, "position"), Some("TE"));
    }
}
