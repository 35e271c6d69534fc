//! Chat prompts for the weekly report.

use std::{convert::Infallible, fmt, str::FromStr};

use super::matchups::{MatchupSummary, TeamSide};
use crate::Week;

/// Writing style of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Tone {
    Neutral,
    #[default]
    Witzig,
    Trash,
}

impl Tone {
    fn style(self) -> &'static str {
        match self {
            Tone::Trash => {
                "Frech, locker, kurze Punchlines, aber nicht beleidigend. Deutsch mit sporttypischem Slang."
            }
            Tone::Witzig => "Locker, humorvoll, kurze Sätze, sportjournalistisch.",
            Tone::Neutral => "Sachlich-knapp, sportjournalistisch.",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tone::Neutral => "neutral",
            Tone::Witzig => "witzig",
            Tone::Trash => "trash",
        };
        f.write_str(s)
    }
}

/// Output language of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    De,
    En,
}

/// `de` selects German; any other value (including a locale such as
/// `en_US:en`) selects English.
impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.trim().eq_ignore_ascii_case("de") {
            Language::De
        } else {
            Language::En
        })
    }
}

impl Language {
    fn name(self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::De => "de",
            Language::En => "en",
        })
    }
}

pub fn system_prompt(tone: Tone, language: Language) -> String {
    format!(
        "Du bist ein Sport-Redakteur für Fantasy Football Weekly Reports.
Schreibe in {}. Stil: {}
Regeln:
- Schreibe pro Matchup 3–6 Sätze.
- Nutze konkrete Spieler- und Teamnamen, Scores und auffällige Leistungen.
- 1 knackige Headline pro Matchup (max. 8 Worte).
- Keine Beleidigungen, keine Unterstellungen, kein übertriebener Trash Talk.
- Halte dich an die übergebenen Daten (keine Fantasystats erfinden).",
        language.name(),
        tone.style()
    )
}

fn joined_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn side_line(label: &str, side: &TeamSide) -> String {
    format!(
        "{}: {} ({}) – {:.2} Pts",
        label, side.team_name, side.owner, side.points
    )
}

/// League facts plus the requested markdown layout.
pub fn user_prompt(
    league_name: &str,
    season: &str,
    week: Week,
    matchups: &[MatchupSummary],
) -> String {
    let mut lines = vec![
        format!("Liga: {}", league_name),
        format!("Season: {}", season),
        format!("Woche: {}", week),
        String::new(),
        "Matchups:".to_string(),
    ];

    for (i, m) in matchups.iter().enumerate() {
        lines.push(format!("#{}", i + 1));
        lines.push(side_line("Home", &m.home));
        lines.push(format!("Top: {}", joined_or_dash(&m.home.top)));
        lines.push(side_line("Away", &m.away));
        lines.push(format!("Top: {}", joined_or_dash(&m.away.top)));
        lines.push(format!("Starters(Home): {}", joined_or_dash(&m.home.starters)));
        lines.push(format!("Starters(Away): {}", joined_or_dash(&m.away.starters)));
        lines.push("---".to_string());
    }

    lines.extend([
        String::new(),
        "Aufgabe: Erstelle einen Weekly-Report-Textblock im Markdown-Format.".to_string(),
        "Struktur:".to_string(),
        format!("- H1: \"Week {} – Weekly Report\"", week),
        "- Danach pro Matchup:".to_string(),
        "  - H2: \"Matchup #N – Home vs Away (Score)\"".to_string(),
        "  - H3: Kurze Headline".to_string(),
        "  - 1 Absatz (3–6 Sätze)".to_string(),
        "- Am Ende: 3 Bullet Points \"Notable Performances\" (ligaweit) basierend auf den Top-Spielern"
            .to_string(),
    ]);
    lines.join("\n")
}
