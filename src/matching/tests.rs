//! Unit tests for player name normalization and matching

use super::*;
use serde_json::json;

fn players() -> SleeperPlayers {
    serde_json::from_value(json!({
        "4046": {"full_name": "Josh Allen", "first_name": "Josh", "last_name": "Allen", "position": "QB"},
        "1234": {"full_name": "Josh Allen", "first_name": "Josh", "last_name": "Allen", "position": "LB"},
        "11632": {"full_name": "Marvin Harrison", "first_name": "Marvin", "last_name": "Harrison", "position": "WR"},
        "7564": {"first_name": "Ja'Marr", "last_name": "Chase", "position": "WR"},
        "9509": {"full_name": "Bijan Robinson", "position": "RB"},
        "5000": {"full_name": "Zoë Müller", "position": "K"},
        "BUF": {"first_name": "Buffalo", "last_name": "Bills", "position": "DEF"},
        "NYJ": {"position": "DEF"}
    }))
    .unwrap()
}

#[test]
fn test_normalize_text() {
    assert_eq!(normalize_text("  Zoë   MÜLLER "), "zoe muller");
    assert_eq!(normalize_text("Amon-Ra St. Brown"), "amon-ra st. brown");
    assert_eq!(normalize_text(""), "");
}

#[test]
fn test_normalize_column() {
    assert_eq!(normalize_column("Defense (DST)"), "defense dst");
    assert_eq!(
        normalize_column("('Unnamed: 0_level_0', \"Player\")"),
        "'unnamed: 0_level_0' 'player'"
    );
    assert_eq!(normalize_column(" MISC   FPTS "), "misc fpts");
}

#[test]
fn test_clean_player_name() {
    assert_eq!(clean_player_name("Josh Allen BUF"), "Josh Allen");
    assert_eq!(clean_player_name("Josh Allen (BUF)"), "Josh Allen");
    assert_eq!(clean_player_name("  Bijan   Robinson  "), "Bijan Robinson");
    assert_eq!(clean_player_name("   "), "");
    // lower-case tails are part of the name
    assert_eq!(clean_player_name("Tank Dell"), "Tank Dell");
}

#[test]
fn test_strip_name_suffixes() {
    assert_eq!(strip_name_suffixes("Marvin Harrison Jr."), "Marvin Harrison");
    assert_eq!(strip_name_suffixes("Michael Pittman JR"), "Michael Pittman");
    assert_eq!(strip_name_suffixes("Kenneth Walker III"), "Kenneth Walker");
    assert_eq!(strip_name_suffixes("Ivory Irving"), "Ivory Irving");
}

#[test]
fn test_build_index() {
    let index = PlayerIndex::build(&players());
    assert_eq!(index.len(), 8);
    assert!(!index.is_empty());
}

#[test]
fn test_guess_full_name_lowest_id_wins() {
    let index = PlayerIndex::build(&players());
    assert_eq!(index.guess("Josh Allen"), Some("1234"));
    assert_eq!(index.guess("josh   ALLEN"), Some("1234"));
}

#[test]
fn test_guess_tie_compares_ids_numerically() {
    let players: SleeperPlayers = serde_json::from_value(json!({
        "10229": {"full_name": "Josh Allen", "position": "LB"},
        "4984": {"full_name": "Josh Allen", "position": "QB"},
        "ALN": {"first_name": "Josh", "last_name": "Allen", "position": "DEF"}
    }))
    .unwrap();
    let index = PlayerIndex::build(&players);
    assert_eq!(index.guess("Josh Allen"), Some("4984"));
}

#[test]
fn test_id_rank_puts_team_codes_last() {
    let mut ids = vec!["BUF", "10229", "4984", "ARI"];
    ids.sort_by(|a, b| id_rank(a).cmp(&id_rank(b)));
    assert_eq!(ids, vec!["4984", "10229", "ARI", "BUF"]);
}

#[test]
fn test_guess_first_last_fallback() {
    let index = PlayerIndex::build(&players());
    assert_eq!(index.guess("Ja'Marr Chase"), Some("7564"));
    assert_eq!(index.guess("Buffalo Bills"), Some("BUF"));
}

#[test]
fn test_guess_accents() {
    let index = PlayerIndex::build(&players());
    assert_eq!(index.guess("Zoe Muller"), Some("5000"));
}

#[test]
fn test_guess_strips_suffix_once() {
    let index = PlayerIndex::build(&players());
    assert_eq!(index.guess("Marvin Harrison Jr."), Some("11632"));
    assert_eq!(index.guess("Nobody Special III"), None);
}

#[test]
fn test_guess_unknown() {
    let index = PlayerIndex::build(&players());
    assert_eq!(index.guess("Not A Player"), None);
    assert_eq!(index.guess(""), None);
}

#[test]
fn test_guess_team() {
    let index = PlayerIndex::build(&players());
    assert_eq!(index.guess_team("NYJ"), Some("NYJ"));
    assert_eq!(index.guess_team("nyj"), Some("NYJ"));
    assert_eq!(index.guess_team("Buffalo Bills"), Some("BUF"));
    assert_eq!(index.guess_team("XXX"), None);
    assert_eq!(index.guess_team(""), None);
}
