//! Fantasy football position types and utilities.

use crate::error::FflError;
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// Covers the six positions FantasyPros publishes projection pages for.
/// Team defenses are `DST`; `DEF` and `D/ST` parse to the same variant.
///
/// # Examples
///
/// ```rust
/// use ffl_assets::Position;
///
/// let dst: Position = "D/ST".parse().unwrap();
/// assert_eq!(dst, Position::DST);
/// assert_eq!(dst.file_stem(), "dst");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    DST,
}

impl Position {
    /// All positions in the order projection pages are fetched.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
        Position::DST,
    ];

    /// Positions that have individual player headshots.
    pub const WITH_HEADSHOTS: [Position; 5] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::K,
    ];

    /// Lower-case stem used for projection CSV file names and page paths.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Position::QB => "qb",
            Position::RB => "rb",
            Position::WR => "wr",
            Position::TE => "te",
            Position::K => "k",
            Position::DST => "dst",
        }
    }

    /// FantasyPros projections page for this position.
    pub fn fantasypros_page(&self) -> String {
        format!("{}.php", self.file_stem())
    }

    pub fn has_headshots(&self) -> bool {
        !matches!(self, Position::DST)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DST => "DST",
        };
        f.pad(s)
    }
}

impl FromStr for Position {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DST),
            _ => Err(FflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_round_trip() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_defense_aliases() {
        assert_eq!("DEF".parse::<Position>().unwrap(), Position::DST);
        assert_eq!("d/st".parse::<Position>().unwrap(), Position::DST);
        assert_eq!(" dst ".parse::<Position>().unwrap(), Position::DST);
    }

    #[test]
    fn test_invalid_position() {
        match "LB".parse::<Position>() {
            Err(FflError::InvalidPosition { position }) => assert_eq!(position, "LB"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_fantasypros_pages() {
        assert_eq!(Position::QB.fantasypros_page(), "qb.php");
        assert_eq!(Position::DST.fantasypros_page(), "dst.php");
    }

    #[test]
    fn test_headshot_positions_exclude_defense() {
        assert!(!Position::WITH_HEADSHOTS.contains(&Position::DST));
        assert!(Position::WITH_HEADSHOTS.iter().all(|p| p.has_headshots()));
        assert!(!Position::DST.has_headshots());
    }
}
