//! Sleeper league id.

use crate::error::{FflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sleeper league identifier.
///
/// Sleeper ids are 18+ digit numbers handed out as strings, so the value is
/// kept as text and only checked to be non-empty digits.
///
/// # Examples
///
/// ```rust
/// use ffl_assets::LeagueId;
///
/// let league_id: LeagueId = "1180276953741729792".parse().unwrap();
/// assert_eq!(league_id.as_str(), "1180276953741729792");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(FflError::InvalidLeagueId {
                value: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}
