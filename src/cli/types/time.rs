//! Time-related types for NFL seasons and weeks.

use crate::error::{FflError, Result};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest regular-season week number.
pub const MAX_WEEK: u16 = 18;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    /// The current calendar year.
    fn default() -> Self {
        Self(chrono::Local::now().year() as u16)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// NFL week number, 1 through 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(u16);

impl Week {
    pub fn new(week: u16) -> Result<Self> {
        if (1..=MAX_WEEK).contains(&week) {
            Ok(Self(week))
        } else {
            Err(FflError::InvalidWeek { week })
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Lenient parse used for the `WEEK` environment variable: anything that
    /// is not a plain number means "current week".
    pub fn from_env_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        value.parse::<u16>().ok().and_then(|w| Week::new(w).ok())
    }

    /// Zero-padded form used in directory and file names (`07`).
    pub fn padded(&self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Week::new(s.trim().parse()?)
    }
}
