//! Time-related types for ESPN Fantasy Football seasons and weeks.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ESPN purged league data before this season.
pub const FIRST_AVAILABLE_SEASON: u16 = 2018;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Week numbers (1-based scoring periods)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Weeks `1..=count`, in order.
    pub fn through(count: u16) -> impl Iterator<Item = Week> {
        (1..=count).map(Week::new)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Ordered, de-duplicated list of seasons to process.
///
/// Parses `2018-2025`, `2018,2019,2021` or a mix such as `2018-2020,2023`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRange(Vec<Season>);

impl YearRange {
    pub fn new(mut seasons: Vec<Season>) -> Result<Self> {
        if seasons.is_empty() {
            return Err(EspnError::InvalidYearRange {
                input: String::new(),
                reason: "no seasons given".to_string(),
            });
        }
        seasons.sort();
        seasons.dedup();
        Ok(Self(seasons))
    }

    pub fn seasons(&self) -> &[Season] {
        &self.0
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self((FIRST_AVAILABLE_SEASON..=Season::default().as_u16()).map(Season::new).collect())
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last))
                if usize::from(last.0 - first.0) + 1 == self.0.len() && self.0.len() > 1 =>
            {
                write!(f, "{}-{}", first, last)
            }
            _ => {
                let parts: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
                write!(f, "{}", parts.join(","))
            }
        }
    }
}

impl FromStr for YearRange {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| EspnError::InvalidYearRange {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut seasons = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('-') {
                Some((start, end)) => {
                    let start: Season = start.parse().map_err(|_| invalid("bad start year"))?;
                    let end: Season = end.parse().map_err(|_| invalid("bad end year"))?;
                    if start > end {
                        return Err(invalid("start year is after end year"));
                    }
                    seasons.extend((start.0..=end.0).map(Season::new));
                }
                None => seasons.push(part.parse().map_err(|_| invalid("bad year"))?),
            }
        }

        if seasons.is_empty() {
            return Err(invalid("no seasons given"));
        }
        YearRange::new(seasons)
    }
}
