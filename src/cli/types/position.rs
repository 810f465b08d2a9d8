//! Fantasy football position types and utilities.

use crate::error::EspnError;
use std::fmt;

/// Fantasy football player positions as ESPN reports them in
/// `defaultPositionId`.
///
/// # Examples
///
/// ```rust
/// use espn_league_history::Position;
///
/// assert_eq!(Position::try_from(2).unwrap(), Position::RB);
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DEF,
    K,
}

impl Position {
    /// Convert a single ESPN position ID to a Position enum.
    pub fn try_from(id: i64) -> Result<Self, EspnError> {
        match id {
            0 | 1 => Ok(Position::QB), // ESPN uses both 0 and 1 for QB
            2 => Ok(Position::RB),
            3 => Ok(Position::WR),
            4 | 6 => Ok(Position::TE),
            5 | 17 => Ok(Position::K),
            16 => Ok(Position::DEF),
            _ => Err(EspnError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }

    /// Display label for a raw position id, `"UNKNOWN"` when unmapped.
    pub fn label_for_id(id: Option<i64>) -> String {
        id.and_then(|id| Position::try_from(id).ok())
            .map(|p| p.to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DEF => "D/ST",
            Position::K => "K",
        };
        write!(f, "{}", s)
    }
}
