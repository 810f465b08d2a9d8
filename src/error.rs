//! Error types for the ESPN league history pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::types::{Season, Week};


pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Invalid year range '{input}': {reason}")]
    InvalidYearRange { input: String, reason: String },

    #[error("Could not connect to league for {season}: {message}")]
    Connection { season: Season, message: String },

    #[error("Could not fetch box scores for week {week}: {message}")]
    WeekFetch { week: Week, message: String },

    #[error("Draft source unavailable at {}: {message}", path.display())]
    DraftSource { path: PathBuf, message: String },

    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ESPN API returned no data")]
    NoData,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}

impl EspnError {
    /// Wrap any provider-side failure as a connection failure for `season`.
    pub fn connection(season: Season, err: impl std::fmt::Display) -> Self {
        EspnError::Connection {
            season,
            message: err.to_string(),
        }
    }

    /// Wrap any provider-side failure as a box score failure for `week`.
    pub fn week_fetch(week: Week, err: impl std::fmt::Display) -> Self {
        EspnError::WeekFetch {
            week,
            message: err.to_string(),
        }
    }

    /// True for errors that stop the whole run before any year is processed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EspnError::MissingLeagueId { .. }
                | EspnError::InvalidLeagueId(_)
                | EspnError::InvalidYearRange { .. }
        )
    }
}
