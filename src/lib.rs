//! ESPN Fantasy Football League History Library
//!
//! Walks a league's seasons on ESPN and writes a normalized, multi-year
//! dataset: league settings, standings and weekly matchups per season, plus
//! drafted players' regular-season point totals.
//!
//! ## Pipeline
//!
//! - **Season snapshot**: settings, teams and regular-season matchups for one year
//! - **Player points**: per-player totals summed from every week's box scores
//! - **Draft join**: totals left-joined onto the year's draft board
//! - **Combiner**: runs every year, writes `<prefix>_<year>.json` and
//!   `<prefix>_all_years.json`, and keeps going when a year or week fails
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_league_history::{
//!     commands::league_history::run_league_history,
//!     config::PipelineConfig,
//!     espn::{EspnConnector, NoPacing},
//!     LeagueId, YearRange,
//! };
//! use std::time::Duration;
//!
//! # async fn example() -> espn_league_history::Result<()> {
//! let config = PipelineConfig {
//!     league_id: LeagueId::new(262148),
//!     years: "2018-2021".parse::<YearRange>()?,
//!     credentials: None,
//!     output_dir: "out".into(),
//!     draft_dir: "out/EspnDraft".into(),
//!     pace: Duration::from_millis(500),
//!     verbose: false,
//! };
//! let connector = EspnConnector::new(None)?;
//!
//! let run = run_league_history(&connector, &config, &NoPacing).await;
//! println!("{} seasons saved", run.dataset.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your ESPN league ID to avoid passing it in every command:
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! ```
//! Private leagues also need `ESPN_SWID` and `ESPN_S2` cookies.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod season;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, Season, TeamId, Week, YearRange};
pub use error::{EspnError, Result};

/// Environment variable consulted when `--league-id` is not given.
pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
