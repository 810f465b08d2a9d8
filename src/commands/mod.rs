//! Command implementations for the league history CLI

pub mod combine;
pub mod draft_picks;
pub mod league_history;
pub mod player_stats;

pub use crate::config::resolve_league_id;
pub use combine::{run_years, RunSummary, YearJob, YearOutcome, YearStage};
