//! Season pipeline stages: snapshot, points, draft, join.
//!
//! Each stage works on one season through a [`crate::espn::SeasonHandle`]
//! and returns plain data; the `commands` layer persists and combines it.

pub mod draft;
pub mod join;
pub mod models;
pub mod points;
pub mod snapshot;
pub mod weeks;

pub use draft::{draft_path, load_draft_picks, DRAFT_PREFIX};
pub use join::{join_draft_with_points, round_points};
pub use models::{
    CombinedDataset, DraftFile, DraftPick, MatchupRecord, PlayerPointsMap, PlayerSeasonStat,
    SeasonRecord, TeamRecord,
};
pub use points::{aggregate_player_points, AggregatedPoints};
pub use snapshot::{build_season_record, SeasonSnapshot};
pub use weeks::{walk_weeks, WeekFailure, WeekWalk};
