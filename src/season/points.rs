//! Player Points Aggregator: season totals from weekly lineups.

use crate::{
    espn::{Pacer, SeasonHandle},
    season::{
        models::PlayerPointsMap,
        weeks::{walk_weeks, WeekWalk},
    },
};

/// Aggregated totals plus which weeks fed them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedPoints {
    pub points: PlayerPointsMap,
    pub weeks: WeekWalk,
}

/// Sum every player's points over weeks `1..=week_count`.
///
/// Both sides of each matchup count; a bye side adds nothing. Weeks that
/// fail to fetch contribute zero and are listed in `weeks.failed`. Points
/// are summed unrounded.
pub async fn aggregate_player_points(
    handle: &dyn SeasonHandle,
    week_count: u16,
    pacer: &dyn Pacer,
) -> AggregatedPoints {
    let mut points = PlayerPointsMap::new();

    let weeks = walk_weeks(handle, week_count, pacer, |_, scores| {
        for score in scores {
            for player in score.present_lineups() {
                points.add(player.player_id, player.points);
            }
        }
    })
    .await;

    AggregatedPoints { points, weeks }
}
