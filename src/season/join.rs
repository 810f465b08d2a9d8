//! Stats-Draft Joiner: one stat line per draft pick.

use crate::{
    season::models::{DraftPick, PlayerPointsMap, PlayerSeasonStat},
    Season,
};

/// Round the stored value to two decimals, ties to even.
///
/// Fixed-precision formatting rounds the exact binary value, so `0.125`
/// (an exact tie) gives `0.12` while `2.675`, stored just below the
/// midpoint, gives `2.67`.
pub fn round_points(points: f64) -> f64 {
    format!("{:.2}", points).parse().unwrap_or(points)
}

/// Left-join draft picks onto season points.
///
/// Output has exactly one entry per pick, in draft order. A pick whose
/// player has no points (or no id) gets `0.0`.
pub fn join_draft_with_points(
    picks: &[DraftPick],
    points: &PlayerPointsMap,
    season: Season,
) -> Vec<PlayerSeasonStat> {
    picks
        .iter()
        .map(|pick| {
            let total = pick.player_id.map(|id| points.get(id)).unwrap_or(0.0);
            PlayerSeasonStat {
                player_id: pick.player_id,
                player_name: pick.player_name.clone(),
                team_id: pick.team_id,
                team_name: pick.team_name.clone(),
                total_points: round_points(total),
                year: season,
            }
        })
        .collect()
}

/// Stat lines with a nonzero total. Negative seasons (D/ST, kickers) count.
pub fn count_with_points(stats: &[PlayerSeasonStat]) -> usize {
    stats.iter().filter(|s| s.total_points != 0.0).count()
}
