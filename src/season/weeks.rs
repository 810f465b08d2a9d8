//! Sequential, paced walk over a season's regular-season weeks.

use tracing::{info, warn};

use crate::{
    espn::{BoxScore, Pacer, SeasonHandle},
    Week,
};

/// A week whose box scores could not be fetched
#[derive(Debug, Clone, PartialEq)]
pub struct WeekFailure {
    pub week: Week,
    pub reason: String,
}

/// Which weeks of a walk produced data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekWalk {
    pub fetched: Vec<Week>,
    pub failed: Vec<WeekFailure>,
}

impl WeekWalk {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_weeks(&self) -> Vec<Week> {
        self.failed.iter().map(|f| f.week).collect()
    }
}

/// Fetch weeks `1..=week_count` one at a time, pausing between requests.
///
/// A failed week is logged and skipped; it never aborts the walk and is
/// not retried.
pub async fn walk_weeks<F>(
    handle: &dyn SeasonHandle,
    week_count: u16,
    pacer: &dyn Pacer,
    mut on_week: F,
) -> WeekWalk
where
    F: FnMut(Week, &[BoxScore]),
{
    let season = handle.season();
    let mut walk = WeekWalk::default();

    for week in Week::through(week_count) {
        if week.as_u16() > 1 {
            pacer.pause().await;
        }

        match handle.box_scores(week).await {
            Ok(scores) => {
                on_week(week, &scores);
                info!(%season, %week, matchups = scores.len(), "week complete");
                walk.fetched.push(week);
            }
            Err(e) => {
                warn!(%season, %week, error = %e, "skipping week");
                walk.failed.push(WeekFailure {
                    week,
                    reason: e.to_string(),
                });
            }
        }
    }

    walk
}
