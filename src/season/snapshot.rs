//! Season Snapshot Builder: settings, standings and matchups for one season.

use tracing::debug;

use crate::{
    espn::{connector::TeamRef, BoxScore, Pacer, SeasonHandle, Team},
    season::{
        models::{
            MatchupRecord, PlayerLineEntry, SeasonRecord, SeasonSettingsRecord, TeamRecord, BYE,
        },
        weeks::{walk_weeks, WeekWalk},
    },
    Week,
};

/// A built season plus whether every matchup week made it in
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSnapshot {
    pub record: SeasonRecord,
    pub weeks: WeekWalk,
}

impl SeasonSnapshot {
    /// False when at least one week's matchups are missing.
    pub fn is_complete(&self) -> bool {
        self.weeks.is_complete()
    }
}

/// Build the normalized record for the handle's season.
///
/// Never fails: a team without a roster keeps `roster: None`, and a week
/// whose box scores can't be fetched is left out of `matchups` and listed in
/// `weeks.failed`.
pub async fn build_season_record(handle: &dyn SeasonHandle, pacer: &dyn Pacer) -> SeasonSnapshot {
    let settings = handle.settings();
    let teams: Vec<TeamRecord> = handle.teams().iter().map(team_record).collect();

    let mut matchups = Vec::new();
    let weeks = walk_weeks(handle, settings.reg_season_count, pacer, |week, scores| {
        matchups.extend(scores.iter().map(|s| matchup_record(week, s)));
    })
    .await;

    SeasonSnapshot {
        record: SeasonRecord {
            year: handle.season(),
            league_name: settings.name.clone(),
            settings: SeasonSettingsRecord {
                reg_season_week_count: settings.reg_season_count,
                playoff_team_count: settings.playoff_team_count,
                team_count: settings.team_count,
            },
            teams,
            matchups,
        },
        weeks,
    }
}

fn team_record(team: &Team) -> TeamRecord {
    if team.roster.is_none() {
        debug!(team = %team.team_name, "no roster available for team");
    }

    TeamRecord {
        team_id: team.team_id,
        name: team.team_name.clone(),
        owners: team.owners.clone(),
        wins: team.wins,
        losses: team.losses,
        points_for: team.points_for,
        points_against: team.points_against,
        standing: team.standing,
        final_standing: team.final_standing,
        streak_length: team.streak_length,
        streak_type: team.streak_type.clone(),
        roster: team.roster.as_ref().map(|roster| {
            roster
                .iter()
                .map(|p| PlayerLineEntry {
                    player_id: p.player_id,
                    name: p.name.clone(),
                    position: p.position.clone(),
                    points: p.points,
                })
                .collect()
        }),
    }
}

/// One matchup row; an absent side becomes `"BYE"` and keeps the reported score.
pub fn matchup_record(week: Week, score: &BoxScore) -> MatchupRecord {
    let name = |team: &Option<TeamRef>| {
        team.as_ref()
            .map(|t| t.team_name.clone())
            .unwrap_or_else(|| BYE.to_string())
    };

    MatchupRecord {
        week,
        home_team_name: name(&score.home_team),
        home_score: score.home_score,
        away_team_name: name(&score.away_team),
        away_score: score.away_score,
    }
}
