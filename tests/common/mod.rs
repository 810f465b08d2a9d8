//! Shared fakes for integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use espn_league_history::{
    espn::{
        connector::{RosterPlayer, TeamRef},
        BoxScore, LeagueConnector, LineupPlayer, SeasonHandle, SeasonSettings, Team,
    },
    season::DraftPick,
    EspnError, LeagueId, PlayerId, Result, Season, TeamId, Week,
};

#[derive(Debug, Clone)]
pub struct ScriptedSeason {
    pub season: Season,
    pub settings: SeasonSettings,
    pub teams: Vec<Team>,
    pub weeks: BTreeMap<u16, Vec<BoxScore>>,
    pub failing_weeks: BTreeSet<u16>,
}

#[async_trait]
impl SeasonHandle for ScriptedSeason {
    fn season(&self) -> Season {
        self.season
    }

    fn settings(&self) -> &SeasonSettings {
        &self.settings
    }

    fn teams(&self) -> &[Team] {
        &self.teams
    }

    async fn box_scores(&self, week: Week) -> Result<Vec<BoxScore>> {
        if self.failing_weeks.contains(&week.as_u16()) {
            return Err(EspnError::week_fetch(week, "HTTP 503"));
        }
        Ok(self.weeks.get(&week.as_u16()).cloned().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedLeague {
    pub seasons: BTreeMap<Season, ScriptedSeason>,
    pub drafts: BTreeMap<Season, Vec<DraftPick>>,
}

impl ScriptedLeague {
    pub fn add(&mut self, season: ScriptedSeason) {
        self.seasons.insert(season.season, season);
    }
}

#[async_trait]
impl LeagueConnector for ScriptedLeague {
    async fn connect(&self, _league_id: LeagueId, season: Season) -> Result<Box<dyn SeasonHandle>> {
        self.seasons
            .get(&season)
            .cloned()
            .map(|s| Box::new(s) as Box<dyn SeasonHandle>)
            .ok_or_else(|| EspnError::connection(season, "HTTP 401 Unauthorized"))
    }

    async fn fetch_draft(&self, _league_id: LeagueId, season: Season) -> Result<Vec<DraftPick>> {
        self.drafts
            .get(&season)
            .cloned()
            .ok_or_else(|| EspnError::connection(season, "HTTP 404 Not Found"))
    }
}

fn side(id: u32, name: &str) -> TeamRef {
    TeamRef {
        team_id: TeamId::new(id),
        team_name: name.to_string(),
    }
}

fn lineup(players: &[(i64, f64)]) -> Vec<LineupPlayer> {
    players
        .iter()
        .map(|(id, points)| LineupPlayer {
            player_id: PlayerId::new(*id),
            name: format!("Player {id}"),
            slot_id: Some(2),
            points: *points,
        })
        .collect()
}

fn team(id: u32, name: &str, standing: u32) -> Team {
    Team {
        team_id: TeamId::new(id),
        team_name: name.to_string(),
        owners: vec![format!("owner{id}")],
        wins: 8,
        losses: 6,
        points_for: 1500.5,
        points_against: 1400.25,
        standing,
        final_standing: standing,
        streak_length: 2,
        streak_type: "WIN".to_string(),
        roster: Some(vec![RosterPlayer {
            player_id: PlayerId::new(i64::from(id) * 10),
            name: format!("Starter {id}"),
            position: "RB".to_string(),
            points: 150.0,
        }]),
    }
}

/// Two teams, `weeks` regular-season weeks. Player 10 (Kings) scores
/// `week` points each week; player 20 (Jesters) scores 1.5.
pub fn season(year: u16, weeks: u16) -> ScriptedSeason {
    let mut scripted = ScriptedSeason {
        season: Season::new(year),
        settings: SeasonSettings {
            name: "Playaz Only".to_string(),
            reg_season_count: weeks,
            playoff_team_count: 1,
            team_count: 2,
        },
        teams: vec![team(1, "Kings", 1), team(2, "Jesters", 2)],
        weeks: BTreeMap::new(),
        failing_weeks: BTreeSet::new(),
    };

    for week in 1..=weeks {
        scripted.weeks.insert(
            week,
            vec![BoxScore {
                home_team: Some(side(1, "Kings")),
                home_score: 100.0 + f64::from(week),
                home_lineup: lineup(&[(10, f64::from(week))]),
                away_team: Some(side(2, "Jesters")),
                away_score: 90.0,
                away_lineup: lineup(&[(20, 1.5)]),
            }],
        );
    }

    scripted
}

pub fn pick(player_id: i64, name: &str, team_id: u32, team_name: &str) -> DraftPick {
    DraftPick {
        player_id: Some(PlayerId::new(player_id)),
        player_name: Some(name.to_string()),
        team_id: Some(TeamId::new(team_id)),
        team_name: Some(team_name.to_string()),
        ..DraftPick::default()
    }
}
