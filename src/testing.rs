//! In-memory connector and season fakes for unit tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{
    error::EspnError,
    espn::{
        connector::{RosterPlayer, TeamRef},
        BoxScore, LeagueConnector, LineupPlayer, Pacer, SeasonHandle, SeasonSettings, Team,
    },
    season::models::DraftPick,
    LeagueId, PlayerId, Result, Season, TeamId, Week,
};

/// A season whose weeks are scripted up front.
#[derive(Debug, Clone)]
pub struct FakeSeason {
    season: Season,
    settings: SeasonSettings,
    teams: Vec<Team>,
    weeks: BTreeMap<u16, Vec<BoxScore>>,
    failing: BTreeSet<u16>,
}

impl FakeSeason {
    pub fn new(season: Season, reg_season_count: u16) -> Self {
        Self {
            season,
            settings: SeasonSettings {
                name: "Fake League".to_string(),
                reg_season_count,
                playoff_team_count: 0,
                team_count: 0,
            },
            teams: Vec::new(),
            weeks: BTreeMap::new(),
            failing: BTreeSet::new(),
        }
    }

    pub fn with_week(mut self, week: u16, scores: Vec<BoxScore>) -> Self {
        self.weeks.insert(week, scores);
        self
    }

    pub fn with_failing_week(mut self, week: u16) -> Self {
        self.failing.insert(week);
        self
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.settings.team_count = teams.len() as u16;
        self.teams = teams;
        self
    }
}

#[async_trait]
impl SeasonHandle for FakeSeason {
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
        if self.failing.contains(&week.as_u16()) {
            return Err(EspnError::week_fetch(week, "scripted failure"));
        }
        Ok(self.weeks.get(&week.as_u16()).cloned().unwrap_or_default())
    }
}

/// Connector over scripted seasons; unknown or failing seasons can't connect.
#[derive(Debug, Clone, Default)]
pub struct FakeConnector {
    seasons: BTreeMap<Season, FakeSeason>,
    drafts: BTreeMap<Season, Vec<DraftPick>>,
}

impl FakeConnector {
    pub fn with_season(mut self, season: FakeSeason) -> Self {
        self.seasons.insert(season.season, season);
        self
    }

    pub fn with_draft(mut self, season: Season, picks: Vec<DraftPick>) -> Self {
        self.drafts.insert(season, picks);
        self
    }
}

#[async_trait]
impl LeagueConnector for FakeConnector {
    async fn connect(&self, _league_id: LeagueId, season: Season) -> Result<Box<dyn SeasonHandle>> {
        match self.seasons.get(&season) {
            Some(fake) => Ok(Box::new(fake.clone())),
            None => Err(EspnError::connection(season, "season not available")),
        }
    }

    async fn fetch_draft(&self, _league_id: LeagueId, season: Season) -> Result<Vec<DraftPick>> {
        self.drafts
            .get(&season)
            .cloned()
            .ok_or_else(|| EspnError::connection(season, "draft not available"))
    }
}

/// Counts pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    count: AtomicUsize,
}

impl RecordingPacer {
    pub fn pauses(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn lineup(players: &[(i64, f64)]) -> Vec<LineupPlayer> {
    players
        .iter()
        .map(|(id, points)| LineupPlayer {
            player_id: PlayerId::new(*id),
            name: format!("Player {id}"),
            slot_id: Some(0),
            points: *points,
        })
        .collect()
}

fn team_ref(id: u32, name: &str) -> TeamRef {
    TeamRef {
        team_id: TeamId::new(id),
        team_name: name.to_string(),
    }
}

/// `(team_id, team_name, score)` per side, `(player_id, points)` per lineup slot.
pub fn matchup(
    home: (u32, &str, f64),
    home_players: &[(i64, f64)],
    away: (u32, &str, f64),
    away_players: &[(i64, f64)],
) -> BoxScore {
    BoxScore {
        home_team: Some(team_ref(home.0, home.1)),
        home_score: home.2,
        home_lineup: lineup(home_players),
        away_team: Some(team_ref(away.0, away.1)),
        away_score: away.2,
        away_lineup: lineup(away_players),
    }
}

pub fn bye(home: (u32, &str, f64), home_players: &[(i64, f64)]) -> BoxScore {
    BoxScore {
        home_team: Some(team_ref(home.0, home.1)),
        home_score: home.2,
        home_lineup: lineup(home_players),
        away_team: None,
        away_score: 0.0,
        away_lineup: Vec::new(),
    }
}

pub fn team(id: u32, name: &str, standing: u32) -> Team {
    Team {
        team_id: TeamId::new(id),
        team_name: name.to_string(),
        owners: Vec::new(),
        wins: 0,
        losses: 0,
        points_for: 0.0,
        points_against: 0.0,
        standing,
        final_standing: standing,
        streak_length: 0,
        streak_type: String::new(),
        roster: Some(vec![RosterPlayer {
            player_id: PlayerId::new(id as i64 * 100),
            name: format!("{name} QB"),
            position: "QB".to_string(),
            points: 0.0,
        }]),
    }
}
