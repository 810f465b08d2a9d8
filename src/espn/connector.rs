//! Provider seam: connect to one league season, then read settings, teams
//! and per-week box scores from the returned handle.
//!
//! [`crate::espn::league::EspnConnector`] is the real implementation; tests
//! drive the pipeline with in-memory fakes.

use async_trait::async_trait;

use crate::{
    season::models::DraftPick, LeagueId, PlayerId, Result, Season, TeamId, Week,
};

/// League-level settings for one season
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSettings {
    pub name: String,
    pub reg_season_count: u16,
    pub playoff_team_count: u16,
    pub team_count: u16,
}

/// A fantasy team with its season record
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub owners: Vec<String>,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub standing: u32,
    pub final_standing: u32,
    pub streak_length: i32,
    pub streak_type: String,
    /// `None` when the provider has no roster granularity for this team
    pub roster: Option<Vec<RosterPlayer>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRef {
    pub team_id: TeamId,
    pub team_name: String,
}

/// A player's line in one week's box score
#[derive(Debug, Clone, PartialEq)]
pub struct LineupPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub slot_id: Option<i64>,
    pub points: f64,
}

/// One matchup in one week. A side with no team is a bye.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScore {
    pub home_team: Option<TeamRef>,
    pub home_score: f64,
    pub home_lineup: Vec<LineupPlayer>,
    pub away_team: Option<TeamRef>,
    pub away_score: f64,
    pub away_lineup: Vec<LineupPlayer>,
}

impl BoxScore {
    /// Lineups of the sides that have a team; bye sides contribute nothing.
    pub fn present_lineups(&self) -> impl Iterator<Item = &LineupPlayer> {
        let home = self.home_team.as_ref().map(|_| self.home_lineup.iter());
        let away = self.away_team.as_ref().map(|_| self.away_lineup.iter());
        home.into_iter().flatten().chain(away.into_iter().flatten())
    }
}

/// An open league season.
#[async_trait]
pub trait SeasonHandle: Send + Sync {
    fn season(&self) -> Season;

    fn settings(&self) -> &SeasonSettings;

    /// Teams ordered by standing, ties in provider order.
    fn teams(&self) -> &[Team];

    /// Box scores for one scoring period. May fail per week.
    async fn box_scores(&self, week: Week) -> Result<Vec<BoxScore>>;
}

/// Opens league seasons and fetches draft boards.
#[async_trait]
pub trait LeagueConnector: Send + Sync {
    /// Fails with [`crate::EspnError::Connection`] when the season can't be read.
    async fn connect(&self, league_id: LeagueId, season: Season) -> Result<Box<dyn SeasonHandle>>;

    /// Draft picks in overall pick order.
    async fn fetch_draft(&self, league_id: LeagueId, season: Season) -> Result<Vec<DraftPick>>;
}
