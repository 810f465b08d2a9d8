//! Normalized season data produced by the pipeline and written to disk.
//!
//! JSON keys follow the files the league site already imports
//! (`team_name`, `home_team`, `reg_season_count`, `draft_picks`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{PlayerId, Season, TeamId, Week};

/// Team name used on the empty side of a bye week.
pub const BYE: &str = "BYE";

/// One league season: settings, standings and regular-season matchups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub year: Season,
    pub league_name: String,
    pub settings: SeasonSettingsRecord,
    pub teams: Vec<TeamRecord>,
    pub matchups: Vec<MatchupRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSettingsRecord {
    #[serde(rename = "reg_season_count")]
    pub reg_season_week_count: u16,
    pub playoff_team_count: u16,
    pub team_count: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_id: TeamId,
    #[serde(rename = "team_name")]
    pub name: String,
    pub owners: Vec<String>,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub standing: u32,
    pub final_standing: u32,
    pub streak_length: i32,
    pub streak_type: String,
    /// Absent when the provider had no roster for this team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<Vec<PlayerLineEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLineEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupRecord {
    pub week: Week,
    #[serde(rename = "home_team")]
    pub home_team_name: String,
    pub home_score: f64,
    #[serde(rename = "away_team")]
    pub away_team_name: String,
    pub away_score: f64,
}

impl MatchupRecord {
    pub fn is_bye(&self) -> bool {
        self.home_team_name == BYE || self.away_team_name == BYE
    }
}

/// Season point totals keyed by player identity.
///
/// A player with no entry scored zero; [`PlayerPointsMap::get`] never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerPointsMap {
    totals: BTreeMap<PlayerId, f64>,
}

impl PlayerPointsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `points` to the player's running total.
    pub fn add(&mut self, player_id: PlayerId, points: f64) {
        *self.totals.entry(player_id).or_insert(0.0) += points;
    }

    /// Accumulated points, zero for players never seen.
    pub fn get(&self, player_id: PlayerId) -> f64 {
        self.totals.get(&player_id).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.totals.contains_key(&player_id)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, f64)> + '_ {
        self.totals.iter().map(|(id, pts)| (*id, *pts))
    }
}

/// One pick from a season's draft board.
///
/// Only the identity and team fields feed the stats join; the rest are kept
/// so fetched draft files round-trip. Any field may be missing on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    #[serde(default)]
    pub round_num: Option<u32>,
    #[serde(default)]
    pub round_pick: Option<u32>,
    #[serde(default)]
    pub overall_pick: Option<u32>,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub nfl_team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keeper: Option<bool>,
}

/// On-disk draft file: `{ "draft_picks": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftFile {
    #[serde(default)]
    pub draft_picks: Vec<DraftPick>,
}

/// A drafted player's regular-season total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonStat {
    pub player_id: Option<PlayerId>,
    pub player_name: Option<String>,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
    pub total_points: f64,
    pub year: Season,
}

/// Per-year results gathered over one run, serialized as `{"2018": ..., "2019": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinedDataset<T> {
    years: BTreeMap<Season, T>,
}

impl<T> Default for CombinedDataset<T> {
    fn default() -> Self {
        Self {
            years: BTreeMap::new(),
        }
    }
}

impl<T> CombinedDataset<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished year. Years are only ever added.
    pub fn insert(&mut self, season: Season, value: T) {
        self.years.insert(season, value);
    }

    pub fn get(&self, season: Season) -> Option<&T> {
        self.years.get(&season)
    }

    pub fn seasons(&self) -> Vec<Season> {
        self.years.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
