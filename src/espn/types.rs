//! Raw ESPN `leagues/{id}` and `players` payloads.
//!
//! Everything the provider may leave out is `Option` or `#[serde(default)]`;
//! converting to the handle types in [`crate::espn::connector`] applies the
//! defaulting rules (absent ⇒ zero/empty).

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Top-level envelope for any `leagues/{id}` view combination
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueResponse {
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<u16>,
    #[serde(default)]
    pub settings: Option<WireSettings>,
    #[serde(default)]
    pub teams: Vec<WireTeam>,
    #[serde(default)]
    pub members: Vec<WireMember>,
    #[serde(default)]
    pub schedule: Vec<WireMatchup>,
    #[serde(rename = "draftDetail", default)]
    pub draft_detail: Option<WireDraftDetail>,
}

/// `settings` from `view=mSettings`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WireSettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<u16>,
    #[serde(rename = "scheduleSettings", default)]
    pub schedule_settings: WireScheduleSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WireScheduleSettings {
    /// Regular season length in matchup periods
    #[serde(rename = "matchupPeriodCount", default)]
    pub matchup_period_count: Option<u16>,
    #[serde(rename = "playoffTeamCount", default)]
    pub playoff_team_count: Option<u16>,
}

/// League member; team `owners` reference these by id
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireMember {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

impl WireMember {
    /// Best human-readable name for the member.
    pub fn label(&self) -> String {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.id.clone()
        } else {
            full
        }
    }
}

/// Team entry from `view=mTeam` / `mRoster` / `mStandings`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireTeam {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Member ids; older payloads sometimes carry member objects instead
    #[serde(default)]
    pub owners: Option<Vec<Value>>,
    #[serde(default)]
    pub record: Option<WireRecord>,
    #[serde(rename = "playoffSeed", default)]
    pub playoff_seed: Option<u32>,
    #[serde(rename = "rankCalculatedFinal", default)]
    pub rank_calculated_final: Option<u32>,
    #[serde(default)]
    pub roster: Option<WireRoster>,
}

impl WireTeam {
    /// `name`, or `location nickname` for seasons before ESPN merged them.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        let joined = [self.location.as_deref(), self.nickname.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            format!("Team {}", self.id)
        } else {
            joined
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WireRecord {
    #[serde(default)]
    pub overall: Option<WireRecordLine>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WireRecordLine {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: f64,
    #[serde(rename = "pointsAgainst", default)]
    pub points_against: f64,
    #[serde(rename = "streakLength", default)]
    pub streak_length: i32,
    #[serde(rename = "streakType", default)]
    pub streak_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WireRoster {
    #[serde(default)]
    pub entries: Vec<WireRosterEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireRosterEntry {
    #[serde(rename = "playerId", default)]
    pub player_id: Option<i64>,
    #[serde(rename = "lineupSlotId", default)]
    pub lineup_slot_id: Option<i64>,
    #[serde(rename = "playerPoolEntry", default)]
    pub player_pool_entry: Option<WirePlayerPoolEntry>,
}

impl WireRosterEntry {
    pub fn player(&self) -> Option<&WirePlayer> {
        self.player_pool_entry.as_ref()?.player.as_ref()
    }

    /// Player id from the entry, or from the nested player.
    pub fn resolved_player_id(&self) -> Option<i64> {
        self.player_id
            .or_else(|| self.player_pool_entry.as_ref().and_then(|p| p.id))
            .or_else(|| self.player().map(|p| p.id))
    }

    pub fn applied_stat_total(&self) -> Option<f64> {
        self.player_pool_entry.as_ref()?.applied_stat_total
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WirePlayerPoolEntry {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "appliedStatTotal", default)]
    pub applied_stat_total: Option<f64>,
    #[serde(default)]
    pub player: Option<WirePlayer>,
}

/// Player as embedded in rosters, or as listed by `players?view=players_wl`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WirePlayer {
    pub id: i64,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: Option<i64>,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: Option<i64>,
    #[serde(default)]
    pub stats: Vec<WirePlayerStats>,
}

/// Player statistics for a specific period
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WirePlayerStats {
    #[serde(rename = "seasonId", default)]
    pub season_id: Option<u16>,
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: Option<u16>,
    /// 0 = actual, 1 = projected
    #[serde(rename = "statSourceId", default)]
    pub stat_source_id: Option<u8>,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: Option<f64>,
}

impl WirePlayer {
    /// Actual fantasy points for one scoring period, if ESPN reported them.
    pub fn actual_points_for_period(&self, scoring_period: u16) -> Option<f64> {
        self.stats.iter().find_map(|s| {
            if s.scoring_period_id == Some(scoring_period) && s.stat_source_id == Some(0) {
                s.applied_total
            } else {
                None
            }
        })
    }
}

/// One `schedule` entry. A missing side is a bye.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireMatchup {
    #[serde(rename = "matchupPeriodId", default)]
    pub matchup_period_id: Option<u16>,
    #[serde(default)]
    pub home: Option<WireMatchupSide>,
    #[serde(default)]
    pub away: Option<WireMatchupSide>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireMatchupSide {
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
    #[serde(rename = "rosterForCurrentScoringPeriod", default)]
    pub roster_for_current_scoring_period: Option<WireRoster>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WireDraftDetail {
    #[serde(default)]
    pub drafted: bool,
    #[serde(default)]
    pub picks: Vec<WireDraftPick>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WireDraftPick {
    #[serde(rename = "overallPickNumber", default)]
    pub overall_pick_number: u32,
    #[serde(rename = "roundId", default)]
    pub round_id: u32,
    #[serde(rename = "roundPickNumber", default)]
    pub round_pick_number: u32,
    #[serde(rename = "teamId")]
    pub team_id: u32,
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(default)]
    pub keeper: bool,
}

/// NFL team abbreviation for ESPN's `proTeamId`.
pub fn pro_team_abbrev(pro_team_id: i64) -> Option<&'static str> {
    let abbrev = match pro_team_id {
        1 => "ATL",
        2 => "BUF",
        3 => "CHI",
        4 => "CIN",
        5 => "CLE",
        6 => "DAL",
        7 => "DEN",
        8 => "DET",
        9 => "GB",
        10 => "TEN",
        11 => "IND",
        12 => "KC",
        13 => "LV",
        14 => "LAR",
        15 => "MIA",
        16 => "MIN",
        17 => "NE",
        18 => "NO",
        19 => "NYG",
        20 => "NYJ",
        21 => "PHI",
        22 => "ARI",
        23 => "PIT",
        24 => "LAC",
        25 => "SF",
        26 => "SEA",
        27 => "TB",
        28 => "WSH",
        29 => "CAR",
        30 => "JAX",
        33 => "BAL",
        34 => "HOU",
        _ => return None,
    };
    Some(abbrev)
}
