//! ESPN implementation of [`LeagueConnector`] / [`SeasonHandle`].

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    cli::types::Position,
    config::Credentials,
    error::EspnError,
    espn::{
        connector::{
            BoxScore, LeagueConnector, LineupPlayer, RosterPlayer, SeasonHandle, SeasonSettings,
            Team, TeamRef,
        },
        http::{EspnClient, DRAFT_VIEWS, SEASON_VIEWS},
        types::{
            pro_team_abbrev, LeagueResponse, WireMatchupSide, WireMember, WirePlayer, WireRoster,
            WireTeam,
        },
    },
    season::models::DraftPick,
    LeagueId, PlayerId, Result, Season, TeamId, Week,
};

/// Connects to ESPN league seasons over HTTP.
#[derive(Debug, Clone)]
pub struct EspnConnector {
    client: EspnClient,
}

impl EspnConnector {
    pub fn new(credentials: Option<&Credentials>) -> Result<Self> {
        Ok(Self {
            client: EspnClient::new(credentials)?,
        })
    }

    pub fn with_client(client: EspnClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LeagueConnector for EspnConnector {
    async fn connect(&self, league_id: LeagueId, season: Season) -> Result<Box<dyn SeasonHandle>> {
        let response = self
            .client
            .get_league(league_id, season, SEASON_VIEWS)
            .await
            .map_err(|e| EspnError::connection(season, e))?;

        let handle = EspnSeason::from_response(self.client.clone(), league_id, season, response)?;
        Ok(Box::new(handle))
    }

    async fn fetch_draft(&self, league_id: LeagueId, season: Season) -> Result<Vec<DraftPick>> {
        let response = self
            .client
            .get_league(league_id, season, DRAFT_VIEWS)
            .await
            .map_err(|e| EspnError::connection(season, e))?;

        let players = match self.client.get_pro_players(season).await {
            Ok(players) => players,
            Err(e) => {
                warn!(%season, error = %e, "player lookup failed; draft picks will lack names");
                Vec::new()
            }
        };

        Ok(draft_picks_from_response(&response, &players))
    }
}

/// A season read from ESPN: settings and teams up front, box scores on demand.
#[derive(Debug)]
pub struct EspnSeason {
    client: EspnClient,
    league_id: LeagueId,
    season: Season,
    settings: SeasonSettings,
    teams: Vec<Team>,
    team_names: HashMap<u32, String>,
}

impl EspnSeason {
    /// Build the handle from a `SEASON_VIEWS` payload.
    pub fn from_response(
        client: EspnClient,
        league_id: LeagueId,
        season: Season,
        response: LeagueResponse,
    ) -> Result<Self> {
        let Some(wire_settings) = response.settings.as_ref() else {
            return Err(EspnError::connection(season, EspnError::NoData));
        };

        let team_names: HashMap<u32, String> = response
            .teams
            .iter()
            .map(|t| (t.id, t.display_name()))
            .collect();

        let settings = SeasonSettings {
            name: wire_settings
                .name
                .clone()
                .unwrap_or_else(|| format!("League {}", league_id)),
            reg_season_count: wire_settings
                .schedule_settings
                .matchup_period_count
                .unwrap_or(0),
            playoff_team_count: wire_settings
                .schedule_settings
                .playoff_team_count
                .unwrap_or(0),
            team_count: wire_settings
                .size
                .unwrap_or(response.teams.len() as u16),
        };

        let teams = teams_from_wire(&response.teams, &response.members);

        Ok(Self {
            client,
            league_id,
            season,
            settings,
            teams,
            team_names,
        })
    }

    fn team_ref(&self, side: &WireMatchupSide) -> TeamRef {
        TeamRef {
            team_id: TeamId::new(side.team_id),
            team_name: self
                .team_names
                .get(&side.team_id)
                .cloned()
                .unwrap_or_else(|| format!("Team {}", side.team_id)),
        }
    }
}

#[async_trait]
impl SeasonHandle for EspnSeason {
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
        let response = self
            .client
            .get_box_scores(self.league_id, self.season, week)
            .await
            .map_err(|e| EspnError::week_fetch(week, e))?;

        let scores = response
            .schedule
            .iter()
            // The header filter is advisory; drop other periods if ESPN ignores it
            .filter(|m| m.matchup_period_id.map_or(true, |p| p == week.as_u16()))
            .map(|m| {
                let (home_team, home_score, home_lineup) = self.side(m.home.as_ref(), week);
                let (away_team, away_score, away_lineup) = self.side(m.away.as_ref(), week);
                BoxScore {
                    home_team,
                    home_score,
                    home_lineup,
                    away_team,
                    away_score,
                    away_lineup,
                }
            })
            .collect::<Vec<_>>();

        debug!(season = %self.season, %week, matchups = scores.len(), "box scores fetched");
        Ok(scores)
    }
}

impl EspnSeason {
    fn side(
        &self,
        side: Option<&WireMatchupSide>,
        week: Week,
    ) -> (Option<TeamRef>, f64, Vec<LineupPlayer>) {
        match side {
            Some(side) => (
                Some(self.team_ref(side)),
                side.total_points,
                side.roster_for_current_scoring_period
                    .as_ref()
                    .map(|r| lineup_from_wire(r, week))
                    .unwrap_or_default(),
            ),
            None => (None, 0.0, Vec::new()),
        }
    }
}

/// Convert wire teams, resolving owners against `members`, ordered by standing.
pub fn teams_from_wire(teams: &[WireTeam], members: &[WireMember]) -> Vec<Team> {
    let member_names: HashMap<&str, String> =
        members.iter().map(|m| (m.id.as_str(), m.label())).collect();

    let mut out: Vec<Team> = teams
        .iter()
        .map(|t| {
            let overall = t
                .record
                .as_ref()
                .and_then(|r| r.overall.clone())
                .unwrap_or_default();

            Team {
                team_id: TeamId::new(t.id),
                team_name: t.display_name(),
                owners: resolve_owners(t.owners.as_deref(), &member_names),
                wins: overall.wins,
                losses: overall.losses,
                points_for: overall.points_for,
                points_against: overall.points_against,
                standing: t.playoff_seed.unwrap_or(0),
                final_standing: t.rank_calculated_final.unwrap_or(0),
                streak_length: overall.streak_length,
                streak_type: overall.streak_type.unwrap_or_default(),
                roster: t.roster.as_ref().map(roster_from_wire),
            }
        })
        .collect();

    // Stable: equal standings keep provider order; unranked teams go last
    out.sort_by_key(|t| if t.standing == 0 { u32::MAX } else { t.standing });
    out
}

fn resolve_owners(owners: Option<&[Value]>, member_names: &HashMap<&str, String>) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::new();
    for owner in owners.unwrap_or_default() {
        let id = match owner {
            Value::String(s) => Some(s.as_str()),
            Value::Object(obj) => obj.get("id").and_then(Value::as_str),
            _ => None,
        };
        let label = id.map(|id| {
            member_names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string())
        });
        if let Some(label) = label {
            if !resolved.contains(&label) {
                resolved.push(label);
            }
        }
    }
    resolved
}

fn roster_from_wire(roster: &WireRoster) -> Vec<RosterPlayer> {
    roster
        .entries
        .iter()
        .filter_map(|entry| {
            let player_id = entry.resolved_player_id()?;
            let player = entry.player();
            Some(RosterPlayer {
                player_id: PlayerId::new(player_id),
                name: player
                    .and_then(|p| p.full_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                position: Position::label_for_id(player.and_then(|p| p.default_position_id)),
                points: entry.applied_stat_total().unwrap_or(0.0),
            })
        })
        .collect()
}

fn lineup_from_wire(roster: &WireRoster, week: Week) -> Vec<LineupPlayer> {
    roster
        .entries
        .iter()
        .filter_map(|entry| {
            let player_id = entry.resolved_player_id()?;
            let player = entry.player();
            let points = player
                .and_then(|p| p.actual_points_for_period(week.as_u16()))
                .or_else(|| entry.applied_stat_total())
                .unwrap_or(0.0);
            Some(LineupPlayer {
                player_id: PlayerId::new(player_id),
                name: player
                    .and_then(|p| p.full_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                slot_id: entry.lineup_slot_id,
                points,
            })
        })
        .collect()
}

/// Turn a `DRAFT_VIEWS` payload into picks, naming players from `players`.
pub fn draft_picks_from_response(response: &LeagueResponse, players: &[WirePlayer]) -> Vec<DraftPick> {
    let team_names: HashMap<u32, String> = response
        .teams
        .iter()
        .map(|t| (t.id, t.display_name()))
        .collect();
    let players: HashMap<i64, &WirePlayer> = players.iter().map(|p| (p.id, p)).collect();

    let Some(detail) = response.draft_detail.as_ref() else {
        return Vec::new();
    };

    let mut picks: Vec<DraftPick> = detail
        .picks
        .iter()
        .map(|pick| {
            let player = players.get(&pick.player_id);
            DraftPick {
                round_num: Some(pick.round_id),
                round_pick: Some(pick.round_pick_number),
                overall_pick: Some(pick.overall_pick_number),
                team_id: Some(TeamId::new(pick.team_id)),
                team_name: team_names.get(&pick.team_id).cloned(),
                player_name: player.and_then(|p| p.full_name.clone()),
                player_id: Some(PlayerId::new(pick.player_id)),
                position: player
                    .and_then(|p| p.default_position_id)
                    .map(|id| Position::label_for_id(Some(id))),
                nfl_team: player
                    .and_then(|p| p.pro_team_id)
                    .and_then(pro_team_abbrev)
                    .map(str::to_string),
                keeper: Some(pick.keeper),
            }
        })
        .collect();

    picks.sort_by_key(|p| p.overall_pick);
    picks
}
