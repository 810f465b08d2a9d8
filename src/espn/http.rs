//! HTTP client for the ESPN fantasy football v3 API.

use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::{
    config::Credentials,
    core::espn_header_map,
    espn::types::{LeagueResponse, WirePlayer},
    LeagueId, Result, Season, Week,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Views that make up a season snapshot.
pub const SEASON_VIEWS: &[&str] = &["mTeam", "mRoster", "mSettings", "mStandings"];

/// Views for one week of box scores.
pub const BOX_SCORE_VIEWS: &[&str] = &["mMatchupScore", "mScoreboard"];

/// Views for the draft board.
pub const DRAFT_VIEWS: &[&str] = &["mDraftDetail", "mTeam"];

const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// Thin wrapper over `reqwest` that knows the ESPN URL layout.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl EspnClient {
    /// Client against the public ESPN endpoint.
    pub fn new(credentials: Option<&Credentials>) -> Result<Self> {
        Self::with_base_url(FFL_BASE_URL, credentials)
    }

    /// Client against any base URL (mock servers in tests).
    pub fn with_base_url(base_url: impl Into<String>, credentials: Option<&Credentials>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("espn-league-history/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: espn_header_map(credentials)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn league_url(&self, league_id: LeagueId, season: Season) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, season, league_id
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        extra: HeaderMap,
    ) -> Result<T> {
        let mut headers = self.headers.clone();
        headers.extend(extra);

        let builder = self.http.get(url).headers(headers).query(params);
        debug!(url, ?params, "ESPN request");

        let res = builder
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;
        Ok(res)
    }

    /// `GET leagues/{id}` with the given views.
    pub async fn get_league(
        &self,
        league_id: LeagueId,
        season: Season,
        views: &[&str],
    ) -> Result<LeagueResponse> {
        let params: Vec<(&str, String)> = views.iter().map(|v| ("view", v.to_string())).collect();
        self.get_json(&self.league_url(league_id, season), &params, HeaderMap::new())
            .await
    }

    /// Box scores for one week: the schedule filtered to that matchup period.
    pub async fn get_box_scores(
        &self,
        league_id: LeagueId,
        season: Season,
        week: Week,
    ) -> Result<LeagueResponse> {
        let mut params: Vec<(&str, String)> =
            BOX_SCORE_VIEWS.iter().map(|v| ("view", v.to_string())).collect();
        params.push(("scoringPeriodId", week.to_string()));

        let filter = json!({
            "schedule": {
                "filterMatchupPeriodIds": { "value": [week.as_u16()] }
            }
        });
        let mut extra = HeaderMap::new();
        extra.insert(FANTASY_FILTER_HEADER, filter.to_string().parse()?);

        self.get_json(&self.league_url(league_id, season), &params, extra)
            .await
    }

    /// Every NFL player ESPN knows for the season (id, name, position, pro team).
    pub async fn get_pro_players(&self, season: Season) -> Result<Vec<WirePlayer>> {
        let url = format!("{}/seasons/{}/players", self.base_url, season);
        let params = [("view", "players_wl".to_string())];
        self.get_json(&url, &params, HeaderMap::new()).await
    }
}
