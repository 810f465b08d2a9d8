//! Run configuration, resolved once at startup from CLI flags and environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{
    cli::{types::YearRange, CommonArgs},
    error::EspnError,
    LeagueId, Result, Season, LEAGUE_ID_ENV_VAR,
};

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";

/// Subdirectory of the output directory that holds draft files by default.
pub const DEFAULT_DRAFT_SUBDIR: &str = "EspnDraft";

/// Private-league cookies. Both halves are required.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub swid: String,
    pub espn_s2: String,
}

impl Credentials {
    /// Read `ESPN_SWID` and `ESPN_S2`; `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let swid = std::env::var(SWID_ENV_VAR).ok()?;
        let espn_s2 = std::env::var(ESPN_S2_ENV_VAR).ok()?;
        if swid.trim().is_empty() || espn_s2.trim().is_empty() {
            return None;
        }
        Some(Self { swid, espn_s2 })
    }

    pub fn cookie(&self) -> String {
        format!("SWID={}; espn_s2={}", self.swid, self.espn_s2)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("swid", &self.swid)
            .field("espn_s2", &"<redacted>")
            .finish()
    }
}

/// Everything a pipeline run needs, passed explicitly into command handlers.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub league_id: LeagueId,
    pub years: YearRange,
    pub credentials: Option<Credentials>,
    pub output_dir: PathBuf,
    pub draft_dir: PathBuf,
    /// Pause between box score requests; zero disables pacing.
    pub pace: Duration,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Build the config from parsed CLI arguments plus the environment.
    ///
    /// Fails only on unrecoverable configuration problems (no league id).
    pub fn from_args(common: CommonArgs, draft_dir: Option<PathBuf>) -> Result<Self> {
        let league_id = resolve_league_id(common.league_id)?;
        let draft_dir =
            draft_dir.unwrap_or_else(|| common.output_dir.join(DEFAULT_DRAFT_SUBDIR));

        Ok(Self {
            league_id,
            years: common.years,
            credentials: Credentials::from_env(),
            output_dir: common.output_dir,
            draft_dir,
            pace: Duration::from_millis(common.pace_ms),
            verbose: common.verbose,
        })
    }

    pub fn seasons(&self) -> &[Season] {
        self.years.seasons()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Resolve league ID from option or environment variable
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }

    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) if !raw.trim().is_empty() => {
            let id: LeagueId = raw.parse()?;
            if id.as_u32() == 0 {
                return Err(EspnError::MissingLeagueId {
                    env_var: LEAGUE_ID_ENV_VAR.to_string(),
                });
            }
            Ok(id)
        }
        _ => Err(EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}
