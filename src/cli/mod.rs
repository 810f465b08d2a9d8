//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, YearRange};

use crate::espn::pace::DEFAULT_PACE;

/// Arguments shared by every pipeline command
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Seasons to process: `2018-2025`, `2018,2019,2021`, or a mix.
    #[clap(long, short, default_value_t = YearRange::default())]
    pub years: YearRange,

    /// Directory the JSON artifacts are written to.
    #[clap(long, short, default_value = ".")]
    pub output_dir: PathBuf,

    /// Delay between box score requests in milliseconds (0 disables pacing).
    #[clap(long, default_value_t = DEFAULT_PACE.as_millis() as u64)]
    pub pace_ms: u64,

    /// Show detailed progress information.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "espn-league-history",
    about = "Multi-season ESPN fantasy league history exporter"
)]
pub struct ESPN {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export league settings, standings and weekly matchups for each season.
    ///
    /// Writes `espn_league_<year>.json` per season and
    /// `espn_league_all_years.json` with every season that succeeded.
    LeagueHistory {
        #[clap(flatten)]
        common: CommonArgs,
    },

    /// Total each drafted player's regular-season points.
    ///
    /// Walks every regular-season box score, sums points per player, and joins
    /// the totals onto the draft picks stored under `--draft-dir`.
    PlayerStats {
        #[clap(flatten)]
        common: CommonArgs,

        /// Directory holding `espn_draft_<year>.json` (default: `<output-dir>/EspnDraft`).
        #[clap(long)]
        draft_dir: Option<PathBuf>,
    },

    /// Fetch each season's draft board into `espn_draft_<year>.json`.
    DraftPicks {
        #[clap(flatten)]
        common: CommonArgs,

        /// Directory to write draft files to (default: `<output-dir>/EspnDraft`).
        #[clap(long)]
        draft_dir: Option<PathBuf>,
    },
}
