//! ESPN fantasy football provider: wire types, HTTP client, and the
//! connector the season pipeline reads through.

pub mod connector;
pub mod http;
pub mod league;
pub mod pace;
pub mod types;

pub use connector::{BoxScore, LeagueConnector, LineupPlayer, SeasonHandle, SeasonSettings, Team};
pub use league::EspnConnector;
pub use pace::{pacer_for, FixedDelay, NoPacing, Pacer};
