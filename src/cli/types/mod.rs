//! Type-safe wrappers and enums for ESPN Fantasy Football data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::Position;
pub use time::{Season, Week, YearRange};
