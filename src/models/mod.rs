//! Data structures for the event: leagues, teams, match results, settings.

mod error;
mod game;
mod settings;
mod team;

pub use error::CupError;
pub use game::{
    Cup, CupResults, KnockoutResult, MatchScore, Round, RoundRobinKey, RoundRobinResult, Score,
    Side, MAX_GOALS,
};
pub use settings::{CourtMode, ScheduleSettings};
pub use team::{League, Roster, Team, TeamCode};
