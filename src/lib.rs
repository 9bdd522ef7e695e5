//! Two-league cup scorer: library with models, standings and bracket logic, storage, and views.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;
pub mod view;

pub use config::ServerConfig;
pub use logic::{
    compute_standings, knockout_schedule, league_schedule, ranked_codes, resolve_bracket,
    resolve_match, seeds_for_cup, validate_fixture, Bracket, CupSeeds, MatchState, ResolvedMatch,
    Slot, SlotSource, StandingsRow,
};
pub use models::{
    CourtMode, Cup, CupError, CupResults, KnockoutResult, League, MatchScore, Roster, Round,
    RoundRobinKey, RoundRobinResult, ScheduleSettings, Score, Side, Team, TeamCode, MAX_GOALS,
};
pub use store::{EventData, ResultStore, StoreError};
pub use view::{
    bracket_dot, get_bracket_view, get_standings, standings_csv, BracketView, MatchStatus,
    MatchView, StandingsView,
};
