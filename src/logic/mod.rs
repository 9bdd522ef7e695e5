//! Scoring logic: standings, cup seeding, bracket resolution, schedule tables.
//!
//! Everything here is a pure function of its inputs.

mod bracket;
mod schedule;
mod seeding;
mod standings;

pub use bracket::{
    resolve_bracket, resolve_match, Bracket, MatchState, ResolvedMatch, Slot, SlotSource,
};
pub use schedule::{
    knockout_schedule, knockout_start, league_end, league_schedule, league_slot_count,
    validate_fixture, Fixture, KnockoutFixture, KnockoutSlot, LeagueSlot,
};
pub use seeding::{league_rank, seeds_for_cup, CupSeeds, LEAGUE_SIZE};
pub use standings::{
    compare_rows, compute_standings, ranked_codes, StandingsRow, DRAW_POINTS, WIN_POINTS,
};
