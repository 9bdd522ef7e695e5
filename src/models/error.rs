//! Errors raised at the input boundary, before the engine runs.

use crate::models::game::{Score, MAX_GOALS};
use crate::models::team::{League, TeamCode};

/// Violations of the closed vocabulary or of basic score well-formedness.
///
/// Incomplete data (missing scores, undecided semifinals) is never an error; the engine
/// reports it as pending instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CupError {
    /// League name is not `regular` or `mixed`.
    UnknownLeague(String),
    /// Team code is not one of A..L.
    UnknownTeam(String),
    /// Cup name is not `Champions`, `Elite` or `Classical`.
    UnknownCup(String),
    /// Round name is not `SF1`, `SF2`, `Final` or `3rd`.
    UnknownRound(String),
    /// A fixture pits a team against itself.
    SelfMatch(TeamCode),
    /// The round-robin key is not a fixture of the current schedule.
    UnknownFixture {
        league: League,
        slot: usize,
        home: TeamCode,
        away: TeamCode,
    },
    /// A side of the score is above `MAX_GOALS`.
    ImplausibleScore(Score),
    /// A schedule setting is outside its accepted range.
    SettingOutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    /// Team names must not be blank.
    EmptyTeamName,
    /// Event titles must not be blank.
    EmptyTitle,
}

impl std::fmt::Display for CupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CupError::UnknownLeague(s) => write!(f, "Unknown league '{}'", s),
            CupError::UnknownTeam(s) => write!(f, "Unknown team code '{}'", s),
            CupError::UnknownCup(s) => write!(f, "Unknown cup '{}'", s),
            CupError::UnknownRound(s) => write!(f, "Unknown round '{}'", s),
            CupError::SelfMatch(code) => write!(f, "Team {} cannot play itself", code),
            CupError::UnknownFixture {
                league,
                slot,
                home,
                away,
            } => write!(
                f,
                "No {} fixture {} vs {} in slot {}",
                league, home, away, slot
            ),
            CupError::ImplausibleScore(score) => write!(
                f,
                "Score {} is not plausible (at most {} goals per side)",
                score, MAX_GOALS
            ),
            CupError::SettingOutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{} must be between {} and {}, got {}", name, min, max, value),
            CupError::EmptyTeamName => write!(f, "Team name must not be empty"),
            CupError::EmptyTitle => write!(f, "Title must not be empty"),
        }
    }
}

impl std::error::Error for CupError {}
