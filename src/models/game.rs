//! Match facts: round-robin results, knockout results, cups and rounds.
//!
//! Only scores are stored. Knockout participants are always derived from the standings and
//! from upstream results, never kept here.

use crate::models::error::CupError;
use crate::models::team::{League, TeamCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Which side of a match: left is home / better seed / SF1 side.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Highest goal count accepted for either side of a score or shootout.
pub const MAX_GOALS: u32 = 99;

/// A goal pair (left/home first). Serialized as `[left, right]`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Score(pub u32, pub u32);

impl Score {
    /// Reject goal counts above `MAX_GOALS`.
    pub fn checked(self) -> Result<Self, CupError> {
        if self.0 > MAX_GOALS || self.1 > MAX_GOALS {
            return Err(CupError::ImplausibleScore(self));
        }
        Ok(self)
    }

    /// Side with more goals, `None` when level.
    pub fn leader(self) -> Option<Side> {
        match self.0.cmp(&self.1) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_level(self) -> bool {
        self.0 == self.1
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// Identity of a round-robin fixture.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct RoundRobinKey {
    pub league: League,
    /// Time-slot index in the league schedule.
    pub slot: usize,
    pub home: TeamCode,
    pub away: TeamCode,
}

impl RoundRobinKey {
    pub fn new(
        league: League,
        slot: usize,
        home: TeamCode,
        away: TeamCode,
    ) -> Result<Self, CupError> {
        if home == away {
            return Err(CupError::SelfMatch(home));
        }
        Ok(Self {
            league,
            slot,
            home,
            away,
        })
    }
}

/// One round-robin fixture and its score; `None` means not yet played.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRobinResult {
    pub key: RoundRobinKey,
    pub score: Option<Score>,
}

/// Knockout tier, fixed by rank band.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Cup {
    Champions,
    Elite,
    Classical,
}

impl Cup {
    pub const ALL: [Cup; 3] = [Cup::Champions, Cup::Elite, Cup::Classical];

    /// Zero-based index of the best rank in this cup's band.
    pub fn rank_offset(self) -> usize {
        match self {
            Cup::Champions => 0,
            Cup::Elite => 4,
            Cup::Classical => 8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cup::Champions => "Champions",
            Cup::Elite => "Elite",
            Cup::Classical => "Classical",
        }
    }
}

impl fmt::Display for Cup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cup {
    type Err = CupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cup::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CupError::UnknownCup(s.to_string()))
    }
}

/// Knockout round within a cup.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Round {
    #[serde(rename = "SF1")]
    Sf1,
    #[serde(rename = "SF2")]
    Sf2,
    Final,
    #[serde(rename = "3rd")]
    Third,
}

impl Round {
    pub const ALL: [Round; 4] = [Round::Sf1, Round::Sf2, Round::Final, Round::Third];

    pub fn as_str(self) -> &'static str {
        match self {
            Round::Sf1 => "SF1",
            Round::Sf2 => "SF2",
            Round::Final => "Final",
            Round::Third => "3rd",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Round {
    type Err = CupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Round::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CupError::UnknownRound(s.to_string()))
    }
}

/// Recorded regulation score and optional penalty shootout of one knockout match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub score: Option<Score>,
    #[serde(default)]
    pub penalties: Option<Score>,
}

impl MatchScore {
    pub fn new(score: Score) -> Self {
        Self {
            score: Some(score),
            penalties: None,
        }
    }

    pub fn with_penalties(score: Score, penalties: Score) -> Self {
        Self {
            score: Some(score),
            penalties: Some(penalties),
        }
    }

    /// Check both the regulation score and the shootout.
    pub fn checked(self) -> Result<Self, CupError> {
        self.score.map(Score::checked).transpose()?;
        self.penalties.map(Score::checked).transpose()?;
        Ok(self)
    }

    /// Score text for display, e.g. `1-1 (PK 3-2)`.
    pub fn describe(&self) -> Option<String> {
        let score = self.score?;
        match self.penalties {
            Some(pk) if score.is_level() => Some(format!("{score} (PK {pk})")),
            _ => Some(score.to_string()),
        }
    }
}

/// A stored knockout result, keyed by league, cup and round.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutResult {
    pub league: League,
    pub cup: Cup,
    pub round: Round,
    #[serde(flatten)]
    pub result: MatchScore,
}

/// All recorded knockout scores of one `(league, cup)`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CupResults {
    by_round: BTreeMap<Round, MatchScore>,
}

impl CupResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a round's score (last write wins).
    pub fn set(&mut self, round: Round, result: MatchScore) {
        self.by_round.insert(round, result);
    }

    pub fn get(&self, round: Round) -> Option<&MatchScore> {
        self.by_round.get(&round)
    }
}

impl FromIterator<(Round, MatchScore)> for CupResults {
    fn from_iter<T: IntoIterator<Item = (Round, MatchScore)>>(iter: T) -> Self {
        Self {
            by_round: iter.into_iter().collect(),
        }
    }
}
