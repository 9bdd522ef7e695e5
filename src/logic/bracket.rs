//! Bracket resolution: who occupies each slot of a 4-team cup and who has advanced.
//!
//! Nothing is cached. Every call derives semifinal participants from the ranking and
//! Final / 3rd participants from the semifinal outcomes, so an edited score anywhere is
//! reflected on the next read.

use crate::logic::seeding::{seeds_for_cup, CupSeeds};
use crate::models::{Cup, CupResults, MatchScore, Round, Side, TeamCode};
use serde::Serialize;

/// Where a pending slot's occupant will come from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSource {
    /// Seed 1..=4 of the cup, waiting on the ranking.
    Seed(usize),
    WinnerOf(Round),
    LoserOf(Round),
}

/// One bracket slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Team(TeamCode),
    Pending(SlotSource),
}

impl Slot {
    pub fn team(self) -> Option<TeamCode> {
        match self {
            Slot::Team(code) => Some(code),
            Slot::Pending(_) => None,
        }
    }

    fn or_pending(team: Option<TeamCode>, source: SlotSource) -> Slot {
        team.map_or(Slot::Pending(source), Slot::Team)
    }
}

/// Outcome state of a single match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MatchState {
    #[default]
    Pending,
    Decided { winner: Side },
}

impl MatchState {
    /// Decide from a recorded score. A level score needs unequal penalties to decide.
    pub fn from_result(result: Option<&MatchScore>) -> MatchState {
        let Some(score) = result.and_then(|r| r.score) else {
            return MatchState::Pending;
        };
        let winner = score
            .leader()
            .or_else(|| result.and_then(|r| r.penalties).and_then(|pk| pk.leader()));
        match winner {
            Some(winner) => MatchState::Decided { winner },
            None => MatchState::Pending,
        }
    }

    pub fn winner_side(self) -> Option<Side> {
        match self {
            MatchState::Decided { winner } => Some(winner),
            MatchState::Pending => None,
        }
    }

    pub fn loser_side(self) -> Option<Side> {
        self.winner_side().map(Side::other)
    }
}

/// A match with its derived participants and outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ResolvedMatch {
    pub round: Round,
    pub left: Slot,
    pub right: Slot,
    pub state: MatchState,
}

impl ResolvedMatch {
    fn slot(&self, side: Side) -> Slot {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn winner(&self) -> Option<TeamCode> {
        self.state.winner_side().and_then(|s| self.slot(s).team())
    }

    pub fn loser(&self) -> Option<TeamCode> {
        self.state.loser_side().and_then(|s| self.slot(s).team())
    }
}

/// Resolve one match of `cup` from the league ranking and the cup's recorded scores.
///
/// A match is only decided when both participants are known; scores recorded while a
/// participant is still pending are ignored (but left in place).
pub fn resolve_match(
    cup: Cup,
    round: Round,
    ranked: &[TeamCode],
    results: &CupResults,
) -> ResolvedMatch {
    let (left, right) = match round {
        Round::Sf1 | Round::Sf2 => semifinal_slots(round, seeds_for_cup(cup, ranked)),
        Round::Final => {
            let sf1 = resolve_match(cup, Round::Sf1, ranked, results);
            let sf2 = resolve_match(cup, Round::Sf2, ranked, results);
            (
                Slot::or_pending(sf1.winner(), SlotSource::WinnerOf(Round::Sf1)),
                Slot::or_pending(sf2.winner(), SlotSource::WinnerOf(Round::Sf2)),
            )
        }
        Round::Third => {
            let sf1 = resolve_match(cup, Round::Sf1, ranked, results);
            let sf2 = resolve_match(cup, Round::Sf2, ranked, results);
            (
                Slot::or_pending(sf1.loser(), SlotSource::LoserOf(Round::Sf1)),
                Slot::or_pending(sf2.loser(), SlotSource::LoserOf(Round::Sf2)),
            )
        }
    };

    let state = match (left, right) {
        (Slot::Team(_), Slot::Team(_)) => MatchState::from_result(results.get(round)),
        _ => MatchState::Pending,
    };

    ResolvedMatch {
        round,
        left,
        right,
        state,
    }
}

/// SF1 is seed 1 v seed 4, SF2 is seed 2 v seed 3; the better seed plays on the left.
fn semifinal_slots(round: Round, seeds: Option<CupSeeds>) -> (Slot, Slot) {
    let (left_seed, right_seed) = if round == Round::Sf1 { (1, 4) } else { (2, 3) };
    match seeds {
        Some(s) => {
            let pick = |n| match n {
                1 => s.seed1,
                2 => s.seed2,
                3 => s.seed3,
                _ => s.seed4,
            };
            (Slot::Team(pick(left_seed)), Slot::Team(pick(right_seed)))
        }
        None => (
            Slot::Pending(SlotSource::Seed(left_seed)),
            Slot::Pending(SlotSource::Seed(right_seed)),
        ),
    }
}

/// Full state of one cup: four matches plus the podium.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Bracket {
    pub cup: Cup,
    pub sf1: ResolvedMatch,
    pub sf2: ResolvedMatch,
    pub final_match: ResolvedMatch,
    pub third_place_match: ResolvedMatch,
    pub champion: Slot,
    pub third_place: Slot,
}

impl Bracket {
    /// Matches in play order: SF1, SF2, Final, 3rd.
    pub fn matches(&self) -> [&ResolvedMatch; 4] {
        [
            &self.sf1,
            &self.sf2,
            &self.final_match,
            &self.third_place_match,
        ]
    }

    pub fn get(&self, round: Round) -> &ResolvedMatch {
        match round {
            Round::Sf1 => &self.sf1,
            Round::Sf2 => &self.sf2,
            Round::Final => &self.final_match,
            Round::Third => &self.third_place_match,
        }
    }
}

pub fn resolve_bracket(cup: Cup, ranked: &[TeamCode], results: &CupResults) -> Bracket {
    let final_match = resolve_match(cup, Round::Final, ranked, results);
    let third_place_match = resolve_match(cup, Round::Third, ranked, results);
    Bracket {
        cup,
        sf1: resolve_match(cup, Round::Sf1, ranked, results),
        sf2: resolve_match(cup, Round::Sf2, ranked, results),
        champion: Slot::or_pending(final_match.winner(), SlotSource::WinnerOf(Round::Final)),
        third_place: Slot::or_pending(
            third_place_match.winner(),
            SlotSource::WinnerOf(Round::Third),
        ),
        final_match,
        third_place_match,
    }
}
