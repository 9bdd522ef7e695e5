//! Fixed time-slot and court tables for the league phase and the cups.
//!
//! The pairings are static; only start times depend on the settings.

use crate::models::{
    CourtMode, Cup, CupError, League, Round, RoundRobinKey, ScheduleSettings, TeamCode,
};
use chrono::{Duration, NaiveTime};
use serde::Serialize;

use League::{Mixed as M, Regular as R};
use TeamCode::*;

/// Pairings per 4-court slot: both leagues play the same two pairings.
const FOUR_COURT_PAIRS: [[(TeamCode, TeamCode); 2]; 9] = [
    [(A, E), (B, F)],
    [(C, G), (D, H)],
    [(I, J), (K, L)],
    [(A, B), (C, D)],
    [(E, F), (G, H)],
    [(A, I), (B, J)],
    [(C, K), (D, L)],
    [(E, I), (F, J)],
    [(G, K), (H, L)],
];

/// Three fixtures per 3-court slot, leagues interleaved.
const THREE_COURT_FIXTURES: [[(League, TeamCode, TeamCode); 3]; 12] = [
    [(R, A, E), (R, B, F), (M, A, E)],
    [(R, C, G), (M, B, F), (M, C, G)],
    [(R, I, J), (R, D, H), (M, D, H)],
    [(R, K, L), (M, I, J), (M, K, L)],
    [(R, A, B), (R, C, D), (M, A, B)],
    [(R, E, F), (M, C, D), (M, E, F)],
    [(R, G, H), (R, A, I), (M, G, H)],
    [(R, B, J), (M, A, I), (M, B, J)],
    [(R, C, K), (R, D, L), (M, C, K)],
    [(R, E, I), (M, D, L), (M, E, I)],
    [(R, F, J), (R, G, K), (M, F, J)],
    [(R, H, L), (M, G, K), (M, H, L)],
];

const COURTS: [char; 4] = ['A', 'B', 'C', 'D'];

type KnockoutGame = (League, Cup, Round);

const THREE_COURT_KNOCKOUT: [(&str, [KnockoutGame; 3]); 8] = [
    (
        "Classical SF",
        [
            (R, Cup::Classical, Round::Sf1),
            (R, Cup::Classical, Round::Sf2),
            (M, Cup::Classical, Round::Sf1),
        ],
    ),
    (
        "Classical / Elite SF",
        [
            (M, Cup::Classical, Round::Sf2),
            (R, Cup::Elite, Round::Sf1),
            (R, Cup::Elite, Round::Sf2),
        ],
    ),
    (
        "Elite / Champions SF",
        [
            (M, Cup::Elite, Round::Sf1),
            (M, Cup::Elite, Round::Sf2),
            (R, Cup::Champions, Round::Sf1),
        ],
    ),
    (
        "Champions SF",
        [
            (R, Cup::Champions, Round::Sf2),
            (M, Cup::Champions, Round::Sf1),
            (M, Cup::Champions, Round::Sf2),
        ],
    ),
    (
        "Classical finals",
        [
            (R, Cup::Classical, Round::Final),
            (R, Cup::Classical, Round::Third),
            (M, Cup::Classical, Round::Final),
        ],
    ),
    (
        "Elite finals",
        [
            (M, Cup::Classical, Round::Third),
            (R, Cup::Elite, Round::Final),
            (R, Cup::Elite, Round::Third),
        ],
    ),
    (
        "Elite / Champions finals",
        [
            (M, Cup::Elite, Round::Final),
            (M, Cup::Elite, Round::Third),
            (R, Cup::Champions, Round::Final),
        ],
    ),
    (
        "Champions finals",
        [
            (R, Cup::Champions, Round::Third),
            (M, Cup::Champions, Round::Final),
            (M, Cup::Champions, Round::Third),
        ],
    ),
];

/// One round-robin fixture on a court.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Fixture {
    pub court: char,
    pub key: RoundRobinKey,
}

/// A league time slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LeagueSlot {
    pub index: usize,
    pub start: NaiveTime,
    pub fixtures: Vec<Fixture>,
}

/// One knockout match on a court.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct KnockoutFixture {
    pub court: char,
    pub league: League,
    pub cup: Cup,
    pub round: Round,
}

/// A knockout time slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct KnockoutSlot {
    pub index: usize,
    pub start: NaiveTime,
    pub label: String,
    pub games: Vec<KnockoutFixture>,
}

fn minutes(n: u32) -> Duration {
    Duration::minutes(i64::from(n))
}

/// Times wrap past midnight like a wall clock.
fn slot_start(base: NaiveTime, index: usize, length: u32) -> NaiveTime {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    let total = i64::from(length).saturating_mul(index) % (24 * 60);
    base + Duration::minutes(total)
}

fn league_fixtures(mode: CourtMode) -> Vec<Vec<(char, League, TeamCode, TeamCode)>> {
    match mode {
        CourtMode::FourCourt => FOUR_COURT_PAIRS
            .iter()
            .map(|pairs| {
                [R, M]
                    .iter()
                    .flat_map(move |&league| pairs.iter().map(move |&(h, a)| (league, h, a)))
                    .zip(COURTS)
                    .map(|((league, h, a), court)| (court, league, h, a))
                    .collect()
            })
            .collect(),
        CourtMode::ThreeCourt => THREE_COURT_FIXTURES
            .iter()
            .map(|games| {
                games
                    .iter()
                    .zip(COURTS)
                    .map(|(&(league, h, a), court)| (court, league, h, a))
                    .collect()
            })
            .collect(),
    }
}

/// All league slots with start times and fixture keys.
pub fn league_schedule(settings: &ScheduleSettings) -> Vec<LeagueSlot> {
    league_fixtures(settings.court_mode)
        .into_iter()
        .enumerate()
        .map(|(index, games)| LeagueSlot {
            index,
            start: slot_start(settings.start, index, settings.league_minutes),
            fixtures: games
                .into_iter()
                .map(|(court, league, home, away)| Fixture {
                    court,
                    key: RoundRobinKey {
                        league,
                        slot: index,
                        home,
                        away,
                    },
                })
                .collect(),
        })
        .collect()
}

pub fn league_slot_count(mode: CourtMode) -> usize {
    match mode {
        CourtMode::FourCourt => FOUR_COURT_PAIRS.len(),
        CourtMode::ThreeCourt => THREE_COURT_FIXTURES.len(),
    }
}

/// When the last league slot ends.
pub fn league_end(settings: &ScheduleSettings) -> NaiveTime {
    slot_start(
        settings.start,
        league_slot_count(settings.court_mode),
        settings.league_minutes,
    )
}

/// League end plus the interval.
pub fn knockout_start(settings: &ScheduleSettings) -> NaiveTime {
    league_end(settings) + minutes(settings.interval_minutes)
}

fn knockout_games(mode: CourtMode) -> Vec<(String, Vec<KnockoutGame>)> {
    match mode {
        CourtMode::FourCourt => {
            let order = [Cup::Classical, Cup::Elite, Cup::Champions];
            let semis = order.iter().map(|&cup| {
                (
                    format!("{cup} semifinals"),
                    vec![
                        (R, cup, Round::Sf1),
                        (R, cup, Round::Sf2),
                        (M, cup, Round::Sf1),
                        (M, cup, Round::Sf2),
                    ],
                )
            });
            let finals = order.iter().map(|&cup| {
                (
                    format!("{cup} finals"),
                    vec![
                        (R, cup, Round::Final),
                        (R, cup, Round::Third),
                        (M, cup, Round::Final),
                        (M, cup, Round::Third),
                    ],
                )
            });
            semis.chain(finals).collect()
        }
        CourtMode::ThreeCourt => THREE_COURT_KNOCKOUT
            .iter()
            .map(|(label, games)| (label.to_string(), games.to_vec()))
            .collect(),
    }
}

/// All knockout slots with start times and courts.
pub fn knockout_schedule(settings: &ScheduleSettings) -> Vec<KnockoutSlot> {
    let base = knockout_start(settings);
    knockout_games(settings.court_mode)
        .into_iter()
        .enumerate()
        .map(|(index, (label, games))| KnockoutSlot {
            index,
            start: slot_start(base, index, settings.tournament_minutes),
            label,
            games: games
                .into_iter()
                .zip(COURTS)
                .map(|((league, cup, round), court)| KnockoutFixture {
                    court,
                    league,
                    cup,
                    round,
                })
                .collect(),
        })
        .collect()
}

/// Check that `key` names a fixture of the current schedule.
pub fn validate_fixture(settings: &ScheduleSettings, key: &RoundRobinKey) -> Result<(), CupError> {
    if key.home == key.away {
        return Err(CupError::SelfMatch(key.home));
    }
    let scheduled = league_fixtures(settings.court_mode)
        .get(key.slot)
        .is_some_and(|games| {
            games
                .iter()
                .any(|&(_, league, h, a)| league == key.league && h == key.home && a == key.away)
        });
    if scheduled {
        Ok(())
    } else {
        Err(CupError::UnknownFixture {
            league: key.league,
            slot: key.slot,
            home: key.home,
            away: key.away,
        })
    }
}
