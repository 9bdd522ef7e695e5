//! Round-robin standings: fold played results into per-team rows and rank them.

use crate::models::{League, RoundRobinResult, TeamCode};
use serde::Serialize;
use std::cmp::Ordering;

/// Points for a win / draw / loss.
pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

/// Derived record of one team. Never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct StandingsRow {
    /// 1-based, unique within the league.
    pub rank: usize,
    pub code: TeamCode,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl StandingsRow {
    fn empty(code: TeamCode) -> Self {
        Self {
            rank: 0,
            code,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Totals saturate so any stored score still ranks.
    fn record(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won = self.won.saturating_add(1);
                self.points = self.points.saturating_add(WIN_POINTS);
            }
            Ordering::Equal => {
                self.drawn = self.drawn.saturating_add(1);
                self.points = self.points.saturating_add(DRAW_POINTS);
            }
            Ordering::Less => self.lost = self.lost.saturating_add(1),
        }
    }
}

/// Ranking comparator: points, goal difference, goals for (all descending), then code order.
///
/// Codes are unique, so this is a strict total order over a league.
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.code.cmp(&b.code))
}

/// Rank all 12 teams of `league` from the results that have a score.
///
/// Results of the other league and unplayed fixtures are ignored. Partial data is fine and
/// just yields fewer matches played.
pub fn compute_standings(league: League, results: &[RoundRobinResult]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = TeamCode::ALL.iter().map(|&c| StandingsRow::empty(c)).collect();

    for result in results.iter().filter(|r| r.key.league == league) {
        let Some(score) = result.score else {
            continue;
        };
        rows[result.key.home.index()].record(score.0, score.1);
        rows[result.key.away.index()].record(score.1, score.0);
    }

    rows.sort_by(compare_rows);
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Team codes in rank order (rank 1 first).
pub fn ranked_codes(rows: &[StandingsRow]) -> Vec<TeamCode> {
    rows.iter().map(|r| r.code).collect()
}
