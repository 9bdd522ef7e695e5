//! Read interfaces for the presentation layer: standings table and bracket view.

mod csv_export;
mod dot;

pub use csv_export::standings_csv;
pub use dot::bracket_dot;

use crate::logic::{
    compute_standings, league_rank, ranked_codes, resolve_bracket, Bracket, MatchState,
    ResolvedMatch, Slot, SlotSource,
};
use crate::models::{Cup, League, Roster, Round, Side, TeamCode};
use crate::store::ResultStore;
use serde::Serialize;

/// One standings table row with the team's display name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StandingsView {
    pub rank: usize,
    pub code: TeamCode,
    pub name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

/// Current standings of `league`, rank 1 first.
pub fn get_standings<S: ResultStore + ?Sized>(store: &S, league: League) -> Vec<StandingsView> {
    let roster = store.roster(league);
    compute_standings(league, &store.round_robin_results(league))
        .into_iter()
        .map(|row| StandingsView {
            rank: row.rank,
            code: row.code,
            name: roster.name(row.code),
            played: row.played,
            won: row.won,
            drawn: row.drawn,
            lost: row.lost,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference(),
            points: row.points,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Decided,
}

/// Presentation of one knockout match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchView {
    pub round: Round,
    pub left_label: String,
    pub right_label: String,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loser_side: Option<Side>,
    /// Recorded score text, e.g. `1-1 (PK 3-2)`, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

/// Presentation of one cup.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BracketView {
    pub league: League,
    pub cup: Cup,
    /// SF1 / SF2 seed labels in seed order 1, 2, 3, 4.
    pub seeds: [String; 4],
    pub matches: Vec<MatchView>,
    pub champion: String,
    pub third_place: String,
}

impl BracketView {
    pub fn get(&self, round: Round) -> Option<&MatchView> {
        self.matches.iter().find(|m| m.round == round)
    }
}

fn placeholder(cup: Cup, source: SlotSource) -> String {
    match source {
        SlotSource::Seed(n) => format!("Rank {}", league_rank(cup, n)),
        SlotSource::WinnerOf(Round::Final) => "Champion".to_string(),
        SlotSource::WinnerOf(Round::Third) => "Third place".to_string(),
        SlotSource::WinnerOf(round) => format!("{round} winner"),
        SlotSource::LoserOf(round) => format!("{round} loser"),
    }
}

fn label(roster: &Roster, cup: Cup, slot: Slot) -> String {
    match slot {
        Slot::Team(code) => roster.name(code),
        Slot::Pending(source) => placeholder(cup, source),
    }
}

fn match_view(
    roster: &Roster,
    cup: Cup,
    m: &ResolvedMatch,
    score: Option<String>,
) -> MatchView {
    MatchView {
        round: m.round,
        left_label: label(roster, cup, m.left),
        right_label: label(roster, cup, m.right),
        status: match m.state {
            MatchState::Pending => MatchStatus::Pending,
            MatchState::Decided { .. } => MatchStatus::Decided,
        },
        winner_side: m.state.winner_side(),
        loser_side: m.state.loser_side(),
        score,
    }
}

/// Resolve `cup` of `league` from the store's current data.
pub fn resolve_cup<S: ResultStore + ?Sized>(store: &S, league: League, cup: Cup) -> Bracket {
    let ranked = ranked_codes(&compute_standings(league, &store.round_robin_results(league)));
    resolve_bracket(cup, &ranked, &store.knockout_results(league, cup))
}

/// Bracket of `cup` in `league`, recomputed from scratch.
pub fn get_bracket_view<S: ResultStore + ?Sized>(store: &S, league: League, cup: Cup) -> BracketView {
    log::debug!("Resolving {} {} bracket", league, cup);
    let roster = store.roster(league);
    let results = store.knockout_results(league, cup);
    let bracket = resolve_cup(store, league, cup);

    let seed_slot = |m: &ResolvedMatch, side: Side| match side {
        Side::Left => m.left,
        Side::Right => m.right,
    };
    let seeds = [
        label(&roster, cup, seed_slot(&bracket.sf1, Side::Left)),
        label(&roster, cup, seed_slot(&bracket.sf2, Side::Left)),
        label(&roster, cup, seed_slot(&bracket.sf2, Side::Right)),
        label(&roster, cup, seed_slot(&bracket.sf1, Side::Right)),
    ];

    let matches = bracket
        .matches()
        .into_iter()
        .map(|m| {
            let score = results.get(m.round).and_then(|r| r.describe());
            match_view(&roster, cup, m, score)
        })
        .collect();

    BracketView {
        league,
        cup,
        seeds,
        matches,
        champion: label(&roster, cup, bracket.champion),
        third_place: label(&roster, cup, bracket.third_place),
    }
}
