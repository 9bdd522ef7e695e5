//! Integration tests for the standings engine: folding results and the ranking comparator.

use cup_scoring_web::{
    compute_standings, ranked_codes, League, RoundRobinKey, RoundRobinResult, Score, TeamCode,
};
use TeamCode::*;

fn played(league: League, slot: usize, home: TeamCode, away: TeamCode, h: u32, a: u32) -> RoundRobinResult {
    RoundRobinResult {
        key: RoundRobinKey::new(league, slot, home, away).unwrap(),
        score: Some(Score(h, a)),
    }
}

fn unplayed(league: League, slot: usize, home: TeamCode, away: TeamCode) -> RoundRobinResult {
    RoundRobinResult {
        key: RoundRobinKey::new(league, slot, home, away).unwrap(),
        score: None,
    }
}

#[test]
fn no_results_ranks_by_code_order() {
    let rows = compute_standings(League::Regular, &[]);
    assert_eq!(rows.len(), 12);
    assert_eq!(ranked_codes(&rows), TeamCode::ALL.to_vec());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.rank, i + 1);
        assert_eq!(row.played, 0);
        assert_eq!(row.points, 0);
    }
}

#[test]
fn win_draw_loss_are_symmetric_for_home_and_away() {
    let results = vec![
        played(League::Regular, 0, A, B, 3, 1),
        played(League::Regular, 1, C, A, 2, 2),
        played(League::Regular, 2, D, A, 4, 0),
    ];
    let rows = compute_standings(League::Regular, &results);
    let a = rows.iter().find(|r| r.code == A).unwrap();
    assert_eq!((a.played, a.won, a.drawn, a.lost), (3, 1, 1, 1));
    assert_eq!((a.goals_for, a.goals_against), (5, 7));
    assert_eq!(a.goal_difference(), -2);
    assert_eq!(a.points, 4);

    let b = rows.iter().find(|r| r.code == B).unwrap();
    assert_eq!((b.played, b.lost, b.points), (1, 1, 0));
    let c = rows.iter().find(|r| r.code == C).unwrap();
    assert_eq!((c.drawn, c.points), (1, 1));
    let d = rows.iter().find(|r| r.code == D).unwrap();
    assert_eq!((d.won, d.points, d.goal_difference()), (1, 3, 4));
}

#[test]
fn unplayed_and_other_league_results_are_ignored() {
    let results = vec![
        unplayed(League::Regular, 0, L, K),
        played(League::Mixed, 0, L, K, 9, 0),
    ];
    let rows = compute_standings(League::Regular, &results);
    assert!(rows.iter().all(|r| r.played == 0));
    assert_eq!(ranked_codes(&rows), TeamCode::ALL.to_vec());

    let mixed = compute_standings(League::Mixed, &results);
    assert_eq!(mixed[0].code, L);
    assert_eq!(mixed[11].code, K);
}

#[test]
fn goals_for_breaks_equal_points_and_goal_difference() {
    // Both on 3 points and +2, B with more goals scored.
    let results = vec![
        played(League::Regular, 0, A, C, 2, 0),
        played(League::Regular, 1, B, D, 4, 2),
    ];
    let codes = ranked_codes(&compute_standings(League::Regular, &results));
    assert_eq!(&codes[..2], &[B, A]);
}

#[test]
fn code_order_breaks_identical_records() {
    let results = vec![
        played(League::Regular, 0, B, D, 2, 0),
        played(League::Regular, 1, A, C, 2, 0),
    ];
    let rows = compute_standings(League::Regular, &results);
    assert_eq!(rows[0].code, A);
    assert_eq!(rows[1].code, B);
    assert_eq!((rows[0].points, rows[0].goal_difference(), rows[0].goals_for), (3, 2, 2));
    assert_eq!((rows[1].points, rows[1].goal_difference(), rows[1].goals_for), (3, 2, 2));
}

#[test]
fn points_outrank_goal_difference() {
    let results = vec![
        played(League::Regular, 0, L, K, 9, 0),
        played(League::Regular, 1, A, B, 1, 0),
        played(League::Regular, 2, A, C, 1, 0),
    ];
    let rows = compute_standings(League::Regular, &results);
    assert_eq!(rows[0].code, A);
    assert_eq!(rows[0].points, 6);
    assert_eq!(rows[1].code, L);
}

#[test]
fn ranking_is_deterministic_and_strict() {
    let results = vec![
        played(League::Mixed, 0, A, E, 1, 1),
        played(League::Mixed, 0, B, F, 0, 2),
        played(League::Mixed, 1, C, G, 3, 3),
        played(League::Mixed, 1, D, H, 1, 0),
        played(League::Mixed, 2, I, J, 0, 0),
        played(League::Mixed, 2, K, L, 2, 1),
    ];
    let first = compute_standings(League::Mixed, &results);
    let second = compute_standings(League::Mixed, &results);
    assert_eq!(first, second);

    let mut ranks: Vec<usize> = first.iter().map(|r| r.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=12).collect::<Vec<usize>>());
    let mut codes = ranked_codes(&first);
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 12);
}

#[test]
fn team_with_most_points_tops_the_table() {
    // C wins all three of its matches; everyone else trades results.
    let results = vec![
        played(League::Regular, 0, A, B, 3, 1),
        played(League::Regular, 1, C, G, 2, 0),
        played(League::Regular, 3, C, D, 1, 0),
        played(League::Regular, 6, C, K, 4, 1),
        played(League::Regular, 3, A, B, 0, 2),
        played(League::Regular, 5, A, I, 1, 1),
    ];
    let rows = compute_standings(League::Regular, &results);
    assert_eq!(rows[0].code, C);
    assert_eq!(rows[0].points, 9);
}

#[test]
fn goal_difference_outranks_goals_for() {
    // Both on 3 points: A is +3 with 3 scored, B is +1 with 4 scored.
    let results = vec![
        played(League::Regular, 0, A, C, 3, 0),
        played(League::Regular, 1, B, D, 4, 3),
    ];
    let rows = compute_standings(League::Regular, &results);
    assert_eq!(&ranked_codes(&rows)[..2], &[A, B]);
    assert!(rows[0].goals_for < rows[1].goals_for);
}

#[test]
fn huge_stored_scores_saturate_instead_of_overflowing() {
    let results = vec![
        played(League::Regular, 0, A, E, u32::MAX, 0),
        played(League::Regular, 3, A, B, u32::MAX, 0),
    ];
    let rows = compute_standings(League::Regular, &results);
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0].code, A);
    assert_eq!(rows[0].goals_for, u32::MAX);
    assert_eq!(rows[0].points, 6);
}
