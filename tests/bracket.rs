//! Integration tests for cup seeding and bracket resolution.

use cup_scoring_web::{
    resolve_bracket, resolve_match, seeds_for_cup, Cup, CupResults, MatchScore, MatchState, Round,
    Score, Side, Slot, SlotSource, TeamCode,
};
use TeamCode::*;

fn code_order() -> Vec<TeamCode> {
    TeamCode::ALL.to_vec()
}

fn results(entries: &[(Round, MatchScore)]) -> CupResults {
    entries.iter().copied().collect()
}

#[test]
fn seeds_follow_rank_bands() {
    let ranked = code_order();
    let champions = seeds_for_cup(Cup::Champions, &ranked).unwrap();
    assert_eq!(
        (champions.seed1, champions.seed2, champions.seed3, champions.seed4),
        (A, B, C, D)
    );
    let elite = seeds_for_cup(Cup::Elite, &ranked).unwrap();
    assert_eq!((elite.seed1, elite.seed4), (E, H));
    let classical = seeds_for_cup(Cup::Classical, &ranked).unwrap();
    assert_eq!((classical.seed1, classical.seed2, classical.seed3, classical.seed4), (I, J, K, L));
}

#[test]
fn short_ranking_leaves_every_seed_pending() {
    let ranked = vec![A, B, C, D, E];
    assert!(seeds_for_cup(Cup::Champions, &ranked).is_none());

    // Recorded scores are ignored while seeds are unknown.
    let cup = results(&[
        (Round::Sf1, MatchScore::new(Score(3, 0))),
        (Round::Sf2, MatchScore::new(Score(0, 1))),
        (Round::Final, MatchScore::new(Score(2, 1))),
    ]);
    let bracket = resolve_bracket(Cup::Champions, &ranked, &cup);
    for m in bracket.matches() {
        assert_eq!(m.state, MatchState::Pending);
    }
    assert_eq!(bracket.sf1.left, Slot::Pending(SlotSource::Seed(1)));
    assert_eq!(bracket.sf1.right, Slot::Pending(SlotSource::Seed(4)));
    assert_eq!(bracket.sf2.left, Slot::Pending(SlotSource::Seed(2)));
    assert_eq!(bracket.final_match.left, Slot::Pending(SlotSource::WinnerOf(Round::Sf1)));
    assert_eq!(bracket.champion, Slot::Pending(SlotSource::WinnerOf(Round::Final)));
}

#[test]
fn semifinals_pair_one_v_four_and_two_v_three() {
    let ranked = code_order();
    let empty = CupResults::new();
    let sf1 = resolve_match(Cup::Elite, Round::Sf1, &ranked, &empty);
    assert_eq!((sf1.left, sf1.right), (Slot::Team(E), Slot::Team(H)));
    let sf2 = resolve_match(Cup::Elite, Round::Sf2, &ranked, &empty);
    assert_eq!((sf2.left, sf2.right), (Slot::Team(F), Slot::Team(G)));
    assert_eq!(sf1.state, MatchState::Pending);
}

#[test]
fn regulation_winner_decides() {
    assert_eq!(
        MatchState::from_result(Some(&MatchScore::new(Score(2, 1)))),
        MatchState::Decided { winner: Side::Left }
    );
    assert_eq!(
        MatchState::from_result(Some(&MatchScore::new(Score(0, 4)))),
        MatchState::Decided { winner: Side::Right }
    );
    assert_eq!(MatchState::from_result(None), MatchState::Pending);
}

#[test]
fn draw_needs_unequal_penalties() {
    let drawn = MatchScore::new(Score(2, 2));
    assert_eq!(MatchState::from_result(Some(&drawn)), MatchState::Pending);

    let shootout = MatchScore::with_penalties(Score(2, 2), Score(5, 4));
    let state = MatchState::from_result(Some(&shootout));
    assert_eq!(state, MatchState::Decided { winner: Side::Left });
    assert_eq!(state.loser_side(), Some(Side::Right));

    let tied_shootout = MatchScore::with_penalties(Score(2, 2), Score(3, 3));
    assert_eq!(MatchState::from_result(Some(&tied_shootout)), MatchState::Pending);
}

#[test]
fn penalties_do_not_override_regulation_winner() {
    let m = MatchScore::with_penalties(Score(1, 0), Score(0, 5));
    assert_eq!(
        MatchState::from_result(Some(&m)),
        MatchState::Decided { winner: Side::Left }
    );
}

#[test]
fn pending_semifinal_keeps_final_and_third_pending() {
    let ranked = code_order();
    let cup = results(&[
        (Round::Sf2, MatchScore::new(Score(0, 2))),
        (Round::Final, MatchScore::new(Score(4, 0))),
        (Round::Third, MatchScore::new(Score(1, 0))),
    ]);
    let final_match = resolve_match(Cup::Champions, Round::Final, &ranked, &cup);
    assert_eq!(final_match.left, Slot::Pending(SlotSource::WinnerOf(Round::Sf1)));
    assert_eq!(final_match.right, Slot::Team(C));
    assert_eq!(final_match.state, MatchState::Pending);
    assert_eq!(final_match.winner(), None);

    let third = resolve_match(Cup::Champions, Round::Third, &ranked, &cup);
    assert_eq!(third.left, Slot::Pending(SlotSource::LoserOf(Round::Sf1)));
    assert_eq!(third.right, Slot::Team(B));
    assert_eq!(third.state, MatchState::Pending);
}

#[test]
fn decided_semifinals_feed_final_and_third() {
    let ranked = code_order();
    let cup = results(&[
        (Round::Sf1, MatchScore::with_penalties(Score(1, 1), Score(2, 4))),
        (Round::Sf2, MatchScore::new(Score(3, 1))),
        (Round::Final, MatchScore::new(Score(0, 1))),
        (Round::Third, MatchScore::new(Score(2, 0))),
    ]);
    let bracket = resolve_bracket(Cup::Champions, &ranked, &cup);
    // SF1: A v D, D wins on penalties. SF2: B v C, B wins.
    assert_eq!(bracket.sf1.winner(), Some(D));
    assert_eq!(bracket.sf1.loser(), Some(A));
    assert_eq!((bracket.final_match.left, bracket.final_match.right), (Slot::Team(D), Slot::Team(B)));
    assert_eq!(
        (bracket.third_place_match.left, bracket.third_place_match.right),
        (Slot::Team(A), Slot::Team(C))
    );
    assert_eq!(bracket.champion, Slot::Team(B));
    assert_eq!(bracket.third_place, Slot::Team(A));
}

#[test]
fn editing_a_semifinal_changes_the_final_on_next_read() {
    let ranked = code_order();
    let mut cup = results(&[
        (Round::Sf1, MatchScore::new(Score(2, 0))),
        (Round::Sf2, MatchScore::new(Score(2, 0))),
        (Round::Final, MatchScore::new(Score(1, 0))),
    ]);
    let before = resolve_bracket(Cup::Classical, &ranked, &cup);
    assert_eq!(before.final_match.left, Slot::Team(I));
    assert_eq!(before.champion, Slot::Team(I));

    cup.set(Round::Sf1, MatchScore::new(Score(0, 2)));
    let after = resolve_bracket(Cup::Classical, &ranked, &cup);
    assert_eq!(after.final_match.left, Slot::Team(L));
    assert_eq!(after.third_place_match.left, Slot::Team(I));
    assert_eq!(after.champion, Slot::Team(L));

    // Back to a drawn semifinal without penalties: everything downstream is pending again.
    cup.set(Round::Sf1, MatchScore::new(Score(1, 1)));
    let drawn = resolve_bracket(Cup::Classical, &ranked, &cup);
    assert_eq!(drawn.sf1.state, MatchState::Pending);
    assert_eq!(drawn.final_match.left, Slot::Pending(SlotSource::WinnerOf(Round::Sf1)));
    assert_eq!(drawn.champion, Slot::Pending(SlotSource::WinnerOf(Round::Final)));
}
