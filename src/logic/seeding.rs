//! Cup seeding: map a league ranking onto the four seeds of a cup.

use crate::models::{Cup, TeamCode};

/// Number of teams a ranking must cover before any cup can be seeded.
pub const LEAGUE_SIZE: usize = 12;

/// The four seeds of a cup, best first within the band.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CupSeeds {
    pub seed1: TeamCode,
    pub seed2: TeamCode,
    pub seed3: TeamCode,
    pub seed4: TeamCode,
}

/// Seeds for `cup`, or `None` (every seed pending) while the ranking is shorter than 12.
pub fn seeds_for_cup(cup: Cup, ranked: &[TeamCode]) -> Option<CupSeeds> {
    if ranked.len() < LEAGUE_SIZE {
        return None;
    }
    let band = &ranked[cup.rank_offset()..cup.rank_offset() + 4];
    Some(CupSeeds {
        seed1: band[0],
        seed2: band[1],
        seed3: band[2],
        seed4: band[3],
    })
}

/// League-wide 1-based rank of seed `n` (1..=4) of `cup`.
pub fn league_rank(cup: Cup, seed: usize) -> usize {
    cup.rank_offset() + seed
}
