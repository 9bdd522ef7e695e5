//! Raw result storage. The engine reads through `ResultStore` and never holds state itself.

mod event;
mod file;

pub use event::EventData;
pub use file::{commit, load, reset, save, StoreError};

use crate::models::{Cup, CupResults, League, Roster, RoundRobinResult};

/// Read side of whatever holds the operator's entries.
///
/// Implementations must return the latest committed data on every call.
pub trait ResultStore {
    fn roster(&self, league: League) -> Roster;

    /// Every round-robin fixture of `league`, played or not.
    fn round_robin_results(&self, league: League) -> Vec<RoundRobinResult>;

    /// Recorded scores of one cup, by round.
    fn knockout_results(&self, league: League, cup: Cup) -> CupResults;
}
