//! In-memory event state: rosters, raw results, settings.

use crate::models::{
    Cup, CupError, CupResults, KnockoutResult, League, MatchScore, Roster, Round, RoundRobinKey,
    RoundRobinResult, ScheduleSettings, Score, TeamCode,
};
use crate::store::ResultStore;
use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Patent Cup".to_string()
}

fn default_regular_roster() -> Roster {
    Roster::new(League::Regular)
}

fn default_mixed_roster() -> Roster {
    Roster::new(League::Mixed)
}

/// Everything the operator enters. Scores are leaf facts; last write wins.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_regular_roster")]
    pub regular_teams: Roster,
    #[serde(default = "default_mixed_roster")]
    pub mixed_teams: Roster,
    #[serde(default)]
    pub round_robin: Vec<RoundRobinResult>,
    #[serde(default)]
    pub knockout: Vec<KnockoutResult>,
    #[serde(default)]
    pub settings: ScheduleSettings,
}

impl Default for EventData {
    fn default() -> Self {
        Self {
            title: default_title(),
            regular_teams: default_regular_roster(),
            mixed_teams: default_mixed_roster(),
            round_robin: Vec::new(),
            knockout: Vec::new(),
            settings: ScheduleSettings::default(),
        }
    }
}

impl EventData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster_mut(&mut self, league: League) -> &mut Roster {
        match league {
            League::Regular => &mut self.regular_teams,
            League::Mixed => &mut self.mixed_teams,
        }
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), CupError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(CupError::EmptyTitle);
        }
        self.title = trimmed.to_string();
        Ok(())
    }

    pub fn rename_team(&mut self, league: League, code: TeamCode, name: &str) -> Result<(), CupError> {
        self.roster_mut(league).rename(code, name)
    }

    /// Enter, edit, or clear (`None`) a round-robin score.
    pub fn record_round_robin(&mut self, key: RoundRobinKey, score: Option<Score>) {
        match self.round_robin.iter_mut().find(|r| r.key == key) {
            Some(existing) => existing.score = score,
            None => self.round_robin.push(RoundRobinResult { key, score }),
        }
    }

    pub fn round_robin_score(&self, key: &RoundRobinKey) -> Option<Score> {
        self.round_robin
            .iter()
            .find(|r| r.key == *key)
            .and_then(|r| r.score)
    }

    /// Enter or edit a knockout score (with optional penalties).
    pub fn record_knockout(&mut self, league: League, cup: Cup, round: Round, result: MatchScore) {
        let existing = self
            .knockout
            .iter_mut()
            .find(|k| k.league == league && k.cup == cup && k.round == round);
        match existing {
            Some(k) => k.result = result,
            None => self.knockout.push(KnockoutResult {
                league,
                cup,
                round,
                result,
            }),
        }
    }
}

impl ResultStore for EventData {
    fn roster(&self, league: League) -> Roster {
        match league {
            League::Regular => self.regular_teams.clone(),
            League::Mixed => self.mixed_teams.clone(),
        }
    }

    fn round_robin_results(&self, league: League) -> Vec<RoundRobinResult> {
        self.round_robin
            .iter()
            .filter(|r| r.key.league == league)
            .copied()
            .collect()
    }

    fn knockout_results(&self, league: League, cup: Cup) -> CupResults {
        self.knockout
            .iter()
            .filter(|k| k.league == league && k.cup == cup)
            .map(|k| (k.round, k.result))
            .collect()
    }
}
