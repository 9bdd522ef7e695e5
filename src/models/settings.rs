//! Event settings: court layout and schedule timings.

use crate::models::error::CupError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// How many courts are available; selects the fixed schedule tables.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtMode {
    #[default]
    FourCourt,
    ThreeCourt,
}

/// Start time and slot lengths (minutes).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default)]
    pub court_mode: CourtMode,
    #[serde(default = "default_start")]
    pub start: NaiveTime,
    #[serde(default = "default_league_minutes")]
    pub league_minutes: u32,
    #[serde(default = "default_tournament_minutes")]
    pub tournament_minutes: u32,
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
}

fn default_start() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 15, 0).unwrap_or_default()
}

fn default_league_minutes() -> u32 {
    7
}

fn default_tournament_minutes() -> u32 {
    10
}

fn default_interval_minutes() -> u32 {
    15
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            court_mode: CourtMode::default(),
            start: default_start(),
            league_minutes: default_league_minutes(),
            tournament_minutes: default_tournament_minutes(),
            interval_minutes: default_interval_minutes(),
        }
    }
}

fn check_range(name: &'static str, value: u32, min: u32, max: u32) -> Result<(), CupError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CupError::SettingOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

impl ScheduleSettings {
    /// Match lengths 1..=30 minutes, break between phases 0..=60 minutes.
    pub fn validate(&self) -> Result<(), CupError> {
        check_range("league_minutes", self.league_minutes, 1, 30)?;
        check_range("tournament_minutes", self.tournament_minutes, 1, 30)?;
        check_range("interval_minutes", self.interval_minutes, 0, 60)
    }
}
