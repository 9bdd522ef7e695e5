//! Leagues, team codes, and the per-league roster of display names.

use crate::models::error::CupError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the two parallel leagues.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum League {
    Regular,
    Mixed,
}

impl League {
    pub const ALL: [League; 2] = [League::Regular, League::Mixed];

    pub fn as_str(self) -> &'static str {
        match self {
            League::Regular => "regular",
            League::Mixed => "mixed",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = CupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(League::Regular),
            "mixed" => Ok(League::Mixed),
            other => Err(CupError::UnknownLeague(other.to_string())),
        }
    }
}

/// Fixed team symbol. Declaration order is the intrinsic tie-break order (A < B < ... < L).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum TeamCode {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
}

impl TeamCode {
    pub const ALL: [TeamCode; 12] = [
        TeamCode::A,
        TeamCode::B,
        TeamCode::C,
        TeamCode::D,
        TeamCode::E,
        TeamCode::F,
        TeamCode::G,
        TeamCode::H,
        TeamCode::I,
        TeamCode::J,
        TeamCode::K,
        TeamCode::L,
    ];

    /// Position in the roster, 0 for A through 11 for L.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for TeamCode {
    type Err = CupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => TeamCode::ALL
                .iter()
                .copied()
                .find(|code| code.as_char() == c)
                .ok_or_else(|| CupError::UnknownTeam(s.to_string())),
            _ => Err(CupError::UnknownTeam(s.to_string())),
        }
    }
}

/// A team: identity is the code, the name is cosmetic.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub code: TeamCode,
    pub name: String,
    pub league: League,
}

/// Display names of the 12 teams of one league.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub league: League,
    names: BTreeMap<TeamCode, String>,
}

impl Roster {
    /// Default names: "Team A".. for the regular league, "Mixed Team A".. for the mixed one.
    pub fn new(league: League) -> Self {
        let prefix = match league {
            League::Regular => "Team",
            League::Mixed => "Mixed Team",
        };
        let names = TeamCode::ALL
            .iter()
            .map(|&code| (code, format!("{prefix} {code}")))
            .collect();
        Self { league, names }
    }

    /// Display name, falling back to the bare code when no name is set.
    pub fn name(&self, code: TeamCode) -> String {
        self.names
            .get(&code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Rename a team. Names are trimmed and must not be empty.
    pub fn rename(&mut self, code: TeamCode, name: &str) -> Result<(), CupError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CupError::EmptyTeamName);
        }
        self.names.insert(code, trimmed.to_string());
        Ok(())
    }

    pub fn team(&self, code: TeamCode) -> Team {
        Team {
            code,
            name: self.name(code),
            league: self.league,
        }
    }

    pub fn teams(&self) -> Vec<Team> {
        TeamCode::ALL.iter().map(|&code| self.team(code)).collect()
    }
}
