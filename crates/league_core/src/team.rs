//! Team: accumulated season state and skill rating

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::match_engine::{Contestant, MatchOutcome};

/// Skill carried by the bye team. Never used in a match.
pub const BYE_SKILL: f64 = -999_999.0;

/// Display name of the bye team.
pub const BYE_NAME: &str = "Bye Week";

/// Stable identity of a team within a division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant in a division.
///
/// Opponents are stored by [`TeamId`], so two teams with the same name and
/// skill are still distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    skill: f64,
    is_bye: bool,
    pub wins: u32,
    pub losses: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub match_points: u32,
    teams_faced: HashSet<TeamId>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, skill: f64) -> Self {
        Self {
            id,
            name: name.into(),
            skill,
            is_bye: false,
            wins: 0,
            losses: 0,
            rounds_won: 0,
            rounds_lost: 0,
            match_points: 0,
            teams_faced: HashSet::new(),
        }
    }

    /// The placeholder opponent used when a division has an odd team count.
    pub fn bye(id: TeamId) -> Self {
        Self {
            is_bye: true,
            ..Self::new(id, BYE_NAME, BYE_SKILL)
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill(&self) -> f64 {
        self.skill
    }

    pub fn is_bye(&self) -> bool {
        self.is_bye
    }

    /// How this team enters the match engine.
    pub fn contestant(&self) -> Contestant {
        if self.is_bye {
            Contestant::Bye
        } else {
            Contestant::Skilled(self.skill)
        }
    }

    /// Fold one match outcome into the season totals.
    pub fn add_result(&mut self, outcome: &MatchOutcome) {
        if outcome.won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.rounds_won += outcome.rounds_won;
        self.rounds_lost += outcome.rounds_lost;
        self.match_points += outcome.match_points;
    }

    pub fn has_faced(&self, other: TeamId) -> bool {
        self.teams_faced.contains(&other)
    }

    pub fn teams_faced(&self) -> &HashSet<TeamId> {
        &self.teams_faced
    }

    /// Record one side of a pairing. [`crate::Division::record_faced`] keeps
    /// both sides in step.
    pub(crate) fn add_faced(&mut self, other: TeamId) {
        self.teams_faced.insert(other);
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{:.3},{},{},{},{},{}",
            self.name,
            self.skill,
            self.wins,
            self.losses,
            self.rounds_won,
            self.rounds_lost,
            self.match_points
        )
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
