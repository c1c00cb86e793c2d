//! Division: the teams of one season, their standings order and the season's
//! random source.
//!
//! The team list is kept in standings order, best first, apart from the
//! moments a caller shuffles it for a random-pairing round. When the number of
//! real teams is odd, exactly one bye team pads the list and always sits last.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::trace;

use crate::error::{LeagueError, Result};
use crate::match_engine::{self, GameMode, MATCH_POINTS_TOTAL, MatchOutcome};
use crate::skill::SkillStyle;
use crate::standings;
use crate::team::{Team, TeamId};

/// How much a season run reports about itself. Does not affect results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    #[default]
    None,
    /// Round headers and standings
    Minimal,
    /// Plus each round's pairings
    Detailed,
    /// Plus every match result
    Full,
}

/// A group of teams that play each other over one season.
#[derive(Debug, Clone)]
pub struct Division {
    name: String,
    teams: Vec<Team>,
    rng: StdRng,
    verbosity: Verbosity,
}

impl Division {
    /// Generate `team_count` teams with skills drawn by `style`.
    ///
    /// Teams are named `Team 0`, `Team 1`, ... and shuffled; a bye team is
    /// appended when the count is odd. `seed` makes the season reproducible.
    pub fn generate(
        name: impl Into<String>,
        team_count: usize,
        style: SkillStyle,
        seed: Option<u64>,
    ) -> Result<Self> {
        if team_count < 2 {
            return Err(LeagueError::Argument(format!(
                "a division needs at least 2 teams, got {}",
                team_count
            )));
        }

        let mut rng = seeded_rng(seed);
        let teams = style
            .generate(team_count, &mut rng)
            .into_iter()
            .enumerate()
            .map(|(i, skill)| Team::new(TeamId(i as u32), format!("Team {}", i), skill))
            .collect();

        let mut division = Self::assemble(name.into(), teams, rng)?;
        division.shuffle();
        Ok(division)
    }

    /// Build a division from caller-supplied teams, kept in the given order.
    ///
    /// Ids must be unique and at most one bye may be supplied; it is moved to
    /// the end. A bye is added when the number of real teams is odd.
    pub fn from_teams(name: impl Into<String>, teams: Vec<Team>, seed: Option<u64>) -> Result<Self> {
        Self::assemble(name.into(), teams, seeded_rng(seed))
    }

    fn assemble(name: String, mut teams: Vec<Team>, rng: StdRng) -> Result<Self> {
        let mut ids = HashSet::with_capacity(teams.len() + 1);
        for team in &teams {
            if !ids.insert(team.id()) {
                return Err(LeagueError::Argument(format!(
                    "team id {} is used more than once",
                    team.id()
                )));
            }
        }

        let byes = teams.iter().filter(|t| t.is_bye()).count();
        if byes > 1 {
            return Err(LeagueError::Argument(format!(
                "a division holds at most one bye team, got {}",
                byes
            )));
        }
        if let Some(index) = teams.iter().position(Team::is_bye) {
            let bye = teams.remove(index);
            teams.push(bye);
        }

        let real_teams = teams.len() - byes;
        if real_teams % 2 == 1 && byes == 0 {
            let next_id = teams.iter().map(|t| t.id().0 + 1).max().unwrap_or(0);
            teams.push(Team::bye(TeamId(next_id)));
        } else if real_teams % 2 == 0 && byes == 1 {
            return Err(LeagueError::Argument(
                "a bye team is only allowed with an odd number of teams".to_string(),
            ));
        }

        let division = Self {
            name,
            teams,
            rng,
            verbosity: Verbosity::None,
        };
        division.check_invariants()?;
        Ok(division)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Teams in current standings order, best first.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Team ids in current standings order.
    pub fn team_ids(&self) -> Vec<TeamId> {
        self.teams.iter().map(Team::id).collect()
    }

    /// Number of teams, including the bye when present.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == id)
    }

    pub fn bye(&self) -> Option<&Team> {
        self.teams.iter().find(|t| t.is_bye())
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn index_of(&self, id: TeamId) -> Result<usize> {
        self.teams
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| LeagueError::Argument(format!("team {} is not in {}", id, self.name)))
    }

    fn distinct_pair(&self, a: TeamId, b: TeamId) -> Result<(usize, usize)> {
        if a == b {
            return Err(LeagueError::Argument(format!(
                "team {} cannot be paired with itself",
                a
            )));
        }
        Ok((self.index_of(a)?, self.index_of(b)?))
    }

    /// Play one match and fold the outcome into both teams.
    ///
    /// Returns the `(home, away)` outcomes.
    pub fn play_match(
        &mut self,
        home: TeamId,
        away: TeamId,
        mode: GameMode,
    ) -> Result<(MatchOutcome, MatchOutcome)> {
        let (h, a) = self.distinct_pair(home, away)?;
        let (home_outcome, away_outcome) = match_engine::play_match(
            self.teams[h].contestant(),
            self.teams[a].contestant(),
            mode,
            &mut self.rng,
        )?;

        self.teams[h].add_result(&home_outcome);
        self.teams[a].add_result(&away_outcome);
        trace!(
            home = self.teams[h].name(),
            away = self.teams[a].name(),
            home_rounds = home_outcome.rounds_won,
            away_rounds = away_outcome.rounds_won,
            "match played"
        );
        Ok((home_outcome, away_outcome))
    }

    /// Record that two teams have now faced each other, on both sides.
    pub fn record_faced(&mut self, a: TeamId, b: TeamId) -> Result<&mut Self> {
        let (i, j) = self.distinct_pair(a, b)?;
        self.teams[i].add_faced(b);
        self.teams[j].add_faced(a);
        Ok(self)
    }

    /// Restore standings order. Fully tied teams keep their relative order.
    pub fn sort(&mut self) {
        standings::sort_standings(&mut self.teams);
    }

    /// Randomise the order of the real teams; the bye stays last.
    pub fn shuffle(&mut self) {
        let bye_index = self.teams.iter().position(Team::is_bye);
        let bye = bye_index.map(|index| self.teams.remove(index));
        self.teams.shuffle(&mut self.rng);
        if let Some(bye) = bye {
            self.teams.push(bye);
        }
    }

    /// For each team in standings order, its position when the division is
    /// ordered by descending skill.
    pub fn skill_ranks(&self) -> Vec<usize> {
        let mut by_skill: Vec<&Team> = self.teams.iter().collect();
        by_skill.sort_by(|a, b| b.skill().total_cmp(&a.skill()));
        let rank_of: HashMap<TeamId, usize> = by_skill
            .iter()
            .enumerate()
            .map(|(rank, team)| (team.id(), rank))
            .collect();

        self.teams.iter().map(|t| rank_of[&t.id()]).collect()
    }

    /// Match points each team would collect in a round robin without
    /// randomness, summed over every other team in the division.
    ///
    /// Equal-skill pairs have no expected winner and split the 9 points.
    pub fn expected_match_points(&self) -> Result<HashMap<TeamId, f64>> {
        let mut expected = HashMap::with_capacity(self.teams.len());
        for team in &self.teams {
            let mut total = 0.0;
            for other in self.teams.iter().filter(|o| o.id() != team.id()) {
                total += expected_against(team, other)?;
            }
            expected.insert(team.id(), total);
        }
        Ok(expected)
    }

    /// [`Division::expected_match_points`] prorated from a full round robin
    /// to a season of `match_count` matches.
    pub fn normalized_expected_match_points(
        &self,
        match_count: usize,
    ) -> Result<HashMap<TeamId, f64>> {
        let opponents = self.teams.len().saturating_sub(1).max(1) as f64;
        Ok(self
            .expected_match_points()?
            .into_iter()
            .map(|(id, points)| (id, points / opponents * match_count as f64))
            .collect())
    }

    /// Check the structural invariants: unique ids, at most one bye which is
    /// last, and symmetric opponent history.
    pub fn check_invariants(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.teams.len());
        for team in &self.teams {
            if !ids.insert(team.id()) {
                return Err(LeagueError::Invariant(format!(
                    "team id {} appears twice",
                    team.id()
                )));
            }
        }

        let byes = self.teams.iter().filter(|t| t.is_bye()).count();
        let real_teams = self.teams.len() - byes;
        let wanted = real_teams % 2;
        if byes != wanted {
            return Err(LeagueError::Invariant(format!(
                "{} real teams need {} bye team(s), found {}",
                real_teams, wanted, byes
            )));
        }
        if byes == 1 && !self.teams.last().is_some_and(Team::is_bye) {
            return Err(LeagueError::Invariant(
                "the bye team must be ranked last".to_string(),
            ));
        }

        let by_id: HashMap<TeamId, &Team> = self.teams.iter().map(|t| (t.id(), t)).collect();
        for team in &self.teams {
            for opponent in team.teams_faced() {
                let symmetric = by_id
                    .get(opponent)
                    .is_some_and(|other| other.has_faced(team.id()));
                if !symmetric {
                    return Err(LeagueError::Invariant(format!(
                        "{} has faced {} but not the other way round",
                        team.id(),
                        opponent
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Division {} with {} teams", self.name, self.teams.len())?;
        writeln!(f, "Name,Skill,W,L,RW,RL,MP,Teams Faced")?;
        for team in &self.teams {
            let mut faced: Vec<&str> = team
                .teams_faced()
                .iter()
                .filter_map(|id| self.team(*id).map(Team::name))
                .collect();
            faced.sort_unstable();
            writeln!(f, "{},[{}]", team, faced.join(", "))?;
        }
        Ok(())
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn expected_against(team: &Team, other: &Team) -> Result<f64> {
    if team.is_bye() {
        return Ok(0.0);
    }
    if other.is_bye() {
        return Ok(MATCH_POINTS_TOTAL as f64);
    }
    match match_engine::expected_match_points(team.skill(), other.skill()) {
        Ok((points, _)) => Ok(points),
        Err(LeagueError::Domain { .. }) => Ok(MATCH_POINTS_TOTAL as f64 / 2.0),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[path = "division_tests.rs"]
mod division_tests;
