//! Season results storage and reporting

use league_core::{Division, Round, TeamId};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::SimulationConfig;
use crate::distortions::{mean_distortion, point_distortion, rank_distortions};
use crate::error::{Result, TournamentError};

/// Complete results of one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonResults {
    /// Configuration used
    pub config: SimulationConfig,
    /// Every round's pairings, in play order
    pub rounds: Vec<Round>,
    /// Final standings, best first
    pub standings: Vec<StandingEntry>,
    /// Per standings position, distance from the skill rank
    pub rank_distortions: Vec<usize>,
    pub mean_distortion: f64,
    /// Mean gap between actual and expected match points
    pub point_distortion: f64,
}

/// One row of the final standings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub id: TeamId,
    pub name: String,
    pub skill: f64,
    pub wins: u32,
    pub losses: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub match_points: u32,
    /// Teams faced, by id
    pub opponents: Vec<TeamId>,
}

impl SeasonResults {
    /// Capture a finished season.
    pub fn from_season(
        config: SimulationConfig,
        division: &Division,
        rounds: Vec<Round>,
    ) -> Result<Self> {
        let standings = division
            .teams()
            .iter()
            .map(|team| {
                let mut opponents: Vec<TeamId> = team.teams_faced().iter().copied().collect();
                opponents.sort_unstable();
                StandingEntry {
                    id: team.id(),
                    name: team.name().to_string(),
                    skill: team.skill(),
                    wins: team.wins,
                    losses: team.losses,
                    rounds_won: team.rounds_won,
                    rounds_lost: team.rounds_lost,
                    match_points: team.match_points,
                    opponents,
                }
            })
            .collect();

        let distortions = rank_distortions(division);
        Ok(Self {
            config,
            point_distortion: point_distortion(division, rounds.len())?,
            mean_distortion: mean_distortion(&distortions),
            rank_distortions: distortions,
            rounds,
            standings,
        })
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| TournamentError::io(path, e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Season: {} ({:?}) ===\n\n",
            self.config.division_name, self.config.format
        ));
        report.push_str(&format!(
            "Teams: {}, Rounds: {}\n\n",
            self.standings.len(),
            self.rounds.len()
        ));

        report.push_str(&format!(
            "{:>3} {:<20} {:>7} {:>3}-{:<3} {:>4}-{:<4} {:>4} {:>4}\n",
            "#", "Team", "Skill", "W", "L", "RW", "RL", "MP", "Dist"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for (position, (entry, distortion)) in
            self.standings.iter().zip(&self.rank_distortions).enumerate()
        {
            report.push_str(&format!(
                "{:>3} {:<20} {:>7.3} {:>3}-{:<3} {:>4}-{:<4} {:>4} {:>4}\n",
                position + 1,
                entry.name,
                entry.skill,
                entry.wins,
                entry.losses,
                entry.rounds_won,
                entry.rounds_lost,
                entry.match_points,
                distortion
            ));
        }

        report.push_str(&format!(
            "\nMean rank distortion: {:.3}\nPoint distortion: {:.3}\n",
            self.mean_distortion, self.point_distortion
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
