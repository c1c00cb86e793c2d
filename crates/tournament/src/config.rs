//! Season configuration loaded from TOML

use league_core::{Division, SkillStyle, Verbosity};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::distortions::max_swiss_rounds;
use crate::error::{Result, TournamentError};
use crate::season::{SeasonFormat, SeasonPlan};

/// Everything needed to generate a division and play one season.
///
/// Every field has a default, so an empty file is a valid config:
///
/// ```toml
/// division_name = "Main"
/// teams = 16
/// skill_style = "true_random"
/// seed = 42
/// format = "random_then_swiss"
/// rounds = 7
/// random_share = 0.3
/// verbosity = "detailed"
/// results_path = "season.json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub division_name: String,
    pub teams: usize,
    pub skill_style: SkillStyle,
    /// Seed for the division's random source (None = from entropy)
    pub seed: Option<u64>,
    pub format: SeasonFormat,
    /// Rounds to play (None = the longest Swiss season for the team count)
    pub rounds: Option<u32>,
    /// Rounds fixed per week in the simultaneous format. An explicit
    /// `rounds` must be a whole number of weeks.
    pub matches_per_week: u32,
    /// Share of random rounds in the random-then-Swiss format
    pub random_share: f64,
    pub verbosity: Verbosity,
    /// Where to write the season results as JSON
    pub results_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            division_name: "Main".to_string(),
            teams: 16,
            skill_style: SkillStyle::Uniform,
            seed: None,
            format: SeasonFormat::Swiss,
            rounds: None,
            matches_per_week: 2,
            random_share: 0.5,
            verbosity: Verbosity::Minimal,
            results_path: None,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| TournamentError::io(path, e))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.teams < 2 {
            return Err(TournamentError::Config(format!(
                "a season needs at least 2 teams, got {}",
                self.teams
            )));
        }
        if self.matches_per_week == 0 {
            return Err(TournamentError::Config(
                "matches_per_week must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.random_share) {
            return Err(TournamentError::Config(format!(
                "random_share must be within [0, 1], got {}",
                self.random_share
            )));
        }
        if self.format == SeasonFormat::Simultaneous && self.round_count() < self.matches_per_week {
            return Err(TournamentError::Config(format!(
                "{} rounds do not fill one week of {} matches",
                self.round_count(),
                self.matches_per_week
            )));
        }
        if let (SeasonFormat::Simultaneous, Some(rounds)) = (self.format, self.rounds) {
            if rounds % self.matches_per_week != 0 {
                return Err(TournamentError::Config(format!(
                    "{} rounds do not split into whole weeks of {} matches",
                    rounds, self.matches_per_week
                )));
            }
        }
        Ok(())
    }

    /// Configured rounds, or [`max_swiss_rounds`] for the team count.
    pub fn round_count(&self) -> u32 {
        self.rounds.unwrap_or_else(|| max_swiss_rounds(self.teams))
    }

    pub fn plan(&self) -> SeasonPlan {
        SeasonPlan {
            format: self.format,
            rounds: self.round_count(),
            matches_per_week: self.matches_per_week,
            random_share: self.random_share,
        }
    }

    /// Generate the division this config describes.
    pub fn build_division(&self) -> Result<Division> {
        let mut division = Division::generate(
            self.division_name.clone(),
            self.teams,
            self.skill_style,
            self.seed,
        )?;
        division.set_verbosity(self.verbosity);
        Ok(division)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
