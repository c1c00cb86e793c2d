//! Wall-clock timing of whole seasons

use league_core::{Division, SkillStyle};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::distortions::max_swiss_rounds;
use crate::error::Result;
use crate::season::{run_season, SeasonFormat, SeasonPlan};

/// Smallest team count timed by [`bench_team_counts`].
pub const BENCH_MIN_TEAMS: usize = 10;

/// Summary of a set of timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStats {
    pub samples: usize,
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
    /// Population standard deviation
    pub stdev_ms: f64,
    pub median_ms: f64,
}

impl BenchmarkStats {
    /// Summarise `samples`; every field is 0 when there are none.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                samples: 0,
                min_ms: 0.0,
                max_ms: 0.0,
                mean_ms: 0.0,
                stdev_ms: 0.0,
                median_ms: 0.0,
            };
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let variance = sorted.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        Self {
            samples: n,
            min_ms: sorted[0],
            max_ms: sorted[n - 1],
            mean_ms: mean,
            stdev_ms: variance.sqrt(),
            median_ms: median,
        }
    }
}

impl std::fmt::Display for BenchmarkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "min: {:.3} max: {:.3} mean: {:.3} stdev: {:.3} median: {:.3}",
            self.min_ms, self.max_ms, self.mean_ms, self.stdev_ms, self.median_ms
        )
    }
}

/// Total time for one team count in [`bench_team_counts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamCountTiming {
    pub teams: usize,
    pub rounds: u32,
    pub total_ms: f64,
}

/// Time `iterations` fresh Swiss seasons of `teams` teams and `rounds` rounds.
pub fn bench_season(
    iterations: usize,
    teams: usize,
    rounds: u32,
    style: SkillStyle,
) -> Result<BenchmarkStats> {
    let plan = SeasonPlan {
        format: SeasonFormat::Swiss,
        rounds,
        ..SeasonPlan::default()
    };

    let mut samples = Vec::with_capacity(iterations);
    for iteration in 0..iterations {
        let start = Instant::now();
        let mut division = Division::generate("Main", teams, style, None)?;
        run_season(&mut division, &plan)?;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        debug!(iteration, elapsed_ms = elapsed, "season timed");
        samples.push(elapsed);
    }

    let stats = BenchmarkStats::from_samples(&samples);
    info!(teams, rounds, "{}", stats);
    Ok(stats)
}

/// Time `iterations` seasons of [`max_swiss_rounds`] rounds for every even
/// team count from [`BENCH_MIN_TEAMS`] up to `max_teams`.
///
/// `format` picks the pairing: Swiss or random rounds.
pub fn bench_team_counts(
    iterations: usize,
    max_teams: usize,
    style: SkillStyle,
    format: SeasonFormat,
) -> Result<Vec<TeamCountTiming>> {
    let mut timings = Vec::new();
    for teams in (BENCH_MIN_TEAMS..=max_teams).step_by(2) {
        let rounds = max_swiss_rounds(teams);
        let plan = SeasonPlan {
            format,
            rounds,
            ..SeasonPlan::default()
        };

        let start = Instant::now();
        for _ in 0..iterations {
            let mut division = Division::generate("Main", teams, style, None)?;
            run_season(&mut division, &plan)?;
        }
        let total_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!("{} teams and {} matches took {:.0} milliseconds", teams, rounds, total_ms);
        timings.push(TeamCountTiming {
            teams,
            rounds,
            total_ms,
        });
    }
    Ok(timings)
}

#[cfg(test)]
#[path = "benchmark_tests.rs"]
mod benchmark_tests;
