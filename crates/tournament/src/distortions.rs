//! How far a season's standings drift from the true skill order

use league_core::{Division, Result};

/// For each standings position `i`, `|i - skill_rank(i)|`.
pub fn rank_distortions(division: &Division) -> Vec<usize> {
    division
        .skill_ranks()
        .into_iter()
        .enumerate()
        .map(|(position, rank)| position.abs_diff(rank))
        .collect()
}

/// Mean of the distortions; 0 for an empty slice.
pub fn mean_distortion(distortions: &[usize]) -> f64 {
    if distortions.is_empty() {
        return 0.0;
    }
    distortions.iter().sum::<usize>() as f64 / distortions.len() as f64
}

/// Mean distortion over the first `teams` standings positions.
pub fn top_distortion(distortions: &[usize], teams: usize) -> f64 {
    mean_distortion(&distortions[..teams.min(distortions.len())])
}

/// Mean over the real teams of `|actual - expected|` match points, where
/// expected is the round-robin expectation prorated to `match_count` matches.
pub fn point_distortion(division: &Division, match_count: usize) -> Result<f64> {
    let expected = division.normalized_expected_match_points(match_count)?;
    let gaps: Vec<f64> = division
        .teams()
        .iter()
        .filter(|t| !t.is_bye())
        .map(|t| (t.match_points as f64 - expected[&t.id()]).abs())
        .collect();

    if gaps.is_empty() {
        return Ok(0.0);
    }
    Ok(gaps.iter().sum::<f64>() / gaps.len() as f64)
}

/// Longest Swiss season the benchmark runs for `team_count` teams.
pub fn max_swiss_rounds(team_count: usize) -> u32 {
    (team_count.div_ceil(2) * 2).saturating_sub(3) as u32
}

#[cfg(test)]
#[path = "distortions_tests.rs"]
mod distortions_tests;
