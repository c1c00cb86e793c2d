//! Standings order: bye last, then match points, then Median Buchholz

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::team::{Team, TeamId};

/// Median Buchholz score: the match points of every opponent faced, minus the
/// single highest and single lowest. A team that has faced nobody scores 0.
pub fn median_buchholz(team: &Team, points: &HashMap<TeamId, u32>) -> i64 {
    let opponent_points: Vec<i64> = team
        .teams_faced()
        .iter()
        .map(|id| points.get(id).copied().unwrap_or(0) as i64)
        .collect();

    let (Some(max), Some(min)) = (
        opponent_points.iter().max().copied(),
        opponent_points.iter().min().copied(),
    ) else {
        return 0;
    };

    opponent_points.iter().sum::<i64>() - max - min
}

/// Compare two teams by standing. `Greater` means `a` ranks above `b`.
///
/// `points` maps every team id in the division to its match points.
pub fn compare_standings(a: &Team, b: &Team, points: &HashMap<TeamId, u32>) -> Ordering {
    match (a.is_bye(), b.is_bye()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    a.match_points
        .cmp(&b.match_points)
        .then_with(|| median_buchholz(a, points).cmp(&median_buchholz(b, points)))
}

/// Sort teams best first. The sort is stable, so teams tied on points and
/// Median Buchholz keep their previous relative order.
pub fn sort_standings(teams: &mut [Team]) {
    let points: HashMap<TeamId, u32> = teams.iter().map(|t| (t.id(), t.match_points)).collect();
    teams.sort_by(|a, b| compare_standings(b, a, &points));
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
