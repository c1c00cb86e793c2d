//! Season drivers: play a division through a whole season
//!
//! Every driver returns the rounds in the order they were played. What gets
//! logged along the way follows the division's [`Verbosity`].

use league_core::{
    schedule_round, schedule_simultaneous_rounds, Division, GameMode, LeagueError, Pairing,
    Result, Round, Verbosity,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How the rounds of a season are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonFormat {
    /// Swiss pairing on the current standings every round
    #[default]
    Swiss,
    /// Swiss pairing, several rounds fixed at once each week
    Simultaneous,
    /// Random order each round, repeats still avoided
    Random,
    /// A share of random rounds first, then Swiss
    RandomThenSwiss,
    /// Everyone plays everyone once
    RoundRobin,
}

/// Parameters for [`run_season`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonPlan {
    pub format: SeasonFormat,
    /// Rounds to play (ignored by round robin)
    pub rounds: u32,
    /// Rounds fixed per week in the simultaneous format
    pub matches_per_week: u32,
    /// Share of random rounds in the random-then-Swiss format
    pub random_share: f64,
}

impl Default for SeasonPlan {
    fn default() -> Self {
        Self {
            format: SeasonFormat::Swiss,
            rounds: 1,
            matches_per_week: 2,
            random_share: 0.5,
        }
    }
}

/// Play the whole season described by `plan`.
pub fn run_season(division: &mut Division, plan: &SeasonPlan) -> Result<Vec<Round>> {
    match plan.format {
        SeasonFormat::Swiss => run_swiss(division, plan.rounds),
        SeasonFormat::Simultaneous => {
            if plan.matches_per_week == 0 {
                return Err(LeagueError::Argument(
                    "matches per week must be at least 1".to_string(),
                ));
            }
            let leftover = plan.rounds % plan.matches_per_week;
            if leftover != 0 {
                warn!(
                    rounds = plan.rounds,
                    matches_per_week = plan.matches_per_week,
                    "dropping {} rounds that do not fill a week",
                    leftover
                );
            }
            run_simultaneous_swiss(
                division,
                plan.rounds / plan.matches_per_week,
                plan.matches_per_week,
            )
        }
        SeasonFormat::Random => run_random(division, plan.rounds),
        SeasonFormat::RandomThenSwiss => {
            run_random_then_swiss(division, plan.rounds, plan.random_share)
        }
        SeasonFormat::RoundRobin => run_round_robin(division),
    }
}

/// Swiss season: pair on the standings, play, re-sort, every round.
pub fn run_swiss(division: &mut Division, rounds: u32) -> Result<Vec<Round>> {
    let mut played = Vec::with_capacity(rounds as usize);
    for round in 1..=rounds {
        played.push(play_swiss_round(division, round)?);
    }
    Ok(played)
}

/// Swiss season where `matches_per_week` rounds are fixed up front each week
/// and all played before the standings are re-sorted.
///
/// Every match of a week is played in that week's game mode.
pub fn run_simultaneous_swiss(
    division: &mut Division,
    weeks: u32,
    matches_per_week: u32,
) -> Result<Vec<Round>> {
    if matches_per_week == 0 {
        return Err(LeagueError::Argument(
            "matches per week must be at least 1".to_string(),
        ));
    }

    let mut played = Vec::with_capacity((weeks * matches_per_week) as usize);
    for week in 1..=weeks {
        log_header(division, "Week", week);
        let rounds = schedule_simultaneous_rounds(division, matches_per_week as usize)?;
        let mode = GameMode::for_round(week);
        for round in rounds {
            play_pairings(division, &round, mode)?;
            played.push(round);
        }
        division.sort();
        log_standings(division);
    }
    Ok(played)
}

/// Season where each round is paired from a shuffled order. The search
/// still keeps teams from meeting twice.
pub fn run_random(division: &mut Division, rounds: u32) -> Result<Vec<Round>> {
    let mut played = Vec::with_capacity(rounds as usize);
    for round in 1..=rounds {
        played.push(play_random_round(division, round)?);
    }
    Ok(played)
}

/// `ceil(rounds * random_share)` random rounds, then Swiss for the rest.
pub fn run_random_then_swiss(
    division: &mut Division,
    rounds: u32,
    random_share: f64,
) -> Result<Vec<Round>> {
    if !(0.0..=1.0).contains(&random_share) {
        return Err(LeagueError::Argument(format!(
            "random share must be within [0, 1], got {}",
            random_share
        )));
    }

    let random_rounds = ((rounds as f64 * random_share).ceil() as u32).min(rounds);
    let mut played = Vec::with_capacity(rounds as usize);
    for round in 1..=rounds {
        let pairings = if round <= random_rounds {
            play_random_round(division, round)?
        } else {
            play_swiss_round(division, round)?
        };
        played.push(pairings);
    }
    Ok(played)
}

/// Single round robin by the circle method over the current order: the
/// first team stays put and the others rotate one seat each round.
pub fn run_round_robin(division: &mut Division) -> Result<Vec<Round>> {
    let ids = division.team_ids();
    let n = ids.len();
    let Some((&fixed, others)) = ids.split_first() else {
        return Ok(Vec::new());
    };
    let mut rotating = others.to_vec();

    let mut played = Vec::with_capacity(n.saturating_sub(1));
    for round in 1..n as u32 {
        log_header(division, "Round", round);
        let mut seats = Vec::with_capacity(n);
        seats.push(fixed);
        seats.extend_from_slice(&rotating);

        let pairings: Round = (0..n / 2)
            .map(|i| Pairing::new(seats[i], seats[n - 1 - i]))
            .collect();
        play_pairings(division, &pairings, GameMode::for_round(round))?;
        record_pairings(division, &pairings)?;
        played.push(pairings);

        rotating.rotate_right(1);
    }

    division.sort();
    log_standings(division);
    Ok(played)
}

fn play_swiss_round(division: &mut Division, round: u32) -> Result<Round> {
    log_header(division, "Round", round);
    let pairings = schedule_round(division)?;
    play_pairings(division, &pairings, GameMode::for_round(round))?;
    record_pairings(division, &pairings)?;
    division.sort();
    log_standings(division);
    Ok(pairings)
}

fn play_random_round(division: &mut Division, round: u32) -> Result<Round> {
    log_header(division, "Random round", round);
    division.shuffle();
    let pairings = schedule_round(division)?;
    play_pairings(division, &pairings, GameMode::for_round(round))?;
    record_pairings(division, &pairings)?;
    division.sort();
    log_standings(division);
    Ok(pairings)
}

fn play_pairings(division: &mut Division, pairings: &[Pairing], mode: GameMode) -> Result<()> {
    let verbosity = division.verbosity();
    if verbosity >= Verbosity::Detailed {
        let names: Vec<String> = pairings
            .iter()
            .map(|p| format!("{} v {}", team_name(division, p.home), team_name(division, p.away)))
            .collect();
        info!(mode = ?mode, "pairings: {}", names.join(", "));
    }

    for pairing in pairings {
        let (home, away) = division.play_match(pairing.home, pairing.away, mode)?;
        if verbosity >= Verbosity::Full {
            info!(
                "{} {}-{} {} ({}-{} MP)",
                team_name(division, pairing.home),
                home.rounds_won,
                away.rounds_won,
                team_name(division, pairing.away),
                home.match_points,
                away.match_points
            );
        }
    }
    Ok(())
}

fn record_pairings(division: &mut Division, pairings: &[Pairing]) -> Result<()> {
    for pairing in pairings {
        division.record_faced(pairing.home, pairing.away)?;
    }
    Ok(())
}

fn team_name(division: &Division, id: league_core::TeamId) -> String {
    division
        .team(id)
        .map(|t| t.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn log_header(division: &Division, label: &str, number: u32) {
    if division.verbosity() >= Verbosity::Minimal {
        info!("=== {} {} ===", label, number);
    }
}

fn log_standings(division: &Division) {
    if division.verbosity() >= Verbosity::Minimal {
        info!("\n{}", division);
    }
}

#[cfg(test)]
#[path = "season_tests.rs"]
mod season_tests;
