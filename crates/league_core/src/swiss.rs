//! Swiss pairing: depth-first backtracking over the standings order
//!
//! The highest-ranked unpaired team always hosts the next match; only its
//! opponent is searched, in rank order, skipping anyone it has already faced.
//! When a branch cannot pair every remaining team the last pairing is undone
//! and the next candidate is tried. A greedy pass is not enough: pairing the
//! top teams first can strand two lower teams that have already met.
//!
//! The search never consults a random source, so identical standings and
//! history always produce the same round.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

use crate::division::Division;
use crate::error::{LeagueError, Result, SearchFailure};
use crate::team::{Team, TeamId};

/// One scheduled match. The home side only matters for game-mode
/// alternation, never for the search itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub home: TeamId,
    pub away: TeamId,
}

impl Pairing {
    pub fn new(home: TeamId, away: TeamId) -> Self {
        Self { home, away }
    }

    pub fn contains(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }
}

/// All pairings of one round, in the order they were committed.
pub type Round = Vec<Pairing>;

/// Optional bound on the pairing search.
///
/// The search itself has no notion of time; callers that need a guarantee
/// cap the number of candidate pairings tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum pairings tried before giving up (None = search the whole tree)
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    /// No bound: the search runs until it finds a round or exhausts the tree.
    pub fn unbounded() -> Self {
        Self { max_nodes: None }
    }

    /// Give up after trying `max_nodes` pairings.
    pub fn nodes(max_nodes: u64) -> Self {
        Self {
            max_nodes: Some(max_nodes),
        }
    }
}

/// Search state shared by every level of the recursion.
struct PairingSearch<F> {
    has_faced: F,
    limits: SearchLimits,
    teams: usize,
    /// Pairings committed on the current branch, as a stack
    committed: Vec<Pairing>,
    /// Candidate pairings tried so far
    nodes: u64,
}

impl<F> PairingSearch<F>
where
    F: Fn(TeamId, TeamId) -> bool,
{
    /// Pair every team of `remaining` (best ranked first) on top of the
    /// committed stack. Returns `Ok(false)` when this branch dead-ends, with
    /// the stack restored to how it was on entry.
    fn pair_from(&mut self, remaining: &[TeamId]) -> Result<bool> {
        let Some((&home, rest)) = remaining.split_first() else {
            return Ok(true);
        };
        if rest.is_empty() {
            return Err(LeagueError::Invariant(format!(
                "team {} left without an opponent",
                home
            )));
        }

        for (index, &away) in rest.iter().enumerate() {
            if (self.has_faced)(home, away) {
                continue;
            }

            self.nodes += 1;
            if let Some(max_nodes) = self.limits.max_nodes {
                if self.nodes > max_nodes {
                    return Err(LeagueError::Scheduling {
                        teams: self.teams,
                        reason: SearchFailure::BudgetExhausted { nodes: max_nodes },
                    });
                }
            }

            let next: Vec<TeamId> = rest
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, &id)| id)
                .collect();

            self.committed.push(Pairing::new(home, away));
            if self.pair_from(&next)? {
                return Ok(true);
            }
            self.committed.pop();
        }

        trace!(home = %home, depth = self.committed.len(), "no opponent completes the round");
        Ok(false)
    }
}

/// Pair every team in `order` (best ranked first) so that nobody meets an
/// opponent `has_faced` reports as already played.
///
/// # Errors
/// * [`LeagueError::Argument`] if `order` has an odd length or repeats a team
/// * [`LeagueError::Scheduling`] if no such pairing exists, or the node
///   budget in `limits` runs out first
pub fn find_pairings<F>(order: &[TeamId], has_faced: F, limits: SearchLimits) -> Result<Round>
where
    F: Fn(TeamId, TeamId) -> bool,
{
    if order.len() % 2 != 0 {
        return Err(LeagueError::Argument(format!(
            "cannot pair an odd number of teams ({})",
            order.len()
        )));
    }
    let mut seen = HashSet::with_capacity(order.len());
    if let Some(duplicate) = order.iter().find(|id| !seen.insert(**id)) {
        return Err(LeagueError::Argument(format!(
            "team {} appears twice in the pairing order",
            duplicate
        )));
    }

    let mut search = PairingSearch {
        has_faced,
        limits,
        teams: order.len(),
        committed: Vec::with_capacity(order.len() / 2),
        nodes: 0,
    };

    let found = search.pair_from(order)?;
    debug!(teams = order.len(), nodes = search.nodes, found, "pairing search finished");

    if found {
        Ok(search.committed)
    } else {
        Err(LeagueError::Scheduling {
            teams: order.len(),
            reason: SearchFailure::Exhausted,
        })
    }
}

/// Schedule one round for the division's current standings order.
pub fn schedule_round(division: &Division) -> Result<Round> {
    schedule_round_with_limits(division, SearchLimits::unbounded())
}

/// [`schedule_round`] with a bound on the search.
pub fn schedule_round_with_limits(division: &Division, limits: SearchLimits) -> Result<Round> {
    division.check_invariants()?;
    let by_id: HashMap<TeamId, &Team> = division.teams().iter().map(|t| (t.id(), t)).collect();
    let order = division.team_ids();
    find_pairings(
        &order,
        |a, b| by_id.get(&a).is_some_and(|team| team.has_faced(b)),
        limits,
    )
}

/// Schedule `count` rounds back to back without playing them or re-sorting.
///
/// Each round's opponents are recorded before the next round is searched,
/// so no pairing repeats across the batch. Used when several matches are
/// fixed at once, e.g. two matches a week.
///
/// The batch is searched on a copy; `division` only records opponents once
/// every round has been found, and is left untouched on error.
pub fn schedule_simultaneous_rounds(division: &mut Division, count: usize) -> Result<Vec<Round>> {
    let mut scratch = division.clone();
    let mut rounds = Vec::with_capacity(count);
    for _ in 0..count {
        let round = schedule_round(&scratch)?;
        for pairing in &round {
            scratch.record_faced(pairing.home, pairing.away)?;
        }
        rounds.push(round);
    }

    for pairing in rounds.iter().flatten() {
        division.record_faced(pairing.home, pairing.away)?;
    }
    Ok(rounds)
}

#[cfg(test)]
#[path = "swiss_tests.rs"]
mod swiss_tests;
