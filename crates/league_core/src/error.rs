//! Error taxonomy shared by every league operation

use thiserror::Error;

/// Why a pairing search gave up.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// Every branch of the search tree was tried.
    #[error("search tree exhausted")]
    Exhausted,
    /// The caller's node budget ran out before a pairing was found.
    #[error("node budget exhausted after {nodes} nodes")]
    BudgetExhausted { nodes: u64 },
}

/// Errors raised by the league core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeagueError {
    /// Invalid input supplied by the caller.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// No round could be produced for the current opponent history.
    #[error("No valid pairing exists for the current opponent history ({teams} teams, {reason})")]
    Scheduling { teams: usize, reason: SearchFailure },

    /// Expected match points requested for two exactly equal skills.
    #[error("Cannot compute expected match points for equal skills ({skill})")]
    Domain { skill: f64 },

    /// A structural invariant of the division was broken.
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, LeagueError>;
