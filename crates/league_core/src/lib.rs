//! League core: teams, match engine, divisions and Swiss pairing
//!
//! This crate holds the season logic with no I/O:
//! - [`match_engine`] resolves one contest between two skill ratings
//! - [`Division`] owns the teams, the standings order and the random source
//! - [`swiss`] produces each round's pairings by backtracking search
//!
//! Season drivers, measurement and the CLI live in the `tournament` crate.

pub mod division;
pub mod error;
pub mod match_engine;
pub mod skill;
pub mod standings;
pub mod swiss;
pub mod team;

pub use division::*;
pub use error::*;
pub use match_engine::{
    closest_loser_rounds, expected_match_points, match_points, play_match, win_probability,
    Contestant, GameMode, MatchOutcome, MATCH_POINTS_TOTAL, ODDS_SCALING_FACTOR,
};
pub use skill::*;
pub use standings::{compare_standings, median_buchholz};
pub use swiss::*;
pub use team::*;
