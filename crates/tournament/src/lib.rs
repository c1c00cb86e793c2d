//! Season runner for league simulations
//!
//! This crate provides infrastructure for:
//! - Playing a division through a season in one of several pairing formats
//! - Measuring how far the final standings drift from true skill
//! - Timing seasons for benchmarks
//! - Saving results and reports
//!
//! # Usage
//!
//! ```bash
//! # Play a season described by a TOML config
//! cargo run -p tournament -- season league.toml
//!
//! # Time 50 Swiss seasons of 16 teams
//! cargo run -p tournament -- bench-season 50 16
//! ```

mod benchmark;
mod config;
mod distortions;
mod error;
mod results;
mod season;

pub use benchmark::*;
pub use config::*;
pub use distortions::*;
pub use error::*;
pub use results::*;
pub use season::*;
