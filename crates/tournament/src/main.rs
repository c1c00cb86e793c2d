//! Tournament CLI
//!
//! Play league seasons, report standings distortion and time seasons.

use anyhow::{bail, Context, Result};
use league_core::SkillStyle;
use std::env;
use std::path::Path;
use tournament::{
    bench_season, bench_team_counts, max_swiss_rounds, run_season, SeasonFormat, SeasonResults,
    SimulationConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("League Season Simulator");
    println!();
    println!("Usage:");
    println!("  tournament season [config.toml]");
    println!("  tournament bench-season <iterations> <teams> [rounds]");
    println!("  tournament bench-matches <iterations> [max_teams] [--random]");
    println!();
    println!("Season formats (config `format`):");
    println!("  swiss, simultaneous, random, random_then_swiss, round_robin");
    println!();
    println!("Logging is controlled by LEAGUE_LOG (default: info).");
    println!();
    println!("Examples:");
    println!("  tournament season league.toml");
    println!("  tournament bench-season 100 16 7");
    println!("  tournament bench-matches 20 24 --random");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LEAGUE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_arg<T>(args: &[String], index: usize, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.get(index)
        .map(|raw| {
            raw.parse()
                .with_context(|| format!("invalid {}: {:?}", name, raw))
        })
        .transpose()
}

fn run_season_command(args: &[String]) -> Result<()> {
    let config = match args.first() {
        Some(path) => SimulationConfig::load(Path::new(path))
            .with_context(|| format!("loading config {}", path))?,
        None => SimulationConfig::default(),
    };

    info!(
        teams = config.teams,
        rounds = config.round_count(),
        format = ?config.format,
        "starting season"
    );
    let mut division = config.build_division()?;
    let rounds = run_season(&mut division, &config.plan())?;

    let results_path = config.results_path.clone();
    let results = SeasonResults::from_season(config, &division, rounds)?;
    results.print_report();

    if let Some(path) = results_path {
        results
            .save(&path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!("results written to {}", path.display());
    }
    Ok(())
}

fn run_bench_season(args: &[String]) -> Result<()> {
    let Some(iterations) = parse_arg::<usize>(args, 0, "iterations")? else {
        bail!("bench-season requires an iteration count and a team count");
    };
    let Some(teams) = parse_arg::<usize>(args, 1, "team count")? else {
        bail!("bench-season requires a team count");
    };
    let rounds = parse_arg::<u32>(args, 2, "round count")?.unwrap_or_else(|| max_swiss_rounds(teams));

    println!("=== Benchmark: {} seasons, {} teams, {} rounds ===", iterations, teams, rounds);
    let stats = bench_season(iterations, teams, rounds, SkillStyle::TrueRandom)?;
    println!("{}", stats);
    Ok(())
}

fn run_bench_matches(args: &[String]) -> Result<()> {
    let random = args.iter().any(|a| a == "--random");
    let positional: Vec<String> = args.iter().filter(|a| *a != "--random").cloned().collect();

    let Some(iterations) = parse_arg::<usize>(&positional, 0, "iterations")? else {
        bail!("bench-matches requires an iteration count");
    };
    let max_teams = parse_arg::<usize>(&positional, 1, "max team count")?.unwrap_or(20);
    let format = if random {
        SeasonFormat::Random
    } else {
        SeasonFormat::Swiss
    };

    println!("=== Benchmark: {:?} seasons up to {} teams ===", format, max_teams);
    for timing in bench_team_counts(iterations, max_teams, SkillStyle::TrueRandom, format)? {
        println!(
            "{} teams and {} matches took {:.0} milliseconds",
            timing.teams, timing.rounds, timing.total_ms
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "season" => run_season_command(&args[2..]),
        "bench-season" => run_bench_season(&args[2..]),
        "bench-matches" => run_bench_matches(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    }
}
