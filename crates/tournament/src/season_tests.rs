use super::*;
use league_core::{SkillStyle, Team, TeamId};
use std::collections::HashSet;

fn division(teams: usize, seed: u64) -> Division {
    Division::generate("Test", teams, SkillStyle::TrueRandom, Some(seed)).unwrap()
}

fn unordered(pairing: &Pairing) -> (TeamId, TeamId) {
    (pairing.home.min(pairing.away), pairing.home.max(pairing.away))
}

fn assert_no_repeats(rounds: &[Round]) {
    let mut seen = HashSet::new();
    for round in rounds {
        for pairing in round {
            assert!(seen.insert(unordered(pairing)), "{:?} met twice", pairing);
        }
    }
}

fn assert_everyone_once(division: &Division, round: &Round) {
    let mut teams = HashSet::new();
    for pairing in round {
        assert!(teams.insert(pairing.home));
        assert!(teams.insert(pairing.away));
    }
    assert_eq!(teams.len(), division.len());
}

#[test]
fn test_swiss_season() {
    let mut division = division(10, 1);
    let rounds = run_swiss(&mut division, 4).unwrap();

    assert_eq!(rounds.len(), 4);
    assert_no_repeats(&rounds);
    for round in &rounds {
        assert_everyone_once(&division, round);
    }
    for team in division.teams() {
        assert_eq!(team.matches_played(), 4);
        assert_eq!(team.teams_faced().len(), 4);
    }
    division.check_invariants().unwrap();
}

#[test]
fn test_swiss_season_leaves_standings_sorted() {
    let mut division = division(8, 2);
    run_swiss(&mut division, 3).unwrap();
    let points: Vec<u32> = division.teams().iter().map(|t| t.match_points).collect();
    assert!(points.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_first_swiss_round_pairs_neighbours() {
    let mut division = division(6, 3);
    let order = division.team_ids();
    let rounds = run_swiss(&mut division, 1).unwrap();
    let expected: Round = order.chunks(2).map(|c| Pairing::new(c[0], c[1])).collect();
    assert_eq!(rounds[0], expected);
}

#[test]
fn test_odd_division_pairs_bye_every_round() {
    let mut division = division(9, 4);
    let bye = division.bye().unwrap().id();
    let rounds = run_swiss(&mut division, 3).unwrap();

    for round in &rounds {
        assert_eq!(round.iter().filter(|p| p.contains(bye)).count(), 1);
    }
    let bye = division.bye().unwrap();
    assert_eq!(bye.match_points, 0);
    assert_eq!(bye.losses, 3);
    assert!(division.teams().last().unwrap().is_bye());
}

#[test]
fn test_simultaneous_swiss() {
    let mut division = division(10, 5);
    let rounds = run_simultaneous_swiss(&mut division, 2, 2).unwrap();

    assert_eq!(rounds.len(), 4);
    assert_no_repeats(&rounds);
    for team in division.teams() {
        assert_eq!(team.matches_played(), 4);
    }
}

#[test]
fn test_failed_simultaneous_week_leaves_history_untouched() {
    // Four teams cannot fit four distinct rounds into one week
    let mut division = division(4, 2);
    assert!(matches!(
        run_simultaneous_swiss(&mut division, 1, 4),
        Err(LeagueError::Scheduling { .. })
    ));
    for team in division.teams() {
        assert!(team.teams_faced().is_empty());
        assert_eq!(team.matches_played(), 0);
    }
}

#[test]
fn test_simultaneous_swiss_rejects_zero_per_week() {
    let mut division = division(4, 6);
    assert!(matches!(
        run_simultaneous_swiss(&mut division, 2, 0),
        Err(LeagueError::Argument(_))
    ));
}

#[test]
fn test_random_season() {
    let mut division = division(12, 7);
    let rounds = run_random(&mut division, 5).unwrap();

    assert_eq!(rounds.len(), 5);
    assert_no_repeats(&rounds);
    for round in &rounds {
        assert_everyone_once(&division, round);
    }
    division.check_invariants().unwrap();
}

#[test]
fn test_random_seasons_are_reproducible() {
    let mut a = division(12, 8);
    let mut b = division(12, 8);
    assert_eq!(run_random(&mut a, 4).unwrap(), run_random(&mut b, 4).unwrap());
    assert_eq!(a.team_ids(), b.team_ids());
}

#[test]
fn test_random_then_swiss() {
    let mut division = division(12, 9);
    let rounds = run_random_then_swiss(&mut division, 5, 0.5).unwrap();
    assert_eq!(rounds.len(), 5);
    assert_no_repeats(&rounds);
    for team in division.teams() {
        assert_eq!(team.matches_played(), 5);
    }
}

#[test]
fn test_random_then_swiss_rejects_bad_share() {
    let mut division = division(4, 10);
    for share in [-0.1, 1.5, f64::NAN] {
        assert!(matches!(
            run_random_then_swiss(&mut division, 2, share),
            Err(LeagueError::Argument(_))
        ));
    }
}

#[test]
fn test_round_robin() {
    let mut division = division(7, 11);
    let rounds = run_round_robin(&mut division).unwrap();

    // 7 teams plus the bye
    assert_eq!(rounds.len(), 7);
    assert_no_repeats(&rounds);
    for round in &rounds {
        assert_eq!(round.len(), 4);
        assert_everyone_once(&division, round);
    }
    for team in division.teams() {
        assert_eq!(team.teams_faced().len(), 7);
        assert_eq!(team.matches_played(), 7);
    }
}

#[test]
fn test_two_team_round_robin_is_one_sudden_victory_match() {
    let teams = vec![
        Team::new(TeamId(0), "A", 0.0),
        Team::new(TeamId(1), "B", 0.0),
    ];
    let mut division = Division::from_teams("Pair", teams, Some(12)).unwrap();
    let rounds = run_round_robin(&mut division).unwrap();
    assert_eq!(rounds.len(), 1);

    let winner = &division.teams()[0];
    assert_eq!((winner.wins, winner.rounds_won), (1, 4));
    assert!(winner.rounds_lost < 4);
    assert!(winner.match_points >= 6);
}

#[test]
fn test_run_season_dispatch() {
    let plan = SeasonPlan {
        format: SeasonFormat::Simultaneous,
        rounds: 5,
        matches_per_week: 2,
        random_share: 0.5,
    };
    let mut division = division(10, 13);
    // Two full weeks fit into five rounds
    assert_eq!(run_season(&mut division, &plan).unwrap().len(), 4);

    let plan = SeasonPlan {
        format: SeasonFormat::RoundRobin,
        ..plan
    };
    let mut division = self::division(6, 14);
    assert_eq!(run_season(&mut division, &plan).unwrap().len(), 5);
}

#[test]
fn test_verbose_season_plays_the_same() {
    let mut quiet = division(8, 15);
    let mut loud = division(8, 15);
    loud.set_verbosity(Verbosity::Full);
    assert_eq!(run_swiss(&mut quiet, 3).unwrap(), run_swiss(&mut loud, 3).unwrap());
}
