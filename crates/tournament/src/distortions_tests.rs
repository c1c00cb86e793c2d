use super::*;
use league_core::{Team, TeamId};

fn division(skills: &[f64]) -> Division {
    let teams = skills
        .iter()
        .enumerate()
        .map(|(i, &skill)| Team::new(TeamId(i as u32), format!("T{}", i), skill))
        .collect();
    Division::from_teams("Test", teams, Some(0)).unwrap()
}

#[test]
fn test_rank_distortions() {
    // Standings order A, B, C, D against skill order B, D, A, C
    let division = division(&[0.5, 2.0, -1.0, 1.0]);
    assert_eq!(rank_distortions(&division), vec![2, 1, 1, 2]);
}

#[test]
fn test_perfect_standings_have_no_distortion() {
    let division = division(&[3.0, 1.0, -1.0, -3.0]);
    let distortions = rank_distortions(&division);
    assert!(distortions.iter().all(|&d| d == 0));
    assert_eq!(mean_distortion(&distortions), 0.0);
}

#[test]
fn test_bye_is_never_distorted() {
    let division = division(&[-1.0, 0.0, 1.0]);
    assert_eq!(rank_distortions(&division), vec![2, 0, 2, 0]);
}

#[test]
fn test_mean_and_top_distortion() {
    let distortions = [2, 1, 1, 2, 0, 6];
    assert!((mean_distortion(&distortions) - 2.0).abs() < 1e-12);
    assert!((top_distortion(&distortions, 2) - 1.5).abs() < 1e-12);
    assert!((top_distortion(&distortions, 50) - 2.0).abs() < 1e-12);
    assert_eq!(mean_distortion(&[]), 0.0);
    assert_eq!(top_distortion(&distortions, 0), 0.0);
}

#[test]
fn test_point_distortion() {
    let mut division = division(&[3.0, 1.0, -1.0, -3.0]);
    // Expected over 3 matches: 27, 18, 9, 0
    assert!((point_distortion(&division, 3).unwrap() - 13.5).abs() < 1e-9);

    let mut ids = division.team_ids().into_iter();
    let (a, b) = (ids.next().unwrap(), ids.next().unwrap());
    division.record_faced(a, b).unwrap();
    division.play_match(a, b, league_core::GameMode::Timed).unwrap();
    let after = point_distortion(&division, 0).unwrap();
    // Points were earned, nothing was expected
    assert!((after - 9.0 / 4.0).abs() < 1e-9);
}

#[test]
fn test_max_swiss_rounds() {
    assert_eq!(max_swiss_rounds(10), 7);
    assert_eq!(max_swiss_rounds(16), 13);
    assert_eq!(max_swiss_rounds(15), 13);
    assert_eq!(max_swiss_rounds(2), 0);
    assert_eq!(max_swiss_rounds(0), 0);
}
