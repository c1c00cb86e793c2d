use super::*;

fn team(id: u32, points: u32, faced: &[u32]) -> Team {
    let mut team = Team::new(TeamId(id), format!("Team {}", id), 0.0);
    team.match_points = points;
    for &other in faced {
        team.add_faced(TeamId(other));
    }
    team
}

fn points_of(teams: &[Team]) -> HashMap<TeamId, u32> {
    teams.iter().map(|t| (t.id(), t.match_points)).collect()
}

#[test]
fn test_median_buchholz_drops_extremes() {
    let teams = vec![
        team(0, 10, &[1, 2, 3, 4]),
        team(1, 20, &[0]),
        team(2, 5, &[0]),
        team(3, 12, &[0]),
        team(4, 7, &[0]),
    ];
    let points = points_of(&teams);
    // 20 + 5 + 12 + 7 minus 20 and 5
    assert_eq!(median_buchholz(&teams[0], &points), 19);
}

#[test]
fn test_median_buchholz_without_opponents() {
    let lonely = team(0, 10, &[]);
    assert_eq!(median_buchholz(&lonely, &HashMap::new()), 0);
}

#[test]
fn test_points_decide_first() {
    let teams = vec![team(0, 12, &[]), team(1, 9, &[])];
    let points = points_of(&teams);
    assert_eq!(compare_standings(&teams[0], &teams[1], &points), Ordering::Greater);
    assert_eq!(compare_standings(&teams[1], &teams[0], &points), Ordering::Less);
}

#[test]
fn test_bye_always_last() {
    let mut bye = Team::bye(TeamId(9));
    bye.match_points = 100;
    let zero = team(0, 0, &[]);
    let points = HashMap::new();
    assert_eq!(compare_standings(&bye, &zero, &points), Ordering::Less);
    assert_eq!(compare_standings(&zero, &bye, &points), Ordering::Greater);
}

#[test]
fn test_buchholz_breaks_ties() {
    let teams = vec![
        team(0, 9, &[2, 3, 4]),
        team(1, 9, &[2, 3, 5]),
        team(2, 0, &[0, 1]),
        team(3, 6, &[0, 1]),
        team(4, 9, &[0]),
        team(5, 3, &[1]),
    ];
    let points = points_of(&teams);
    // team 0: 0 + 6 + 9 - 9 - 0 = 6; team 1: 0 + 6 + 3 - 6 - 0 = 3
    assert_eq!(compare_standings(&teams[0], &teams[1], &points), Ordering::Greater);
}

#[test]
fn test_sort_standings() {
    let mut teams = vec![
        Team::bye(TeamId(4)),
        team(0, 3, &[]),
        team(1, 18, &[]),
        team(2, 9, &[]),
        team(3, 9, &[]),
    ];
    sort_standings(&mut teams);
    let order: Vec<u32> = teams.iter().map(|t| t.id().0).collect();
    // 2 and 3 are fully tied and keep their previous order
    assert_eq!(order, vec![1, 2, 3, 0, 4]);
}
