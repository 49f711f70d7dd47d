/// Runs the greedy frog on every map shipped with `pond_scenarios` and compares the report with
/// the recorded outcome.
use frog_pathfinding::{GreedySolver, Pond, PondSolver};
use pond_scenarios::get_scenarios;

#[test]
fn recorded_outcomes() {
    let solver = GreedySolver::new();
    let scenarios = get_scenarios();
    assert!(!scenarios.is_empty());
    for (map, scenario) in scenarios {
        let mut pond: Pond = map
            .parse()
            .unwrap_or_else(|e| panic!("Map {} is malformed: {}", scenario.map, e));
        let report = match solver.find_path(&mut pond) {
            Some(path) => path.to_string(),
            None => "No solution".to_owned(),
        };
        println!("{}: {}", scenario.map, report);
        assert_eq!(report, scenario.expected, "map {}", scenario.map);
    }
}

#[test]
fn maps_render_back_to_their_layout() {
    for (map, scenario) in get_scenarios() {
        let pond: Pond = map.parse().unwrap();
        let reparsed: Pond = pond.to_string().parse().unwrap();
        assert_eq!(pond.len(), reparsed.len(), "map {}", scenario.map);
        for cell in pond.cells() {
            assert_eq!(pond.terrain(cell), reparsed.terrain(cell), "map {}", scenario.map);
        }
    }
}
