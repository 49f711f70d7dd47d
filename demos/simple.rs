use frog_pathfinding::{GreedySolver, Pond, PondSolver};

// In this example the frog crosses a small pond
// S W L M A .
// M R M W R .
// . 1 W W W E
// S marks the start, E the end, W water, L a lily pad, R reeds, M mud, A an alligator and the
// digit a food cell with that many flies. Row r, column q is the hexagon at axial (q, r).
fn main() {
    let mut pond: Pond = "S W L M A .\nM R M W R .\n. 1 W W W E"
        .parse()
        .expect("Map is malformed");
    let solver = GreedySolver::new();
    match solver.find_path(&mut pond) {
        Some(path) => {
            println!("A path has been found:");
            for cell in &path.trace {
                println!("{} at {:?}", cell, pond.position(*cell));
            }
            println!("{}", path);
        }
        None => println!("No solution"),
    }
}
