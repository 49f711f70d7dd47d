use frog_pathfinding::{GreedySolver, Pond, PondSolver};
use std::error::Error;
use std::{env, fs};

// Usage: cargo run --example from_file -- <map.pond>
fn main() -> Result<(), Box<dyn Error>> {
    let filename = env::args()
        .nth(1)
        .ok_or("expected the path of a pond map as first argument")?;
    let mut pond: Pond = fs::read_to_string(&filename)?.parse()?;
    print!("{}", pond);
    match GreedySolver::new().find_path(&mut pond) {
        Some(path) => println!("{}", path),
        None => println!("No solution"),
    }
    Ok(())
}
