use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome expected for one map: either the report of the walk (`"0 1 2 ate 3 flies"`) or
/// `"No solution"`.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub map: String,
    pub expected: String,
}

fn root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

/// Names of all `.pond` files below `maps/`, without extension, sorted.
pub fn get_map_names() -> Vec<String> {
    let maps = root().join("maps");
    let mut names = Vec::new();
    for entry in WalkDir::new(&maps).into_iter() {
        let entry = entry.expect("Could not get dir entry");
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "pond") {
            let rel_path = path
                .strip_prefix(&maps)
                .expect("Map outside of maps directory")
                .with_extension("");
            names.push(rel_path.to_string_lossy().replace('\\', "/"));
        }
    }
    names.sort();
    names
}

/// Raw text of the map with the given name.
pub fn load_map(name: &str) -> String {
    let path = root().join("maps").join(format!("{}.pond", name));
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Could not read map {}", path.display()))
}

/// Every scenario listed in `scenarios.tsv` together with the text of its map.
pub fn get_scenarios() -> Vec<(String, Scenario)> {
    let file = File::open(root().join("scenarios.tsv")).expect("Could not open scenario file");
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(file);
    let names = get_map_names();
    let mut scenarios = Vec::new();
    for result in csv_reader.deserialize() {
        let scenario: Scenario = result.expect("Could not parse scenario record");
        if !names.contains(&scenario.map) {
            panic!("Scenario refers to unknown map {}", scenario.map);
        }
        scenarios.push((load_map(&scenario.map), scenario));
    }
    scenarios
}
