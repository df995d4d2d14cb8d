#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::LazyLock;

use travel_planner::CityGraph;

pub fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file)
}

pub static BALTICS_GRAPH: LazyLock<CityGraph> = LazyLock::new(|| {
    CityGraph::load_from_file(data_path("baltics.map"))
        .unwrap_or_else(|e| panic!("cannot load baltics map: {e}"))
});

/// A-B,1  B-C,1  A-C,5
pub static TRIANGLE_GRAPH: LazyLock<CityGraph> = LazyLock::new(|| {
    "A-B,1\nB-C,1\nA-C,5"
        .parse()
        .unwrap_or_else(|e| panic!("invalid triangle map: {e}"))
});
