use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn graphwalk() -> Command {
    cargo_bin_cmd!("graphwalk")
}

/// Write `json` as `name` under `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A→B(1), A→C(4), B→C(1), C→D(1) plus an isolated vertex E.
pub const WEIGHTED: &str = r#"{
    "vertices": ["A", "B", "C", "D", "E"],
    "edges": [
        {"source": "A", "target": "B", "weight": 1},
        {"source": "A", "target": "C", "weight": 4},
        {"source": "B", "target": "C", "weight": 1},
        {"source": "C", "target": "D", "weight": 1}
    ]
}"#;

/// Unweighted tree rooted at A plus a second component rooted at X.
pub const FOREST: &str = r#"{
    "edges": [
        {"source": "A", "target": "B"},
        {"source": "A", "target": "C"},
        {"source": "B", "target": "D"},
        {"source": "X", "target": "Y"}
    ]
}"#;

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
