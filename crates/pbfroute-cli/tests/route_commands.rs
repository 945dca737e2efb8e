use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("pbfroute-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn route_prints_text_summary() {
    cli()
        .arg("route")
        .arg("--graph")
        .arg(fixture("sample_graph.json"))
        .args(["--from", "0", "--to", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: 0 -> 1 -> 2 -> 3"))
        .stdout(predicate::str::contains("Distance: 3.000000"))
        .stdout(predicate::str::contains("Iterations: 4"));
}

#[test]
fn route_json_includes_trace_when_requested() {
    let output = cli()
        .args(["--format", "json", "route", "--graph"])
        .arg(fixture("sample_graph.json"))
        .args(["--from", "0", "--to", "3", "--trace"])
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["path"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["distance"], 3.0);
    assert_eq!(json["explored"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["explored_truncated"], false);
}

#[test]
fn max_explored_truncates_the_trace() {
    let output = cli()
        .args(["route", "--format", "json", "--graph"])
        .arg(fixture("sample_graph.json"))
        .args(["--from", "0", "--to", "3", "--max-explored", "1"])
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["explored"], serde_json::json!([0]));
    assert_eq!(json["explored_truncated"], true);
}

#[test]
fn unreachable_target_is_not_a_failure() {
    let temp = tempdir().expect("create temp dir");
    let graph_path = temp.path().join("islands.json");
    fs::write(&graph_path, r#"{"node_count": 3, "edges": []}"#).expect("write graph");

    cli()
        .arg("route")
        .arg("--graph")
        .arg(&graph_path)
        .args(["--from", "0", "--to", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route found"));
}

#[test]
fn invalid_node_fails_with_message() {
    cli()
        .arg("route")
        .arg("--graph")
        .arg(fixture("sample_graph.json"))
        .args(["--from", "0", "--to", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("node 42 is out of range"));
}

#[test]
fn malformed_graph_fails_to_load() {
    let temp = tempdir().expect("create temp dir");
    let graph_path = temp.path().join("broken.json");
    fs::write(
        &graph_path,
        r#"{"node_count": 2, "edges": [{"from": 0, "to": 9, "weight": 1.0}]}"#,
    )
    .expect("write graph");

    cli()
        .arg("route")
        .arg("--graph")
        .arg(&graph_path)
        .args(["--from", "0", "--to", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load graph"));
}

#[test]
fn map_route_uses_external_ids() {
    cli()
        .arg("map-route")
        .arg("--map")
        .arg(fixture("sample_map.json"))
        .args(["--from", "101", "--to", "105"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: 101 -> 102 -> 103 -> 105"));
}

#[test]
fn map_route_rejects_unknown_ids() {
    cli()
        .arg("map-route")
        .arg("--map")
        .arg(fixture("sample_map.json"))
        .args(["--from", "101", "--to", "777"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown map node: 777"));
}

#[test]
fn info_reports_counts() {
    cli()
        .arg("info")
        .arg("--map")
        .arg(fixture("sample_map.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 6"))
        .stdout(predicate::str::contains("Edges: 10"))
        .stdout(predicate::str::contains("Ways: 3"));
}

#[test]
fn info_requires_an_input() {
    cli().arg("info").assert().failure();
}

#[test]
fn info_rejects_two_inputs() {
    cli()
        .arg("info")
        .arg("--graph")
        .arg(fixture("sample_graph.json"))
        .arg("--map")
        .arg(fixture("sample_map.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn oversized_graph_fails_without_panicking() {
    let temp = tempdir().expect("create temp dir");
    let graph_path = temp.path().join("huge.json");
    fs::write(&graph_path, r#"{"node_count": 18446744073709551615, "edges": []}"#)
        .expect("write graph");

    cli()
        .arg("route")
        .arg("--graph")
        .arg(&graph_path)
        .args(["--from", "0", "--to", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot allocate storage"))
        .stderr(predicate::str::contains("panicked").not());
}
