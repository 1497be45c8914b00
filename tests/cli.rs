use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn write_input(dir: &std::path::Path) -> std::path::PathBuf {
    let p = dir.join("fit.json");
    fs::write(
        &p,
        r#"{"categories":["a","b","c"],"values":[0.2,1.4,0.6],"error_primary":[0.1,0.1,0.1]}"#,
    )
    .unwrap();
    p
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("bargraph").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bargraph"));
}

#[test]
fn inspect_prints_summary() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let mut cmd = Command::cargo_bin("bargraph").unwrap();
    cmd.args(["inspect", "--input"])
        .arg(&input)
        .args(["--x-label", "Distance (m)", "--tick-labels", "A,B,C"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["bar_count"], 3);
    assert_eq!(v["ylim"], serde_json::json!([0.0, 1.0]));
    assert_eq!(v["ylabel"], "Tree Crossing Fit");
    assert_eq!(v["xlabel"], "Distance (m)");
    assert_eq!(v["xtick_labels"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn render_writes_svg() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let out = dir.path().join("chart.svg");
    let mut cmd = Command::cargo_bin("bargraph").unwrap();
    cmd.args(["render", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Tree Crossing Fit"));
}

#[test]
fn tick_label_count_mismatch_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let mut cmd = Command::cargo_bin("bargraph").unwrap();
    cmd.args(["inspect", "--input"])
        .arg(&input)
        .args(["--tick-labels", "A,B"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("tick labels"));
}

#[test]
fn unsupported_output_extension_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let mut cmd = Command::cargo_bin("bargraph").unwrap();
    cmd.args(["render", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("chart.bmp"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format"));
}

#[test]
fn width_out_of_range_is_rejected() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let mut cmd = Command::cargo_bin("bargraph").unwrap();
    cmd.args(["inspect", "--input"])
        .arg(&input)
        .args(["--width", "50"]);
    cmd.assert().failure();
}
