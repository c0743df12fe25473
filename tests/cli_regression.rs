// Regression test: Ensure CLI errors are rendered with miette diagnostics
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_reports_miette_diagnostics_on_bad_params() {
    // Create a temporary invalid parameter file
    let bad_dir = "tests/bad_params";
    fs::create_dir_all(bad_dir).unwrap();
    let bad_file = format!("{}/broken.yaml", bad_dir);
    fs::write(&bad_file, "- name: [broken" /* missing closing bracket */).unwrap();

    let mut cmd = Command::cargo_bin("demo_runner").unwrap();
    cmd.arg("--params").arg(bad_dir);
    cmd.assert().failure().stderr(
        contains("paracase::params")
            .or(contains("help:")),
    );

    // Clean up
    let _ = fs::remove_file(&bad_file);
    let _ = fs::remove_dir(bad_dir);
}

#[test]
fn cli_lists_selectors_without_running() {
    let mut cmd = Command::cargo_bin("demo_runner").unwrap();
    cmd.arg("--list");
    cmd.assert()
        .success()
        .stdout(contains("aspect_fill_scale").and(contains("test_50_100")));
}

#[test]
fn cli_runs_demo_cases_green() {
    let mut cmd = Command::cargo_bin("demo_runner").unwrap();
    cmd.arg("--no-color");
    cmd.assert()
        .success()
        .stdout(contains("Run summary").and(contains("passed 9")));
}

#[test]
fn cli_filter_with_no_match_skips_everything() {
    let mut cmd = Command::cargo_bin("demo_runner").unwrap();
    cmd.args(["zzz", "--no-color"]);
    cmd.assert()
        .success()
        .stdout(contains("skipped 9"));
}
