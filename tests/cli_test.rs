use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a well-formed case-count CSV into the given directory.
fn create_test_csv(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("cases.csv");
    let csv = "Date,Count\n\
               2020-03-01,10\n\
               2020-03-02,20\n\
               2020-03-03,40\n\
               2020-03-04,80\n\
               2020-03-05,150\n\
               2020-03-06,\n\
               2020-03-07,\n";
    std::fs::write(&path, csv).unwrap();
    path
}

fn cmd() -> Command {
    Command::cargo_bin("epicurve").unwrap()
}

// --- Analyze subcommand ---

#[test]
fn test_analyze_success() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args(["analyze", "--input", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario Projections"))
        .stdout(predicate::str::contains("Fitted Curves"));
}

#[test]
fn test_analyze_reports_day_counts() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args(["analyze", "--input", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("7 days, 5 with reported counts"));
}

#[test]
fn test_analyze_custom_ceilings() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "analyze",
            "--input",
            csv_path.to_str().unwrap(),
            "--ceiling",
            "1000",
            "--ceiling",
            "3000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000 cum"))
        .stdout(predicate::str::contains("3000 cum"));
}

#[test]
fn test_analyze_with_histogram() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args([
            "analyze",
            "--input",
            csv_path.to_str().unwrap(),
            "--ceiling",
            "2000",
            "--histogram",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projected Daily New Cases"));
}

#[test]
fn test_analyze_writes_chart() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);
    let chart_path = dir.path().join("chart.png");

    cmd()
        .args([
            "analyze",
            "--input",
            csv_path.to_str().unwrap(),
            "--chart",
            chart_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart written"));

    assert!(chart_path.exists());
}

#[test]
fn test_analyze_scenarios_from_toml() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);
    let toml_path = dir.path().join("scenarios.toml");
    std::fs::write(
        &toml_path,
        "[[scenario]]\nname = \"custom\"\nceiling = 1234.0\ncolor = \"green\"\n",
    )
    .unwrap();

    cmd()
        .args([
            "analyze",
            "--input",
            csv_path.to_str().unwrap(),
            "--scenarios",
            toml_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234 cum"))
        .stdout(predicate::str::contains("custom"));
}

// --- Plot subcommand ---

#[test]
fn test_plot_creates_png() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);
    let out_path = dir.path().join("out.png");

    cmd()
        .args([
            "plot",
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart written"));

    assert!(out_path.exists());
    assert!(std::fs::metadata(&out_path).unwrap().len() > 0);
}

// --- Summary subcommand ---

#[test]
fn test_summary_success() {
    let dir = TempDir::new().unwrap();
    let csv_path = create_test_csv(&dir);

    cmd()
        .args(["summary", "--input", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Summary"))
        .stdout(predicate::str::contains("Total days:      7"))
        .stdout(predicate::str::contains("Reported days:   5"))
        .stdout(predicate::str::contains("Latest count:    150"));
}

// --- Error cases ---

#[test]
fn test_missing_file() {
    cmd()
        .args(["analyze", "--input", "nonexistent.csv"])
        .assert()
        .failure();
}

#[test]
fn test_interior_gap_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gap.csv");
    std::fs::write(&path, "Date,Count\n2020-03-01,10\n2020-03-02,\n2020-03-03,40\n").unwrap();

    cmd()
        .args(["analyze", "--input", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interior gap"));
}

#[test]
fn test_non_numeric_count_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "Date,Count\n2020-03-01,ten\n").unwrap();

    cmd()
        .args(["analyze", "--input", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_too_few_observations_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.csv");
    std::fs::write(&path, "Date,Count\n2020-03-01,10\n2020-03-02,\n").unwrap();

    cmd()
        .args(["analyze", "--input", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient data"));
}

#[test]
fn test_no_subcommand() {
    cmd().assert().failure();
}

#[test]
fn test_missing_input_flag() {
    cmd().args(["analyze"]).assert().failure();
}

// --- Help and version ---

#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Epidemic Curve Analyzer"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("epicurve"));
}
