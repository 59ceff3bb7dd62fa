use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("heckelpress-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

fn curve_args(cmd: &mut Command) {
    cmd.args([
        "curve",
        "--k",
        "0.02",
        "--a0",
        "1.5",
        "--rho-theoretical",
        "7.8",
        "--outer-diameter",
        "10",
        "--height",
        "5",
    ]);
}

#[test]
fn prints_one_row_per_sample() {
    let mut cmd = cli();
    curve_args(&mut cmd);
    cmd.args(["--curve-samples", "5"]);

    let assert = cmd
        .assert()
        .success()
        .stdout(contains("Pressure (MPa)"))
        .stdout(contains("Tonnage (t)"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    // Header plus five sample rows.
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn json_samples_span_the_requested_window() {
    let mut cmd = cli();
    curve_args(&mut cmd);
    cmd.args([
        "--curve-start",
        "0.6",
        "--curve-end",
        "0.9",
        "--curve-samples",
        "7",
        "--format",
        "json",
    ]);

    let assert = cmd.assert().success();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON output");

    let samples = value.as_array().expect("array of samples");
    assert_eq!(samples.len(), 7);
    let first = samples[0]["relative_density"].as_f64().expect("density");
    let last = samples[6]["relative_density"].as_f64().expect("density");
    assert!((first - 0.6).abs() < 1e-9);
    assert!((last - 0.9).abs() < 1e-9);
}

#[test]
fn degenerate_window_is_rejected() {
    let mut cmd = cli();
    curve_args(&mut cmd);
    cmd.args(["--curve-start", "0.9", "--curve-end", "0.5"]);

    cmd.assert()
        .failure()
        .stderr(contains("invalid curve configuration"));
}
