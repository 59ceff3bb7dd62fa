use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("heckelpress-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

fn reference_args(cmd: &mut Command) {
    cmd.args([
        "calc",
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
        "--green-density",
        "6.63",
    ]);
}

#[test]
fn writes_the_csv_export() {
    let temp = tempdir().expect("create temp dir");
    let csv_path = temp.path().join("results.csv");

    let mut cmd = cli();
    reference_args(&mut cmd);
    cmd.arg("--csv").arg(&csv_path);

    cmd.assert()
        .success()
        .stdout(contains("CSV written to"));

    let csv = fs::read_to_string(&csv_path).expect("CSV file exists");
    assert!(csv.contains("material,custom"));
    assert!(csv.contains("relative_density,pressure_mpa,tonnage"));
    assert!(csv.contains("pressure_mpa,19.85"));
}

#[test]
fn writes_the_chart_export() {
    let temp = tempdir().expect("create temp dir");
    let png_path = temp.path().join("curves.png");

    let mut cmd = cli();
    reference_args(&mut cmd);
    cmd.arg("--png").arg(&png_path);

    cmd.assert()
        .success()
        .stdout(contains("Chart written to"));

    let bytes = fs::read(&png_path).expect("PNG file exists");
    assert!(bytes.len() > PNG_SIGNATURE.len());
    assert_eq!(&bytes[..PNG_SIGNATURE.len()], &PNG_SIGNATURE);
}

#[test]
fn unwritable_export_path_fails_with_context() {
    let mut cmd = cli();
    reference_args(&mut cmd);
    cmd.arg("--csv").arg("/nonexistent/dir/results.csv");

    cmd.assert()
        .failure()
        .stderr(contains("failed to write CSV export"));
}
