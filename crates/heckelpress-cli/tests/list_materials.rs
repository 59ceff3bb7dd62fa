use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

const CUSTOM_CATALOG: &str = "\
name,k,a,rho_theoretical
Bronze 90/10,0.0032,0.29,8.80
";

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("heckelpress-cli");
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("HECKELPRESS_MATERIALS");
    cmd
}

#[test]
fn lists_builtin_materials_with_constants() {
    let mut cmd = cli();
    cmd.arg("materials");

    cmd.assert()
        .success()
        .stdout(contains("Available materials (5):"))
        .stdout(contains("Name"))
        .stdout(contains("K (1/MPa)"))
        .stdout(contains("Iron"))
        .stdout(contains("Tungsten Carbide (WC-Co)"))
        .stdout(contains("7.87"));
}

#[test]
fn loads_a_catalog_from_the_environment_variable() {
    let temp = tempdir().expect("create temp dir");
    let catalog_path = temp.path().join("materials.csv");
    fs::write(&catalog_path, CUSTOM_CATALOG).expect("write catalog fixture");

    let mut cmd = cli();
    cmd.env("HECKELPRESS_MATERIALS", &catalog_path);
    cmd.arg("materials");

    cmd.assert()
        .success()
        .stdout(contains("Available materials (1):"))
        .stdout(contains("Bronze 90/10"));
}

#[test]
fn loads_a_catalog_from_the_flag() {
    let temp = tempdir().expect("create temp dir");
    let catalog_path = temp.path().join("materials.csv");
    fs::write(&catalog_path, CUSTOM_CATALOG).expect("write catalog fixture");

    let mut cmd = cli();
    cmd.arg("materials").arg("--catalog").arg(&catalog_path);

    cmd.assert()
        .success()
        .stdout(contains("Bronze 90/10"))
        .stdout(contains("8.80"));
}

#[test]
fn missing_catalog_file_fails_with_context() {
    let mut cmd = cli();
    cmd.arg("materials").arg("--catalog").arg("/nonexistent/materials.csv");

    cmd.assert()
        .failure()
        .stderr(contains("failed to load material catalog"));
}

#[test]
fn json_listing_contains_all_builtins() {
    let mut cmd = cli();
    cmd.args(["materials", "--format", "json"]);

    let assert = cmd.assert().success();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON output");

    let materials = value.as_array().expect("array of materials");
    assert_eq!(materials.len(), 5);
    assert!(materials
        .iter()
        .any(|material| material["name"] == "Iron"));
}
