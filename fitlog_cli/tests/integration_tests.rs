//! Integration tests for the fitlog binary.
//!
//! These tests drive the interactive session through piped stdin and cover:
//! - Logging exercises and viewing history
//! - Input validation in the add-exercise flow
//! - Configuration loading, overrides and `init-config`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitlog"))
}

/// CLI pointed at a config path inside `dir` (which may not exist yet)
fn cli_with_config(dir: &Path) -> Command {
    let mut cmd = cli();
    cmd.arg("--config").arg(dir.join("config.toml"));
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Log cardio and strength exercises with calorie estimates",
        ));
}

#[test]
fn test_exit_from_menu() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to the Fitness Tracking Application!",
        ))
        .stdout(predicate::str::contains(
            "Exiting application. Thank you for using Fitness Tracking App!",
        ));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Menu:"));
}

#[test]
fn test_log_and_view_running() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .arg("log")
        .write_stdin("1\n1\nRunning\n30\n8.0\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise added successfully!"))
        .stdout(predicate::str::contains("=== Exercise History ==="))
        .stdout(predicate::str::contains("Exercise Type: Cardio"))
        .stdout(predicate::str::contains("Name: Running"))
        .stdout(predicate::str::contains("Duration: 30 minutes"))
        .stdout(predicate::str::contains("Calories Burned: 300.00 kcal"));
}

#[test]
fn test_empty_history_notice() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No exercises logged yet."))
        .stdout(predicate::str::contains("=== Exercise History ===").not());
}

#[test]
fn test_invalid_type_is_not_logged() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .write_stdin("1\n3\nRunning\n30\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid exercise type selected. Exercise not added.",
        ))
        .stdout(predicate::str::contains("No exercises logged yet."));
}

#[test]
fn test_invalid_duration_aborts_flow() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .write_stdin("1\n2\nSquats\n-5\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid duration. Please enter a positive number.",
        ))
        .stdout(predicate::str::contains("Enter MET value").not())
        .stdout(predicate::str::contains("No exercises logged yet."));
}

#[test]
fn test_weight_override() {
    let temp_dir = setup_test_dir();

    // 8.0 * 60.0 * 30 / 60 = 240
    cli_with_config(temp_dir.path())
        .arg("--weight")
        .arg("60")
        .write_stdin("1\n1\nRunning\n30\n\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories Burned: 240.00 kcal"));
}

#[test]
fn test_config_file_profile_and_met() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[profile]\nweight = 90.0\n\n[exercise]\ndefault_met = 5.0\n",
    )
    .unwrap();

    // 5.0 * 90.0 * 40 / 60 = 300
    cli_with_config(temp_dir.path())
        .write_stdin("1\n2\nKettlebell\n40\nnot a number\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("default is 5.0"))
        .stdout(predicate::str::contains("Exercise Type: Strength"))
        .stdout(predicate::str::contains("Calories Burned: 300.00 kcal"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[profile]\nweight = 0.0\n",
    )
    .unwrap();

    cli_with_config(temp_dir.path())
        .write_stdin("3\n")
        .assert()
        .failure();
}

#[test]
fn test_init_config_writes_file() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");

    cli_with_config(temp_dir.path())
        .arg("init-config")
        .arg("--name")
        .arg("Jane Roe")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config"));

    let contents = fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(contents.contains("Jane Roe"));
    assert!(contents.contains("default_met"));
}

#[test]
fn test_init_config_refuses_overwrite() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[profile]\nname = \"Kept\"\n").unwrap();

    cli_with_config(temp_dir.path())
        .arg("init-config")
        .assert()
        .failure();

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("Kept"));

    cli_with_config(temp_dir.path())
        .arg("init-config")
        .arg("--force")
        .arg("--age")
        .arg("55")
        .assert()
        .success();

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("Kept"));
    assert!(contents.contains("55"));
}
