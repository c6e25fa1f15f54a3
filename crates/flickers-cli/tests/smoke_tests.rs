//! Smoke tests for the flickers CLI
//!
//! These tests verify basic CLI functionality end to end.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command for the flickers binary with a private data file
fn flickers(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flickers").expect("flickers binary should exist");
    cmd.env_remove("FLICKERS_DATA")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never")
        .arg("--data")
        .arg(data);
    cmd
}

fn data_file(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("flickers.json")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.0"));
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_no_args_fails() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp)).assert().failure();
}

#[test]
fn test_invalid_subcommand() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .arg("integrate")
        .assert()
        .failure();
}

// ============================================================================
// Calculator
// ============================================================================

#[test]
fn test_calc_left_to_right() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["calc", "2", "+", "3", "*", "4", "="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_calc_scientific_keys() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["calc", "12", "x²"])
        .assert()
        .success()
        .stdout("144\n");
}

#[test]
fn test_calc_pending_operator_shows_previous() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["calc", "12", "/"])
        .assert()
        .success()
        .stdout("12 /\n12\n");
}

#[test]
fn test_calc_division_by_zero() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["calc", "5", "/", "0", "="])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_calc_unknown_key() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["calc", "2", "^", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key: ^"));
}

#[test]
fn test_calc_json_display() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["--format", "json", "calc", "7", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"current\": \"7\""))
        .stdout(predicate::str::contains("\"previous\": \"7 -\""));
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_persists_between_runs() {
    let temp = TempDir::new().expect("create temp dir");
    let data = data_file(&temp);

    flickers(&data)
        .args(["calc", "2", "+", "3", "="])
        .assert()
        .success();
    flickers(&data)
        .args(["calc", "6", "*", "7", "="])
        .assert()
        .success();

    flickers(&data)
        .arg("history")
        .assert()
        .success()
        .stdout("6 * 7 = 42\n2 + 3 = 5\n");

    flickers(&data)
        .args(["history", "--limit", "1"])
        .assert()
        .success()
        .stdout("6 * 7 = 42\n");

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.contains("calculator-history"));
}

#[test]
fn test_history_clear() {
    let temp = TempDir::new().expect("create temp dir");
    let data = data_file(&temp);

    flickers(&data)
        .args(["calc", "1", "+", "1", "="])
        .assert()
        .success();
    flickers(&data)
        .args(["history", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 history entries"));
    flickers(&data)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("History is empty"));
}

#[test]
fn test_history_json() {
    let temp = TempDir::new().expect("create temp dir");
    let data = data_file(&temp);
    flickers(&data)
        .args(["calc", "9", "-", "4", "="])
        .assert()
        .success();
    flickers(&data)
        .args(["--format", "json", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"9 - 4 = 5\""));
}

#[test]
fn test_corrupt_data_file_does_not_block_calc() {
    let temp = TempDir::new().expect("create temp dir");
    let data = data_file(&temp);
    fs::write(&data, "not json").unwrap();
    flickers(&data)
        .args(["calc", "3", "+", "4", "="])
        .assert()
        .success()
        .stdout("7\n")
        .stderr(predicate::str::contains("history will not be saved"));
}

// ============================================================================
// Converter
// ============================================================================

#[test]
fn test_convert_length() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["convert", "length", "м", "см", "1"])
        .assert()
        .success()
        .stdout("1 м = 100 см\n");
}

#[test]
fn test_convert_negative_temperature() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["convert", "temperature", "°C", "°F", "-40"])
        .assert()
        .success()
        .stdout("-40 °C = -40 °F\n");
}

#[test]
fn test_convert_numeral() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["convert", "numeral", "DEC", "HEX", "255"])
        .assert()
        .success()
        .stdout("255 DEC = FF HEX\n");
}

#[test]
fn test_convert_unknown_unit() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["convert", "length", "м", "parsec", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit 'parsec' for length"));
}

#[test]
fn test_convert_invalid_digit() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["convert", "numeral", "BIN", "DEC", "102"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid digit for base 2"));
}

#[test]
fn test_discount() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["discount", "100", "25"])
        .assert()
        .success()
        .stdout("75.00\n");
}

#[test]
fn test_bmi() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["bmi", "70", "1.75"])
        .assert()
        .success()
        .stdout("22.86 (Normal)\n");
}

#[test]
fn test_bmi_json() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["--format", "json", "bmi", "70", "1.75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"bmi\""))
        .stdout(predicate::str::contains("\"band\": \"Normal\""));
}

#[test]
fn test_bmi_zero_height() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["bmi", "70", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_units_listing() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("temperature: °C, °F, K"))
        .stdout(predicate::str::contains("numeral: DEC, BIN, OCT, HEX"));
}

#[test]
fn test_units_single_category_json() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["--format", "json", "units", "length"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"length\""));
}

// ============================================================================
// Theme, config, update check
// ============================================================================

#[test]
fn test_theme_round_trip() {
    let temp = TempDir::new().expect("create temp dir");
    let data = data_file(&temp);

    flickers(&data).arg("theme").assert().success().stdout("purple\n");
    flickers(&data)
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout("dark\n");
    flickers(&data).arg("theme").assert().success().stdout("dark\n");
    flickers(&data)
        .args(["theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme"));
}

#[test]
fn test_config_prints_json() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"history_lines\": 10"))
        .stdout(predicate::str::contains("flickers.json"));
}

#[test]
fn test_data_from_environment() {
    let temp = TempDir::new().expect("create temp dir");
    let data = temp.path().join("from-env.json");
    Command::cargo_bin("flickers")
        .expect("flickers binary should exist")
        .env("FLICKERS_DATA", &data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env.json"));
}

#[test]
fn test_update_available() {
    let temp = TempDir::new().expect("create temp dir");
    let release = temp.path().join("latest.json");
    fs::write(
        &release,
        r#"{"tag_name":"v2.0.0","body":"Faster converter","assets":[{"browser_download_url":"https://example.invalid/setup.exe"}]}"#,
    )
    .unwrap();

    flickers(&data_file(&temp))
        .args(["update-check", "--current", "1.0.0", "--release"])
        .arg(&release)
        .assert()
        .success()
        .stdout(predicate::str::contains("Update available: 1.0.0 -> 2.0.0"))
        .stdout(predicate::str::contains("https://example.invalid/setup.exe"))
        .stdout(predicate::str::contains("Faster converter"));
}

#[test]
fn test_update_not_found_is_up_to_date() {
    let temp = TempDir::new().expect("create temp dir");
    let release = temp.path().join("latest.json");
    fs::write(&release, r#"{"message":"Not Found"}"#).unwrap();

    flickers(&data_file(&temp))
        .args(["update-check", "--current", "1.0.0", "--release"])
        .arg(&release)
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date (1.0.0)"));
}

// ============================================================================
// Global flags and logging
// ============================================================================

#[test]
fn test_quiet_flag_keeps_results() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["-q", "calc", "1", "+", "1", "="])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_quiet_history_suppresses_info() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["-q", "history"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_debug_logs_on_stderr() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["-vv", "calc", "2", "+", "2", "="])
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("computed"));
}

#[test]
fn test_json_logs() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .args(["-vv", "--log-format", "json", "calc", "2", "+", "2", "="])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_invalid_flag() {
    let temp = TempDir::new().expect("create temp dir");
    flickers(&data_file(&temp))
        .arg("--nonexistent-flag")
        .assert()
        .failure();
}
