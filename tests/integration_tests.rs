//! Integration tests for the sumbench CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sumbench() -> Command {
    let mut cmd = Command::cargo_bin("sumbench").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    sumbench()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summation"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    sumbench()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sumbench"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    sumbench()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Result lines come out in lineup order with the exact text shape
#[test]
fn test_run_text_output() {
    let assert = sumbench()
        .args(["run", "--limit", "100", "--threads", "2,4"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let labels = ["Formula", "Single thread", "Parallel with 2 threads", "Parallel with 4 threads"];

    assert_eq!(lines.len(), labels.len() * 2);
    for (pair, label) in lines.chunks(2).zip(labels) {
        assert_eq!(pair[0], format!("{label} result: 5050"));
        let time = pair[1]
            .strip_prefix(&format!("{label} time: "))
            .and_then(|rest| rest.strip_suffix("ms"))
            .expect("time line shape");
        assert!(time.parse::<u64>().is_ok(), "non-integer time: {time}");
    }
}

#[test]
fn test_run_with_multiplier() {
    sumbench()
        .args(["run", "-n", "3", "-N", "10", "-t", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Formula result: 165"))
        .stdout(predicate::str::contains("Single thread result: 165"))
        .stdout(predicate::str::contains("Parallel with 3 threads result: 165"));
}

#[test]
fn test_run_empty_range() {
    sumbench()
        .args(["run", "--limit", "0", "--threads", "32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallel with 32 threads result: 0"));
}

#[test]
fn test_run_json_output() {
    let assert = sumbench()
        .args(["run", "--limit", "1", "--threads", "1,8", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let rows: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3]["label"], "Parallel with 8 threads");
    assert!(rows.iter().all(|row| row["result"] == 1));
    assert!(rows.iter().all(|row| row["time_ms"].is_u64()));
}

#[test]
fn test_negative_limit_rejected() {
    sumbench()
        .args(["run", "--limit=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit cannot be negative"));
}

#[test]
fn test_zero_threads_rejected() {
    sumbench()
        .args(["run", "--limit", "10", "--threads", "2,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread counts must be at least 1"));
}

/// A deadline that expires mid-run is a failure, not a silently partial sum
#[test]
fn test_timeout_aborts_run() {
    sumbench()
        .args(["run", "--limit", "20000000", "--threads", "2", "--timeout-ms", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Parallel with 2 threads").not())
        .stderr(predicate::str::contains("cancelled"));
}

/// The deadline also interrupts the single-thread loop
#[test]
fn test_timeout_interrupts_single_thread() {
    sumbench()
        .args(["run", "--limit", "100000000000", "--threads", "2", "--timeout-ms", "50"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Single thread result").not())
        .stderr(predicate::str::contains("cancelled"));
}

/// Test configuration file and environment layering
#[test]
fn test_config_file_and_env() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bench.toml");
    fs::write(&config_path, "limit = 10\nthreads = [5]\n").unwrap();

    sumbench()
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .env("SUMBENCH_MULTIPLIER", "2")
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallel with 5 threads result: 110"));
}

#[test]
fn test_local_config_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("sumbench.toml"), "limit = 100\nthreads = [16]\n").unwrap();

    sumbench()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallel with 16 threads result: 5050"));
}

#[test]
fn test_check_command() {
    sumbench()
        .args(["check", "--failures-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗").not());
}

#[test]
fn test_version_command() {
    sumbench()
        .args(["version", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("sumbench {}", env!("CARGO_PKG_VERSION"))))
        .stdout(predicate::str::contains("CPU cores:"));
}
