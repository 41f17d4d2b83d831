//! End-to-end CLI tests using `assert_cmd`.
//!
//! These tests invoke the actual compiled binary and verify exit codes
//! and output. They do NOT require a running backend (except tests
//! marked #[ignore]).

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("protex").unwrap()
}

// ─── Help / version ─────────────────────────────────────────────────────

#[test]
fn test_help_shows_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_shows_semver() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("protex"));
}

// ─── Search subcommand argument validation ──────────────────────────────

#[test]
fn test_search_help() {
    cmd()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("QUERY"))
        .stdout(predicate::str::contains("--type"));
}

#[test]
fn test_search_requires_query() {
    cmd()
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("QUERY"));
}

#[test]
fn test_search_rejects_invalid_type() {
    cmd()
        .args(["search", "kinase", "--type", "fulltext"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─── Show subcommand argument validation ────────────────────────────────

#[test]
fn test_show_help() {
    cmd()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID"))
        .stdout(predicate::str::contains("--depth"))
        .stdout(predicate::str::contains("--viz"));
}

#[test]
fn test_show_requires_id() {
    cmd()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ID"));
}

#[test]
fn test_show_rejects_out_of_range_depth() {
    cmd()
        .args(["show", "P12345", "--depth", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_show_rejects_non_numeric_depth() {
    cmd()
        .args(["show", "P12345", "--depth", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─── Browse subcommand ──────────────────────────────────────────────────

#[test]
fn test_browse_help_mentions_deep_link() {
    cmd()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deep link"));
}

// ─── Integration: requires a running backend ────────────────────────────

#[test]
#[ignore] // Run with: cargo test -- --ignored
fn test_search_against_backend() {
    cmd()
        .args(["search", "kinase"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching"));
}

#[test]
#[ignore]
fn test_show_against_backend() {
    cmd()
        .args(["show", "P12345", "--depth", "2"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success();
}

#[test]
#[ignore]
fn test_stats_against_backend() {
    cmd()
        .arg("stats")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("Database Overview"));
}
