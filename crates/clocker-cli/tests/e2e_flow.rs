//! End-to-end integration tests for the clocker binary.
//!
//! Each test runs the built `clocker` executable against a database in a
//! temporary directory, with HOME pointed there so no user config leaks in.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn clocker_binary() -> String {
    env!("CARGO_BIN_EXE_clocker").to_string()
}

/// Build a command isolated to `temp`.
fn clocker(temp: &Path) -> Command {
    let mut cmd = Command::new(clocker_binary());
    cmd.env("HOME", temp)
        .env("CLOCKER_DATABASE_PATH", temp.join("clocker.db"))
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("XDG_DATA_HOME")
        .env_remove("RUST_LOG")
        .env_remove("CLOCKER_BEHAVIOR__ROUND_TO_QUARTER")
        .env_remove("CLOCKER_WORK__DEFAULT_PAUSE_TIME");
    cmd
}

fn run_ok(cmd: &mut Command) -> String {
    let output = cmd.output().expect("failed to run clocker");
    assert!(
        output.status.success(),
        "clocker should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn run_err(cmd: &mut Command) -> Output {
    let output = cmd.output().expect("failed to run clocker");
    assert!(
        !output.status.success(),
        "clocker should fail, stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    output
}

fn show_json(temp: &Path, date: &str) -> Vec<Value> {
    let stdout = run_ok(
        clocker(temp)
            .arg("show")
            .arg("--from")
            .arg(date)
            .arg("--to")
            .arg(date)
            .arg("--json"),
    );
    serde_json::from_str(&stdout).expect("show --json should output JSON")
}

/// Backfilling a long day applies the default pause from the environment.
#[test]
fn test_track_backfill_infers_pause() {
    let temp = TempDir::new().unwrap();

    let stdout = run_ok(
        clocker(temp.path())
            .env("CLOCKER_WORK__DEFAULT_PAUSE_TIME", "1h")
            .args(["track", "--date", "2026-10-12", "--begin", "08:00", "--end", "17:00"]),
    );
    assert_eq!(
        stdout,
        "Tracked: 2026-10-12 08:00:00-17:00:00 (pause 01:00, worked 08:00)\n"
    );

    let days = show_json(temp.path(), "2026-10-12");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["begin"], "08:00:00");
    assert_eq!(days[0]["end"], "17:00:00");
    assert_eq!(days[0]["pause_secs"], 3600);
}

/// A short day keeps a zero pause.
#[test]
fn test_track_short_day_has_no_pause() {
    let temp = TempDir::new().unwrap();

    run_ok(
        clocker(temp.path())
            .env("CLOCKER_WORK__DEFAULT_PAUSE_TIME", "1h")
            .args(["track", "--date", "2026-10-13", "--begin", "08:00", "--end", "13:00"]),
    );

    let days = show_json(temp.path(), "2026-10-13");
    assert_eq!(days[0]["pause_secs"], 0);
}

/// Settings from a config file passed with --config are honored.
#[test]
fn test_config_file_default_pause() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("clocker.toml");
    std::fs::write(&config_path, "[work]\ndefault_pause_time = \"30m\"\n").unwrap();

    let stdout = run_ok(
        clocker(temp.path())
            .arg("--config")
            .arg(&config_path)
            .args(["track", "--date", "2026-10-12", "--begin", "09:00", "--end", "18:00"]),
    );

    assert!(stdout.contains("pause 00:30"), "unexpected output: {stdout}");
}

/// A long day without a configured default pause warns on stderr.
#[test]
fn test_missing_default_pause_warns() {
    let temp = TempDir::new().unwrap();

    let output = clocker(temp.path())
        .args(["track", "--date", "2026-10-12", "--begin", "08:00", "--end", "17:00"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no default pause time configured"),
        "expected warning, got: {stderr}"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pause 00:00"));
}

/// Stopping before starting is a sequencing error.
#[test]
fn test_stop_before_start_fails() {
    let temp = TempDir::new().unwrap();

    let output = run_err(clocker(temp.path()).arg("stop"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("has not been started"), "stderr: {stderr}");
}

/// Start is idempotent and stop closes the day.
///
/// Uses the real wall clock, so it cannot pass if run across midnight.
#[test]
fn test_start_twice_then_stop() {
    let temp = TempDir::new().unwrap();

    let first = run_ok(clocker(temp.path()).arg("start"));
    let second = run_ok(clocker(temp.path()).arg("start"));
    assert_eq!(first, second, "second start should return the same record");
    assert!(first.ends_with("-open\n"), "unexpected output: {first}");
    let started_on = first
        .strip_prefix("Start: ")
        .and_then(|rest| rest.split_whitespace().next())
        .expect("start output should name the date")
        .to_string();

    let stopped = run_ok(clocker(temp.path()).arg("stop"));
    assert!(
        stopped.starts_with(&format!("Stop: {started_on} ")),
        "unexpected output: {stopped}"
    );
    assert!(!stopped.contains("-open"));

    let days = show_json(temp.path(), &started_on);
    assert_eq!(days.len(), 1);
    assert!(days[0].get("end").is_some());
}

/// Track without a begin time on an empty day is rejected and stores nothing.
#[test]
fn test_track_without_begin_fails() {
    let temp = TempDir::new().unwrap();

    let output = run_err(
        clocker(temp.path()).args(["track", "--date", "2026-10-12", "--end", "17:00"]),
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be empty"), "stderr: {stderr}");
    assert!(show_json(temp.path(), "2026-10-12").is_empty());
}

/// Notify replaces tracked time with the absence marker.
#[test]
fn test_notify_overrides_tracked_day() {
    let temp = TempDir::new().unwrap();

    run_ok(clocker(temp.path()).args([
        "track", "--date", "2026-10-14", "--begin", "08:00", "--end", "12:00", "--pause", "15m",
    ]));
    let stdout = run_ok(clocker(temp.path()).args(["notify", "2026-10-14", "sick"]));
    assert_eq!(stdout, "Absence: 2026-10-14 sick\n");

    let days = show_json(temp.path(), "2026-10-14");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["absence"], "sick");
    assert!(days[0].get("begin").is_none());
    assert!(days[0].get("end").is_none());
    assert_eq!(days[0]["pause_secs"], 0);
}

/// Unknown absence types are rejected by argument parsing.
#[test]
fn test_notify_rejects_unknown_absence() {
    let temp = TempDir::new().unwrap();

    let output = run_err(clocker(temp.path()).args(["notify", "2026-10-14", "sabbatical"]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown absence type"), "stderr: {stderr}");
}

/// Removing a day deletes it; removing a missing day is a no-op.
#[test]
fn test_remove_existing_and_missing() {
    let temp = TempDir::new().unwrap();

    run_ok(clocker(temp.path()).args(["track", "--date", "2026-10-12", "--begin", "08:00"]));

    let removed = run_ok(clocker(temp.path()).args(["remove", "2026-10-12"]));
    assert_eq!(removed, "Removed: 2026-10-12 08:00:00-open\n");
    assert!(show_json(temp.path(), "2026-10-12").is_empty());

    let missing = run_ok(clocker(temp.path()).args(["remove", "2026-10-12"]));
    assert_eq!(missing, "No workday recorded for 2026-10-12.\n");
}

/// Partial track updates keep previously stored fields.
#[test]
fn test_track_updates_keep_existing_fields() {
    let temp = TempDir::new().unwrap();

    run_ok(clocker(temp.path()).args(["track", "--date", "2026-10-12", "--begin", "08:15"]));
    let stdout = run_ok(clocker(temp.path()).args([
        "track", "--date", "2026-10-12", "--end", "12:15", "--pause", "0:15",
    ]));

    assert_eq!(
        stdout,
        "Tracked: 2026-10-12 08:15:00-12:15:00 (pause 00:15, worked 03:45)\n"
    );
}
