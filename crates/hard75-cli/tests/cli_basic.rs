//! Basic CLI E2E tests.
//!
//! Each test runs the compiled binary against its own temp data directory
//! via HARD75_DATA_DIR, so nothing touches the real home directory.

use std::process::Command;
use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_hard75"))
        .env("HARD75_DATA_DIR", dir.path())
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn first_goal_id(dir: &TempDir) -> String {
    let (stdout, _, code) = run_cli(dir, &["goal", "list", "--json"]);
    assert_eq!(code, 0, "goal list --json failed");
    let goals: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    goals[0]["id"].as_str().unwrap().to_string()
}

#[test]
fn test_challenge_list_shows_default() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["challenge", "list"]);
    assert_eq!(code, 0, "challenge list failed");
    assert!(stdout.contains("75 Hard"));
    assert!(stdout.contains('*'));
}

#[test]
fn test_challenge_new_and_select() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["challenge", "new", "Spring Run"]);
    assert_eq!(code, 0, "challenge new failed");
    assert!(stdout.contains("Created challenge:"));

    let (stdout, _, code) = run_cli(&dir, &["challenge", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Spring Run"));
}

#[test]
fn test_challenge_rename_rejects_blank() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["challenge", "rename", "  "]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_goal_add_and_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["goal", "add", "Cold shower"]);
    assert_eq!(code, 0, "goal add failed");
    assert!(stdout.contains("Added goal:"));

    let (stdout, _, code) = run_cli(&dir, &["goal", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Cold shower"));
}

#[test]
fn test_checkin_check_today() {
    let dir = TempDir::new().unwrap();
    let goal = first_goal_id(&dir);
    let (stdout, _, code) = run_cli(&dir, &["checkin", "check", &goal]);
    assert_eq!(code, 0, "checkin check failed");
    assert!(stdout.contains("1/6 complete"));
}

#[test]
fn test_checkin_on_locked_past_date_fails() {
    let dir = TempDir::new().unwrap();
    let goal = first_goal_id(&dir);
    let (_, stderr, code) = run_cli(&dir, &["checkin", "check", &goal, "--date", "2000-01-01"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("locked"));

    // Unlock, then the same edit lands.
    let (_, _, code) = run_cli(&dir, &["lock", "off", "--date", "2000-01-01"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&dir, &["checkin", "check", &goal, "--date", "2000-01-01"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1/6 complete"));
}

#[test]
fn test_stats_show() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    assert!(stdout.contains("Current streak"));

    let (stdout, _, code) = run_cli(&dir, &["stats", "show", "--json"]);
    assert_eq!(code, 0);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["days_tracked"], 0);
}

#[test]
fn test_calendar_show() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["calendar", "show"]);
    assert_eq!(code, 0, "calendar show failed");
    assert!(stdout.contains("0/75 complete"));
}

#[test]
fn test_countdown_status_and_set() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["countdown", "status"]);
    assert_eq!(code, 0, "countdown status failed");
    assert!(stdout.contains("Day 1 of 75"));

    let (_, _, code) = run_cli(&dir, &["countdown", "set", "30"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&dir, &["countdown", "status"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("of 30"));
}

#[test]
fn test_remind_status_and_set_time() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["remind", "status"]);
    assert_eq!(code, 0, "remind status failed");
    assert!(stdout.contains("disabled"));

    let (_, _, code) = run_cli(&dir, &["remind", "set-time", "07:30"]);
    assert_eq!(code, 0);
    let (_, stderr, code) = run_cli(&dir, &["remind", "set-time", "7pm"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_data_export_and_import() {
    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("backup.json");
    let backup_str = backup.to_str().unwrap();

    let (_, _, code) = run_cli(&dir, &["data", "export", "--output", backup_str]);
    assert_eq!(code, 0, "data export failed");
    assert!(backup.exists());

    let (stdout, _, code) = run_cli(&dir, &["data", "import", backup_str]);
    assert_eq!(code, 0, "data import failed");
    assert!(stdout.contains("Imported 1 challenge(s)"));
}

#[test]
fn test_data_import_rejects_invalid_backup() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"foo": 1}"#).unwrap();

    let (_, stderr, code) = run_cli(&dir, &["data", "import", bad.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid backup"));
}

#[test]
fn test_config_show_and_set() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("total_days = 75"));

    let (_, _, code) = run_cli(&dir, &["config", "set", "defaults.total_days", "30"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&dir, &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("total_days = 30"));
}
