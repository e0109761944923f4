//! End-to-end engine scenarios over a temp-dir store.
//!
//! These tests go through the `App` facade, so they also exercise the
//! persist-after-every-mutation rule: state is reloaded from disk wherever
//! a scenario depends on it surviving.

use chrono::Local;
use hard75_core::{date, App, DataStore};
use tempfile::TempDir;

fn app_in(dir: &TempDir) -> App {
    App::with_store(DataStore::at(dir.path()))
}

fn goal_ids(app: &App) -> Vec<String> {
    app.active().goals.iter().map(|g| g.id.clone()).collect()
}

#[test]
fn fresh_app_starts_with_one_default_challenge() {
    let dir = TempDir::new().unwrap();
    let app = app_in(&dir);

    assert_eq!(app.data().challenges.len(), 1);
    assert_eq!(app.active().name, "75 Hard");
    assert_eq!(app.active().goals.len(), 6);
    assert_eq!(app.active().countdown.total_days, 75);
    assert_eq!(app.stats().current_streak, 0);
}

#[test]
fn completing_every_goal_today_updates_stats_and_calendar() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let today = date::today();

    for id in goal_ids(&app) {
        app.set_checkin(today, &id, true).unwrap();
    }

    let stats = app.stats();
    assert_eq!(stats.days_tracked, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.best_streak, 1);
    assert_eq!(stats.completion_rate, 100);

    let view = app.calendar();
    assert_eq!(view.completed_days, 1);
}

#[test]
fn locked_past_date_rejects_edits_until_unlocked() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let yesterday = date::add_days(date::today(), -1);
    let goal = goal_ids(&app)[0].clone();

    // Implicit past lock.
    assert!(app.is_locked(yesterday));
    assert!(app.set_checkin(yesterday, &goal, true).is_err());
    assert_eq!(app.day_completion(yesterday).completed_count, 0);

    // Explicit unlock, then the edit lands and the unlock persists.
    app.set_lock(yesterday, false).unwrap();
    app.set_checkin(yesterday, &goal, true).unwrap();

    let reopened = app_in(&dir);
    assert!(!reopened.is_locked(yesterday));
    assert_eq!(reopened.day_completion(yesterday).completed_count, 1);
}

#[test]
fn goal_edits_on_an_unlocked_today_rewrite_the_snapshot() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let today = date::today();
    let ids = goal_ids(&app);

    for id in &ids {
        app.set_checkin(today, id, true).unwrap();
    }
    app.remove_goal(&ids[0]).unwrap();

    // Snapshot shrank with the live list, the day stayed complete.
    assert_eq!(app.effective_goals(today).len(), 5);
    let completion = app.day_completion(today);
    assert_eq!(completion.completed_count, 5);
    assert_eq!(completion.total_count, 5);
    assert_eq!(app.stats().current_streak, 1);
}

#[test]
fn restart_activates_a_fresh_challenge_with_the_same_goals() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let today = date::today();
    let original_id = app.active().id.clone();
    let goal = goal_ids(&app)[0].clone();
    app.set_checkin(today, &goal, true).unwrap();

    let new_id = app.restart_active().unwrap();

    assert_ne!(new_id, original_id);
    assert_eq!(app.data().challenges.len(), 2);
    assert_eq!(app.active().name, "75 Hard Restart");
    assert_eq!(app.active().goals.len(), 6);
    assert!(app.active().checkins.is_empty());
    assert_eq!(app.active().countdown.start_date, today);

    // The original survives untouched and can be re-selected.
    assert!(app.select_challenge(&original_id).unwrap());
    assert_eq!(app.stats().days_tracked, 1);
}

#[test]
fn rename_rejects_blank_names() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    assert!(app.rename_active("   ").is_err());
    assert_eq!(app.active().name, "75 Hard");

    app.rename_active("  Winter Arc  ").unwrap();
    assert_eq!(app.active().name, "Winter Arc");
}

#[test]
fn selecting_an_unknown_challenge_is_a_silent_no_op() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let active = app.active().id.clone();
    assert!(!app.select_challenge("nope").unwrap());
    assert_eq!(app.active().id, active);
}

#[test]
fn invalid_import_leaves_existing_state_untouched() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.rename_active("Keep me").unwrap();

    assert!(app.import(r#"{"foo": 1}"#).is_err());
    assert_eq!(app.active().name, "Keep me");

    let reopened = app_in(&dir);
    assert_eq!(reopened.active().name, "Keep me");
}

#[test]
fn export_then_import_replaces_data_wholesale() {
    let source_dir = TempDir::new().unwrap();
    let mut source = app_in(&source_dir);
    source.rename_active("Backed up").unwrap();
    let goal = goal_ids(&source)[0].clone();
    source.set_checkin(date::today(), &goal, true).unwrap();
    let backup = source.export_json().unwrap();

    let target_dir = TempDir::new().unwrap();
    let mut target = app_in(&target_dir);
    target.import(&backup).unwrap();

    assert_eq!(target.data(), source.data());
}

#[test]
fn mutations_persist_across_reopen() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.add_goal("Cold shower").unwrap();
    app.set_countdown(30, date::today()).unwrap();

    let reopened = app_in(&dir);
    assert_eq!(reopened.active().goals.len(), 7);
    assert_eq!(reopened.active().countdown.total_days, 30);
}

#[test]
fn reminder_check_fires_at_most_once_per_day() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    app.set_reminder_time("00:00").unwrap();
    app.set_reminder_enabled(true).unwrap();

    assert!(app.check_reminder(Local::now()).unwrap());
    assert!(!app.check_reminder(Local::now()).unwrap());

    // The guard is persisted state, not process state.
    let mut reopened = app_in(&dir);
    assert!(!reopened.check_reminder(Local::now()).unwrap());
}
