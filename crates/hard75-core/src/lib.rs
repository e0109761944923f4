//! # hard75 Core Library
//!
//! This library provides the core business logic for the hard75 challenge
//! tracker. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary; any richer front end is a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Challenge model**: persisted `AppData` record holding every
//!   challenge, its goals, per-date checkins, locks and goal snapshots
//! - **Storage**: single-JSON-document persistence plus TOML-based
//!   configuration, with legacy-layout migration on first load
//! - **Statistics**: streaks, completion rate and calendar projection
//!   derived from the persisted record
//!
//! ## Key Components
//!
//! - [`App`]: facade owning the loaded record; every mutation persists
//! - [`Challenge`]: one tracked run of the program
//! - [`DataStore`]: load/migrate/normalize/save pipeline
//! - [`Config`]: application configuration management

pub mod app;
pub mod calendar;
pub mod challenge;
pub mod checkin;
pub mod date;
pub mod error;
pub mod goals;
pub mod lock;
pub mod reminder;
pub mod stats;
pub mod storage;

pub use app::App;
pub use calendar::{CalendarView, CountdownPosition, DayCell, DayStatus};
pub use challenge::{AppData, Challenge, Countdown, Goal, Reminders, DEFAULT_GOALS};
pub use checkin::DayCompletion;
pub use error::{CoreError, Result, StorageError, ValidationError};
pub use stats::StatsSummary;
pub use storage::{Config, DataStore};
