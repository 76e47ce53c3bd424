//! # Daybook Core
//!
//! Persistence and derived views for Daybook, a local journal and
//! body-metrics tracker.
//!
//! ## Architecture
//!
//! - **storage**: key-value backends (SQLite, in-memory), record shapes, and
//!   parse-or-default decoding of persisted blobs
//! - **diary**: diary entries, drafts, workouts, and the month calendar
//! - **health**: current metrics, per-day history, and select-to-delete
//! - **date_key**: local calendar-day keys for timestamps
//! - **metrics**: BMI and reference ranges
//! - **advice**: remote health assessment
//! - **shell**: tab and editor navigation
//!
//! Nothing here talks to a terminal; the CLI crate owns presentation.

pub mod advice;
pub mod clock;
pub mod date_key;
pub mod diary;
pub mod error;
pub mod fs;
pub mod health;
pub mod metrics;
pub mod shell;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use date_key::{noon_of, to_day_key, DayKey};
pub use diary::{DiaryRepository, DiaryStore, EntryDraft, SaveOutcome};
pub use error::{DaybookError, Result};
pub use health::{HealthDraft, HealthRepository, HealthSnapshot, HealthStore};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
