mod advice;
mod delete;
mod history;
mod manage;
mod record;
mod show;

pub use advice::handle_advice;
pub use delete::handle_delete;
pub use history::handle_history;
pub use manage::handle_manage;
pub use record::handle_record;
pub use show::handle_show;

pub(crate) use record::{print_receipt, prompt_measurements};

use daybook_core::storage::HealthMetrics;
use chrono::NaiveDate;

use daybook_core::{Clock, HealthDraft, HealthRepository, HealthSnapshot};

use crate::helpers::parse_date;
use crate::ui::format::{format_day, format_number};

/// Load health data, defaulting to a neutral snapshot stamped now.
pub(crate) fn load_snapshot<R: HealthRepository>(
    repo: &R,
    clock: &dyn Clock,
) -> anyhow::Result<HealthSnapshot> {
    Ok(repo.load(HealthMetrics::neutral(clock.now_millis()))?)
}

/// A draft seeded from the current snapshot, dated `date` (`YYYY-MM-DD`)
/// or `today`.
pub(crate) fn dated_draft(
    snapshot: &HealthSnapshot,
    today: NaiveDate,
    date: Option<&str>,
) -> anyhow::Result<HealthDraft> {
    let mut draft = HealthDraft::from_current(&snapshot.current, today);
    if let Some(value) = date {
        draft.date = parse_date(value)?;
    }
    Ok(draft)
}

/// One-line label for a history row in prompts.
pub(crate) fn record_label(record: &HealthMetrics) -> String {
    format!(
        "{}  {} cm  {} kg",
        format_day(record.last_updated),
        format_number(record.height),
        format_number(record.weight)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use daybook_core::{noon_of, HealthStore, ManualClock, MemoryStore};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dated_draft_backdates_and_upserts_by_day() {
        let now = DateTime::from_timestamp_millis(noon_of(day(2024, 5, 10))).unwrap();
        let clock = ManualClock::new(now);
        let mut repo = HealthStore::new(MemoryStore::new());

        let snapshot = load_snapshot(&repo, &clock).unwrap();
        let mut draft = dated_draft(&snapshot, clock.today(), Some("2024-05-03")).unwrap();
        draft.set_weight(70.0);
        repo.save(draft.into_record()).unwrap();

        let snapshot = load_snapshot(&repo, &clock).unwrap();
        assert_eq!(snapshot.current.last_updated, noon_of(day(2024, 5, 3)));
        let mut draft = dated_draft(&snapshot, clock.today(), Some("2024-05-03")).unwrap();
        draft.set_weight(71.0);
        let history = repo.save(draft.into_record()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].weight, 71.0);

        let snapshot = load_snapshot(&repo, &clock).unwrap();
        let draft = dated_draft(&snapshot, clock.today(), None).unwrap();
        assert_eq!(draft.date, day(2024, 5, 10));
        assert!(dated_draft(&snapshot, clock.today(), Some("May 3")).is_err());
    }
}
