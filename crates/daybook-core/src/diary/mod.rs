//! Diary entries: persistence, calendar views, and editing.
//!
//! The collection is stored newest-created first. Creating an entry prepends
//! it; updating replaces it where it sits; deleting removes it. Views derive
//! per-day subsets with [`filter_by_day`] and calendar markers with
//! [`entry_days_with_data`].

mod calendar;
mod draft;
mod workout;

use std::collections::HashSet;

use uuid::Uuid;

use crate::date_key::{to_day_key, DayKey};
use crate::error::{DaybookError, Result};
use crate::storage::{
    decode, decode_for_write, encode, DiaryEntry, KeyValueStore, DIARY_ENTRIES_KEY,
};

pub use calendar::CalendarMonth;
pub use draft::EntryDraft;
pub use workout::SetField;

/// What a save did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// A new entry was prepended.
    Created(DiaryEntry),
    /// An existing entry was replaced in place.
    Updated(DiaryEntry),
    /// The draft was blank; storage was not touched.
    Skipped,
}

/// Diary persistence as seen by views and editors.
pub trait DiaryRepository {
    /// All entries, newest-created first. Missing or malformed data yields
    /// an empty list.
    fn load(&self) -> Result<Vec<DiaryEntry>>;

    /// Commit a draft: replace by id in edit mode, prepend in create mode.
    ///
    /// # Errors
    ///
    /// Returns `DaybookError::NotFound` if the draft edits an id that is no
    /// longer stored.
    fn save(&mut self, draft: &EntryDraft) -> Result<SaveOutcome>;

    /// Remove an entry. Returns `false` (and writes nothing) for unknown ids.
    fn delete(&mut self, id: &str) -> Result<bool>;

    fn find(&self, id: &str) -> Result<Option<DiaryEntry>> {
        Ok(self.load()?.into_iter().find(|entry| entry.id == id))
    }
}

/// [`DiaryRepository`] over any key-value store.
pub struct DiaryStore<S> {
    store: S,
}

impl<S: KeyValueStore> DiaryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Entries for a read-modify-write. Unreadable stored data is an error.
    fn load_for_write(&self) -> Result<Vec<DiaryEntry>> {
        let raw = self.store.get(DIARY_ENTRIES_KEY)?;
        decode_for_write(DIARY_ENTRIES_KEY, raw.as_deref())
    }

    fn persist(&mut self, entries: &[DiaryEntry]) -> Result<()> {
        let blob = encode(entries)?;
        self.store.set(DIARY_ENTRIES_KEY, &blob)
    }
}

impl<S: KeyValueStore> DiaryRepository for DiaryStore<S> {
    fn load(&self) -> Result<Vec<DiaryEntry>> {
        let raw = self.store.get(DIARY_ENTRIES_KEY)?;
        let entries: Vec<DiaryEntry> =
            decode(DIARY_ENTRIES_KEY, raw.as_deref()).unwrap_or_default();
        tracing::debug!(count = entries.len(), "loaded diary entries");
        Ok(entries)
    }

    fn save(&mut self, draft: &EntryDraft) -> Result<SaveOutcome> {
        if draft.is_blank() {
            tracing::debug!("skipping blank diary draft");
            return Ok(SaveOutcome::Skipped);
        }

        let mut entries = self.load_for_write()?;
        let outcome = match draft.editing_id() {
            Some(id) => {
                let slot = entries
                    .iter_mut()
                    .find(|entry| entry.id == id)
                    .ok_or_else(|| DaybookError::NotFound(format!("diary entry {}", id)))?;
                *slot = draft.to_entry(id.to_string());
                SaveOutcome::Updated(slot.clone())
            }
            None => {
                let entry = draft.to_entry(Uuid::now_v7().to_string());
                entries.insert(0, entry.clone());
                SaveOutcome::Created(entry)
            }
        };

        self.persist(&entries)?;
        tracing::info!(
            update = draft.is_update(),
            total = entries.len(),
            "saved diary entry"
        );
        Ok(outcome)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut entries = self.load_for_write()?;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.persist(&entries)?;
        tracing::info!(id, "deleted diary entry");
        Ok(true)
    }
}

/// Entries falling on `day`, in input order. `None` returns everything.
pub fn filter_by_day(entries: &[DiaryEntry], day: Option<DayKey>) -> Vec<DiaryEntry> {
    match day {
        None => entries.to_vec(),
        Some(key) => entries
            .iter()
            .filter(|entry| to_day_key(entry.timestamp) == key)
            .cloned()
            .collect(),
    }
}

/// Days that have at least one entry.
pub fn entry_days_with_data(entries: &[DiaryEntry]) -> HashSet<DayKey> {
    entries
        .iter()
        .map(|entry| to_day_key(entry.timestamp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_key::noon_of;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, date: NaiveDate) -> DiaryEntry {
        DiaryEntry {
            id: id.to_string(),
            timestamp: noon_of(date),
            content: format!("entry {}", id),
            rating: 3,
            weather: None,
            tags: None,
            workout: None,
        }
    }

    #[test]
    fn test_create_prepends() {
        let mut store = DiaryStore::new(MemoryStore::new());
        let mut first = EntryDraft::new(day(2024, 5, 1));
        first.content = "first".to_string();
        let mut second = EntryDraft::new(day(2024, 4, 1));
        second.content = "second".to_string();

        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].content, "second");
        assert_eq!(entries[1].content, "first");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_blank_save_is_noop() {
        let mut store = DiaryStore::new(MemoryStore::new().with(DIARY_ENTRIES_KEY, "[]"));
        let outcome = store.save(&EntryDraft::new(day(2024, 5, 1))).unwrap();
        assert_eq!(outcome, SaveOutcome::Skipped);
        assert_eq!(store.into_inner().raw(DIARY_ENTRIES_KEY), Some("[]"));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let seeded = vec![entry("a", day(2024, 5, 3)), entry("b", day(2024, 5, 2))];
        let mut store = DiaryStore::new(
            MemoryStore::new().with(DIARY_ENTRIES_KEY, &encode(&seeded).unwrap()),
        );

        let mut draft = EntryDraft::from_entry(&seeded[1]);
        draft.content = "revised".to_string();
        draft.date = day(2024, 6, 1);
        let outcome = store.save(&draft).unwrap();
        assert!(matches!(outcome, SaveOutcome::Updated(_)));

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].id, "b");
        assert_eq!(entries[1].content, "revised");
        assert_eq!(to_day_key(entries[1].timestamp).date(), day(2024, 6, 1));
    }

    #[test]
    fn test_update_of_missing_id_is_not_found() {
        let gone = entry("gone", day(2024, 5, 1));
        let mut store = DiaryStore::new(MemoryStore::new());
        let err = store.save(&EntryDraft::from_entry(&gone)).unwrap_err();
        assert!(matches!(err, DaybookError::NotFound(_)));
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection() {
        let seeded = encode(&vec![entry("a", day(2024, 5, 1))]).unwrap();
        let mut store = DiaryStore::new(MemoryStore::new().with(DIARY_ENTRIES_KEY, &seeded));
        assert!(!store.delete("zzz").unwrap());
        assert!(store.delete("a").unwrap());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_blob_loads_empty() {
        let store = DiaryStore::new(MemoryStore::new().with(DIARY_ENTRIES_KEY, "not json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_refuses_to_overwrite_unreadable_blob() {
        let mut store = DiaryStore::new(MemoryStore::new().with(DIARY_ENTRIES_KEY, "not json"));
        let mut draft = EntryDraft::new(day(2024, 5, 1));
        draft.content = "new".to_string();

        let err = store.save(&draft).unwrap_err();
        assert!(matches!(err, DaybookError::Storage(_)));
        assert!(store.delete("any").is_err());
        assert_eq!(store.into_inner().raw(DIARY_ENTRIES_KEY), Some("not json"));
    }

    #[test]
    fn test_filter_by_day() {
        let entries = vec![
            entry("c", day(2024, 5, 2)),
            entry("b", day(2024, 5, 1)),
            entry("a", day(2024, 5, 1)),
        ];
        assert_eq!(filter_by_day(&entries, None), entries);

        let may_first = filter_by_day(&entries, Some(DayKey::from_date(day(2024, 5, 1))));
        let ids: Vec<_> = may_first.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        assert!(filter_by_day(&entries, Some(DayKey::from_date(day(2024, 5, 9)))).is_empty());
    }

    #[test]
    fn test_entry_days_with_data() {
        let entries = vec![
            entry("c", day(2024, 5, 2)),
            entry("b", day(2024, 5, 1)),
            entry("a", day(2024, 5, 1)),
        ];
        let days = entry_days_with_data(&entries);
        assert_eq!(days.len(), 2);
        assert!(days.contains(&DayKey::from_date(day(2024, 5, 2))));
    }
}
