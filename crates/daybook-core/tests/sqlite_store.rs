use std::collections::BTreeSet;

use chrono::NaiveDate;
use tempfile::TempDir;

use daybook_core::diary::{filter_by_day, DiaryRepository, DiaryStore, EntryDraft, SaveOutcome};
use daybook_core::health::{CurrentSync, HealthRepository, HealthStore};
use daybook_core::storage::{
    Gender, HealthMetrics, KeyValueStore, SqliteStore, DIARY_ENTRIES_KEY, HEALTH_HISTORY_KEY,
};
use daybook_core::{noon_of, to_day_key, DayKey, HealthDraft};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn temp_db() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("nested").join("daybook.db");
    (dir, path)
}

#[test]
fn test_diary_entry_survives_reopen() {
    let (_dir, path) = temp_db();

    let mut draft = EntryDraft::new(day(2024, 5, 1));
    draft.content = "long run, tired legs".to_string();
    draft.set_rating(5);
    draft.weather = "Sunny".to_string();
    draft.set_tags(["Exercise", "Rest"]);
    draft.set_workout_enabled(true);
    let workout = draft.workout_mut();
    let index = workout.add_exercise();
    workout
        .rename_exercise(index, "Squat")
        .expect("exercise exists");
    workout.add_set(index).expect("exercise exists");

    let saved = {
        let store = SqliteStore::open(&path).expect("open should succeed");
        let mut diary = DiaryStore::new(store);
        match diary.save(&draft).expect("save should succeed") {
            SaveOutcome::Created(entry) => entry,
            other => panic!("expected a created entry, got {:?}", other),
        }
    };

    let store = SqliteStore::open(&path).expect("reopen should succeed");
    let diary = DiaryStore::new(store);
    let entries = diary.load().expect("load should succeed");
    assert_eq!(entries, vec![saved.clone()]);
    assert_eq!(entries[0].workout.as_ref().map(|w| w.exercises.len()), Some(1));

    let on_day = filter_by_day(&entries, Some(DayKey::from_date(day(2024, 5, 1))));
    assert_eq!(on_day.len(), 1);
    assert_eq!(diary.find(&saved.id).expect("find should succeed"), Some(saved));
}

#[test]
fn test_blank_draft_leaves_sqlite_blob_unchanged() {
    let (_dir, path) = temp_db();
    let mut store = SqliteStore::open(&path).expect("open should succeed");
    store.set(DIARY_ENTRIES_KEY, "[]").expect("seed should succeed");

    let mut diary = DiaryStore::new(&mut store);
    let outcome = diary
        .save(&EntryDraft::new(day(2024, 5, 1)))
        .expect("save should succeed");
    assert_eq!(outcome, SaveOutcome::Skipped);

    assert_eq!(
        store.get(DIARY_ENTRIES_KEY).expect("get should succeed").as_deref(),
        Some("[]")
    );
}

#[test]
fn test_health_history_upsert_and_bulk_delete() {
    let (_dir, path) = temp_db();
    let store = SqliteStore::open(&path).expect("open should succeed");
    let mut health = HealthStore::new(store);

    let neutral = HealthMetrics::neutral(0);
    for (date, weight) in [
        (day(2024, 5, 1), 70.0),
        (day(2024, 5, 1), 72.0),
        (day(2024, 5, 3), 71.0),
        (day(2024, 5, 2), 71.5),
    ] {
        let mut draft = HealthDraft::from_current(&neutral, date);
        draft.set_weight(weight);
        draft.set_gender(Gender::Female);
        health.save(draft.into_record()).expect("save should succeed");
    }

    let snapshot = health.load(neutral.clone()).expect("load should succeed");
    let days: Vec<String> = snapshot
        .history
        .iter()
        .map(|r| to_day_key(r.last_updated).to_string())
        .collect();
    assert_eq!(days, vec!["2024-05-03", "2024-05-02", "2024-05-01"]);
    assert_eq!(snapshot.history[2].weight, 72.0);
    assert_eq!(snapshot.current.weight, 71.5);

    let ids: BTreeSet<i64> = [noon_of(day(2024, 5, 3)), noon_of(day(2024, 5, 2))]
        .into_iter()
        .collect();
    let outcome = health.delete_many(&ids).expect("delete should succeed");
    assert_eq!(outcome.removed, 2);
    match outcome.current {
        CurrentSync::Resynced(current) => assert_eq!(current.weight, 72.0),
        CurrentSync::Retained => panic!("current should follow the new head"),
    }

    let store = health.into_inner();
    let raw = store
        .get(HEALTH_HISTORY_KEY)
        .expect("get should succeed")
        .expect("history should be stored");
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["gender"], "female");
    assert!(parsed[0].get("bodyFatPercentage").is_none());
}

#[test]
fn test_garbage_in_database_loads_defaults() {
    let (_dir, path) = temp_db();
    let mut store = SqliteStore::open(&path).expect("open should succeed");
    store
        .set(HEALTH_HISTORY_KEY, "{\"not\": \"a list\"}")
        .expect("seed should succeed");

    let health = HealthStore::new(store);
    let fallback = HealthMetrics::neutral(5);
    let snapshot = health.load(fallback.clone()).expect("load should succeed");
    assert!(snapshot.history.is_empty());
    assert_eq!(snapshot.current, fallback);
}

#[test]
fn test_fractional_workout_numbers_survive_a_save() {
    let (_dir, path) = temp_db();
    let mut store = SqliteStore::open(&path).expect("open should succeed");
    let stored = r#"[{"id":"1714557600000","timestamp":1714557600000,"content":"old entry",
        "rating":4,"workout":{"startTime":"18:00","duration":45.5,"bodyParts":["Arms"],
        "intensity":3,"warmup":"","exercises":[{"name":"Curl","sets":[{"weight":12,"reps":7.5}]}]}}]"#;
    store
        .set(DIARY_ENTRIES_KEY, stored)
        .expect("seed should succeed");

    let mut diary = DiaryStore::new(store);
    assert_eq!(diary.load().expect("load should succeed").len(), 1);

    let mut draft = EntryDraft::new(day(2024, 5, 2));
    draft.content = "new entry".to_string();
    diary.save(&draft).expect("save should succeed");

    let entries = diary.load().expect("load should succeed");
    assert_eq!(entries.len(), 2);
    let old = &entries[1];
    assert_eq!(old.id, "1714557600000");
    let workout = old.workout.as_ref().expect("workout kept");
    assert_eq!(workout.duration, 45.5);
    assert_eq!(workout.exercises[0].sets[0].reps, 7.5);
}

#[test]
fn test_unreadable_diary_blob_is_not_overwritten() {
    let (_dir, path) = temp_db();
    let mut store = SqliteStore::open(&path).expect("open should succeed");
    store
        .set(DIARY_ENTRIES_KEY, "[{\"id\": 1}]")
        .expect("seed should succeed");

    let mut diary = DiaryStore::new(store);
    let mut draft = EntryDraft::new(day(2024, 5, 2));
    draft.content = "new entry".to_string();
    assert!(diary.save(&draft).is_err());

    let raw = diary
        .into_inner()
        .get(DIARY_ENTRIES_KEY)
        .expect("get should succeed");
    assert_eq!(raw.as_deref(), Some("[{\"id\": 1}]"));
}
