//! Health metrics: current snapshot, per-day history, and bulk deletion.
//!
//! Invariants kept by [`HealthStore`]:
//! - history holds at most one record per local calendar day
//! - history is sorted newest `lastUpdated` first
//! - the current snapshot is the most recently *saved* record, which is not
//!   necessarily the newest by date when a record is backdated
//! - after a bulk delete that leaves history non-empty, the current snapshot
//!   follows the new head of history

mod draft;
mod selection;

use std::collections::BTreeSet;

use crate::date_key::to_day_key;
use crate::error::Result;
use crate::storage::{
    decode, decode_for_write, encode, HealthMetrics, KeyValueStore, HEALTH_HISTORY_KEY, HEALTH_METRICS_KEY,
};

pub use draft::HealthDraft;
pub use selection::{DeleteAction, HistorySelection, SelectionPhase, CONFIRM_WINDOW};

/// Rows shown before the history table is expanded.
pub const HISTORY_PREVIEW_LIMIT: usize = 7;

/// Everything the health view reads on entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSnapshot {
    pub current: HealthMetrics,
    pub history: Vec<HealthMetrics>,
}

/// What happened to the current snapshot after a bulk delete.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentSync {
    /// Moved to the new head of history.
    Resynced(HealthMetrics),
    /// History became empty (or nothing was removed); the snapshot was kept.
    Retained,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub removed: usize,
    pub history: Vec<HealthMetrics>,
    pub current: CurrentSync,
}

/// Health persistence as seen by views and editors.
pub trait HealthRepository {
    /// Current snapshot and history. Missing or malformed data yields
    /// `default_current` and an empty history.
    fn load(&self, default_current: HealthMetrics) -> Result<HealthSnapshot>;

    /// Upsert `record` into history by day and make it the current snapshot.
    /// Returns the new history.
    fn save(&mut self, record: HealthMetrics) -> Result<Vec<HealthMetrics>>;

    /// Remove history rows whose `lastUpdated` is in `ids`.
    fn delete_many(&mut self, ids: &BTreeSet<i64>) -> Result<DeleteOutcome>;
}

/// [`HealthRepository`] over any key-value store.
pub struct HealthStore<S> {
    store: S,
}

impl<S: KeyValueStore> HealthStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn load_history(&self) -> Result<Vec<HealthMetrics>> {
        let raw = self.store.get(HEALTH_HISTORY_KEY)?;
        Ok(decode(HEALTH_HISTORY_KEY, raw.as_deref()).unwrap_or_default())
    }

    fn load_history_for_write(&self) -> Result<Vec<HealthMetrics>> {
        let raw = self.store.get(HEALTH_HISTORY_KEY)?;
        decode_for_write(HEALTH_HISTORY_KEY, raw.as_deref())
    }
}

impl<S: KeyValueStore> HealthRepository for HealthStore<S> {
    fn load(&self, default_current: HealthMetrics) -> Result<HealthSnapshot> {
        let raw_current = self.store.get(HEALTH_METRICS_KEY)?;
        let current = decode(HEALTH_METRICS_KEY, raw_current.as_deref()).unwrap_or(default_current);
        let history = self.load_history()?;
        tracing::debug!(rows = history.len(), "loaded health history");
        Ok(HealthSnapshot { current, history })
    }

    fn save(&mut self, record: HealthMetrics) -> Result<Vec<HealthMetrics>> {
        let history = upsert_by_day(self.load_history_for_write()?, record.clone());
        let history_blob = encode(&history)?;
        let current_blob = encode(&record)?;
        self.store.set_many(&[
            (HEALTH_HISTORY_KEY, history_blob.as_str()),
            (HEALTH_METRICS_KEY, current_blob.as_str()),
        ])?;
        tracing::info!(
            day = %to_day_key(record.last_updated),
            rows = history.len(),
            "saved health record"
        );
        Ok(history)
    }

    fn delete_many(&mut self, ids: &BTreeSet<i64>) -> Result<DeleteOutcome> {
        let existing = self.load_history_for_write()?;
        let history = delete_many(&existing, ids);
        let removed = existing.len() - history.len();
        if removed == 0 {
            return Ok(DeleteOutcome {
                removed,
                history,
                current: CurrentSync::Retained,
            });
        }

        let history_blob = encode(&history)?;
        let current = match history.first() {
            Some(head) => {
                let current_blob = encode(head)?;
                self.store.set_many(&[
                    (HEALTH_HISTORY_KEY, history_blob.as_str()),
                    (HEALTH_METRICS_KEY, current_blob.as_str()),
                ])?;
                CurrentSync::Resynced(head.clone())
            }
            None => {
                self.store.set(HEALTH_HISTORY_KEY, &history_blob)?;
                CurrentSync::Retained
            }
        };
        tracing::info!(removed, remaining = history.len(), "deleted health records");

        Ok(DeleteOutcome {
            removed,
            history,
            current,
        })
    }
}

/// Insert `record`, or replace the record on the same local day.
///
/// A replacement keeps its position; an insert prepends and re-sorts
/// newest first.
pub fn upsert_by_day(mut history: Vec<HealthMetrics>, record: HealthMetrics) -> Vec<HealthMetrics> {
    let day = to_day_key(record.last_updated);
    match history
        .iter()
        .position(|existing| to_day_key(existing.last_updated) == day)
    {
        Some(index) => history[index] = record,
        None => {
            history.insert(0, record);
            history.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        }
    }
    history
}

/// History without the rows whose `lastUpdated` is in `ids`.
pub fn delete_many(history: &[HealthMetrics], ids: &BTreeSet<i64>) -> Vec<HealthMetrics> {
    history
        .iter()
        .filter(|record| !ids.contains(&record.last_updated))
        .cloned()
        .collect()
}

/// The rows the history table shows.
pub fn displayed_history(history: &[HealthMetrics], expanded: bool) -> &[HealthMetrics] {
    if expanded {
        history
    } else {
        &history[..history.len().min(HISTORY_PREVIEW_LIMIT)]
    }
}
