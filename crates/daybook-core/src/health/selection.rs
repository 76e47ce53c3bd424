//! Multi-select and two-step delete for the health history table.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clock::Clock;

/// How long an armed delete waits for the second press.
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Browsing,
    Selecting,
    ConfirmingDelete { armed_at: DateTime<Utc> },
}

/// Result of pressing delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteAction {
    /// Nothing selected, or not in selection mode.
    Disabled,
    /// First press; press again within [`CONFIRM_WINDOW`] to delete.
    AwaitingConfirmation,
    /// Second press; delete these `lastUpdated` ids. Selection is cleared.
    Execute(BTreeSet<i64>),
}

/// Selection state for history rows, keyed by `lastUpdated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySelection {
    phase: SelectionPhase,
    selected: BTreeSet<i64>,
}

impl Default for HistorySelection {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySelection {
    pub fn new() -> Self {
        Self {
            phase: SelectionPhase::Browsing,
            selected: BTreeSet::new(),
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn selected(&self) -> &BTreeSet<i64> {
        &self.selected
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_active(&self) -> bool {
        self.phase != SelectionPhase::Browsing
    }

    pub fn enter(&mut self) {
        if self.phase == SelectionPhase::Browsing {
            self.phase = SelectionPhase::Selecting;
        }
    }

    /// Flip one row. Disarms a pending delete.
    pub fn toggle(&mut self, id: i64) {
        if !self.is_active() {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.phase = SelectionPhase::Selecting;
    }

    /// Select every id unless all are already selected, then clear.
    /// Disarms a pending delete.
    pub fn toggle_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = i64>,
    {
        if !self.is_active() {
            return;
        }
        let all: BTreeSet<i64> = ids.into_iter().collect();
        if !all.is_empty() && all.is_subset(&self.selected) {
            self.selected.clear();
        } else {
            self.selected = all;
        }
        self.phase = SelectionPhase::Selecting;
    }

    /// Drop an armed delete whose window has lapsed.
    pub fn refresh(&mut self, clock: &dyn Clock) {
        if let SelectionPhase::ConfirmingDelete { armed_at } = self.phase {
            if window_lapsed(armed_at, clock.now()) {
                tracing::debug!("delete confirmation expired");
                self.phase = SelectionPhase::Selecting;
            }
        }
    }

    pub fn press_delete(&mut self, clock: &dyn Clock) -> DeleteAction {
        self.refresh(clock);
        match self.phase {
            SelectionPhase::Browsing => DeleteAction::Disabled,
            SelectionPhase::Selecting if self.selected.is_empty() => DeleteAction::Disabled,
            SelectionPhase::Selecting => {
                self.phase = SelectionPhase::ConfirmingDelete {
                    armed_at: clock.now(),
                };
                DeleteAction::AwaitingConfirmation
            }
            SelectionPhase::ConfirmingDelete { .. } => {
                self.phase = SelectionPhase::Browsing;
                DeleteAction::Execute(std::mem::take(&mut self.selected))
            }
        }
    }

    /// Leave selection mode without deleting anything.
    pub fn cancel(&mut self) {
        self.phase = SelectionPhase::Browsing;
        self.selected.clear();
    }
}

fn window_lapsed(armed_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (now - armed_at)
        .to_std()
        .map_or(false, |elapsed| elapsed >= CONFIRM_WINDOW)
}
