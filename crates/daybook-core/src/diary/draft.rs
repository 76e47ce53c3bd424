//! In-progress diary edits.

use chrono::NaiveDate;

use crate::date_key::{noon_of, to_day_key};
use crate::storage::{DiaryEntry, WorkoutRecord};

const DEFAULT_RATING: u8 = 3;

/// Unsaved editor state for a diary entry.
///
/// A draft knows whether it creates a new entry or updates an existing one;
/// [`super::DiaryRepository::save`] uses that to pick prepend or replace.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    editing: Option<String>,
    pub date: NaiveDate,
    pub content: String,
    rating: u8,
    pub weather: String,
    tags: Vec<String>,
    workout_enabled: bool,
    workout: WorkoutRecord,
}

impl EntryDraft {
    /// Blank draft for a new entry dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            editing: None,
            date: today,
            content: String::new(),
            rating: DEFAULT_RATING,
            weather: String::new(),
            tags: Vec::new(),
            workout_enabled: false,
            workout: WorkoutRecord::default(),
        }
    }

    /// Draft that edits `entry` in place.
    pub fn from_entry(entry: &DiaryEntry) -> Self {
        Self {
            editing: Some(entry.id.clone()),
            date: to_day_key(entry.timestamp).date(),
            content: entry.content.clone(),
            rating: entry.rating.clamp(1, 5),
            weather: entry.weather.clone().unwrap_or_default(),
            tags: entry.tags.clone().unwrap_or_default(),
            workout_enabled: entry.workout.is_some(),
            workout: entry.workout.clone().unwrap_or_default(),
        }
    }

    /// Id of the entry being edited, or `None` in create mode.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_update(&self) -> bool {
        self.editing.is_some()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn set_rating(&mut self, rating: i64) {
        self.rating = rating.clamp(1, 5) as u8;
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace all tags; blanks and duplicates are dropped.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.clear();
        for tag in tags {
            let trimmed = tag.as_ref().trim();
            if !trimmed.is_empty() && !self.tags.iter().any(|t| t == trimmed) {
                self.tags.push(trimmed.to_string());
            }
        }
    }

    /// Toggle one tag. Returns `true` when it is now present.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return false;
        }
        if let Some(pos) = self.tags.iter().position(|t| t == trimmed) {
            self.tags.remove(pos);
            false
        } else {
            self.tags.push(trimmed.to_string());
            true
        }
    }

    pub fn workout_enabled(&self) -> bool {
        self.workout_enabled
    }

    /// Attach or detach the workout. Detaching keeps the edits around so
    /// re-enabling restores them.
    pub fn set_workout_enabled(&mut self, enabled: bool) {
        self.workout_enabled = enabled;
    }

    pub fn workout(&self) -> &WorkoutRecord {
        &self.workout
    }

    pub fn workout_mut(&mut self) -> &mut WorkoutRecord {
        &mut self.workout
    }

    /// Blank content with no workout attached; such a draft is never saved.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty() && !self.workout_enabled
    }

    /// Materialize the draft as a stored entry with the given id.
    pub(crate) fn to_entry(&self, id: String) -> DiaryEntry {
        let weather = self.weather.trim();
        DiaryEntry {
            id,
            timestamp: noon_of(self.date),
            content: self.content.clone(),
            rating: self.rating,
            weather: (!weather.is_empty()).then(|| weather.to_string()),
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            workout: self.workout_enabled.then(|| self.workout.clone()),
        }
    }
}
