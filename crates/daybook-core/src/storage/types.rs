//! Persisted record shapes.
//!
//! Field names serialize in camelCase and optional fields are skipped when
//! absent, so the stored JSON distinguishes "no tags" from an empty list.

use serde::{Deserialize, Serialize};

/// Fixed vocabulary for [`WorkoutRecord::body_parts`].
pub const BODY_PARTS: &[&str] = &[
    "Chest",
    "Back",
    "Shoulders",
    "Legs",
    "Arms",
    "Core",
    "Full body",
    "Cardio",
];

/// Suggested activity tags offered by the diary editor.
pub const ACTIVITY_TAGS: &[&str] = &[
    "Work",
    "Study",
    "Exercise",
    "Food",
    "Social",
    "Entertainment",
    "Shopping",
    "Rest",
    "Travel",
    "Creative",
];

/// A diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Opaque unique identifier
    pub id: String,

    /// Epoch milliseconds, local noon of the entry date
    pub timestamp: i64,

    /// Free text; may be empty only when a workout is attached
    pub content: String,

    /// Mood rating, 1-5
    pub rating: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,

    /// Omitted entirely when there are no tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutRecord>,
}

/// A workout attached to a diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Start time as `HH:MM`
    pub start_time: String,

    /// Duration in minutes. Stored as a plain number; older data may carry
    /// fractions.
    pub duration: f64,

    pub body_parts: Vec<String>,

    /// Intensity, 1-5
    pub intensity: u8,

    #[serde(default)]
    pub warmup: String,

    pub exercises: Vec<WorkoutExercise>,
}

impl Default for WorkoutRecord {
    fn default() -> Self {
        Self {
            start_time: "18:00".to_string(),
            duration: 60.0,
            body_parts: Vec::new(),
            intensity: 3,
            warmup: String::new(),
            exercises: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub weight: f64,
    pub reps: f64,
}

/// Gender used for reference ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// A body-metrics snapshot.
///
/// The same shape serves as the "current" singleton and as a history row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// Height in centimeters
    pub height: f64,

    /// Weight in kilograms
    pub weight: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,

    /// Muscle mass in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visceral_fat_level: Option<f64>,

    /// Epoch milliseconds, local noon of the record date
    pub last_updated: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl HealthMetrics {
    /// Neutral snapshot used when nothing has been recorded yet.
    pub fn neutral(now_millis: i64) -> Self {
        Self {
            height: 170.0,
            weight: 65.0,
            body_fat_percentage: None,
            muscle_mass: None,
            visceral_fat_level: None,
            last_updated: now_millis,
            gender: Some(Gender::Male),
        }
    }
}

/// Assessment returned by the health assistant. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAdvice {
    pub bmi: f64,
    pub status: String,
    pub advice: String,
}
