//! Storage layer: key-value backends, record shapes, and blob decoding.

mod decode;
mod memory;
mod sqlite;
mod traits;
mod types;

pub use decode::{decode, decode_for_write, encode, Decoded};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{
    KeyValueStore, ALL_KEYS, DIARY_ENTRIES_KEY, HEALTH_HISTORY_KEY, HEALTH_METRICS_KEY,
};
pub use types::{
    DiaryEntry, Gender, HealthAdvice, HealthMetrics, WorkoutExercise, WorkoutRecord, WorkoutSet,
    ACTIVITY_TAGS, BODY_PARTS,
};
