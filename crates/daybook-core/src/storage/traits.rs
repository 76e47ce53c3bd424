//! Key-value storage interface.
//!
//! Each record collection lives as one JSON blob under its own key. Stores
//! never interpret the blobs; decoding happens in the repositories.

use crate::error::Result;

/// Key holding the diary entry array.
pub const DIARY_ENTRIES_KEY: &str = "diary_entries";

/// Key holding the current health metrics snapshot.
pub const HEALTH_METRICS_KEY: &str = "health_metrics";

/// Key holding the health history array.
pub const HEALTH_HISTORY_KEY: &str = "health_history";

/// All keys Daybook writes, in export order.
pub const ALL_KEYS: &[&str] = &[DIARY_ENTRIES_KEY, HEALTH_METRICS_KEY, HEALTH_HISTORY_KEY];

/// Synchronous string key-value storage.
///
/// Implementations must ensure:
/// - A `set` fully replaces the previous value or fails without effect
/// - Reads after a successful `set` observe the new value
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Replace several keys as one write.
    ///
    /// The default writes them in order; backends with transactions should
    /// override this so a failure leaves every key untouched.
    fn set_many(&mut self, pairs: &[(&str, &str)]) -> Result<()> {
        for (key, value) in pairs {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn set_many(&mut self, pairs: &[(&str, &str)]) -> Result<()> {
        (**self).set_many(pairs)
    }
}
