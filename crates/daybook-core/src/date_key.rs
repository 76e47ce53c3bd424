//! Calendar-day keys.
//!
//! A [`DayKey`] is the equality test for "same day" everywhere in Daybook:
//! the diary calendar filter, calendar markers, and the one-record-per-day
//! rule of the health history. Keys are computed in local time, never UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Serialize, Serializer};

use crate::error::DaybookError;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A local calendar date, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| {
                DaybookError::InvalidInput(format!("Invalid date (expected YYYY-MM-DD): {}", s))
            })
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Day key of an epoch-millisecond timestamp in local time.
pub fn to_day_key(timestamp_millis: i64) -> DayKey {
    to_day_key_in(timestamp_millis, &Local)
}

/// Day key of an epoch-millisecond timestamp in the given zone.
pub fn to_day_key_in<Tz: TimeZone>(timestamp_millis: i64, zone: &Tz) -> DayKey {
    let instant = DateTime::<Utc>::from_timestamp_millis(timestamp_millis).unwrap_or_default();
    DayKey(instant.with_timezone(zone).date_naive())
}

/// Epoch millis of local noon on `date`.
///
/// Editors stamp records at noon so small zone shifts never move them to a
/// neighbouring day.
pub fn noon_of(date: NaiveDate) -> i64 {
    noon_of_in(date, &Local)
}

/// Epoch millis of noon on `date` in the given zone.
pub fn noon_of_in<Tz: TimeZone>(date: NaiveDate, zone: &Tz) -> i64 {
    let naive = date.and_hms_opt(12, 0, 0).unwrap_or_default();
    match zone.from_local_datetime(&naive).earliest() {
        Some(local) => local.timestamp_millis(),
        None => naive.and_utc().timestamp_millis(),
    }
}
