//! Month grid for the diary calendar.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{DaybookError, Result};

/// One calendar month laid out in Sunday-first weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| {
                DaybookError::InvalidInput(format!("Invalid month: {}-{:02}", year, month))
            })
    }

    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid =
            || DaybookError::InvalidInput(format!("Invalid month (expected YYYY-MM): {}", value));
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self.first - Months::new(1),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.first + Months::new(1),
        }
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.first + Months::new(1);
        (next - self.first).num_days() as u32
    }

    /// Grid cells: a blank for each weekday before the 1st, then every day.
    pub fn cells(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![None; leading];
        cells.extend(
            (1..=self.days_in_month()).filter_map(|d| self.first.with_day(d).map(Some)),
        );
        cells
    }
}
