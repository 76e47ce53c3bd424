//! JSON output shapes.
//!
//! Stored records are emitted with their persisted camelCase fields plus a
//! derived `date` (local day key) so scripts need not convert timestamps.

use serde_json::{json, Value};

use daybook_core::diary::CalendarMonth;
use daybook_core::metrics::{compute_bmi, reference_ranges};
use daybook_core::storage::{DiaryEntry, HealthMetrics};
use daybook_core::{to_day_key, DayKey};

pub fn entry_json(entry: &DiaryEntry) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(entry)?;
    value["date"] = json!(to_day_key(entry.timestamp));
    Ok(value)
}

pub fn entries_json(entries: &[DiaryEntry]) -> anyhow::Result<Vec<Value>> {
    entries.iter().map(entry_json).collect()
}

/// A health record with its BMI and date.
pub fn metrics_json(metrics: &HealthMetrics) -> anyhow::Result<Value> {
    let mut value = serde_json::to_value(metrics)?;
    value["date"] = json!(to_day_key(metrics.last_updated));
    value["bmi"] = json!(compute_bmi(metrics.height, metrics.weight));
    Ok(value)
}

/// The current snapshot with reference ranges for its gender.
pub fn current_json(current: &HealthMetrics) -> anyhow::Result<Value> {
    Ok(json!({
        "current": metrics_json(current)?,
        "ranges": reference_ranges(current.gender),
    }))
}

pub fn history_json(rows: &[HealthMetrics], total: usize) -> anyhow::Result<Value> {
    let rows: Vec<Value> = rows.iter().map(metrics_json).collect::<anyhow::Result<_>>()?;
    Ok(json!({
        "total": total,
        "records": rows,
    }))
}

pub fn calendar_json(month: &CalendarMonth, marked: &[DayKey]) -> Value {
    json!({
        "month": format!("{}-{:02}", month.year(), month.month()),
        "daysInMonth": month.days_in_month(),
        "daysWithEntries": marked,
    })
}
