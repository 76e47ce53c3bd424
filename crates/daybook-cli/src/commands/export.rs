use std::path::Path;

use serde_json::{json, Value};

use daybook_core::fs::write_atomic;
use daybook_core::storage::{
    decode, Decoded, DiaryEntry, HealthMetrics, DIARY_ENTRIES_KEY, HEALTH_HISTORY_KEY,
    HEALTH_METRICS_KEY,
};
use daybook_core::KeyValueStore;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::ui::{print, receipt};

/// All stored data as one JSON object keyed like the store. Malformed blobs
/// export as their defaults; an unrecorded current snapshot exports as null.
pub(crate) fn export_document<S: KeyValueStore>(store: &S) -> anyhow::Result<Value> {
    let raw = store.get(DIARY_ENTRIES_KEY)?;
    let entries: Vec<DiaryEntry> = decode(DIARY_ENTRIES_KEY, raw.as_deref()).unwrap_or_default();

    let raw = store.get(HEALTH_METRICS_KEY)?;
    let current = match decode::<HealthMetrics>(HEALTH_METRICS_KEY, raw.as_deref()) {
        Decoded::Value(metrics) => serde_json::to_value(metrics)?,
        Decoded::UseDefault => Value::Null,
    };

    let raw = store.get(HEALTH_HISTORY_KEY)?;
    let history: Vec<HealthMetrics> =
        decode(HEALTH_HISTORY_KEY, raw.as_deref()).unwrap_or_default();

    Ok(json!({
        DIARY_ENTRIES_KEY: entries,
        HEALTH_METRICS_KEY: current,
        HEALTH_HISTORY_KEY: history,
    }))
}

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let store = ctx.open_store()?;
    let document = export_document(&store)?;
    let text = serde_json::to_string_pretty(&document)?;

    let destination = Path::new(&args.destination);
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create export directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    write_atomic(destination, text.as_bytes())?;
    tracing::info!(path = %destination.display(), "exported data");

    if !ctx.quiet() {
        let entries = document[DIARY_ENTRIES_KEY]
            .as_array()
            .map_or(0, Vec::len)
            .to_string();
        let records = document[HEALTH_HISTORY_KEY]
            .as_array()
            .map_or(0, Vec::len)
            .to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Exported to {}", args.destination),
                &[
                    ("Diary entries", entries.as_str()),
                    ("Health records", records.as_str()),
                ],
            ),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::MemoryStore;

    #[test]
    fn test_export_document_defaults() {
        let store = MemoryStore::new().with(DIARY_ENTRIES_KEY, "not json");
        let document = export_document(&store).unwrap();
        assert_eq!(document[DIARY_ENTRIES_KEY], json!([]));
        assert!(document[HEALTH_METRICS_KEY].is_null());
        assert_eq!(document[HEALTH_HISTORY_KEY], json!([]));
    }
}
