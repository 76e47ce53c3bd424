use daybook_core::diary::filter_by_day;
use daybook_core::{DayKey, DiaryRepository};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::helpers::parse_date;
use crate::output::{entries_json, print_entry_list};
use crate::ui::{header, print, OutputFormat};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    OutputFormat::parse(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    let day = args
        .date
        .as_deref()
        .map(parse_date)
        .transpose()?
        .map(DayKey::from_date);

    let diary = ctx.diary()?;
    let mut entries = filter_by_day(&diary.load()?, day);
    // A day view shows everything for that day; the limit only trims the full list.
    let limit = args
        .limit
        .or_else(|| day.is_none().then_some(DEFAULT_LIST_LIMIT));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(&entries)?)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !ctx.quiet() {
            let message = match day {
                Some(key) => format!("No entries on {}", key),
                None => "No entries yet. Add one with `daybook diary add`.".to_string(),
            };
            print(&ui_ctx, &message);
        }
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        let context = day.map(|key| key.to_string());
        print(&ui_ctx, &header(&ui_ctx, "diary list", context.as_deref()));
    }
    print_entry_list(&ui_ctx, &entries);
    Ok(())
}
