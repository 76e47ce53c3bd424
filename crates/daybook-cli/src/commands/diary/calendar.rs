use daybook_core::diary::{entry_days_with_data, CalendarMonth};
use daybook_core::{Clock, DayKey, DiaryRepository};

use crate::app::AppContext;
use crate::cli::CalendarArgs;
use crate::output::{calendar_json, print_calendar};
use crate::ui::OutputFormat;

pub fn handle_calendar(ctx: &AppContext, args: &CalendarArgs) -> anyhow::Result<()> {
    OutputFormat::parse(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    let today = ctx.clock().today();
    let month = match &args.month {
        Some(value) => CalendarMonth::parse(value)?,
        None => CalendarMonth::containing(today),
    };

    let diary = ctx.diary()?;
    let marked = entry_days_with_data(&diary.load()?);

    if ui_ctx.mode.is_json() {
        let mut days: Vec<DayKey> = marked
            .iter()
            .copied()
            .filter(|day| CalendarMonth::containing(day.date()) == month)
            .collect();
        days.sort();
        println!(
            "{}",
            serde_json::to_string_pretty(&calendar_json(&month, &days))?
        );
        return Ok(());
    }

    print_calendar(&ui_ctx, &month, &marked, today);
    Ok(())
}
