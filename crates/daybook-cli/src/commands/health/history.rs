use daybook_core::health::displayed_history;

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::output::{history_json, print_history};
use crate::ui::{header, print, OutputFormat};

use super::load_snapshot;

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    OutputFormat::parse(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    let health = ctx.health()?;
    let history = load_snapshot(&health, &ctx.clock())?.history;
    let rows = displayed_history(&history, args.all);

    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&history_json(rows, history.len())?)?
        );
        return Ok(());
    }

    if history.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No measurements recorded yet.");
        }
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "health history", None));
    }
    print_history(&ui_ctx, rows, history.len());
    Ok(())
}
