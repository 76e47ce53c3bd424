use crate::app::AppContext;
use crate::cli::HealthShowArgs;
use crate::output::{current_json, print_current};
use crate::ui::{blank_line, header, hint, print, OutputFormat};

use super::load_snapshot;

pub fn handle_show(ctx: &AppContext, args: &HealthShowArgs) -> anyhow::Result<()> {
    OutputFormat::parse(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    let health = ctx.health()?;
    let snapshot = load_snapshot(&health, &ctx.clock())?;

    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&current_json(&snapshot.current)?)?
        );
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "health", None));
    }
    print_current(&ui_ctx, &snapshot.current);
    if snapshot.history.is_empty() && !ctx.quiet() {
        blank_line(&ui_ctx);
        print(
            &ui_ctx,
            &hint(
                &ui_ctx,
                "Nothing recorded yet; these are defaults. Run `daybook health record`.",
            ),
        );
    }
    Ok(())
}
