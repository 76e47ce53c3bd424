use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_json, print_entry};
use crate::ui::OutputFormat;

use super::require_entry;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    OutputFormat::parse(args.format.as_deref())?;
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    let diary = ctx.diary()?;
    let entry = require_entry(&diary, &args.id)?;
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry)?)?);
    } else {
        print_entry(&ui_ctx, &entry, ctx.quiet());
    }
    Ok(())
}
