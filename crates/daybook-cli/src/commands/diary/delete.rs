use daybook_core::DiaryRepository;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::ui::{badge, print, Badge};

use super::require_entry;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut diary = ctx.diary()?;
    let entry = require_entry(&diary, &args.id)?;
    diary.delete(&entry.id)?;

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &badge(&ui_ctx, Badge::Ok, &format!("Deleted entry {}", entry.id)),
        );
    }
    Ok(())
}
