use daybook_core::{Clock, DiaryRepository, EntryDraft, SaveOutcome};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_date, read_content};
use crate::ui::format::short_id;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, print, Badge, OutputMode};

use super::apply_workout;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut draft = EntryDraft::new(ctx.clock().today());

    if let Some(value) = &args.date {
        draft.date = parse_date(value)?;
    }
    if let Some(rating) = args.rating {
        draft.set_rating(rating);
    }
    if let Some(weather) = &args.weather {
        draft.weather = weather.clone();
    }
    draft.set_tags(&args.tag);
    apply_workout(&mut draft, &args.workout)?;

    // A workout-only entry needs no text, so don't open an editor for it.
    let no_input = args.no_input || (args.content.is_none() && draft.workout_enabled());
    draft.content = read_content(no_input, args.content.clone(), ctx.editor()?)?;

    let mut diary = ctx.diary()?;
    let entry = match diary.save(&draft)? {
        SaveOutcome::Created(entry) | SaveOutcome::Updated(entry) => entry,
        SaveOutcome::Skipped => {
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Nothing to save"));
            }
            return Ok(());
        }
    };

    if ctx.quiet() {
        println!("{}", entry.id);
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Added diary entry"));
            let context = format!(
                "ID: {}  \u{00B7}  {}  \u{00B7}  tags: {}",
                short_id(&entry.id),
                draft.date,
                draft.tags().len()
            );
            println!("{}", styled(&context, styles::dim(), ui_ctx.color));
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    &format!(
                        "daybook diary show {}  \u{00B7}  daybook diary list",
                        short_id(&entry.id)
                    ),
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("entry_id={}", entry.id);
            println!("date={}", draft.date);
            println!("tag_count={}", draft.tags().len());
            println!("workout={}", entry.workout.is_some());
        }
    }
    Ok(())
}
