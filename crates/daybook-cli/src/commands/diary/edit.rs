use daybook_core::{DiaryRepository, EntryDraft, SaveOutcome};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{parse_date, read_from_editor};
use crate::ui::{badge, print, Badge};

use super::{apply_workout, require_entry};

fn has_changes(args: &EditArgs) -> bool {
    args.content.is_some()
        || args.editor
        || args.date.is_some()
        || args.rating.is_some()
        || args.weather.is_some()
        || !args.tag.is_empty()
        || args.clear_tags
        || args.workout.any()
        || args.no_workout
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if !has_changes(args) {
        return Err(CliError::invalid_input(
            "Nothing to change (use --content, --editor, --date, --rating, --tag or workout flags)",
        )
        .into());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let mut diary = ctx.diary()?;
    let entry = require_entry(&diary, &args.id)?;
    let mut draft = EntryDraft::from_entry(&entry);

    if let Some(content) = &args.content {
        draft.content = content.clone();
    } else if args.editor {
        draft.content = read_from_editor(ctx.editor()?, &entry.content)?;
    }
    if let Some(value) = &args.date {
        draft.date = parse_date(value)?;
    }
    if let Some(rating) = args.rating {
        draft.set_rating(rating);
    }
    if let Some(weather) = &args.weather {
        draft.weather = weather.clone();
    }
    if args.clear_tags {
        draft.set_tags(Vec::<String>::new());
    } else if !args.tag.is_empty() {
        draft.set_tags(&args.tag);
    }
    if args.no_workout {
        draft.set_workout_enabled(false);
    } else {
        apply_workout(&mut draft, &args.workout)?;
    }

    match diary.save(&draft)? {
        SaveOutcome::Skipped => {
            if !ctx.quiet() {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Warn,
                        "Entry would be empty; left unchanged (use `daybook diary delete` to remove it)",
                    ),
                );
            }
        }
        SaveOutcome::Created(saved) | SaveOutcome::Updated(saved) => {
            if !ctx.quiet() {
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Ok, &format!("Edited entry {}", saved.id)),
                );
            }
        }
    }
    Ok(())
}
