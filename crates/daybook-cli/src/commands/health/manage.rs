//! Interactive select-and-delete over the health history.
//!
//! Deleting takes two presses of the delete action within the confirmation
//! window; choosing records again disarms a pending delete.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{MultiSelect, Select};

use daybook_core::health::{DeleteAction, HistorySelection, SelectionPhase, CONFIRM_WINDOW};
use daybook_core::storage::HealthMetrics;
use daybook_core::HealthRepository;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge, UiContext};

use super::{load_snapshot, record_label};

pub fn handle_manage(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    if !ui_ctx.is_interactive() {
        return Err(CliError::invalid_input(
            "`health manage` needs a terminal; use `daybook health delete <DATE>... --yes`",
        )
        .into());
    }

    let clock = ctx.clock();
    let mut health = ctx.health()?;
    let mut history = load_snapshot(&health, &clock)?.history;
    let mut selection = HistorySelection::new();
    selection.enter();
    let theme = ColorfulTheme::default();

    loop {
        if history.is_empty() {
            print(&ui_ctx, "No measurements recorded.");
            return Ok(());
        }
        selection.refresh(&clock);

        let count = selection.selected().len();
        let delete_label = match selection.phase() {
            SelectionPhase::ConfirmingDelete { .. } => {
                format!("Press again to delete {} record(s)", count)
            }
            _ => format!("Delete selected ({})", count),
        };
        let actions = [
            "Choose records".to_string(),
            "Select all / clear".to_string(),
            delete_label,
            "Done".to_string(),
        ];
        let choice = Select::with_theme(&theme)
            .with_prompt("Manage history")
            .default(if count > 0 { 2 } else { 0 })
            .items(&actions)
            .interact_opt()?;

        match choice {
            Some(0) => choose_records(&theme, &history, &mut selection)?,
            Some(1) => selection.toggle_all(history.iter().map(|r| r.last_updated)),
            Some(2) => match selection.press_delete(&clock) {
                DeleteAction::Disabled => {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Select records first"));
                }
                DeleteAction::AwaitingConfirmation => {
                    print(
                        &ui_ctx,
                        &badge(
                            &ui_ctx,
                            Badge::Warn,
                            &format!(
                                "Delete again within {} seconds to confirm",
                                CONFIRM_WINDOW.as_secs()
                            ),
                        ),
                    );
                }
                DeleteAction::Execute(ids) => {
                    let outcome = health.delete_many(&ids)?;
                    report_deleted(&ui_ctx, outcome.removed);
                    history = outcome.history;
                    selection.enter();
                }
            },
            _ => return Ok(()),
        }
    }
}

fn choose_records(
    theme: &ColorfulTheme,
    history: &[HealthMetrics],
    selection: &mut HistorySelection,
) -> anyhow::Result<()> {
    let labels: Vec<String> = history.iter().map(record_label).collect();
    let defaults: Vec<bool> = history
        .iter()
        .map(|r| selection.is_selected(r.last_updated))
        .collect();
    let Some(picked) = MultiSelect::with_theme(theme)
        .with_prompt("Records (space to toggle, enter to accept)")
        .items(&labels)
        .defaults(&defaults)
        .interact_opt()?
    else {
        return Ok(());
    };

    for (index, record) in history.iter().enumerate() {
        if picked.contains(&index) != selection.is_selected(record.last_updated) {
            selection.toggle(record.last_updated);
        }
    }
    Ok(())
}

fn report_deleted(ui_ctx: &UiContext, removed: usize) {
    print(
        ui_ctx,
        &badge(ui_ctx, Badge::Ok, &format!("Deleted {} record(s)", removed)),
    );
}
