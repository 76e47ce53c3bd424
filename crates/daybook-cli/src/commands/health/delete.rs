use std::collections::BTreeSet;

use dialoguer::Confirm;

use daybook_core::health::CurrentSync;
use daybook_core::storage::HealthMetrics;
use daybook_core::{to_day_key, DayKey, HealthRepository};

use crate::app::AppContext;
use crate::cli::HealthDeleteArgs;
use crate::errors::CliError;
use crate::helpers::parse_date;
use crate::ui::{badge, hint, print, Badge, OutputMode};

use super::load_snapshot;

/// History ids (`lastUpdated`) of the rows falling on `days`, plus the days
/// that matched nothing.
pub(crate) fn ids_for_days(
    history: &[HealthMetrics],
    days: &BTreeSet<DayKey>,
) -> (BTreeSet<i64>, Vec<DayKey>) {
    let ids: BTreeSet<i64> = history
        .iter()
        .filter(|record| days.contains(&to_day_key(record.last_updated)))
        .map(|record| record.last_updated)
        .collect();
    let missing = days
        .iter()
        .copied()
        .filter(|day| {
            !history
                .iter()
                .any(|record| to_day_key(record.last_updated) == *day)
        })
        .collect();
    (ids, missing)
}

pub fn handle_delete(ctx: &AppContext, args: &HealthDeleteArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let days = args
        .dates
        .iter()
        .map(|value| parse_date(value).map(DayKey::from_date))
        .collect::<Result<BTreeSet<_>, _>>()?;

    let mut health = ctx.health()?;
    let history = load_snapshot(&health, &ctx.clock())?.history;
    let (ids, missing) = ids_for_days(&history, &days);

    if ids.is_empty() {
        return Err(CliError::not_found(
            "No records on the given dates",
            "Hint: Run `daybook health history --all` to see recorded dates.",
        )
        .into());
    }
    if !missing.is_empty() && !ctx.quiet() {
        let listed: Vec<String> = missing.iter().map(ToString::to_string).collect();
        print(
            &ui_ctx,
            &badge(
                &ui_ctx,
                Badge::Warn,
                &format!("No record on {}", listed.join(", ")),
            ),
        );
    }

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input(
                "Refusing to delete without confirmation (pass --yes)",
            )
            .into());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} record(s)?", ids.len()))
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
                }
            }
            return Ok(());
        }
    }

    let outcome = health.delete_many(&ids)?;
    if ctx.quiet() {
        return Ok(());
    }
    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Deleted {} record(s)", outcome.removed),
                ),
            );
            if outcome.history.is_empty() {
                print(
                    &ui_ctx,
                    &hint(
                        &ui_ctx,
                        "History is empty; the current snapshot keeps its last saved values.",
                    ),
                );
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("removed={}", outcome.removed);
            println!("remaining={}", outcome.history.len());
            println!(
                "current={}",
                match outcome.current {
                    CurrentSync::Resynced(_) => "resynced",
                    CurrentSync::Retained => "retained",
                }
            );
        }
    }
    Ok(())
}
