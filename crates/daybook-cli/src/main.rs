//! Daybook CLI - a local journal and body-metrics tracker
//!
//! This is the command-line interface for Daybook. It wraps the core
//! library's diary and health stores with commands, an interactive session,
//! and text/JSON output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, DiarySubcommand, HealthSubcommand};
use crate::commands::{diary, export, health, misc, session};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);
        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr, filtered by `DAYBOOK_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DAYBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Split an explicit "Hint:" line off an error message, or supply a
/// contextual hint for common failures.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            return (&error[..idx], Some(error[idx + 1..].to_string()));
        }
    }

    let error_lower = error.to_lowercase();
    let hint = if error_lower.contains("unable to reach the health assistant") {
        Some("Hint: Set GEMINI_API_KEY or `[advice] api_key` in the config file.".to_string())
    } else if error_lower.contains("refusing to overwrite") {
        Some(
            "Hint: Stored data was left untouched. Back up the database file before repairing it."
                .to_string(),
        )
    } else if error_lower.contains("storage error") {
        Some("Hint: Check `--data` / DAYBOOK_DATA points at a writable location.".to_string())
    } else if error_lower.contains("unknown body part") {
        Some("Hint: Body parts are matched case-insensitively.".to_string())
    } else {
        None
    };
    (error, hint)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Diary(args)) => match &args.command {
            DiarySubcommand::Add(add_args) => {
                diary::handle_add(ctx, add_args)?;
            }
            DiarySubcommand::Edit(edit_args) => {
                diary::handle_edit(ctx, edit_args)?;
            }
            DiarySubcommand::List(list_args) => {
                diary::handle_list(ctx, list_args)?;
            }
            DiarySubcommand::Show(show_args) => {
                diary::handle_show(ctx, show_args)?;
            }
            DiarySubcommand::Delete(delete_args) => {
                diary::handle_delete(ctx, delete_args)?;
            }
            DiarySubcommand::Calendar(calendar_args) => {
                diary::handle_calendar(ctx, calendar_args)?;
            }
        },
        Some(Commands::Health(args)) => match &args.command {
            HealthSubcommand::Record(record_args) => {
                health::handle_record(ctx, record_args)?;
            }
            HealthSubcommand::Show(show_args) => {
                health::handle_show(ctx, show_args)?;
            }
            HealthSubcommand::History(history_args) => {
                health::handle_history(ctx, history_args)?;
            }
            HealthSubcommand::Delete(delete_args) => {
                health::handle_delete(ctx, delete_args)?;
            }
            HealthSubcommand::Manage => {
                health::handle_manage(ctx)?;
            }
            HealthSubcommand::Advice(advice_args) => {
                health::handle_advice(ctx, advice_args)?;
            }
        },
        Some(Commands::Export(args)) => {
            export::handle_export(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            session::handle_session(ctx)?;
        }
    }

    Ok(())
}
