use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use daybook_core::metrics::compute_bmi;
use daybook_core::storage::{Gender, HealthMetrics};
use daybook_core::{Clock, HealthDraft, HealthRepository};

use crate::app::AppContext;
use crate::cli::RecordArgs;
use crate::errors::CliError;
use crate::helpers::parse_gender;
use crate::ui::format::{format_number, format_optional};
use crate::ui::{print, receipt, OutputMode, UiContext};

use super::{dated_draft, load_snapshot};

fn has_measurements(args: &RecordArgs) -> bool {
    args.height.is_some()
        || args.weight.is_some()
        || args.body_fat.is_some()
        || args.muscle.is_some()
        || args.visceral.is_some()
        || args.gender.is_some()
}

pub fn handle_record(ctx: &AppContext, args: &RecordArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let clock = ctx.clock();
    let mut health = ctx.health()?;
    let snapshot = load_snapshot(&health, &clock)?;

    let mut draft = dated_draft(&snapshot, clock.today(), args.date.as_deref())?;

    if has_measurements(args) {
        apply_flags(&mut draft, args)?;
    } else if ui_ctx.is_interactive() {
        prompt_measurements(&mut draft)?;
    } else {
        return Err(CliError::invalid_input(
            "No measurements given (use --height, --weight, --body-fat, --muscle, --visceral or --gender)",
        )
        .into());
    }

    let date = draft.date;
    let record = draft.into_record();
    let history = health.save(record.clone())?;

    if ctx.quiet() {
        return Ok(());
    }
    print_receipt(&ui_ctx, &record, &date.to_string(), history.len());
    Ok(())
}

fn apply_flags(draft: &mut HealthDraft, args: &RecordArgs) -> anyhow::Result<()> {
    if let Some(cm) = args.height {
        draft.set_height(cm);
    }
    if let Some(kg) = args.weight {
        draft.set_weight(kg);
    }
    if args.body_fat.is_some() {
        draft.set_body_fat(args.body_fat);
    }
    if args.muscle.is_some() {
        draft.set_muscle_mass(args.muscle);
    }
    if args.visceral.is_some() {
        draft.set_visceral_fat(args.visceral);
    }
    if let Some(value) = &args.gender {
        draft.set_gender(parse_gender(value)?);
    }
    Ok(())
}

pub(crate) fn prompt_measurements(draft: &mut HealthDraft) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();
    let current = draft.metrics().clone();

    let height: f64 = Input::with_theme(&theme)
        .with_prompt("Height (cm)")
        .default(current.height)
        .interact_text()?;
    draft.set_height(height);

    let weight: f64 = Input::with_theme(&theme)
        .with_prompt("Weight (kg)")
        .default(current.weight)
        .interact_text()?;
    draft.set_weight(weight);

    draft.set_body_fat(prompt_optional(&theme, "Body fat (%)", current.body_fat_percentage)?);
    draft.set_muscle_mass(prompt_optional(&theme, "Muscle mass (kg)", current.muscle_mass)?);
    draft.set_visceral_fat(prompt_optional(
        &theme,
        "Visceral fat level",
        current.visceral_fat_level,
    )?);

    let genders = ["male", "female"];
    let selected = match current.gender {
        Some(Gender::Female) => 1,
        _ => 0,
    };
    let choice = Select::with_theme(&theme)
        .with_prompt("Gender")
        .default(selected)
        .items(&genders)
        .interact()?;
    if choice != selected {
        draft.toggle_gender();
    }
    println!();
    Ok(())
}

/// Blank input leaves the metric unset.
fn prompt_optional(
    theme: &ColorfulTheme,
    prompt: &str,
    current: Option<f64>,
) -> anyhow::Result<Option<f64>> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .default(current.map(format_number).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CliError::invalid_input(format!("Not a number: {}", trimmed)).into())
}

pub(crate) fn print_receipt(
    ui_ctx: &UiContext,
    record: &HealthMetrics,
    date: &str,
    rows: usize,
) {
    let bmi = format_number(compute_bmi(record.height, record.weight));
    match ui_ctx.mode {
        OutputMode::Pretty => {
            let height = format!("{} cm", format_number(record.height));
            let weight = format!("{} kg", format_number(record.weight));
            let body_fat = format_optional(record.body_fat_percentage, "%");
            let history = rows.to_string();
            let title = format!("Recorded measurements for {}", date);
            print(
                ui_ctx,
                &receipt(
                    ui_ctx,
                    &title,
                    &[
                        ("Height", height.as_str()),
                        ("Weight", weight.as_str()),
                        ("BMI", bmi.as_str()),
                        ("Body fat", body_fat.as_str()),
                        ("History", history.as_str()),
                    ],
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("date={}", date);
            println!("bmi={}", bmi);
            println!("history_rows={}", rows);
        }
    }
}
