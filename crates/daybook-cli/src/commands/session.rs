//! Interactive session: a Diary tab and a Health tab, each with a full-screen
//! editor. Navigation is driven by [`AppShell`]; views reload storage every
//! time they are shown.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input, MultiSelect, Select};

use daybook_core::diary::{entry_days_with_data, CalendarMonth, SetField};
use daybook_core::shell::{AppShell, AppTab, EditorMode, Screen};
use daybook_core::storage::{DiaryEntry, WorkoutExercise, WorkoutRecord, ACTIVITY_TAGS, BODY_PARTS};
use daybook_core::{
    Clock, DiaryRepository, EntryDraft, HealthRepository, SaveOutcome, VERSION,
};

use crate::app::AppContext;
use crate::cli::{AdviceArgs, HistoryArgs};
use crate::helpers::{parse_date, parse_exercise, parse_start_time};
use crate::output::{entry_summary, print_calendar, print_current, print_entry_list};
use crate::ui::format::{format_day, format_number, short_id};
use crate::ui::{badge, blank_line, header, print, print_error, Badge, UiContext};

use super::health;

const RECENT_ENTRIES: usize = 5;

/// What the loop should do after a screen finishes.
enum Next {
    Stay,
    Quit,
}

pub fn handle_session(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    if !ui_ctx.is_interactive() {
        print_quickstart();
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let mut shell = AppShell::new();

    loop {
        let editor = match shell.screen() {
            Screen::Tab(_) => None,
            Screen::Editor(mode) => Some(mode.clone()),
        };
        let next = match editor {
            None => {
                let tab = shell.tab();
                print(&ui_ctx, &header(&ui_ctx, tab.label(), None));
                let result = match tab {
                    AppTab::Diary => diary_tab(ctx, &ui_ctx, &theme, &mut shell),
                    AppTab::Health => health_tab(ctx, &ui_ctx, &theme, &mut shell),
                };
                report(&ui_ctx, result)
            }
            Some(EditorMode::Diary(entry)) => {
                let result = diary_editor(ctx, &ui_ctx, &theme, entry.as_ref());
                shell.close_editor();
                report(&ui_ctx, result.map(|_| Next::Stay))
            }
            Some(EditorMode::Health) => {
                let result = health_editor(ctx, &ui_ctx, &theme);
                shell.close_editor();
                report(&ui_ctx, result.map(|_| Next::Stay))
            }
        };
        if let Next::Quit = next {
            return Ok(());
        }
        blank_line(&ui_ctx);
    }
}

fn print_quickstart() {
    println!("Daybook v{}", VERSION);
    println!("\nQuickstart:");
    println!("  daybook diary add --content \"Hello\"");
    println!("  daybook diary list");
    println!("  daybook health record --height 170 --weight 65");
    println!("  daybook health show");
    println!("\nRun `daybook` in a terminal for the interactive session, or `daybook --help` for full usage.");
}

/// Errors inside the session are shown and the session continues.
fn report(ui_ctx: &UiContext, result: anyhow::Result<Next>) -> Next {
    match result {
        Ok(next) => next,
        Err(err) => {
            print_error(ui_ctx, &err.to_string(), None);
            Next::Stay
        }
    }
}

fn diary_tab(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    theme: &ColorfulTheme,
    shell: &mut AppShell,
) -> anyhow::Result<Next> {
    let entries = ctx.diary()?.load()?;
    if entries.is_empty() {
        print(ui_ctx, "No entries yet.");
    } else {
        print_entry_list(ui_ctx, &entries[..entries.len().min(RECENT_ENTRIES)]);
    }
    blank_line(ui_ctx);

    let actions = [
        "New entry",
        "Edit entry",
        "Delete entry",
        "Calendar",
        "Switch to Health",
        "Quit",
    ];
    let choice = Select::with_theme(theme)
        .with_prompt("Diary")
        .default(0)
        .items(&actions)
        .interact_opt()?;

    match choice {
        Some(0) => shell.open_editor(EditorMode::Diary(None)),
        Some(1) => {
            if let Some(entry) = pick_entry(theme, &entries, "Edit which entry?")? {
                shell.open_editor(EditorMode::Diary(Some(entry)));
            }
        }
        Some(2) => {
            if let Some(entry) = pick_entry(theme, &entries, "Delete which entry?")? {
                let confirmed = Confirm::with_theme(theme)
                    .with_prompt(format!("Delete entry from {}?", format_day(entry.timestamp)))
                    .default(false)
                    .interact()?;
                if confirmed {
                    ctx.diary()?.delete(&entry.id)?;
                    print(ui_ctx, &badge(ui_ctx, Badge::Ok, "Deleted entry"));
                }
            }
        }
        Some(3) => browse_calendar(ctx, ui_ctx, theme)?,
        Some(4) => {
            shell.switch_tab(AppTab::Health);
        }
        _ => return Ok(Next::Quit),
    }
    Ok(Next::Stay)
}

/// Month grid with previous/next navigation.
fn browse_calendar(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    theme: &ColorfulTheme,
) -> anyhow::Result<()> {
    let today = ctx.clock().today();
    let marked = entry_days_with_data(&ctx.diary()?.load()?);
    let mut month = CalendarMonth::containing(today);
    let actions = ["Previous month", "Next month", "Back"];
    loop {
        print_calendar(ui_ctx, &month, &marked, today);
        blank_line(ui_ctx);
        let choice = Select::with_theme(theme)
            .with_prompt("Calendar")
            .default(0)
            .items(&actions)
            .interact_opt()?;
        month = match choice {
            Some(0) => month.previous(),
            Some(1) => month.next(),
            _ => return Ok(()),
        };
    }
}

fn pick_entry(
    theme: &ColorfulTheme,
    entries: &[DiaryEntry],
    prompt: &str,
) -> anyhow::Result<Option<DiaryEntry>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "{}  {}  {}",
                short_id(&e.id),
                format_day(e.timestamp),
                entry_summary(e)
            )
        })
        .collect();
    let picked = FuzzySelect::with_theme(theme)
        .with_prompt(prompt)
        .default(0)
        .items(&labels)
        .interact_opt()?;
    Ok(picked.and_then(|index| entries.get(index).cloned()))
}

fn diary_editor(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    theme: &ColorfulTheme,
    entry: Option<&DiaryEntry>,
) -> anyhow::Result<()> {
    let mut draft = match entry {
        Some(existing) => EntryDraft::from_entry(existing),
        None => EntryDraft::new(ctx.clock().today()),
    };

    let date: String = Input::with_theme(theme)
        .with_prompt("Date")
        .default(draft.date.to_string())
        .interact_text()?;
    draft.date = parse_date(&date)?;

    draft.content = Input::with_theme(theme)
        .with_prompt("Entry")
        .with_initial_text(draft.content.clone())
        .allow_empty(true)
        .interact_text()?;

    let ratings = ["1", "2", "3", "4", "5"];
    let rating = Select::with_theme(theme)
        .with_prompt("Mood")
        .default(usize::from(draft.rating().saturating_sub(1)))
        .items(&ratings)
        .interact()?;
    draft.set_rating(rating as i64 + 1);

    draft.weather = Input::with_theme(theme)
        .with_prompt("Weather")
        .with_initial_text(draft.weather.clone())
        .allow_empty(true)
        .interact_text()?;

    let tag_defaults: Vec<bool> = ACTIVITY_TAGS
        .iter()
        .map(|tag| draft.tags().iter().any(|t| t == *tag))
        .collect();
    let tags = MultiSelect::with_theme(theme)
        .with_prompt("Activities")
        .items(ACTIVITY_TAGS)
        .defaults(&tag_defaults)
        .interact()?;
    // Only changed tags flip; tags outside the list stay.
    for (index, tag) in ACTIVITY_TAGS.iter().enumerate() {
        if tags.contains(&index) != tag_defaults[index] {
            draft.toggle_tag(tag);
        }
    }

    let log_workout = Confirm::with_theme(theme)
        .with_prompt("Log a workout?")
        .default(draft.workout_enabled())
        .interact()?;
    draft.set_workout_enabled(log_workout);
    if log_workout {
        workout_editor(theme, &mut draft)?;
    }

    match ctx.diary()?.save(&draft)? {
        SaveOutcome::Skipped => print(ui_ctx, &badge(ui_ctx, Badge::Warn, "Nothing to save")),
        SaveOutcome::Created(_) => print(ui_ctx, &badge(ui_ctx, Badge::Ok, "Added diary entry")),
        SaveOutcome::Updated(_) => print(ui_ctx, &badge(ui_ctx, Badge::Ok, "Saved diary entry")),
    }
    Ok(())
}

fn workout_editor(theme: &ColorfulTheme, draft: &mut EntryDraft) -> anyhow::Result<()> {
    let workout = draft.workout_mut();

    let start: String = Input::with_theme(theme)
        .with_prompt("Start time (HH:MM)")
        .default(workout.start_time.clone())
        .interact_text()?;
    workout.start_time = parse_start_time(&start)?;

    let duration: f64 = Input::with_theme(theme)
        .with_prompt("Duration (min)")
        .default(workout.duration)
        .interact_text()?;
    workout.set_duration(duration);

    let intensity: i64 = Input::with_theme(theme)
        .with_prompt("Intensity (1-5)")
        .default(i64::from(workout.intensity))
        .interact_text()?;
    workout.set_intensity(intensity);

    let part_defaults: Vec<bool> = BODY_PARTS
        .iter()
        .map(|part| workout.body_parts.iter().any(|p| p == *part))
        .collect();
    let parts = MultiSelect::with_theme(theme)
        .with_prompt("Body parts")
        .items(BODY_PARTS)
        .defaults(&part_defaults)
        .interact()?;
    workout.body_parts.clear();
    for index in parts {
        workout.toggle_body_part(BODY_PARTS[index])?;
    }

    workout.warmup = Input::with_theme(theme)
        .with_prompt("Warm-up")
        .with_initial_text(workout.warmup.clone())
        .allow_empty(true)
        .interact_text()?;

    exercise_editor(theme, workout)?;

    loop {
        let raw: String = Input::with_theme(theme)
            .with_prompt("Exercise as NAME=WEIGHTxREPS,... (blank to finish)")
            .allow_empty(true)
            .interact_text()?;
        if raw.trim().is_empty() {
            break;
        }
        let (name, sets) = parse_exercise(&raw)?;
        let index = workout.add_exercise();
        workout.rename_exercise(index, &name)?;
        if !sets.is_empty() {
            workout.exercises[index].sets = sets;
        }
    }
    Ok(())
}

/// Rename, edit or remove the exercises already on the workout.
fn exercise_editor(theme: &ColorfulTheme, workout: &mut WorkoutRecord) -> anyhow::Result<()> {
    let actions = [
        "Rename",
        "Add set",
        "Edit set",
        "Remove set",
        "Remove exercise",
        "Back",
    ];
    while !workout.exercises.is_empty() {
        let mut labels: Vec<String> = workout
            .exercises
            .iter()
            .enumerate()
            .map(|(index, exercise)| exercise_label(index, exercise))
            .collect();
        labels.push("Done".to_string());
        let picked = Select::with_theme(theme)
            .with_prompt("Exercises")
            .default(labels.len() - 1)
            .items(&labels)
            .interact_opt()?;
        let exercise = match picked {
            Some(index) if index < workout.exercises.len() => index,
            _ => break,
        };

        let action = Select::with_theme(theme)
            .with_prompt(labels[exercise].as_str())
            .default(0)
            .items(&actions)
            .interact_opt()?;
        match action {
            Some(0) => {
                let name: String = Input::with_theme(theme)
                    .with_prompt("Name")
                    .with_initial_text(workout.exercises[exercise].name.clone())
                    .interact_text()?;
                workout.rename_exercise(exercise, name.trim())?;
            }
            Some(1) => workout.add_set(exercise)?,
            Some(2) => {
                if let Some(set) = pick_set(theme, &workout.exercises[exercise])? {
                    let current = workout.exercises[exercise].sets[set];
                    let weight: f64 = Input::with_theme(theme)
                        .with_prompt("Weight (kg)")
                        .default(current.weight)
                        .interact_text()?;
                    workout.update_set(exercise, set, SetField::Weight, weight)?;
                    let reps: f64 = Input::with_theme(theme)
                        .with_prompt("Reps")
                        .default(current.reps)
                        .interact_text()?;
                    workout.update_set(exercise, set, SetField::Reps, reps)?;
                }
            }
            Some(3) => {
                if let Some(set) = pick_set(theme, &workout.exercises[exercise])? {
                    workout.remove_set(exercise, set)?;
                }
            }
            Some(4) => {
                workout.remove_exercise(exercise)?;
            }
            _ => {}
        }
    }
    Ok(())
}

fn exercise_label(index: usize, exercise: &WorkoutExercise) -> String {
    let sets: Vec<String> = exercise
        .sets
        .iter()
        .map(|s| format!("{}x{}", format_number(s.weight), format_number(s.reps)))
        .collect();
    format!("{}. {} {}", index + 1, exercise.name, sets.join(" "))
}

fn pick_set(theme: &ColorfulTheme, exercise: &WorkoutExercise) -> anyhow::Result<Option<usize>> {
    let labels: Vec<String> = exercise
        .sets
        .iter()
        .enumerate()
        .map(|(index, s)| {
            format!(
                "Set {}: {} kg x {}",
                index + 1,
                format_number(s.weight),
                format_number(s.reps)
            )
        })
        .collect();
    Ok(Select::with_theme(theme)
        .with_prompt("Which set?")
        .default(0)
        .items(&labels)
        .interact_opt()?)
}

fn health_tab(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    theme: &ColorfulTheme,
    shell: &mut AppShell,
) -> anyhow::Result<Next> {
    let snapshot = health::load_snapshot(&ctx.health()?, &ctx.clock())?;
    print_current(ui_ctx, &snapshot.current);
    blank_line(ui_ctx);

    let actions = [
        "Record measurements",
        "History",
        "Manage history",
        "Health advice",
        "Switch to Diary",
        "Quit",
    ];
    let choice = Select::with_theme(theme)
        .with_prompt("Health")
        .default(0)
        .items(&actions)
        .interact_opt()?;

    match choice {
        Some(0) => shell.open_editor(EditorMode::Health),
        Some(1) => {
            let args = HistoryArgs {
                all: false,
                json: false,
                format: None,
            };
            health::handle_history(ctx, &args)?;
        }
        Some(2) => health::handle_manage(ctx)?,
        Some(3) => health::handle_advice(ctx, &AdviceArgs { json: false })?,
        Some(4) => {
            shell.switch_tab(AppTab::Diary);
        }
        _ => return Ok(Next::Quit),
    }
    Ok(Next::Stay)
}

fn health_editor(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    theme: &ColorfulTheme,
) -> anyhow::Result<()> {
    let clock = ctx.clock();
    let mut repo = ctx.health()?;
    let snapshot = health::load_snapshot(&repo, &clock)?;
    let date: String = Input::with_theme(theme)
        .with_prompt("Date")
        .default(clock.today().to_string())
        .interact_text()?;
    let mut draft = health::dated_draft(&snapshot, clock.today(), Some(&date))?;
    health::prompt_measurements(&mut draft)?;

    let date = draft.date.to_string();
    let record = draft.into_record();
    let history = repo.save(record.clone())?;
    health::print_receipt(ui_ctx, &record, &date, history.len());
    Ok(())
}
