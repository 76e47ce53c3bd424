mod add;
mod calendar;
mod delete;
mod edit;
mod list;
mod show;

pub use add::handle_add;
pub use calendar::handle_calendar;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use show::handle_show;

use daybook_core::diary::SetField;
use daybook_core::storage::{DiaryEntry, WorkoutRecord};
use daybook_core::{DiaryRepository, EntryDraft};

use crate::cli::WorkoutArgs;
use crate::errors::CliError;
use crate::helpers::{
    parse_exercise, parse_position, parse_rename, parse_set_ref, parse_set_value, parse_start_time,
};

const LIST_HINT: &str = "Hint: Run `daybook diary list` to find entry IDs.";

/// Look up an entry by full id or unique id prefix.
pub(crate) fn require_entry<R: DiaryRepository>(
    repo: &R,
    id: &str,
) -> anyhow::Result<DiaryEntry> {
    let needle = id.trim();
    let mut matches: Vec<DiaryEntry> = repo
        .load()?
        .into_iter()
        .filter(|entry| !needle.is_empty() && entry.id.starts_with(needle))
        .collect();
    if let Some(pos) = matches.iter().position(|entry| entry.id == needle) {
        return Ok(matches.swap_remove(pos));
    }
    match matches.len() {
        0 => Err(CliError::not_found(format!("Entry not found: {}", needle), LIST_HINT).into()),
        1 => Ok(matches.remove(0)),
        n => Err(CliError::invalid_input(format!(
            "Ambiguous entry ID {} matches {} entries",
            needle, n
        ))
        .into()),
    }
}

/// Apply workout flags to a draft. Body parts and exercises given on the
/// command line replace the draft's lists; per-exercise edits then run
/// against the resulting list.
pub(crate) fn apply_workout(draft: &mut EntryDraft, args: &WorkoutArgs) -> anyhow::Result<()> {
    if !args.any() {
        return Ok(());
    }
    draft.set_workout_enabled(true);
    let workout = draft.workout_mut();

    if let Some(value) = &args.start_time {
        workout.start_time = parse_start_time(value)?;
    }
    if let Some(minutes) = args.duration {
        workout.set_duration(minutes);
    }
    if let Some(level) = args.intensity {
        workout.set_intensity(level);
    }
    if !args.body_part.is_empty() {
        workout.body_parts.clear();
        for part in &args.body_part {
            if !workout.toggle_body_part(part)? {
                // Named twice; keep it selected.
                workout.toggle_body_part(part)?;
            }
        }
    }
    if let Some(warmup) = &args.warmup {
        workout.warmup = warmup.clone();
    }
    if !args.exercise.is_empty() {
        workout.exercises.clear();
        for raw in &args.exercise {
            let (name, sets) = parse_exercise(raw)?;
            let index = workout.add_exercise();
            workout.rename_exercise(index, &name)?;
            if !sets.is_empty() {
                workout.exercises[index].sets = sets;
            }
        }
    }
    edit_exercises(workout, args)
}

/// Positions are 1-based and refer to the list as it stands when each
/// step runs: renames, added sets, set values, removed sets, removed
/// exercises.
fn edit_exercises(workout: &mut WorkoutRecord, args: &WorkoutArgs) -> anyhow::Result<()> {
    for raw in &args.rename_exercise {
        let (exercise, name) = parse_rename(raw)?;
        workout.rename_exercise(exercise, &name)?;
    }
    for raw in &args.add_set {
        workout.add_set(parse_position(raw)?)?;
    }
    for raw in &args.set_weight {
        let (exercise, set, value) = parse_set_value(raw)?;
        workout.update_set(exercise, set, SetField::Weight, value)?;
    }
    for raw in &args.set_reps {
        let (exercise, set, value) = parse_set_value(raw)?;
        workout.update_set(exercise, set, SetField::Reps, value)?;
    }
    for raw in &args.remove_set {
        let (exercise, set) = parse_set_ref(raw)?;
        if workout.remove_set(exercise, set)? {
            tracing::debug!(exercise = exercise + 1, "removed exercise with its last set");
        }
    }
    for raw in &args.remove_exercise {
        workout.remove_exercise(parse_position(raw)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daybook_core::{DiaryStore, MemoryStore};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_apply_workout_builds_exercises() {
        let mut draft = EntryDraft::new(today());
        let args = WorkoutArgs {
            body_part: vec!["legs".to_string(), "Legs".to_string()],
            exercise: vec!["Squat=60x8,70x5".to_string(), "Plank".to_string()],
            intensity: Some(9),
            ..WorkoutArgs::default()
        };
        apply_workout(&mut draft, &args).unwrap();

        let workout = draft.workout();
        assert!(draft.workout_enabled());
        assert_eq!(workout.body_parts, vec!["Legs"]);
        assert_eq!(workout.intensity, 5);
        assert_eq!(workout.exercises.len(), 2);
        assert_eq!(workout.exercises[0].sets.len(), 2);
        assert_eq!(workout.exercises[1].name, "Plank");
        assert_eq!(workout.exercises[1].sets.len(), 1);
    }

    #[test]
    fn test_apply_workout_edits_sets_in_place() {
        let mut draft = EntryDraft::new(today());
        let build = WorkoutArgs {
            exercise: vec!["Squat=60x8,70x5".to_string(), "Row=50x10".to_string()],
            ..WorkoutArgs::default()
        };
        apply_workout(&mut draft, &build).unwrap();

        let edits = WorkoutArgs {
            rename_exercise: vec!["1=Front squat".to_string()],
            add_set: vec!["1".to_string()],
            set_weight: vec!["1:3=-10".to_string()],
            set_reps: vec!["1:1=7.5".to_string()],
            remove_set: vec!["1:2".to_string(), "2:1".to_string()],
            ..WorkoutArgs::default()
        };
        apply_workout(&mut draft, &edits).unwrap();

        let workout = draft.workout();
        assert_eq!(workout.exercises.len(), 1);
        let squat = &workout.exercises[0];
        assert_eq!(squat.name, "Front squat");
        assert_eq!(squat.sets.len(), 2);
        assert_eq!(squat.sets[0].reps, 7.5);
        assert_eq!(squat.sets[1].weight, 0.0);
        assert_eq!(squat.sets[1].reps, 5.0);
    }

    #[test]
    fn test_apply_workout_rejects_missing_exercise() {
        let mut draft = EntryDraft::new(today());
        let args = WorkoutArgs {
            remove_exercise: vec!["1".to_string()],
            ..WorkoutArgs::default()
        };
        assert!(apply_workout(&mut draft, &args).is_err());
    }

    #[test]
    fn test_apply_workout_without_flags_leaves_draft() {
        let mut draft = EntryDraft::new(today());
        apply_workout(&mut draft, &WorkoutArgs::default()).unwrap();
        assert!(!draft.workout_enabled());
    }

    #[test]
    fn test_require_entry_by_prefix() {
        let mut repo = DiaryStore::new(MemoryStore::new());
        let mut draft = EntryDraft::new(today());
        draft.content = "hello".to_string();
        repo.save(&draft).unwrap();
        let stored = repo.load().unwrap().remove(0);

        let found = require_entry(&repo, &stored.id[..8]).unwrap();
        assert_eq!(found.id, stored.id);

        let err = require_entry(&repo, "zzzz").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound { .. })
        ));
    }
}
