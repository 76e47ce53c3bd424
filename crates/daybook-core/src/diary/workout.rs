//! Editing operations on a workout log.
//!
//! Every numeric edit clamps to the valid range instead of failing; only
//! structural mistakes (a missing exercise or set, an unknown body part)
//! are reported as errors.

use crate::error::{DaybookError, Result};
use crate::storage::{WorkoutExercise, WorkoutRecord, WorkoutSet, BODY_PARTS};

/// Which number of a set is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Weight,
    Reps,
}

impl WorkoutRecord {
    /// Append an unnamed exercise with one empty set. Returns its index.
    pub fn add_exercise(&mut self) -> usize {
        self.exercises.push(WorkoutExercise {
            name: String::new(),
            sets: vec![WorkoutSet::default()],
        });
        self.exercises.len() - 1
    }

    pub fn rename_exercise(&mut self, exercise: usize, name: &str) -> Result<()> {
        self.exercise_mut(exercise)?.name = name.to_string();
        Ok(())
    }

    pub fn remove_exercise(&mut self, exercise: usize) -> Result<WorkoutExercise> {
        if exercise >= self.exercises.len() {
            return Err(missing_exercise(exercise));
        }
        Ok(self.exercises.remove(exercise))
    }

    /// Append a set copying the exercise's last set, or a zero set.
    pub fn add_set(&mut self, exercise: usize) -> Result<()> {
        let target = self.exercise_mut(exercise)?;
        let next = target.sets.last().copied().unwrap_or_default();
        target.sets.push(next);
        Ok(())
    }

    /// Overwrite one field of a set, clamping negatives to zero.
    pub fn update_set(
        &mut self,
        exercise: usize,
        set: usize,
        field: SetField,
        value: f64,
    ) -> Result<()> {
        let target = self
            .exercise_mut(exercise)?
            .sets
            .get_mut(set)
            .ok_or_else(|| missing_set(exercise, set))?;
        let clamped = value.max(0.0);
        match field {
            SetField::Weight => target.weight = clamped,
            SetField::Reps => target.reps = clamped,
        }
        Ok(())
    }

    /// Remove a set. Removing the last set removes the exercise too.
    ///
    /// Returns `true` when the exercise was removed.
    pub fn remove_set(&mut self, exercise: usize, set: usize) -> Result<bool> {
        let target = self.exercise_mut(exercise)?;
        if set >= target.sets.len() {
            return Err(missing_set(exercise, set));
        }
        target.sets.remove(set);
        if target.sets.is_empty() {
            self.exercises.remove(exercise);
            return Ok(true);
        }
        Ok(false)
    }

    /// Toggle a body part from [`BODY_PARTS`]. Returns `true` when now selected.
    pub fn toggle_body_part(&mut self, part: &str) -> Result<bool> {
        let canonical = BODY_PARTS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(part.trim()))
            .ok_or_else(|| {
                DaybookError::InvalidInput(format!(
                    "Unknown body part \"{}\" (expected one of: {})",
                    part,
                    BODY_PARTS.join(", ")
                ))
            })?;

        if let Some(pos) = self.body_parts.iter().position(|p| p == canonical) {
            self.body_parts.remove(pos);
            Ok(false)
        } else {
            self.body_parts.push(canonical.to_string());
            Ok(true)
        }
    }

    pub fn set_duration(&mut self, minutes: f64) {
        self.duration = minutes.max(0.0);
    }

    pub fn set_intensity(&mut self, level: i64) {
        self.intensity = level.clamp(1, 5) as u8;
    }

    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    fn exercise_mut(&mut self, exercise: usize) -> Result<&mut WorkoutExercise> {
        self.exercises
            .get_mut(exercise)
            .ok_or_else(|| missing_exercise(exercise))
    }
}

fn missing_exercise(exercise: usize) -> DaybookError {
    DaybookError::InvalidInput(format!("No exercise #{}", exercise + 1))
}

fn missing_set(exercise: usize, set: usize) -> DaybookError {
    DaybookError::InvalidInput(format!(
        "No set #{} in exercise #{}",
        set + 1,
        exercise + 1
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_exercise_has_one_empty_set() {
        let mut workout = WorkoutRecord::default();
        let idx = workout.add_exercise();
        assert_eq!(idx, 0);
        assert_eq!(workout.exercises[0].name, "");
        assert_eq!(workout.exercises[0].sets, vec![WorkoutSet::default()]);
    }

    #[test]
    fn test_add_set_copies_previous() {
        let mut workout = WorkoutRecord::default();
        workout.add_exercise();
        workout.update_set(0, 0, SetField::Weight, 60.0).unwrap();
        workout.update_set(0, 0, SetField::Reps, 8.0).unwrap();
        workout.add_set(0).unwrap();
        assert_eq!(workout.exercises[0].sets.len(), 2);
        assert_eq!(workout.exercises[0].sets[1].weight, 60.0);
        assert_eq!(workout.exercises[0].sets[1].reps, 8.0);
    }

    #[test]
    fn test_update_set_clamps_negative() {
        let mut workout = WorkoutRecord::default();
        workout.add_exercise();
        workout.update_set(0, 0, SetField::Weight, -20.0).unwrap();
        workout.update_set(0, 0, SetField::Reps, -3.0).unwrap();
        assert_eq!(workout.exercises[0].sets[0].weight, 0.0);
        assert_eq!(workout.exercises[0].sets[0].reps, 0.0);
    }

    #[test]
    fn test_removing_last_set_removes_exercise() {
        let mut workout = WorkoutRecord::default();
        workout.add_exercise();
        workout.rename_exercise(0, "Bench press").unwrap();
        workout.add_exercise();
        workout.rename_exercise(1, "Row").unwrap();
        workout.add_set(1).unwrap();

        assert!(!workout.remove_set(1, 0).unwrap());
        assert_eq!(workout.exercises.len(), 2);

        assert!(workout.remove_set(0, 0).unwrap());
        assert_eq!(workout.exercises.len(), 1);
        assert_eq!(workout.exercises[0].name, "Row");
    }

    #[test]
    fn test_out_of_range_indexes_are_errors() {
        let mut workout = WorkoutRecord::default();
        assert!(workout.add_set(0).is_err());
        workout.add_exercise();
        assert!(workout.remove_set(0, 3).is_err());
        assert!(workout.remove_exercise(4).is_err());
    }

    #[test]
    fn test_toggle_body_part_uses_vocabulary() {
        let mut workout = WorkoutRecord::default();
        assert!(workout.toggle_body_part("legs").unwrap());
        assert_eq!(workout.body_parts, vec!["Legs".to_string()]);
        assert!(!workout.toggle_body_part("Legs").unwrap());
        assert!(workout.body_parts.is_empty());
        assert!(workout.toggle_body_part("Elbows").is_err());
    }

    #[test]
    fn test_duration_and_intensity_clamp() {
        let mut workout = WorkoutRecord::default();
        workout.set_duration(-10.0);
        workout.set_intensity(9);
        assert_eq!(workout.duration, 0.0);
        assert_eq!(workout.intensity, 5);
        workout.set_intensity(0);
        assert_eq!(workout.intensity, 1);
    }
}
