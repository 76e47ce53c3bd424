//! Parsing helpers for dates, genders, exercise specs and set positions.

use chrono::{NaiveDate, NaiveTime};

use daybook_core::storage::{Gender, WorkoutSet};

use crate::errors::CliError;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value))
    })
}

/// Parse an `HH:MM` start time, normalized to two-digit fields.
pub fn parse_start_time(value: &str) -> Result<String, CliError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| CliError::invalid_input(format!("Invalid time (expected HH:MM): {}", value)))
}

pub fn parse_gender(value: &str) -> Result<Gender, CliError> {
    Gender::parse(value).ok_or_else(|| {
        CliError::invalid_input(format!("Invalid gender: {} (use male or female)", value))
    })
}

/// Parse `NAME=WEIGHTxREPS,WEIGHTxREPS`. `NAME` alone adds an exercise with
/// no sets. Negative numbers are clamped to zero.
pub fn parse_exercise(raw: &str) -> Result<(String, Vec<WorkoutSet>), CliError> {
    let invalid = || {
        CliError::invalid_input(format!(
            "Invalid exercise: {} (expected NAME=WEIGHTxREPS,...)",
            raw
        ))
    };

    let (name, sets) = match raw.split_once('=') {
        Some((name, sets)) => (name.trim(), sets.trim()),
        None => (raw.trim(), ""),
    };
    if name.is_empty() {
        return Err(invalid());
    }

    let mut parsed = Vec::new();
    for set in sets.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (weight, reps) = set
            .split_once(|c| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;
        let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
        let reps: f64 = reps.trim().parse().map_err(|_| invalid())?;
        parsed.push(WorkoutSet {
            weight: weight.max(0.0),
            reps: reps.max(0.0),
        });
    }
    Ok((name.to_string(), parsed))
}

/// Parse a 1-based position into an index.
pub fn parse_position(raw: &str) -> Result<usize, CliError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CliError::invalid_input(format!(
            "Invalid position: {} (expected a number from 1)",
            raw
        ))),
    }
}

/// Parse `EXERCISE:SET`, both 1-based, into indexes.
pub fn parse_set_ref(raw: &str) -> Result<(usize, usize), CliError> {
    let (exercise, set) = raw.split_once(':').ok_or_else(|| {
        CliError::invalid_input(format!("Invalid set: {} (expected EXERCISE:SET)", raw))
    })?;
    Ok((parse_position(exercise)?, parse_position(set)?))
}

/// Parse `EXERCISE:SET=VALUE`. Negative values are kept for the caller to clamp.
pub fn parse_set_value(raw: &str) -> Result<(usize, usize, f64), CliError> {
    let invalid = || {
        CliError::invalid_input(format!(
            "Invalid set value: {} (expected EXERCISE:SET=VALUE)",
            raw
        ))
    };
    let (position, value) = raw.split_once('=').ok_or_else(invalid)?;
    let (exercise, set) = parse_set_ref(position)?;
    let value: f64 = value.trim().parse().map_err(|_| invalid())?;
    Ok((exercise, set, value))
}

/// Parse `EXERCISE=NAME`.
pub fn parse_rename(raw: &str) -> Result<(usize, String), CliError> {
    let (position, name) = raw.split_once('=').ok_or_else(|| {
        CliError::invalid_input(format!("Invalid rename: {} (expected EXERCISE=NAME)", raw))
    })?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::invalid_input("Exercise name cannot be empty"));
    }
    Ok((parse_position(position)?, name.to_string()))
}
