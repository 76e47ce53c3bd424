//! Text and table output for diary entries and health records.

use std::collections::HashSet;

use chrono::NaiveDate;

use daybook_core::diary::CalendarMonth;
use daybook_core::metrics::{compute_bmi, reference_ranges};
use daybook_core::storage::{DiaryEntry, HealthAdvice, HealthMetrics, WorkoutRecord};
use daybook_core::DayKey;

use crate::constants::TABLE_SUMMARY_MAX;
use crate::ui::format::{
    format_day, format_number, format_optional, short_id, single_line, stars, truncate, wrap,
};
use crate::ui::theme::{styled, styles, MARKER};
use crate::ui::{blank_line, divider, kv, simple_table, table, UiContext};

const ENTRY_HEADERS: &[&str] = &["ID", "DATE", "RATING", "SUMMARY"];
const HISTORY_HEADERS: &[&str] = &[
    "DATE", "HEIGHT", "WEIGHT", "BMI", "BODY FAT", "MUSCLE", "VISCERAL",
];

/// One line per entry; plain mode prints full ids so they can be piped.
pub fn print_entry_list(ctx: &UiContext, entries: &[DiaryEntry]) {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let id = if ctx.mode.is_pretty() {
                short_id(&entry.id)
            } else {
                entry.id.clone()
            };
            vec![
                id,
                format_day(entry.timestamp),
                if ctx.mode.is_pretty() {
                    stars(entry.rating, ctx.unicode)
                } else {
                    entry.rating.to_string()
                },
                entry_summary(entry),
            ]
        })
        .collect();
    println!("{}", simple_table(ctx, ENTRY_HEADERS, &rows));
}

/// Content for tables: the text, or a workout summary for workout-only entries.
pub fn entry_summary(entry: &DiaryEntry) -> String {
    let text = single_line(entry.content.trim());
    let summary = match (&entry.workout, text.is_empty()) {
        (Some(workout), true) => workout_summary(workout),
        (Some(workout), false) => format!("{} [{}]", text, workout_summary(workout)),
        (None, _) => text,
    };
    truncate(&summary, TABLE_SUMMARY_MAX)
}

fn workout_summary(workout: &WorkoutRecord) -> String {
    let parts = if workout.body_parts.is_empty() {
        "workout".to_string()
    } else {
        workout.body_parts.join("/")
    };
    format!("{} {}min", parts, format_number(workout.duration))
}

pub fn print_entry(ctx: &UiContext, entry: &DiaryEntry, quiet: bool) {
    if !quiet {
        println!("{}", kv(ctx, "Id", &entry.id));
        println!("{}", kv(ctx, "Date", &format_day(entry.timestamp)));
        let rating = if ctx.mode.is_pretty() {
            stars(entry.rating, ctx.unicode)
        } else {
            entry.rating.to_string()
        };
        println!("{}", kv(ctx, "Rating", &rating));
        if let Some(weather) = &entry.weather {
            println!("{}", kv(ctx, "Weather", weather));
        }
        if let Some(tags) = &entry.tags {
            println!("{}", kv(ctx, "Tags", &tags.join(", ")));
        }
        if let Some(workout) = &entry.workout {
            print_workout(ctx, workout);
        }
        blank_line(ctx);
    }
    if !entry.content.is_empty() {
        if ctx.mode.is_pretty() {
            for line in wrap(&entry.content, ctx.width.min(80)) {
                println!("{}", line);
            }
        } else {
            println!("{}", entry.content);
        }
    }
}

fn print_workout(ctx: &UiContext, workout: &WorkoutRecord) {
    println!(
        "{}",
        kv(
            ctx,
            "Workout",
            &format!(
                "{} for {} min, intensity {}/5",
                workout.start_time,
                format_number(workout.duration),
                workout.intensity
            )
        )
    );
    if !workout.body_parts.is_empty() {
        println!("{}", kv(ctx, "Body parts", &workout.body_parts.join(", ")));
    }
    if !workout.warmup.is_empty() {
        println!("{}", kv(ctx, "Warmup", &workout.warmup));
    }
    for (index, exercise) in workout.exercises.iter().enumerate() {
        let sets: Vec<String> = exercise
            .sets
            .iter()
            .map(|s| format!("{}x{}", format_number(s.weight), format_number(s.reps)))
            .collect();
        let name = if exercise.name.is_empty() {
            "(unnamed)"
        } else {
            exercise.name.as_str()
        };
        let label = format!("Exercise {}", index + 1);
        println!("{}", kv(ctx, &label, &format!("{} {}", name, sets.join(" "))));
    }
    if !workout.exercises.is_empty() {
        println!("{}", kv(ctx, "Total sets", &workout.set_count().to_string()));
    }
}

/// Sunday-first month grid with entry days marked.
pub fn print_calendar(
    ctx: &UiContext,
    month: &CalendarMonth,
    marked: &HashSet<DayKey>,
    today: NaiveDate,
) {
    if !ctx.mode.is_pretty() {
        let mut days: Vec<&DayKey> = marked
            .iter()
            .filter(|d| CalendarMonth::containing(d.date()) == *month)
            .collect();
        days.sort();
        for day in days {
            println!("{}", day);
        }
        return;
    }

    println!(
        "{}",
        styled(
            &format!("{}-{:02}", month.year(), month.month()),
            styles::bold(),
            ctx.color
        )
    );
    println!(" Su  Mo  Tu  We  Th  Fr  Sa");
    let marker = MARKER.get(ctx.unicode);
    let mut line = String::new();
    for (i, cell) in month.cells().iter().enumerate() {
        let text = match cell {
            None => "    ".to_string(),
            Some(date) => {
                let has_entry = marked.contains(&DayKey::from_date(*date));
                let label = format!(
                    "{:>3}{}",
                    chrono::Datelike::day(date),
                    if has_entry { marker } else { " " }
                );
                if has_entry {
                    styled(&label, styles::marked(), ctx.color)
                } else if *date == today {
                    styled(&label, styles::bold(), ctx.color)
                } else {
                    label
                }
            }
        };
        line.push_str(&text);
        if i % 7 == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }
}

/// Current snapshot with BMI and reference ranges.
pub fn print_current(ctx: &UiContext, current: &HealthMetrics) {
    let ranges = reference_ranges(current.gender);
    let gender = current.gender.map(|g| g.as_str()).unwrap_or("male");
    let bmi = compute_bmi(current.height, current.weight);

    if !ctx.mode.is_pretty() {
        println!("{}", kv(ctx, "Date", &format_day(current.last_updated)));
        println!("{}", kv(ctx, "Gender", gender));
        println!("{}", kv(ctx, "Height", &format_number(current.height)));
        println!("{}", kv(ctx, "Weight", &format_number(current.weight)));
        println!("{}", kv(ctx, "BMI", &format_number(bmi)));
        println!("{}", kv(ctx, "Body fat", &format_optional(current.body_fat_percentage, "")));
        println!("{}", kv(ctx, "Muscle", &format_optional(current.muscle_mass, "")));
        println!("{}", kv(ctx, "Visceral", &format_optional(current.visceral_fat_level, "")));
        return;
    }

    println!("{}", kv(ctx, "Updated", &format_day(current.last_updated)));
    println!("{}", kv(ctx, "Gender", gender));
    let rows = vec![
        vec![
            "Height".to_string(),
            format!("{} cm", format_number(current.height)),
            String::new(),
        ],
        vec![
            "Weight".to_string(),
            format!("{} kg", format_number(current.weight)),
            String::new(),
        ],
        vec!["BMI".to_string(), format_number(bmi), ranges.bmi.to_string()],
        vec![
            "Body fat".to_string(),
            format_optional(current.body_fat_percentage, "%"),
            ranges.body_fat.to_string(),
        ],
        vec![
            "Muscle".to_string(),
            format_optional(current.muscle_mass, " kg"),
            ranges.muscle.to_string(),
        ],
        vec![
            "Visceral fat".to_string(),
            format_optional(current.visceral_fat_level, ""),
            ranges.visceral.to_string(),
        ],
    ];
    println!("{}", table(ctx, &["METRIC", "VALUE", "REFERENCE"], &rows));
}

/// History rows, noting how many are hidden when collapsed.
pub fn print_history(ctx: &UiContext, rows: &[HealthMetrics], total: usize) {
    let table_rows: Vec<Vec<String>> = rows.iter().map(history_row).collect();
    println!("{}", simple_table(ctx, HISTORY_HEADERS, &table_rows));
    if ctx.mode.is_pretty() && total > rows.len() {
        println!(
            "{}",
            styled(
                &format!(
                    "{} of {} records shown (use --all for everything)",
                    rows.len(),
                    total
                ),
                styles::dim(),
                ctx.color
            )
        );
    }
}

pub fn history_row(record: &HealthMetrics) -> Vec<String> {
    vec![
        format_day(record.last_updated),
        format_number(record.height),
        format_number(record.weight),
        format_number(compute_bmi(record.height, record.weight)),
        format_optional(record.body_fat_percentage, ""),
        format_optional(record.muscle_mass, ""),
        format_optional(record.visceral_fat_level, ""),
    ]
}

pub fn print_advice(ctx: &UiContext, advice: &HealthAdvice) {
    println!("{}", kv(ctx, "BMI", &format_number(advice.bmi)));
    println!("{}", kv(ctx, "Status", &advice.status));
    if ctx.mode.is_pretty() {
        println!("{}", divider(ctx));
        for line in wrap(&advice.advice, ctx.width.min(80)) {
            println!("{}", line);
        }
    } else {
        println!("{}", kv(ctx, "Advice", &single_line(&advice.advice)));
    }
}
