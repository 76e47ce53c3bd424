use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use daybook_core::VERSION;

/// Daybook - a local journal and body-metrics tracker
#[derive(Parser)]
#[command(name = "daybook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the database file
    #[arg(short, long, global = true, env = "DAYBOOK_DATA", value_name = "PATH")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write, browse and delete diary entries
    Diary(DiaryArgs),

    /// Record body metrics and review history
    Health(HealthArgs),

    /// Write all stored data to a JSON file
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DiaryArgs {
    #[command(subcommand)]
    pub command: DiarySubcommand,
}

#[derive(Subcommand)]
pub enum DiarySubcommand {
    /// Add a new entry
    Add(AddArgs),
    /// Edit an existing entry
    Edit(EditArgs),
    /// List entries, newest first
    List(ListArgs),
    /// Show one entry
    Show(ShowArgs),
    /// Delete one entry
    Delete(DeleteArgs),
    /// Show a month with the days that have entries
    Calendar(CalendarArgs),
}

/// Workout fields shared by `add` and `edit`.
#[derive(Args, Default)]
pub struct WorkoutArgs {
    /// Attach a workout to the entry
    #[arg(long)]
    pub workout: bool,

    /// Workout start time (HH:MM)
    #[arg(long, value_name = "HH:MM")]
    pub start_time: Option<String>,

    /// Workout duration in minutes
    #[arg(long, value_name = "MINUTES", allow_negative_numbers = true)]
    pub duration: Option<f64>,

    /// Workout intensity (1-5)
    #[arg(long, allow_negative_numbers = true)]
    pub intensity: Option<i64>,

    /// Trained body part (repeatable)
    #[arg(long = "body-part", value_name = "PART")]
    pub body_part: Vec<String>,

    /// Warm-up notes
    #[arg(long)]
    pub warmup: Option<String>,

    /// Exercise as NAME=WEIGHTxREPS,... (repeatable, replaces the list)
    #[arg(long, value_name = "SPEC")]
    pub exercise: Vec<String>,

    /// Rename exercise N (repeatable)
    #[arg(long = "rename-exercise", value_name = "N=NAME")]
    pub rename_exercise: Vec<String>,

    /// Append a set to exercise N, copying its last set (repeatable)
    #[arg(long = "add-set", value_name = "N")]
    pub add_set: Vec<String>,

    /// Set the weight of set S in exercise N (repeatable)
    #[arg(long = "set-weight", value_name = "N:S=KG", allow_hyphen_values = true)]
    pub set_weight: Vec<String>,

    /// Set the reps of set S in exercise N (repeatable)
    #[arg(long = "set-reps", value_name = "N:S=REPS", allow_hyphen_values = true)]
    pub set_reps: Vec<String>,

    /// Remove set S from exercise N; removing its last set removes the exercise
    #[arg(long = "remove-set", value_name = "N:S")]
    pub remove_set: Vec<String>,

    /// Remove exercise N (repeatable)
    #[arg(long = "remove-exercise", value_name = "N")]
    pub remove_exercise: Vec<String>,
}

impl WorkoutArgs {
    /// Whether any workout detail was given.
    pub fn any(&self) -> bool {
        self.workout
            || self.start_time.is_some()
            || self.duration.is_some()
            || self.intensity.is_some()
            || !self.body_part.is_empty()
            || self.warmup.is_some()
            || !self.exercise.is_empty()
            || self.edits_exercises()
    }

    /// Whether any per-exercise or per-set edit was given.
    pub fn edits_exercises(&self) -> bool {
        !self.rename_exercise.is_empty()
            || !self.add_set.is_empty()
            || !self.set_weight.is_empty()
            || !self.set_reps.is_empty()
            || !self.remove_set.is_empty()
            || !self.remove_exercise.is_empty()
    }
}

#[derive(Args)]
pub struct AddArgs {
    /// Entry text (overrides stdin/editor)
    #[arg(long)]
    pub content: Option<String>,

    /// Entry date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    /// Mood rating (1-5)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rating: Option<i64>,

    /// Weather note
    #[arg(long)]
    pub weather: Option<String>,

    /// Activity tag (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    #[command(flatten)]
    pub workout: WorkoutArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Replace the entry text
    #[arg(long)]
    pub content: Option<String>,

    /// Open the entry text in the editor
    #[arg(long)]
    pub editor: bool,

    /// Move the entry to another date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Mood rating (1-5)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rating: Option<i64>,

    /// Weather note (empty string clears it)
    #[arg(long)]
    pub weather: Option<String>,

    /// Replace activity tags (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Remove all activity tags
    #[arg(long, conflicts_with = "tag")]
    pub clear_tags: bool,

    #[command(flatten)]
    pub workout: WorkoutArgs,

    /// Detach the workout
    #[arg(long, conflicts_with = "workout")]
    pub no_workout: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only entries on this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM, default current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct HealthArgs {
    #[command(subcommand)]
    pub command: HealthSubcommand,
}

#[derive(Subcommand)]
pub enum HealthSubcommand {
    /// Record measurements for a day (replaces that day's record)
    Record(RecordArgs),
    /// Show the current snapshot with BMI and reference ranges
    Show(HealthShowArgs),
    /// Show the measurement history
    History(HistoryArgs),
    /// Delete history records by date
    Delete(HealthDeleteArgs),
    /// Select and delete history records interactively
    Manage,
    /// Ask the health assistant for an assessment
    Advice(AdviceArgs),
}

#[derive(Args)]
pub struct RecordArgs {
    /// Record date (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    /// Height in cm
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Weight in kg
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Body fat percentage
    #[arg(long, allow_negative_numbers = true)]
    pub body_fat: Option<f64>,

    /// Muscle mass in kg
    #[arg(long, allow_negative_numbers = true)]
    pub muscle: Option<f64>,

    /// Visceral fat level
    #[arg(long, allow_negative_numbers = true)]
    pub visceral: Option<f64>,

    /// Gender (male, female)
    #[arg(long)]
    pub gender: Option<String>,
}

#[derive(Args)]
pub struct HealthShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Show every record instead of the most recent ones
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

#[derive(Args)]
pub struct HealthDeleteArgs {
    /// Dates of the records to delete (YYYY-MM-DD)
    #[arg(value_name = "DATE", required = true)]
    pub dates: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct AdviceArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file
    #[arg(value_name = "DEST")]
    pub destination: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_diary_add_with_workout() {
        let cli = Cli::try_parse_from([
            "daybook",
            "diary",
            "add",
            "--content",
            "leg day",
            "--exercise",
            "Squat=60x8,60x8",
            "--body-part",
            "Legs",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Diary(DiaryArgs {
                command: DiarySubcommand::Add(args),
            })) => {
                assert_eq!(args.content.as_deref(), Some("leg day"));
                assert!(args.workout.any());
                assert_eq!(args.workout.exercise, vec!["Squat=60x8,60x8"]);
            }
            _ => panic!("expected diary add"),
        }
    }

    #[test]
    fn test_health_delete_requires_dates() {
        assert!(Cli::try_parse_from(["daybook", "health", "delete"]).is_err());
    }
}
