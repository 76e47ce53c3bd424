//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Usage error (clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    pub const GENERAL: i32 = 1;

    /// Entry, history record, or file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The health assistant could not produce advice.
    pub const ADVICE_UNAVAILABLE: i32 = 5;
}

/// Entries shown by `diary list` unless `--limit` is given.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Summary width in diary tables.
pub const TABLE_SUMMARY_MAX: usize = 60;
