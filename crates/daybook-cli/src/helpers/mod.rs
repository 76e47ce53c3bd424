//! Input and parsing helper functions for the CLI.
//!
//! - Diary content from flags, stdin or `$EDITOR` (`input`)
//! - Dates, times, genders, exercise specs and set positions (`parsing`)

mod input;
mod parsing;

pub use input::{read_content, read_from_editor};
pub use parsing::{
    parse_date, parse_exercise, parse_gender, parse_position, parse_rename, parse_set_ref,
    parse_set_value, parse_start_time,
};
