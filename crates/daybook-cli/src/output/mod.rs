//! Output formatting for diary entries and health records (JSON and text).

mod json;
mod text;

pub use json::{calendar_json, current_json, entries_json, entry_json, history_json};
pub use text::{
    entry_summary, print_advice, print_calendar, print_current, print_entry, print_entry_list,
    print_history,
};
