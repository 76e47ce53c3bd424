//! UI primitives for the Daybook CLI.
//!
//! - **context**: TTY, width, color and unicode detection
//! - **mode**: output mode resolution (json, plain, pretty)
//! - **theme**: badges, styles, symbols
//! - **render**: tables, headers, receipts, hints
//! - **progress**: spinner for slow network calls
//! - **format**: string helpers

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::{OutputFormat, OutputMode};
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print, print_error, receipt, simple_table,
    table,
};

pub use progress::Spinner;
