//! Spinner for the advice request.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;
use super::render::badge;
use super::theme::Badge;

/// Indeterminate progress; silent unless stdout is a pretty TTY.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    bar: Option<ProgressBar>,
}

impl<'a> Spinner<'a> {
    pub fn new(ctx: &'a UiContext, message: &str) -> Self {
        let bar = ctx.allows_animation().then(|| {
            let bar = ProgressBar::new_spinner();
            let ticks: &[&str] = if ctx.unicode {
                &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""]
            } else {
                &["|", "/", "-", "\\", ""]
            };
            let style = ProgressStyle::with_template("{spinner} {msg}...")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(ticks);
            bar.set_style(style);
            bar.set_message(message.to_string());
            bar
        });
        Self { ctx, bar }
    }

    pub fn start(&self) {
        if let Some(bar) = &self.bar {
            bar.enable_steady_tick(Duration::from_millis(80));
        }
    }

    pub fn finish(&self, message: &str) {
        self.clear();
        if !message.is_empty() {
            println!("{}", badge(self.ctx, Badge::Ok, message));
        }
    }

    /// Stop without printing; the caller reports the error.
    pub fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
