//! String formatting utilities for UI rendering.

use daybook_core::to_day_key;

use super::theme::{STAR_EMPTY, STAR_FILLED};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Replace newlines with spaces for single-line output.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

/// First eight characters of an entry id.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// `YYYY-MM-DD` of an epoch-millisecond timestamp in local time.
pub fn format_day(timestamp_millis: i64) -> String {
    to_day_key(timestamp_millis).to_string()
}

/// Five-slot star rating.
pub fn stars(rating: u8, unicode: bool) -> String {
    let filled = usize::from(rating.min(5));
    format!(
        "{}{}",
        STAR_FILLED.get(unicode).repeat(filled),
        STAR_EMPTY.get(unicode).repeat(5 - filled)
    )
}

/// A number without trailing `.0`, one decimal otherwise.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Optional measurement with unit, or `-` when absent.
pub fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", format_number(v), unit),
        None => "-".to_string(),
    }
}

/// Wrap text to a given width, preserving newlines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_line.chars().count() + 1 + word.chars().count() <= width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                lines.push(current_line);
                current_line = word.to_string();
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3, false), "***..");
        assert_eq!(stars(9, false), "*****");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(70.0), "70");
        assert_eq!(format_number(23.8), "23.8");
        assert_eq!(format_optional(None, " kg"), "-");
        assert_eq!(format_optional(Some(18.5), "%"), "18.5%");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0190a1b2-c3d4"), "0190a1b2");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        assert_eq!(wrap("hello world foo bar", 10), vec!["hello", "world foo", "bar"]);
        assert_eq!(wrap("hello\n\nworld", 20), vec!["hello", "", "world"]);
    }
}
