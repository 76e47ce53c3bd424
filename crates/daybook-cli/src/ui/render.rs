//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, NOTHING, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge, SEPARATOR};

/// Render a header line for a command.
///
/// Pretty mode: "Daybook · command (context)"
/// Plain mode: "daybook command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Daybook", styles::bold(), ctx.color);
            let sep = SEPARATOR.get(ctx.unicode);
            match context {
                Some(c) => format!("{} {} {} ({})", title, sep, command, c),
                None => format!("{} {} {}", title, sep, command),
            }
        }
        OutputMode::Plain => format!("daybook {}", command),
        OutputMode::Json => String::new(),
    }
}

pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() && ctx.unicode {
        "\u{2500}".repeat(ctx.width.min(60))
    } else {
        "---".to_string()
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored
    } else {
        format!("{} {}", colored, message)
    }
}

/// Pretty mode: "Key: value" with dim key.
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary block after an action.
///
/// Pretty mode: badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }
    lines.join("\n")
}

/// Bordered table in pretty mode; space-separated rows otherwise.
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = Table::new();
    if ctx.unicode {
        table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(ctx.width as u16)
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Borderless table with dim headers, for lists.
pub fn simple_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return plain_rows(rows);
    }

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(ctx.width as u16);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| {
            let cell = Cell::new(h);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

fn plain_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Pretty mode: "[ERR] message" with optional hint line.
/// Plain mode: "error=message" with optional "hint=..."
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();
    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }
    lines.join("\n")
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_modes() {
        assert_eq!(header(&plain_ctx(), "diary list", None), "daybook diary list");
        let pretty = header(&pretty_ctx(), "diary list", Some("2024-05-01"));
        assert!(pretty.starts_with("Daybook"));
        assert!(pretty.ends_with("(2024-05-01)"));
    }

    #[test]
    fn test_kv_plain_is_snake_case() {
        assert_eq!(kv(&plain_ctx(), "Body Fat", "18%"), "body_fat=18%");
        assert_eq!(kv(&pretty_ctx(), "Weight", "70"), "Weight: 70");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(&plain_ctx(), "Saved", &[("Id", "abc")]);
        assert_eq!(out, "status=ok\nid=abc");
    }

    #[test]
    fn test_plain_table_has_no_header() {
        let rows = vec![vec!["a".to_string(), "b".to_string()]];
        assert_eq!(table(&plain_ctx(), &["X", "Y"], &rows), "a b");
        assert_eq!(simple_table(&plain_ctx(), &["X", "Y"], &rows), "a b");
    }

    #[test]
    fn test_pretty_table_includes_headers() {
        let rows = vec![vec!["70".to_string()]];
        let out = simple_table(&pretty_ctx(), &["WEIGHT"], &rows);
        assert!(out.contains("WEIGHT"));
        assert!(out.contains("70"));
    }

    #[test]
    fn test_error_message_plain() {
        let out = error_message(&plain_ctx(), "boom", Some("try again"));
        assert_eq!(out, "error=boom\nhint=try again");
    }
}
