//! Reading diary content from flags, stdin, or an editor.

use std::io::{self, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Read entry content from `--content`, piped stdin, or `$EDITOR`.
///
/// Empty content is returned as-is; saving a blank draft is a no-op
/// decided by the store, not an input error.
pub fn read_content(
    no_input: bool,
    content: Option<String>,
    editor_override: Option<&str>,
) -> anyhow::Result<String> {
    if let Some(value) = content {
        return Ok(value);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer.trim_end().to_string());
    }

    if no_input {
        return Ok(String::new());
    }

    read_from_editor(editor_override, "")
}

/// Open the editor on `initial` and return what was saved.
pub fn read_from_editor(editor_override: Option<&str>, initial: &str) -> anyhow::Result<String> {
    let editor = editor_override
        .map(str::to_string)
        .or_else(|| std::env::var("EDITOR").ok())
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!("$EDITOR is not set; use --content or pipe content via stdin")
        })?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("daybook_entry_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    std::fs::write(&path, initial)
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor {}: {}", editor, e))?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    Ok(contents.trim_end().to_string())
}
