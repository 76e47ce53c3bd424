//! Navigation between the two tabs and the full-screen editors.
//!
//! The shell holds no persisted state. Views re-read storage whenever they
//! become visible again.

use std::fmt;

use crate::storage::DiaryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Diary,
    Health,
}

impl AppTab {
    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Diary => "Diary",
            AppTab::Health => "Health",
        }
    }
}

impl fmt::Display for AppTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which editor is open.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    /// `None` creates a new entry.
    Diary(Option<DiaryEntry>),
    Health,
}

/// What should be on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Tab(AppTab),
    Editor(&'a EditorMode),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppShell {
    tab: AppTab,
    editor: Option<EditorMode>,
}

impl AppShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> AppTab {
        self.tab
    }

    pub fn editor(&self) -> Option<&EditorMode> {
        self.editor.as_ref()
    }

    /// Navigation is hidden while an editor is open.
    pub fn navigation_visible(&self) -> bool {
        self.editor.is_none()
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.editor {
            Some(mode) => Screen::Editor(mode),
            None => Screen::Tab(self.tab),
        }
    }

    /// Returns `false` (and does nothing) while an editor is open.
    pub fn switch_tab(&mut self, tab: AppTab) -> bool {
        if self.editor.is_some() {
            tracing::debug!(?tab, "tab switch ignored while editing");
            return false;
        }
        self.tab = tab;
        true
    }

    pub fn open_editor(&mut self, mode: EditorMode) {
        self.editor = Some(mode);
    }

    /// Close the editor (after save or cancel) and return to the active tab.
    pub fn close_editor(&mut self) -> AppTab {
        self.editor = None;
        self.tab
    }
}
