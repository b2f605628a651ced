use std::time::{Duration, Instant};

use compact_str::CompactString;

use crate::core::Command;
use crate::models::{FileTree, NodeId, NodeKind, ParentRef};

use super::editor::EditorState;
use super::explorer::ExplorerState;
use super::sidebar::SidebarState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Editor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDialogKind {
    NewFile { parent: ParentRef },
    NewFolder { parent: ParentRef },
    Rename { id: NodeId, kind: NodeKind },
}

impl InputDialogKind {
    fn subject(&self) -> &'static str {
        match self {
            InputDialogKind::NewFolder { .. }
            | InputDialogKind::Rename {
                kind: NodeKind::Folder,
                ..
            } => "folder",
            InputDialogKind::NewFile { .. }
            | InputDialogKind::Rename {
                kind: NodeKind::File,
                ..
            } => "file",
        }
    }

    fn subject_title(&self) -> &'static str {
        match self {
            InputDialogKind::NewFolder { .. }
            | InputDialogKind::Rename {
                kind: NodeKind::Folder,
                ..
            } => "Folder",
            InputDialogKind::NewFile { .. }
            | InputDialogKind::Rename {
                kind: NodeKind::File,
                ..
            } => "File",
        }
    }

    /// Validation message for `value`, if it is not an acceptable node name.
    pub fn validate(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return Some(format!("You need to enter a {} name!", self.subject()));
        }
        if value.contains('/') || value.contains('\\') {
            return Some(format!(
                "{} name cannot contain / or \\",
                self.subject_title()
            ));
        }
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn open(&mut self, kind: InputDialogKind, title: impl Into<String>, value: &str) {
        *self = Self {
            visible: true,
            title: title.into(),
            value: value.to_string(),
            cursor: value.len(),
            error: None,
            kind: Some(kind),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteNode { id: NodeId, name: CompactString },
    CloseFile,
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub title: String,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

impl ConfirmDialogState {
    pub fn open(&mut self, title: &str, message: String, on_confirm: PendingAction) {
        *self = Self {
            visible: true,
            title: title.to_string(),
            message,
            on_confirm: Some(on_confirm),
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerContextMenuItem {
    NewFile,
    NewFolder,
    Rename,
    Delete,
}

impl ExplorerContextMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::NewFile => "New File",
            Self::NewFolder => "New Folder",
            Self::Rename => "Rename",
            Self::Delete => "Delete",
        }
    }

    pub fn command(self) -> Command {
        match self {
            Self::NewFile => Command::ExplorerNewFile,
            Self::NewFolder => Command::ExplorerNewFolder,
            Self::Rename => Command::ExplorerRename,
            Self::Delete => Command::ExplorerDelete,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerContextMenuState {
    pub visible: bool,
    /// Screen cell the menu opens at; `None` places it beside the selected row.
    pub anchor: Option<(u16, u16)>,
    pub selected: usize,
    pub items: Vec<ExplorerContextMenuItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
    shown_at: Option<Instant>,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, "Success!", text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, "Error!", text)
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, text)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            text: text.into(),
            shown_at: None,
        }
    }

    /// Only success notices dismiss themselves.
    pub fn ttl(&self) -> Option<Duration> {
        match self.level {
            NoticeLevel::Success => Some(NoticeState::SUCCESS_TTL),
            NoticeLevel::Info | NoticeLevel::Error => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
}

impl NoticeState {
    pub const SUCCESS_TTL: Duration = Duration::from_millis(2000);

    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// The clock starts on the first tick after the notice is shown.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(notice) = self.current.as_mut() else {
            return false;
        };
        let Some(ttl) = notice.ttl() else {
            return false;
        };
        match notice.shown_at {
            None => {
                notice.shown_at = Some(now);
                false
            }
            Some(shown_at) if now.saturating_duration_since(shown_at) >= ttl => {
                self.current = None;
                true
            }
            Some(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    pub sidebar: SidebarState,
    pub input_dialog: InputDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub explorer_context_menu: ExplorerContextMenuState,
    pub notice: NoticeState,
}

impl UiState {
    pub fn new(sidebar: SidebarState) -> Self {
        Self {
            focus: FocusTarget::Explorer,
            sidebar,
            input_dialog: InputDialogState::default(),
            confirm_dialog: ConfirmDialogState::default(),
            explorer_context_menu: ExplorerContextMenuState::default(),
            notice: NoticeState::default(),
        }
    }

    /// True while a dialog, menu or notice owns the keyboard.
    pub fn is_modal_open(&self) -> bool {
        self.input_dialog.visible
            || self.confirm_dialog.visible
            || self.explorer_context_menu.visible
            || self.notice.current.is_some()
    }
}

pub struct AppState {
    pub tree: FileTree,
    pub explorer: ExplorerState,
    pub editor: EditorState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(tree: FileTree, sidebar: SidebarState) -> Self {
        let explorer = ExplorerState::new(tree.snapshot());
        Self {
            tree,
            explorer,
            editor: EditorState::default(),
            ui: UiState::new(sidebar),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FileTree::seeded(), SidebarState::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
