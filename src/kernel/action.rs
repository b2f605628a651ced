use std::time::Instant;

use crate::core::Command;
use crate::kernel::state::FocusTarget;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    Tick {
        now: Instant,
    },
    SetFocus(FocusTarget),
    NoticeDismiss,
    /// Ends any in-flight pointer session before the frontend shuts down.
    Teardown,

    ExplorerSetViewHeight {
        height: usize,
    },
    ExplorerMoveSelection {
        delta: isize,
    },
    ExplorerScroll {
        delta: isize,
    },
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerClickRow {
        row: usize,
    },
    ExplorerContextMenuOpen {
        tree_row: Option<usize>,
        anchor: Option<(u16, u16)>,
    },
    ExplorerContextMenuClose,
    ExplorerContextMenuMoveSelection {
        delta: isize,
    },
    ExplorerContextMenuSetSelected {
        index: usize,
    },
    ExplorerContextMenuConfirm,

    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,

    ConfirmDialogAccept,
    ConfirmDialogCancel,

    SidebarResizeStart {
        left: u16,
    },
    SidebarResizeMove {
        column: u16,
    },
    SidebarResizeEnd,

    EditorSetViewport {
        height: usize,
        width: usize,
    },
    EditorInsertChar(char),
    EditorPaste(String),
    EditorClick {
        row: usize,
        col: usize,
    },
    EditorScroll {
        delta: isize,
    },
}
