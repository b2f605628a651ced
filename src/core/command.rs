//! Semantic commands, independent of the key that triggers them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    ToggleSidebar,
    FocusExplorer,
    FocusEditor,
    SidebarWiden,
    SidebarNarrow,

    ExplorerUp,
    ExplorerDown,
    ExplorerActivate,
    ExplorerCollapse,
    ExplorerNewFile,
    ExplorerNewFolder,
    ExplorerRename,
    ExplorerDelete,
    ExplorerContextMenu,

    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    Save,
    CloseFile,
}

impl Command {
    pub const ALL: [Command; 27] = [
        Command::Quit,
        Command::ToggleSidebar,
        Command::FocusExplorer,
        Command::FocusEditor,
        Command::SidebarWiden,
        Command::SidebarNarrow,
        Command::ExplorerUp,
        Command::ExplorerDown,
        Command::ExplorerActivate,
        Command::ExplorerCollapse,
        Command::ExplorerNewFile,
        Command::ExplorerNewFolder,
        Command::ExplorerRename,
        Command::ExplorerDelete,
        Command::ExplorerContextMenu,
        Command::CursorLeft,
        Command::CursorRight,
        Command::CursorUp,
        Command::CursorDown,
        Command::CursorLineStart,
        Command::CursorLineEnd,
        Command::InsertNewline,
        Command::InsertTab,
        Command::DeleteBackward,
        Command::DeleteForward,
        Command::Save,
        Command::CloseFile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::ToggleSidebar => "toggleSidebar",
            Command::FocusExplorer => "focusExplorer",
            Command::FocusEditor => "focusEditor",
            Command::SidebarWiden => "sidebarWiden",
            Command::SidebarNarrow => "sidebarNarrow",
            Command::ExplorerUp => "explorerUp",
            Command::ExplorerDown => "explorerDown",
            Command::ExplorerActivate => "explorerActivate",
            Command::ExplorerCollapse => "explorerCollapse",
            Command::ExplorerNewFile => "explorerNewFile",
            Command::ExplorerNewFolder => "explorerNewFolder",
            Command::ExplorerRename => "explorerRename",
            Command::ExplorerDelete => "explorerDelete",
            Command::ExplorerContextMenu => "explorerContextMenu",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::Save => "save",
            Command::CloseFile => "closeFile",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        let name = name.trim();
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }

    /// Commands that change buffer text and so mark the open file modified.
    pub fn is_edit_command(self) -> bool {
        matches!(
            self,
            Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
