//! The single open file shown in the content pane.

use compact_str::CompactString;

use crate::core::Command;
use crate::models::{NodeId, TextBuffer};

const TAB: &str = "    ";

pub fn placeholder_content(name: &str) -> String {
    format!(
        "// Content of {name}\n// This is a placeholder content for the file\n\nconsole.log('Hello from {name}');"
    )
}

#[derive(Debug, Clone)]
pub struct OpenFile {
    pub node: NodeId,
    pub name: CompactString,
    pub buffer: TextBuffer,
    pub modified: bool,
    pub scroll_row: usize,
    pub scroll_col: usize,
}

impl OpenFile {
    fn new(node: NodeId, name: &str) -> Self {
        Self {
            node,
            name: CompactString::from(name),
            buffer: TextBuffer::from_text(&placeholder_content(name)),
            modified: false,
            scroll_row: 0,
            scroll_col: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub open: Option<OpenFile>,
    view_height: usize,
    view_width: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            open: None,
            view_height: 20,
            view_width: 80,
        }
    }
}

impl EditorState {
    pub fn is_modified(&self) -> bool {
        self.open.as_ref().is_some_and(|f| f.modified)
    }

    pub fn open_node(&self) -> Option<NodeId> {
        self.open.as_ref().map(|f| f.node)
    }

    /// Loads the placeholder for `node`, discarding edits. Reselecting the
    /// open file reloads it too.
    pub fn open_file(&mut self, node: NodeId, name: &str) -> bool {
        let reload = self.open_node() == Some(node);
        tracing::debug!(node = %node, name, reload, "opened file");
        self.open = Some(OpenFile::new(node, name));
        true
    }

    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn rename_open(&mut self, node: NodeId, name: &str) -> bool {
        match self.open.as_mut() {
            Some(file) if file.node == node && file.name != name => {
                file.name = CompactString::from(name);
                true
            }
            _ => false,
        }
    }

    /// Clears the modified flag. Returns false when there was nothing to save.
    pub fn mark_saved(&mut self) -> bool {
        match self.open.as_mut() {
            Some(file) if file.modified => {
                file.modified = false;
                true
            }
            _ => false,
        }
    }

    pub fn set_viewport(&mut self, height: usize, width: usize) -> bool {
        let height = height.max(1);
        let width = width.max(1);
        if self.view_height == height && self.view_width == width {
            return false;
        }
        self.view_height = height;
        self.view_width = width;
        self.keep_cursor_visible();
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let Some(file) = self.open.as_mut() else {
            return false;
        };
        file.buffer.insert_char(ch);
        file.modified = true;
        self.keep_cursor_visible();
        true
    }

    pub fn paste(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let Some(file) = self.open.as_mut() else {
            return false;
        };
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        file.buffer.insert_str(&text);
        file.modified = true;
        self.keep_cursor_visible();
        true
    }

    pub fn click(&mut self, row: usize, col: usize) -> bool {
        let Some(file) = self.open.as_mut() else {
            return false;
        };
        let prev = file.buffer.cursor();
        // `col` is a terminal column; the scroll offset is in columns too.
        file.buffer.set_cursor_display(file.scroll_row + row, file.scroll_col + col);
        file.buffer.cursor() != prev
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        let view_height = self.view_height;
        let Some(file) = self.open.as_mut() else {
            return false;
        };
        let max_scroll = file.buffer.len_lines().saturating_sub(view_height);
        let prev = file.scroll_row;
        file.scroll_row = if delta < 0 {
            file.scroll_row.saturating_sub(delta.unsigned_abs())
        } else {
            (file.scroll_row + delta as usize).min(max_scroll)
        };
        file.scroll_row != prev
    }

    /// Cursor and edit commands. Edits mark the file modified; movement does not.
    pub fn apply_command(&mut self, command: Command) -> bool {
        let Some(file) = self.open.as_mut() else {
            return false;
        };
        let buffer = &mut file.buffer;

        let changed = match command {
            Command::CursorLeft => buffer.move_left(),
            Command::CursorRight => buffer.move_right(),
            Command::CursorUp => buffer.move_up(),
            Command::CursorDown => buffer.move_down(),
            Command::CursorLineStart => buffer.move_line_start(),
            Command::CursorLineEnd => buffer.move_line_end(),
            Command::InsertNewline => {
                buffer.insert_char('\n');
                true
            }
            Command::InsertTab => {
                buffer.insert_str(TAB);
                true
            }
            Command::DeleteBackward => buffer.delete_backward(),
            Command::DeleteForward => buffer.delete_forward(),
            _ => false,
        };

        if changed && command.is_edit_command() {
            file.modified = true;
        }
        if changed {
            self.keep_cursor_visible();
        }
        changed
    }

    fn keep_cursor_visible(&mut self) {
        let (view_height, view_width) = (self.view_height.max(1), self.view_width.max(1));
        let Some(file) = self.open.as_mut() else {
            return;
        };

        let (row, _) = file.buffer.cursor();
        if row < file.scroll_row {
            file.scroll_row = row;
        } else if row >= file.scroll_row + view_height {
            file.scroll_row = row + 1 - view_height;
        }

        let col = file.buffer.cursor_display_col();
        if col < file.scroll_col {
            file.scroll_col = col;
        } else if col >= file.scroll_col + view_width {
            file.scroll_col = col + 1 - view_width;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
