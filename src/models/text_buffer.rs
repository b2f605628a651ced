//! Editor text buffer.
//!
//! Rope storage with a `(row, grapheme column)` cursor.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Borrow the slice as `&str` when it is contiguous, copy otherwise.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
    }

    /// Places the cursor at terminal column `display_col` of `row`. A column
    /// inside a wide grapheme lands before it.
    pub fn set_cursor_display(&mut self, row: usize, display_col: usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        let mut used = 0usize;
        let mut col = 0usize;
        if let Some(line) = self.line(row) {
            for grapheme in line.graphemes(true) {
                let width = grapheme.width();
                if used + width > display_col {
                    break;
                }
                used += width;
                col += 1;
            }
        }
        self.set_cursor(row, col);
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Line text without its trailing newline.
    pub fn line(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line = slice_to_cow(self.rope.line(row));
        Some(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return 0;
        }
        let line = slice_to_cow(self.rope.line(row));
        let without_newline = line.trim_end_matches(['\n', '\r']);
        without_newline.graphemes(true).count()
    }

    /// Terminal column of the cursor on its line.
    pub fn cursor_display_col(&self) -> usize {
        let (row, col) = self.cursor;
        let Some(line) = self.line(row) else {
            return 0;
        };
        line.graphemes(true).take(col).map(|g| g.width()).sum()
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let line = slice_to_cow(self.rope.line(row));
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn insert_char(&mut self, c: char) {
        let offset = self.pos_to_char(self.cursor);
        self.rope.insert_char(offset, c);
        self.cursor = self.char_to_pos(offset + 1);
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let offset = self.pos_to_char(self.cursor);
        self.rope.insert(offset, s);
        self.cursor = self.char_to_pos(offset + s.chars().count());
    }

    /// `(row, grapheme column)` of a char offset. An offset inside a grapheme
    /// (e.g. before a combining mark that joined the previous char) rounds up.
    fn char_to_pos(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_idx);
        let mut remaining = char_idx - self.rope.line_to_char(row);
        let line = slice_to_cow(self.rope.line(row));
        let mut col = 0;
        for grapheme in line.graphemes(true) {
            if remaining == 0 {
                break;
            }
            remaining = remaining.saturating_sub(grapheme.chars().count());
            col += 1;
        }
        (row, col)
    }

    /// Backspace. Returns `false` at the start of the buffer.
    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            let start = self.pos_to_char((row, col - 1));
            let end = self.pos_to_char((row, col));
            self.rope.remove(start..end);
            self.cursor = (row, col - 1);
            true
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let end = self.rope.line_to_char(row);
            self.rope.remove(end - 1..end);
            self.cursor = (row - 1, prev_len);
            true
        } else {
            false
        }
    }

    /// Delete. Returns `false` at the end of the buffer.
    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            let start = self.pos_to_char((row, col));
            let end = self.pos_to_char((row, col + 1));
            self.rope.remove(start..end);
            true
        } else if row + 1 < self.len_lines() {
            let start = self.pos_to_char((row, col));
            self.rope.remove(start..start + 1);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col > 0 {
            self.cursor = (row, col - 1);
        } else if row > 0 {
            self.cursor = (row - 1, self.line_grapheme_len(row - 1));
        } else {
            return false;
        }
        true
    }

    pub fn move_right(&mut self) -> bool {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.cursor = (row, col + 1);
        } else if row + 1 < self.len_lines() {
            self.cursor = (row + 1, 0);
        } else {
            return false;
        }
        true
    }

    pub fn move_up(&mut self) -> bool {
        let (row, col) = self.cursor;
        if row == 0 {
            return false;
        }
        self.cursor = (row - 1, col.min(self.line_grapheme_len(row - 1)));
        true
    }

    pub fn move_down(&mut self) -> bool {
        let (row, col) = self.cursor;
        if row + 1 >= self.len_lines() {
            return false;
        }
        self.cursor = (row + 1, col.min(self.line_grapheme_len(row + 1)));
        true
    }

    pub fn move_line_start(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor.1 = 0;
        prev != self.cursor
    }

    pub fn move_line_end(&mut self) -> bool {
        let prev = self.cursor;
        self.cursor.1 = self.line_grapheme_len(self.cursor.0);
        prev != self.cursor
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
