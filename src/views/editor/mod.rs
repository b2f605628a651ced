//! Content pane: the single open file, or the welcome screen when none is open.

use crate::app::theme::UiTheme;
use crate::kernel::OpenFile;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const MODIFIED_MARKER: &str = "● Modified";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorPaneLayout {
    pub area: Rect,
    pub header_area: Rect,
    pub content_area: Rect,
}

/// Header row plus a bordered text area.
pub fn compute_editor_layout(area: Rect) -> EditorPaneLayout {
    let header_height = 1.min(area.height);
    let header_area = Rect::new(area.x, area.y, area.width, header_height);
    let body = Rect::new(
        area.x,
        area.y + header_height,
        area.width,
        area.height - header_height,
    );
    let content_area = Block::default().borders(Borders::ALL).inner(body);
    EditorPaneLayout {
        area,
        header_area,
        content_area,
    }
}

pub fn render_editor(
    frame: &mut Frame,
    layout: &EditorPaneLayout,
    file: &OpenFile,
    focused: bool,
    theme: &UiTheme,
) {
    if layout.area.width == 0 || layout.area.height == 0 {
        return;
    }

    let mut header = vec![Span::styled(
        file.name.to_string(),
        Style::default()
            .fg(theme.header_fg)
            .add_modifier(Modifier::BOLD),
    )];
    if file.modified {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            MODIFIED_MARKER,
            Style::default().fg(theme.modified_fg),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), layout.header_area);

    let border = if focused {
        theme.focus_border
    } else {
        theme.inactive_border
    };
    let body = Rect::new(
        layout.area.x,
        layout.header_area.bottom(),
        layout.area.width,
        layout.area.height - layout.header_area.height,
    );
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
        body,
    );

    let content = layout.content_area;
    let lines: Vec<Line> = (file.scroll_row..file.scroll_row + content.height as usize)
        .map_while(|row| file.buffer.line(row))
        .map(|text| Line::raw(visible_slice(&text, file.scroll_col, content.width as usize)))
        .collect();
    frame.render_widget(Paragraph::new(lines), content);
}

/// The part of `line` starting at display column `skip`, at most `width` wide.
fn visible_slice(line: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0usize;
    for g in line.graphemes(true) {
        let w = g.width();
        if col >= skip {
            if col + w > skip + width {
                break;
            }
            out.push_str(g);
        }
        col += w;
    }
    out
}

pub fn cursor_position_editor(layout: &EditorPaneLayout, file: &OpenFile) -> Option<(u16, u16)> {
    let content = layout.content_area;
    if content.width == 0 || content.height == 0 {
        return None;
    }

    let (row, _) = file.buffer.cursor();
    let row = row.checked_sub(file.scroll_row)?;
    let col = file.buffer.cursor_display_col().checked_sub(file.scroll_col)?;
    if row >= content.height as usize || col >= content.width as usize {
        return None;
    }
    Some((content.x + col as u16, content.y + row as u16))
}

/// Viewport-relative `(row, col)` under a click inside the text area.
pub fn hit_test_editor(layout: &EditorPaneLayout, column: u16, row: u16) -> Option<(usize, usize)> {
    let c = layout.content_area;
    if column < c.x || column >= c.right() || row < c.y || row >= c.bottom() {
        return None;
    }
    Some(((row - c.y) as usize, (column - c.x) as usize))
}

pub fn render_welcome(frame: &mut Frame, area: Rect, theme: &UiTheme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let muted = Style::default().fg(theme.muted_fg);
    let lines = vec![
        Line::from(Span::styled(
            "treepad",
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::styled("Create new files and folders", muted),
        Line::styled("Resize the sidebar by dragging its border", muted),
        Line::styled("Rename and delete files and folders", muted),
        Line::styled("Edit and save files", muted),
        Line::raw(""),
        Line::styled(
            "Click on any file in the sidebar to open it in the editor!",
            Style::default().fg(theme.accent_fg),
        ),
    ];

    let height = (lines.len() as u16).min(area.height);
    let y = area.y + (area.height - height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, height),
    );
}

#[cfg(test)]
#[path = "../../../tests/unit/views/editor.rs"]
mod tests;
