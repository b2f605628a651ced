//! Explorer outline view (pure rendering + hit testing).

use crate::app::theme::UiTheme;
use crate::kernel::{RowId, TreeRow};
use crate::models::NodeId;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const MAX_NAME_CHARS: usize = 25;
pub const OPEN_MARKER: &str = "● Open";

/// Names longer than [`MAX_NAME_CHARS`] keep that many characters plus `...`.
pub fn display_name(name: &str) -> String {
    match name.char_indices().nth(MAX_NAME_CHARS) {
        Some((cut, _)) => format!("{}...", &name[..cut]),
        None => name.to_string(),
    }
}

pub struct ExplorerPaintCtx<'a> {
    pub rows: &'a [TreeRow],
    pub selected: Option<RowId>,
    pub open_node: Option<NodeId>,
    pub scroll_offset: usize,
    pub focused: bool,
    pub theme: &'a UiTheme,
}

#[derive(Debug, Default)]
pub struct ExplorerView {
    area: Option<Rect>,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .is_some_and(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
    }

    pub fn view_height(&self) -> Option<usize> {
        self.area.map(|a| a.height as usize)
    }

    /// Outline row index under `(column, row)`, if any row is painted there.
    pub fn hit_test_row(
        &self,
        column: u16,
        row: u16,
        scroll_offset: usize,
        rows_len: usize,
    ) -> Option<usize> {
        if !self.contains(column, row) {
            return None;
        }
        let area = self.area?;
        let index = (row - area.y) as usize + scroll_offset;
        (index < rows_len).then_some(index)
    }

    fn render_row(row: &TreeRow, ctx: &ExplorerPaintCtx<'_>) -> Line<'static> {
        let is_selected = ctx.selected == Some(row.id);
        let is_open = ctx.open_node.is_some() && row.id.node() == ctx.open_node;

        let indent = "  ".repeat(row.depth as usize);
        let icon = match (row.is_folder, row.is_expanded) {
            (true, true) => "▼ ",
            (true, false) => "▶ ",
            (false, _) => "  ",
        };

        let mut name_style = if row.is_folder {
            Style::default().fg(ctx.theme.folder_fg)
        } else {
            Style::default()
        };
        if row.id == RowId::Root {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![
            Span::raw(indent),
            Span::styled(icon, Style::default().fg(ctx.theme.muted_fg)),
            Span::styled(display_name(&row.name), name_style),
        ];
        if is_open {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                OPEN_MARKER,
                Style::default().fg(ctx.theme.accent_fg),
            ));
        }

        let mut line = Line::from(spans);
        if is_selected {
            let mut style = Style::default().bg(ctx.theme.selection_bg);
            if ctx.focused {
                style = style.fg(ctx.theme.selection_fg);
            }
            line = line.style(style);
        }
        line
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &ExplorerPaintCtx<'_>) {
        self.area = Some(area);

        let start = ctx.scroll_offset.min(ctx.rows.len());
        let end = (start + area.height as usize).min(ctx.rows.len());

        let lines: Vec<Line> = ctx.rows[start..end]
            .iter()
            .map(|row| Self::render_row(row, ctx))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/explorer/explorer_view.rs"]
mod tests;
