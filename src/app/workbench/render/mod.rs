use super::util;
use super::Workbench;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::views::{
    compute_editor_layout, cursor_position_editor, render_editor, render_welcome,
    ExplorerPaintCtx,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

mod dialogs;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_render_area = Some(area);

    let header_height = super::HEADER_HEIGHT.min(area.height);
    let status_height = super::STATUS_HEIGHT.min(area.height - header_height);
    let header_area = Rect::new(area.x, area.y, area.width, header_height);
    let status_area = Rect::new(
        area.x,
        area.bottom() - status_height,
        area.width,
        status_height,
    );
    let body = Rect::new(
        area.x,
        header_area.bottom(),
        area.width,
        area.height - header_height - status_height,
    );

    workbench.render_header(frame, header_area);

    let editor_area = if workbench.store.state().ui.sidebar.visible && body.width > 0 {
        let desired = workbench.store.state().ui.sidebar.width();
        let width = util::clamp_sidebar_width(body.width, desired);
        let sidebar_area = Rect::new(body.x, body.y, width, body.height);
        workbench.render_sidebar(frame, sidebar_area);
        Rect::new(body.x + width, body.y, body.width - width, body.height)
    } else {
        workbench.last_sidebar_area = None;
        workbench.explorer = Default::default();
        body
    };

    workbench.render_content(frame, editor_area);
    workbench.render_status(frame, status_area);

    dialogs::render_explorer_context_menu(workbench, frame, body);
    dialogs::render_input_dialog(workbench, frame, area);
    dialogs::render_confirm_dialog(workbench, frame, area);
    dialogs::render_notice(workbench, frame, body);
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    let ui = &workbench.store.state().ui;
    if ui.input_dialog.visible {
        return dialogs::input_dialog_cursor(workbench);
    }
    if ui.is_modal_open() || ui.focus != FocusTarget::Editor {
        return None;
    }

    let layout = workbench.last_editor_layout.as_ref()?;
    let file = workbench.store.state().editor.open.as_ref()?;
    cursor_position_editor(layout, file)
}

impl Workbench {
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        Style::default().fg(color)
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let muted = Style::default().fg(self.theme.muted_fg);
        let line = Line::from(vec![
            Span::styled(
                " treepad ",
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Ctrl+B sidebar  Ctrl+S save  Ctrl+W close  Ctrl+Q quit",
                muted,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        self.last_sidebar_area = (area.width > 0 && area.height > 0).then_some(area);

        let sidebar = &self.store.state().ui.sidebar;
        let focused = self.store.state().ui.focus == FocusTarget::Explorer;
        let border_style = if sidebar.is_resizing() {
            Style::default().fg(self.theme.accent_fg)
        } else {
            self.border_style(focused)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Explorer ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height > 0 {
            let _ = self.dispatch_kernel(KernelAction::ExplorerSetViewHeight {
                height: inner.height as usize,
            });
        }

        let Workbench {
            store,
            explorer,
            theme,
            ..
        } = self;
        let state = store.state();
        let ctx = ExplorerPaintCtx {
            rows: &state.explorer.rows,
            selected: state.explorer.selected(),
            open_node: state.editor.open_node(),
            scroll_offset: state.explorer.scroll_offset,
            focused,
            theme,
        };
        explorer.render(frame, inner, &ctx);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        self.last_editor_area = (area.width > 0 && area.height > 0).then_some(area);
        if area.width == 0 || area.height == 0 {
            self.last_editor_layout = None;
            return;
        }

        if self.store.state().editor.open.is_none() {
            self.last_editor_layout = None;
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.border_style(false));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            render_welcome(frame, inner, &self.theme);
            return;
        }

        let layout = compute_editor_layout(area);
        let content = layout.content_area;
        if content.width > 0 && content.height > 0 {
            let _ = self.dispatch_kernel(KernelAction::EditorSetViewport {
                height: content.height as usize,
                width: content.width as usize,
            });
        }
        self.last_editor_layout = Some(layout);

        let focused = self.store.state().ui.focus == FocusTarget::Editor;
        if let Some(file) = self.store.state().editor.open.as_ref() {
            render_editor(frame, &layout, file, focused, &self.theme);
        }
    }

    fn focus_label(&self) -> &'static str {
        match self.store.state().ui.focus {
            FocusTarget::Explorer => "Explorer",
            FocusTarget::Editor => "Editor",
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let state = self.store.state();
        let (file, cursor_info) = match state.editor.open.as_ref() {
            Some(open) => {
                let (row, col) = open.buffer.cursor();
                let dirty = if open.modified { " [+]" } else { "" };
                (
                    format!("{}{dirty}", open.name),
                    format!("Ln {}, Col {}", row + 1, col + 1),
                )
            }
            None => ("No file".to_string(), String::new()),
        };

        let mut text = format!(" {file} | {cursor_info} | {}", self.focus_label());
        let sidebar = &state.ui.sidebar;
        if sidebar.is_resizing() {
            text.push_str(&format!(" | Sidebar: {} cols", sidebar.width()));
        }

        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(self.theme.muted_fg)),
            area,
        );
    }
}
