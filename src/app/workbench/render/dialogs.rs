use super::super::util;
use super::super::Workbench;
use crate::kernel::NoticeLevel;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INPUT_PREFIX: &str = "> ";
const NOTICE_MAX_WIDTH: u16 = 48;

/// Byte offset where the visible part of `value` starts so that the cursor
/// stays inside `width` columns.
fn input_window_start(value: &str, cursor: usize, width: usize) -> usize {
    let cursor = cursor.min(value.len());
    let budget = width.saturating_sub(1);
    let mut used = 0usize;
    let mut start = cursor;
    for (i, ch) in value[..cursor].char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > budget {
            break;
        }
        start = i;
    }
    start
}

fn input_dialog_area(area: Rect) -> Rect {
    util::centered_rect(50, 6, area)
}

pub(super) fn render_input_dialog(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let dialog = &workbench.store.state().ui.input_dialog;
    if !dialog.visible {
        return;
    }

    let popup_area = input_dialog_area(area);
    if popup_area.width < 10 || popup_area.height < 4 {
        return;
    }
    frame.render_widget(Clear, popup_area);

    let theme = &workbench.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border))
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.popup_bg).fg(theme.popup_fg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let value_width = (inner.width as usize).saturating_sub(INPUT_PREFIX.width());
    let start = input_window_start(&dialog.value, dialog.cursor, value_width);
    let visible: String = dialog.value[start..]
        .chars()
        .scan(0usize, |used, ch| {
            *used += ch.width().unwrap_or(0);
            (*used <= value_width).then_some(ch)
        })
        .collect();

    let status = match dialog.error.as_deref() {
        Some(err) => Line::from(Span::styled(err, Style::default().fg(theme.error_fg))),
        None => Line::raw(""),
    };
    let lines = vec![
        Line::from(vec![Span::raw(INPUT_PREFIX), Span::raw(visible)]),
        status,
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(theme.accent_fg)),
            Span::raw(" OK  "),
            Span::styled("[Esc]", Style::default().fg(theme.muted_fg)),
            Span::raw(" Cancel"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

pub(super) fn input_dialog_cursor(workbench: &Workbench) -> Option<(u16, u16)> {
    let area = workbench.last_render_area?;
    let dialog = &workbench.store.state().ui.input_dialog;
    if !dialog.visible {
        return None;
    }

    let inner = util::inner(input_dialog_area(area));
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let prefix_w = INPUT_PREFIX.width();
    let value_width = (inner.width as usize).saturating_sub(prefix_w);
    let cursor = dialog.cursor.min(dialog.value.len());
    let start = input_window_start(&dialog.value, cursor, value_width);
    let before_w = dialog.value[start..cursor].width();

    let x = inner
        .x
        .saturating_add((prefix_w + before_w) as u16)
        .min(inner.right().saturating_sub(1));
    Some((x, inner.y))
}

pub(super) fn render_confirm_dialog(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let dialog = &workbench.store.state().ui.confirm_dialog;
    if !dialog.visible {
        return;
    }

    let popup_area = util::centered_rect(50, 7, area);
    if popup_area.width < 10 || popup_area.height < 4 {
        return;
    }
    frame.render_widget(Clear, popup_area);

    let theme = &workbench.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border))
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.popup_bg).fg(theme.popup_fg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::raw(dialog.message.as_str()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter/y]", Style::default().fg(theme.accent_fg)),
            Span::raw(" Yes  "),
            Span::styled("[Esc/n]", Style::default().fg(theme.muted_fg)),
            Span::raw(" No"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub(super) fn render_explorer_context_menu(
    workbench: &mut Workbench,
    frame: &mut Frame,
    area: Rect,
) {
    workbench.last_context_menu_area = None;

    let menu = &workbench.store.state().ui.explorer_context_menu;
    if !menu.visible || menu.items.is_empty() || area.width < 3 || area.height < 3 {
        return;
    }

    let label_w = menu
        .items
        .iter()
        .map(|item| item.label().width())
        .max()
        .unwrap_or(0);
    let width = ((label_w + 4) as u16).saturating_add(2).min(area.width);
    let height = (menu.items.len() as u16).saturating_add(2).min(area.height);

    let (anchor_x, anchor_y) = match menu.anchor {
        Some(anchor) => anchor,
        None => selected_row_anchor(workbench).unwrap_or((area.x, area.y)),
    };
    let x = anchor_x
        .max(area.x)
        .min(area.right().saturating_sub(width));
    let y = anchor_y
        .max(area.y)
        .min(area.bottom().saturating_sub(height));
    let popup_area = Rect::new(x, y, width, height);

    let theme = &workbench.theme;
    let base_style = Style::default().bg(theme.popup_bg).fg(theme.popup_fg);
    let selected_style = Style::default()
        .bg(theme.selection_bg)
        .fg(theme.selection_fg);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border))
        .style(base_style);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let selected = menu.selected.min(menu.items.len() - 1);
    let lines: Vec<Line> = menu
        .items
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(idx, item)| {
            let is_selected = idx == selected;
            let prefix = if is_selected { "▸ " } else { "  " };
            let mut text = format!("{prefix}{}", item.label());
            let pad = (inner.width as usize).saturating_sub(text.width());
            text.push_str(&" ".repeat(pad));
            let style = if is_selected { selected_style } else { base_style };
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    workbench.last_context_menu_area = Some(popup_area);
}

/// Screen cell just right of the selected row's name start.
fn selected_row_anchor(workbench: &Workbench) -> Option<(u16, u16)> {
    let area = workbench.explorer.area()?;
    let explorer = &workbench.store.state().explorer;
    let index = explorer.index_of(explorer.selected()?)?;
    let visible = index.checked_sub(explorer.scroll_offset)?;
    if visible >= area.height as usize {
        return None;
    }
    let depth = explorer.rows.get(index).map(|row| row.depth).unwrap_or(0);
    let x = area.x.saturating_add(depth.saturating_mul(2)).saturating_add(4);
    Some((x, area.y + visible as u16 + 1))
}

pub(super) fn render_notice(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let Some(notice) = workbench.store.state().ui.notice.current.as_ref() else {
        return;
    };
    if area.width < 10 || area.height < 4 {
        return;
    }

    let theme = &workbench.theme;
    let accent = match notice.level {
        NoticeLevel::Success => theme.success_fg,
        NoticeLevel::Info => theme.accent_fg,
        NoticeLevel::Error => theme.error_fg,
    };

    let width = NOTICE_MAX_WIDTH.min(area.width);
    let text_width = width.saturating_sub(2).max(1) as usize;
    let text_rows = notice.text.width().div_ceil(text_width).max(1) as u16;
    let sticky = notice.ttl().is_none();
    let height = (text_rows + 2 + u16::from(sticky)).min(area.height);
    let popup_area = Rect::new(area.right() - width, area.y, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", notice.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.popup_bg).fg(theme.popup_fg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = vec![Line::raw(notice.text.as_str())];
    if sticky {
        lines.push(Line::styled(
            "Press any key to dismiss",
            Style::default().fg(theme.muted_fg),
        ));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
#[path = "../../../../tests/unit/app/workbench/dialogs.rs"]
mod tests;
