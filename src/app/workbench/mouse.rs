use super::util;
use super::Workbench;
use crate::core::event::{MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::tui::view::EventResult;
use crate::views::hit_test_editor;

fn consumed(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

impl Workbench {
    pub(super) fn handle_mouse_event(&mut self, event: &MouseEvent) -> EventResult {
        let ui = &self.store.state().ui;

        if ui.notice.current.is_some() {
            if matches!(event.kind, MouseEventKind::Down(_)) {
                let _ = self.dispatch_kernel(KernelAction::NoticeDismiss);
                return EventResult::Consumed;
            }
            return EventResult::Ignored;
        }

        // Dialogs are keyboard driven; the pointer is swallowed while one is open.
        if ui.input_dialog.visible || ui.confirm_dialog.visible {
            return EventResult::Ignored;
        }

        if let Some(result) = self.handle_context_menu_mouse(event) {
            return result;
        }

        if let Some(result) = self.handle_sidebar_resize_mouse(event) {
            return result;
        }

        if self.explorer.contains(event.column, event.row) {
            return self.handle_explorer_mouse(event);
        }

        if self
            .last_editor_area
            .is_some_and(|area| util::rect_contains(area, event.column, event.row))
        {
            return self.handle_editor_mouse(event);
        }

        EventResult::Ignored
    }

    fn handle_context_menu_mouse(&mut self, event: &MouseEvent) -> Option<EventResult> {
        if !self.store.state().ui.explorer_context_menu.visible {
            return None;
        }

        let Some(area) = self.last_context_menu_area else {
            let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuClose);
            return None;
        };
        let inner = util::inner(area);

        match event.kind {
            MouseEventKind::Moved if util::rect_contains(inner, event.column, event.row) => {
                let index = event.row.saturating_sub(inner.y) as usize;
                let changed =
                    self.dispatch_kernel(KernelAction::ExplorerContextMenuSetSelected { index });
                Some(consumed(changed))
            }
            MouseEventKind::Down(button) => {
                if util::rect_contains(inner, event.column, event.row) {
                    if button == MouseButton::Left {
                        let index = event.row.saturating_sub(inner.y) as usize;
                        let _ = self
                            .dispatch_kernel(KernelAction::ExplorerContextMenuSetSelected { index });
                        let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuConfirm);
                    }
                    return Some(EventResult::Consumed);
                }
                if util::rect_contains(area, event.column, event.row) {
                    return Some(EventResult::Consumed);
                }

                // Clicking elsewhere closes the menu and is handled normally.
                let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuClose);
                None
            }
            _ => None,
        }
    }

    fn handle_sidebar_resize_mouse(&mut self, event: &MouseEvent) -> Option<EventResult> {
        let resizing = self.store.state().ui.sidebar.is_resizing();

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let area = self.last_sidebar_area?;
                let border = area.x + area.width.saturating_sub(1);
                if area.width == 0
                    || event.column != border
                    || !util::rect_contains(area, event.column, event.row)
                {
                    return None;
                }
                let changed =
                    self.dispatch_kernel(KernelAction::SidebarResizeStart { left: area.x });
                Some(consumed(changed))
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved if resizing => {
                let changed =
                    self.dispatch_kernel(KernelAction::SidebarResizeMove { column: event.column });
                Some(consumed(changed))
            }
            MouseEventKind::Up(_) if resizing => {
                let _ = self.dispatch_kernel(KernelAction::SidebarResizeEnd);
                Some(EventResult::Consumed)
            }
            _ => None,
        }
    }

    fn handle_explorer_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let explorer = &self.store.state().explorer;
        let hit = self.explorer.hit_test_row(
            event.column,
            event.row,
            explorer.scroll_offset,
            explorer.rows.len(),
        );

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let changed = match hit {
                    Some(row) => self.dispatch_kernel(KernelAction::ExplorerClickRow { row }),
                    None => self.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Explorer)),
                };
                consumed(changed)
            }
            MouseEventKind::Down(MouseButton::Right) => {
                let changed = self.dispatch_kernel(KernelAction::ExplorerContextMenuOpen {
                    tree_row: hit,
                    anchor: Some((event.column, event.row)),
                });
                consumed(changed)
            }
            MouseEventKind::ScrollUp => consumed(
                self.dispatch_kernel(KernelAction::ExplorerScroll {
                    delta: -super::SCROLL_STEP,
                }),
            ),
            MouseEventKind::ScrollDown => consumed(
                self.dispatch_kernel(KernelAction::ExplorerScroll {
                    delta: super::SCROLL_STEP,
                }),
            ),
            _ => EventResult::Ignored,
        }
    }

    fn handle_editor_mouse(&mut self, event: &MouseEvent) -> EventResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .last_editor_layout
                    .and_then(|layout| hit_test_editor(&layout, event.column, event.row));
                let changed = match hit {
                    Some((row, col)) => self.dispatch_kernel(KernelAction::EditorClick { row, col }),
                    None => self.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Editor)),
                };
                consumed(changed)
            }
            MouseEventKind::ScrollUp => consumed(self.dispatch_kernel(KernelAction::EditorScroll {
                delta: -super::SCROLL_STEP,
            })),
            MouseEventKind::ScrollDown => consumed(self.dispatch_kernel(KernelAction::EditorScroll {
                delta: super::SCROLL_STEP,
            })),
            _ => EventResult::Ignored,
        }
    }
}
