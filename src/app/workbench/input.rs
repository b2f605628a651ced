use super::Workbench;
use crate::core::event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::tui::view::EventResult;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse_event(mouse_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Resize(_, _) => EventResult::Consumed,
        InputEvent::FocusLost => {
            if workbench.dispatch_kernel(KernelAction::SidebarResizeEnd) {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        }
        InputEvent::FocusGained => EventResult::Ignored,
    }
}

fn consumed_if(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

impl Workbench {
    pub(super) fn handle_key_event(&mut self, key_event: &KeyEvent) -> EventResult {
        // A notice owns the keyboard until any key dismisses it.
        if self.store.state().ui.notice.current.is_some() {
            let _ = self.dispatch_kernel(KernelAction::NoticeDismiss);
            return EventResult::Consumed;
        }

        if self.store.state().ui.confirm_dialog.visible {
            let action = match key_event.code {
                KeyCode::Enter | KeyCode::Char('y') => Some(KernelAction::ConfirmDialogAccept),
                KeyCode::Esc | KeyCode::Char('n') => Some(KernelAction::ConfirmDialogCancel),
                _ => None,
            };
            if let Some(action) = action {
                let _ = self.dispatch_kernel(action);
            }
            return EventResult::Consumed;
        }

        if self.store.state().ui.input_dialog.visible {
            let action = match (key_event.code, key_event.modifiers) {
                (KeyCode::Enter, _) => Some(KernelAction::InputDialogAccept),
                (KeyCode::Esc, _) => Some(KernelAction::InputDialogCancel),
                (KeyCode::Backspace, _) => Some(KernelAction::InputDialogBackspace),
                (KeyCode::Left, _) => Some(KernelAction::InputDialogCursorLeft),
                (KeyCode::Right, _) => Some(KernelAction::InputDialogCursorRight),
                (KeyCode::Char(ch), mods) if mods.is_empty() || mods == KeyModifiers::SHIFT => {
                    Some(KernelAction::InputDialogAppend(ch))
                }
                _ => None,
            };
            if let Some(action) = action {
                let _ = self.dispatch_kernel(action);
            }
            return EventResult::Consumed;
        }

        if self.store.state().ui.explorer_context_menu.visible {
            let action = match key_event.code {
                KeyCode::Esc => KernelAction::ExplorerContextMenuClose,
                KeyCode::Up | KeyCode::Char('k') => {
                    KernelAction::ExplorerContextMenuMoveSelection { delta: -1 }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    KernelAction::ExplorerContextMenuMoveSelection { delta: 1 }
                }
                KeyCode::Enter => KernelAction::ExplorerContextMenuConfirm,
                _ => {
                    // Any other key closes the menu and is handled normally.
                    let _ = self.dispatch_kernel(KernelAction::ExplorerContextMenuClose);
                    return self.handle_bound_key(key_event);
                }
            };
            let _ = self.dispatch_kernel(action);
            return EventResult::Consumed;
        }

        self.handle_bound_key(key_event)
    }

    fn handle_bound_key(&mut self, key_event: &KeyEvent) -> EventResult {
        let focus = self.store.state().ui.focus;
        let context = match focus {
            FocusTarget::Explorer => KeybindingContext::Explorer,
            FocusTarget::Editor => KeybindingContext::Editor,
        };

        let key = Key::from(*key_event);
        if let Some(&command) = self.keybindings.resolve(context, &key) {
            tracing::trace!(command = command.name(), "key command");
            let _ = self.dispatch_kernel(KernelAction::RunCommand(command));
            return EventResult::Consumed;
        }

        if focus == FocusTarget::Editor {
            if let KeyCode::Char(ch) = key_event.code {
                let mods = key_event.modifiers.without(KeyModifiers::SHIFT);
                if mods.is_empty() {
                    return consumed_if(self.dispatch_kernel(KernelAction::EditorInsertChar(ch)));
                }
            }
        }

        EventResult::Ignored
    }

    pub(super) fn handle_paste(&mut self, text: &str) -> EventResult {
        if self.store.state().ui.input_dialog.visible {
            let mut changed = false;
            for ch in text.chars().filter(|ch| !ch.is_control()) {
                changed |= self.dispatch_kernel(KernelAction::InputDialogAppend(ch));
            }
            return consumed_if(changed);
        }

        if self.store.state().ui.is_modal_open()
            || self.store.state().ui.focus != FocusTarget::Editor
        {
            return EventResult::Ignored;
        }

        consumed_if(self.dispatch_kernel(KernelAction::EditorPaste(text.to_string())))
    }
}
