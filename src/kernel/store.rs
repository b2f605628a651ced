use compact_str::CompactString;

use crate::core::Command;

use super::explorer::RowId;
use super::{Action, AppState, Effect, FocusTarget, InputDialogKind, Notice, PendingAction};

mod confirm_dialog;
mod editor;
mod explorer;
mod input_dialog;
mod sidebar;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::Tick { now } => DispatchResult::changed(self.state.ui.notice.tick(now)),
            Action::SetFocus(target) => DispatchResult::changed(self.set_focus(target)),
            Action::NoticeDismiss => DispatchResult::changed(self.state.ui.notice.dismiss()),
            Action::Teardown => {
                let mut state_changed = self.state.ui.sidebar.end_resize();
                if self.state.ui.explorer_context_menu.visible {
                    self.state.ui.explorer_context_menu = Default::default();
                    state_changed = true;
                }
                tracing::debug!("store teardown");
                DispatchResult::changed(state_changed)
            }
            Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerMoveSelection { .. }
            | Action::ExplorerScroll { .. }
            | Action::ExplorerActivate
            | Action::ExplorerCollapse
            | Action::ExplorerClickRow { .. }
            | Action::ExplorerContextMenuOpen { .. }
            | Action::ExplorerContextMenuClose
            | Action::ExplorerContextMenuMoveSelection { .. }
            | Action::ExplorerContextMenuSetSelected { .. }
            | Action::ExplorerContextMenuConfirm => self.reduce_explorer_action(action),
            Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel => self.reduce_input_dialog_action(action),
            Action::ConfirmDialogAccept | Action::ConfirmDialogCancel => {
                self.reduce_confirm_dialog_action(action)
            }
            Action::SidebarResizeStart { .. }
            | Action::SidebarResizeMove { .. }
            | Action::SidebarResizeEnd => self.reduce_sidebar_action(action),
            Action::EditorSetViewport { .. }
            | Action::EditorInsertChar(_)
            | Action::EditorPaste(_)
            | Action::EditorClick { .. }
            | Action::EditorScroll { .. } => self.reduce_editor_action(action),
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        match command {
            Command::Quit => DispatchResult {
                effects: vec![Effect::Quit],
                state_changed: false,
            },
            Command::ToggleSidebar => {
                let sidebar = &mut self.state.ui.sidebar;
                sidebar.toggle();
                if !sidebar.visible {
                    self.state.ui.explorer_context_menu = Default::default();
                    if self.state.ui.focus == FocusTarget::Explorer
                        && self.state.editor.open.is_some()
                    {
                        self.state.ui.focus = FocusTarget::Editor;
                    }
                }
                DispatchResult::changed(true)
            }
            Command::FocusExplorer => DispatchResult::changed(self.set_focus(FocusTarget::Explorer)),
            Command::FocusEditor => DispatchResult::changed(self.set_focus(FocusTarget::Editor)),
            Command::SidebarWiden | Command::SidebarNarrow => {
                let sidebar = &mut self.state.ui.sidebar;
                if !sidebar.visible {
                    return DispatchResult::changed(false);
                }
                let step = i32::from(super::SidebarState::NUDGE);
                let delta = if command == Command::SidebarWiden { step } else { -step };
                DispatchResult::changed(sidebar.nudge(delta))
            }
            Command::ExplorerUp => {
                self.reduce_explorer_action(Action::ExplorerMoveSelection { delta: -1 })
            }
            Command::ExplorerDown => {
                self.reduce_explorer_action(Action::ExplorerMoveSelection { delta: 1 })
            }
            Command::ExplorerActivate => self.reduce_explorer_action(Action::ExplorerActivate),
            Command::ExplorerCollapse => self.reduce_explorer_action(Action::ExplorerCollapse),
            Command::ExplorerContextMenu => {
                self.reduce_explorer_action(Action::ExplorerContextMenuOpen {
                    tree_row: None,
                    anchor: None,
                })
            }
            Command::ExplorerNewFile | Command::ExplorerNewFolder => {
                let snapshot = self.state.tree.snapshot();
                let parent = self.state.explorer.selected_create_parent(snapshot);
                let (kind, title) = if command == Command::ExplorerNewFile {
                    (InputDialogKind::NewFile { parent }, "New File")
                } else {
                    (InputDialogKind::NewFolder { parent }, "New Folder")
                };
                self.state.ui.input_dialog.open(kind, title, "");
                DispatchResult::changed(true)
            }
            Command::ExplorerRename => {
                let Some(id) = self.state.explorer.selected().and_then(RowId::node) else {
                    return DispatchResult::changed(false);
                };
                let Some(node) = self.state.tree.snapshot().find(id) else {
                    return DispatchResult::changed(false);
                };
                let name = node.name().to_string();
                let kind = node.kind();
                self.state
                    .ui
                    .input_dialog
                    .open(InputDialogKind::Rename { id, kind }, "Rename", &name);
                DispatchResult::changed(true)
            }
            Command::ExplorerDelete => {
                let Some(id) = self.state.explorer.selected().and_then(RowId::node) else {
                    return DispatchResult::changed(false);
                };
                let Some(node) = self.state.tree.snapshot().find(id) else {
                    return DispatchResult::changed(false);
                };
                let name = CompactString::from(node.name());
                let message = format!("Do you want to delete \"{name}\"?");
                self.state.ui.confirm_dialog.open(
                    "Delete",
                    message,
                    PendingAction::DeleteNode { id, name },
                );
                DispatchResult::changed(true)
            }
            Command::Save => {
                if !self.state.editor.mark_saved() {
                    return DispatchResult::changed(false);
                }
                self.state.ui.notice.show(Notice::info(
                    "Info",
                    "Save functionality is not developed yet.",
                ));
                DispatchResult::changed(true)
            }
            Command::CloseFile => {
                if self.state.editor.open.is_none() {
                    return DispatchResult::changed(false);
                }
                if self.state.editor.is_modified() {
                    self.state.ui.confirm_dialog.open(
                        "Close File",
                        "You have unsaved changes. Are you sure you want to close this file?"
                            .to_string(),
                        PendingAction::CloseFile,
                    );
                    return DispatchResult::changed(true);
                }
                self.close_file();
                DispatchResult::changed(true)
            }
            Command::CursorLeft
            | Command::CursorRight
            | Command::CursorUp
            | Command::CursorDown
            | Command::CursorLineStart
            | Command::CursorLineEnd
            | Command::InsertNewline
            | Command::InsertTab
            | Command::DeleteBackward
            | Command::DeleteForward => {
                if self.state.ui.focus != FocusTarget::Editor {
                    return DispatchResult::changed(false);
                }
                DispatchResult::changed(self.state.editor.apply_command(command))
            }
        }
    }

    fn set_focus(&mut self, target: FocusTarget) -> bool {
        if target == FocusTarget::Editor && self.state.editor.open.is_none() {
            return false;
        }
        let mut changed = false;
        if target == FocusTarget::Explorer && !self.state.ui.sidebar.visible {
            self.state.ui.sidebar.visible = true;
            changed = true;
        }
        if self.state.ui.focus != target {
            self.state.ui.focus = target;
            changed = true;
        }
        changed
    }

    fn close_file(&mut self) {
        if let Some(file) = self.state.editor.open.as_ref() {
            tracing::debug!(node = %file.node, "closed file");
        }
        self.state.editor.close();
        self.state.ui.focus = FocusTarget::Explorer;
        self.state.ui.sidebar.visible = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
