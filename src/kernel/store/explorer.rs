use crate::kernel::explorer::{Activation, RowId};
use crate::kernel::state::{ExplorerContextMenuItem, ExplorerContextMenuState};
use crate::kernel::{Action, FocusTarget};

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerSetViewHeight { height } => {
                super::DispatchResult::changed(self.state.explorer.set_view_height(height))
            }
            Action::ExplorerMoveSelection { delta } => {
                super::DispatchResult::changed(self.state.explorer.move_selection(delta))
            }
            Action::ExplorerScroll { delta } => {
                super::DispatchResult::changed(self.state.explorer.scroll(delta))
            }
            Action::ExplorerActivate => {
                let (state_changed, activation) = self
                    .state
                    .explorer
                    .activate_selected(self.state.tree.snapshot());
                let opened = self.apply_activation(activation);
                super::DispatchResult::changed(state_changed || opened)
            }
            Action::ExplorerCollapse => super::DispatchResult::changed(
                self.state
                    .explorer
                    .collapse_selected(self.state.tree.snapshot()),
            ),
            Action::ExplorerClickRow { row } => {
                let mut state_changed = false;
                if self.state.ui.focus != FocusTarget::Explorer {
                    self.state.ui.focus = FocusTarget::Explorer;
                    state_changed = true;
                }
                let (changed, activation) = self
                    .state
                    .explorer
                    .click_row(row, self.state.tree.snapshot());
                let opened = self.apply_activation(activation);
                super::DispatchResult::changed(state_changed || changed || opened)
            }
            Action::ExplorerContextMenuOpen { tree_row, anchor } => {
                if self.state.ui.input_dialog.visible || self.state.ui.confirm_dialog.visible {
                    return super::DispatchResult::changed(false);
                }

                let mut state_changed = false;
                if !self.state.ui.sidebar.visible {
                    self.state.ui.sidebar.visible = true;
                    state_changed = true;
                }
                if self.state.ui.focus != FocusTarget::Explorer {
                    self.state.ui.focus = FocusTarget::Explorer;
                    state_changed = true;
                }

                if let Some(row) = tree_row {
                    state_changed |= self.state.explorer.select_row(row);
                }

                let Some(selected) = self.state.explorer.selected_row() else {
                    return super::DispatchResult::changed(state_changed);
                };

                let mut items = Vec::with_capacity(4);
                if selected.is_folder {
                    items.push(ExplorerContextMenuItem::NewFile);
                    items.push(ExplorerContextMenuItem::NewFolder);
                }
                if selected.id != RowId::Root {
                    items.push(ExplorerContextMenuItem::Rename);
                    items.push(ExplorerContextMenuItem::Delete);
                }

                let prev = self.state.ui.explorer_context_menu.clone();
                self.state.ui.explorer_context_menu = ExplorerContextMenuState {
                    visible: true,
                    anchor,
                    selected: 0,
                    items,
                };
                state_changed |= self.state.ui.explorer_context_menu != prev;

                super::DispatchResult::changed(state_changed)
            }
            Action::ExplorerContextMenuClose => {
                if !self.state.ui.explorer_context_menu.visible {
                    return super::DispatchResult::changed(false);
                }
                self.state.ui.explorer_context_menu = ExplorerContextMenuState::default();
                super::DispatchResult::changed(true)
            }
            Action::ExplorerContextMenuMoveSelection { delta } => {
                let menu = &mut self.state.ui.explorer_context_menu;
                if !menu.visible || delta == 0 || menu.items.is_empty() {
                    return super::DispatchResult::changed(false);
                }

                let len = menu.items.len() as isize;
                let current = menu.selected.min(menu.items.len() - 1) as isize;
                let next = (current + delta).rem_euclid(len) as usize;
                let changed = next != menu.selected;
                menu.selected = next;
                super::DispatchResult::changed(changed)
            }
            Action::ExplorerContextMenuSetSelected { index } => {
                let menu = &mut self.state.ui.explorer_context_menu;
                if !menu.visible || menu.items.is_empty() {
                    return super::DispatchResult::changed(false);
                }

                let next = index.min(menu.items.len() - 1);
                let changed = next != menu.selected;
                menu.selected = next;
                super::DispatchResult::changed(changed)
            }
            Action::ExplorerContextMenuConfirm => {
                if !self.state.ui.explorer_context_menu.visible {
                    return super::DispatchResult::changed(false);
                }

                let menu = std::mem::take(&mut self.state.ui.explorer_context_menu);
                let Some(cmd) = menu.items.get(menu.selected).map(|item| item.command()) else {
                    return super::DispatchResult::changed(true);
                };

                let mut result = self.dispatch(Action::RunCommand(cmd));
                result.state_changed = true;
                result
            }
            _ => super::DispatchResult::changed(false),
        }
    }

    fn apply_activation(&mut self, activation: Activation) -> bool {
        let Activation::OpenFile(id) = activation else {
            return false;
        };
        let Some(node) = self.state.tree.snapshot().find(id) else {
            return false;
        };
        let name = node.name().to_string();
        self.state.editor.open_file(id, &name)
    }
}
