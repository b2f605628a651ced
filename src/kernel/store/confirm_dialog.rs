use crate::kernel::{Action, Notice, PendingAction};

impl super::Store {
    pub(super) fn reduce_confirm_dialog_action(
        &mut self,
        action: Action,
    ) -> super::DispatchResult {
        match action {
            Action::ConfirmDialogCancel => {
                if !self.state.ui.confirm_dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                self.state.ui.confirm_dialog.reset();
                super::DispatchResult::changed(true)
            }
            Action::ConfirmDialogAccept => {
                let dialog = &mut self.state.ui.confirm_dialog;
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                let pending = dialog.on_confirm.take();
                dialog.reset();

                match pending {
                    Some(PendingAction::DeleteNode { id, name }) => {
                        let parent = self.state.tree.snapshot().parent_of(id);
                        self.state.tree.remove(id);
                        self.state.explorer.sync(self.state.tree.snapshot(), parent);
                        self.state
                            .ui
                            .notice
                            .show(Notice::success(format!("\"{name}\" has been deleted.")));
                    }
                    Some(PendingAction::CloseFile) => self.close_file(),
                    None => {}
                }

                super::DispatchResult::changed(true)
            }
            _ => super::DispatchResult::changed(false),
        }
    }
}
