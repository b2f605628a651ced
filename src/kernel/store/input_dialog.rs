use crate::kernel::explorer::RowId;
use crate::kernel::{Action, InputDialogKind, Notice};
use crate::models::{NodeKind, ParentRef};

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputDialogAppend(ch) => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || ch.is_control() {
                    return super::DispatchResult::changed(false);
                }

                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogBackspace => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::changed(false);
                }

                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCursorLeft => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor == 0 {
                    return super::DispatchResult::changed(false);
                }

                dialog.cursor = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCursorRight => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible || dialog.cursor >= dialog.value.len() {
                    return super::DispatchResult::changed(false);
                }

                dialog.cursor = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                super::DispatchResult::changed(true)
            }
            Action::InputDialogCancel => {
                if !self.state.ui.input_dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                self.state.ui.input_dialog.reset();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogAccept => {
                let dialog = &mut self.state.ui.input_dialog;
                if !dialog.visible {
                    return super::DispatchResult::changed(false);
                }

                let Some(kind) = dialog.kind.clone() else {
                    dialog.reset();
                    return super::DispatchResult::changed(true);
                };

                // Names are kept exactly as typed.
                let value = dialog.value.clone();
                if let Some(message) = kind.validate(&value) {
                    let prev = dialog.error.replace(message);
                    return super::DispatchResult::changed(
                        prev.as_deref() != dialog.error.as_deref(),
                    );
                }
                dialog.reset();

                match kind {
                    InputDialogKind::NewFile { parent } => {
                        self.create_node(parent, value, NodeKind::File)
                    }
                    InputDialogKind::NewFolder { parent } => {
                        self.create_node(parent, value, NodeKind::Folder)
                    }
                    InputDialogKind::Rename { id, .. } => {
                        let unchanged = self
                            .state
                            .tree
                            .snapshot()
                            .find(id)
                            .is_some_and(|node| node.name() == value);
                        if !unchanged {
                            self.state.tree.rename(id, value.as_str());
                            self.state.explorer.sync(self.state.tree.snapshot(), None);
                            self.state.editor.rename_open(id, &value);
                        }
                    }
                }

                super::DispatchResult::changed(true)
            }
            _ => super::DispatchResult::changed(false),
        }
    }

    fn create_node(&mut self, parent: ParentRef, name: String, kind: NodeKind) {
        match self.state.tree.create(parent, name.as_str(), kind) {
            Err(err) => {
                self.state.ui.notice.show(Notice::error(err.to_string()));
            }
            Ok(created) => {
                let Some(id) = created.id else {
                    return;
                };
                let snapshot = self.state.tree.snapshot();
                let explorer = &mut self.state.explorer;
                explorer.sync(snapshot, None);
                explorer.reveal(id, snapshot);
                explorer.select(RowId::Node(id));

                let label = match kind {
                    NodeKind::File => "File",
                    NodeKind::Folder => "Folder",
                };
                self.state
                    .ui
                    .notice
                    .show(Notice::success(format!("{label} \"{name}\" has been created.")));
            }
        }
    }
}
