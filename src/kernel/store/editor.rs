use crate::kernel::{Action, FocusTarget};

impl super::Store {
    pub(super) fn reduce_editor_action(&mut self, action: Action) -> super::DispatchResult {
        let editor_focused = self.state.ui.focus == FocusTarget::Editor;
        let editor = &mut self.state.editor;

        let state_changed = match action {
            Action::EditorSetViewport { height, width } => editor.set_viewport(height, width),
            Action::EditorInsertChar(ch) if editor_focused => editor.insert_char(ch),
            Action::EditorPaste(text) if editor_focused => editor.paste(&text),
            Action::EditorScroll { delta } => editor.scroll(delta),
            Action::EditorClick { row, col } => {
                if editor.open.is_none() {
                    return super::DispatchResult::changed(false);
                }
                let moved = editor.click(row, col);
                let focused = !editor_focused;
                self.state.ui.focus = FocusTarget::Editor;
                moved || focused
            }
            _ => false,
        };

        super::DispatchResult::changed(state_changed)
    }
}
