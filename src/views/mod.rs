//! View layer: pure rendering and hit testing over kernel state.

pub mod editor;
pub mod explorer;

pub use editor::{
    compute_editor_layout, cursor_position_editor, hit_test_editor, render_editor,
    render_welcome, EditorPaneLayout, MODIFIED_MARKER,
};
pub use explorer::{ExplorerPaintCtx, ExplorerView};
