//! Headless application core (state/action/effect).

pub mod action;
pub mod editor;
pub mod effect;
pub mod explorer;
pub mod services;
pub mod sidebar;
pub mod state;
pub mod store;

pub use action::Action;
pub use editor::{placeholder_content, EditorState, OpenFile};
pub use effect::Effect;
pub use explorer::{Activation, ExplorerState, RowId, TreeRow};
pub use sidebar::SidebarState;
pub use state::{
    AppState, ConfirmDialogState, ExplorerContextMenuItem, ExplorerContextMenuState, FocusTarget,
    InputDialogKind, InputDialogState, Notice, NoticeLevel, NoticeState, PendingAction, UiState,
};
pub use store::{DispatchResult, Store};
