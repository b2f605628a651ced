mod explorer_view;

pub use explorer_view::{display_name, ExplorerPaintCtx, ExplorerView, MAX_NAME_CHARS, OPEN_MARKER};
