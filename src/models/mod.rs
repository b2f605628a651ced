//! Data models: the file tree store and the editor buffer.

pub mod file_tree;
pub mod text_buffer;

pub use file_tree::{
    names_collide, Created, FileTree, FileTreeError, Node, NodeId, NodeKind, ParentRef, Snapshot,
    ROOT_NAME,
};
pub use text_buffer::{slice_to_cow, TextBuffer};
