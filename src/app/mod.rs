//! Application layer: the workbench that owns the store and drives the views.

pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
