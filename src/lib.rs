//! treepad - a terminal mock IDE over an in-memory file tree.
//!
//! Module layout:
//! - core: shared vocabulary (input events, commands)
//! - models: the persistent file tree store and the editor text buffer
//! - kernel: headless state, actions and the dispatching store
//! - tui / views / app: the crossterm + ratatui frontend (feature `tui`)

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
