//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the headless core never depends on
//! terminal crates.

pub mod crossterm;
pub mod terminal_guard;
pub mod view;
