//! Services layer (ports + adapters).
//!
//! - `ports`: plain data contracts used across the app.
//! - `adapters`: filesystem backed implementations (settings file, app dirs)
//!   and the keybinding table.

pub mod adapters;
pub mod ports;
