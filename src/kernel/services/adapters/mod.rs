//! Service adapters: settings file, app directories and keybindings.

pub mod keybinding;
pub mod paths;
pub mod settings;

pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_app_data_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_keybinding,
};
