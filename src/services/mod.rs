//! Settings file (serde + serde_json) shared by every frontend.

pub mod settings;

pub use settings::{
    ensure_log_dir, ensure_settings_file, load_settings, load_settings_from, KeybindingRule,
    Settings, ThemeSettings,
};
