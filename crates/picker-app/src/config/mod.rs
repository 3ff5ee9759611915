//! Configuration file parsing for the asset picker
//!
//! Supports:
//! - `.picker/config.toml` - Selection, dialog and startup settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, load_settings_from, save_settings};
pub use types::*;
