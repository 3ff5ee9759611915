//! Configuration types for the asset picker
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Section structs for selection, dialogs and startup behavior

use serde::{Deserialize, Serialize};

pub use crate::selection::RangeMode;

/// Application settings (.picker/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub selection: SelectionSettings,

    #[serde(default)]
    pub dialogs: DialogSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Selection settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SelectionSettings {
    /// How shift-range picks treat items outside the range
    #[serde(default)]
    pub range_mode: RangeMode,
}

/// Dialog ids used by the built-in dialogs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialogSettings {
    /// Id of the asset edit dialog opened by row clicks
    #[serde(default = "default_edit_dialog_id")]
    pub edit_dialog_id: String,

    /// Id of the delete confirmation dialog
    #[serde(default = "default_confirm_dialog_id")]
    pub confirm_dialog_id: String,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            edit_dialog_id: default_edit_dialog_id(),
            confirm_dialog_id: default_confirm_dialog_id(),
        }
    }
}

fn default_edit_dialog_id() -> String {
    "edit".to_string()
}

fn default_confirm_dialog_id() -> String {
    "confirm".to_string()
}

/// Startup behavior
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// When set, start embedded in this document (row clicks report a
    /// selection instead of picking)
    #[serde(default)]
    pub document_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.selection.range_mode, RangeMode::Additive);
        assert_eq!(settings.dialogs.edit_dialog_id, "edit");
        assert_eq!(settings.dialogs.confirm_dialog_id, "confirm");
        assert!(settings.behavior.document_id.is_none());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let toml = r#"
[selection]
range_mode = "replace"

[dialogs]
edit_dialog_id = "asset-edit"
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.selection.range_mode, RangeMode::Replace);
        assert_eq!(settings.dialogs.edit_dialog_id, "asset-edit");
        assert_eq!(settings.dialogs.confirm_dialog_id, "confirm");
    }

    #[test]
    fn test_unknown_range_mode_is_rejected() {
        let result: Result<Settings, _> = toml::from_str("[selection]\nrange_mode = \"sideways\"");
        assert!(result.is_err());
    }
}
