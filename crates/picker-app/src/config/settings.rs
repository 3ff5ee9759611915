//! Settings loading and persistence

use std::path::{Path, PathBuf};

use picker_core::prelude::*;

use super::types::Settings;

/// Directory holding picker config, relative to the working directory
pub const PICKER_DIR: &str = ".picker";

const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# Asset Picker Configuration

[selection]
range_mode = "additive"   # "replace" makes a shift-range the exact selection

[dialogs]
edit_dialog_id = "edit"
confirm_dialog_id = "confirm"

[behavior]
# document_id = "my-document"   # start embedded in a document
"#;

fn config_path(workdir: &Path) -> PathBuf {
    workdir.join(PICKER_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<workdir>/.picker/config.toml`.
///
/// A missing or unparsable file yields defaults; parse problems are logged.
pub fn load_settings(workdir: &Path) -> Settings {
    load_settings_from(&config_path(workdir))
}

/// Load settings from an explicit file path
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Create `.picker/config.toml` with commented defaults if it does not exist
pub fn init_config_dir(workdir: &Path) -> Result<PathBuf> {
    let dir = workdir.join(PICKER_DIR);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        std::fs::write(&path, DEFAULT_CONFIG)?;
        info!("Created default config at {}", path.display());
    }
    Ok(path)
}

/// Write settings to `<workdir>/.picker/config.toml`
pub fn save_settings(workdir: &Path, settings: &Settings) -> Result<()> {
    let path = config_path(workdir);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    std::fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangeMode;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_init_writes_parsable_defaults() {
        let temp = tempdir().unwrap();
        let path = init_config_dir(temp.path()).unwrap();

        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(PICKER_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "[selection]\nrange_mode = \"replace\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(
            load_settings(temp.path()).selection.range_mode,
            RangeMode::Replace
        );
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(PICKER_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "this is = = not toml").unwrap();

        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.selection.range_mode = RangeMode::Replace;
        settings.behavior.document_id = Some("doc-1".to_string());

        save_settings(temp.path(), &settings).unwrap();

        assert_eq!(load_settings(temp.path()), settings);
    }
}
