use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, Result};

pub struct AppPaths {
    pub base_dir: PathBuf,
    pub db_path: PathBuf,
    pub config_path: PathBuf,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    pub fn new() -> Self {
        let base = dirs::home_dir()
            .expect("Could not determine home directory")
            .join(".vidcat");
        Self::from_base(base)
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            db_path: base.join("vidcat.db"),
            config_path: base.join("config.json"),
            base_dir: base,
        }
    }
}

/// Cosmetic knobs for the menu loop. All fields are optional in the file;
/// a missing file means all defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause between menu screens, in seconds.
    pub pause_secs: u64,
    /// Width of the separator rules drawn around menus and tables.
    pub rule_width: usize,
    /// Clear the terminal between menu screens.
    pub clear_screen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pause_secs: 2,
            rule_width: 50,
            clear_screen: true,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base() {
        let paths = AppPaths::from_base(PathBuf::from("/tmp/test-vidcat"));
        assert_eq!(paths.base_dir, PathBuf::from("/tmp/test-vidcat"));
        assert_eq!(paths.db_path, PathBuf::from("/tmp/test-vidcat/vidcat.db"));
        assert_eq!(
            paths.config_path,
            PathBuf::from("/tmp/test-vidcat/config.json")
        );
    }

    #[test]
    fn test_new_uses_home_dir() {
        let paths = AppPaths::new();
        assert!(paths.base_dir.ends_with(".vidcat"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pause_secs, 2);
        assert_eq!(settings.rule_width, 50);
        assert!(settings.clear_screen);
    }

    #[test]
    fn test_settings_missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(settings.rule_width, 50);
    }

    #[test]
    fn test_settings_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"pause_secs": 0}"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.pause_secs, 0);
        assert_eq!(settings.rule_width, 50);
    }

    #[test]
    fn test_settings_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let result = Settings::load(&path);
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }
}
