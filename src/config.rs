//! Preview configuration
//!
//! Persistent defaults for the `icon-preview` binary. Command-line flags
//! override whatever is loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::errors::{PreviewError, Result};

/// Preview settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Grid width in characters
    pub width: usize,

    /// Grid height in lines
    pub height: usize,

    /// Print the icon name above each preview
    pub show_names: bool,

    /// Text printed between consecutive previews
    pub separator: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show_names: true,
            separator: String::new(),
        }
    }
}

impl PreviewConfig {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "icon-preview", "icon-preview")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Path of the config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Reject sizes the rasterizer cannot draw anything into
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(PreviewError::param_error("width", "must be greater than zero"));
        }
        if self.height == 0 {
            return Err(PreviewError::param_error("height", "must be greater than zero"));
        }
        Ok(())
    }
}

/// Load configuration from the default location, or defaults if there is none
pub fn load_config() -> Result<PreviewConfig> {
    let Some(path) = PreviewConfig::config_path() else {
        tracing::debug!("No config directory available, using defaults");
        return Ok(PreviewConfig::default());
    };

    if !path.exists() {
        return Ok(PreviewConfig::default());
    }

    load_config_from(&path)
}

/// Load configuration from an explicit file (TOML, or JSON by extension)
pub fn load_config_from(path: &Path) -> Result<PreviewConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        PreviewError::config(format!("Failed to read config {}: {e}", path.display()))
    })?;

    let config: PreviewConfig = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content)
            .map_err(|e| PreviewError::config(format!("Invalid JSON config: {e}")))?
    } else {
        toml::from_str(&content)
            .map_err(|e| PreviewError::config(format!("Invalid TOML config: {e}")))?
    };

    tracing::debug!("Loaded config from {}", path.display());
    config.validate()?;
    Ok(config)
}

/// Save configuration to a file
pub fn save_config(config: &PreviewConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PreviewError::config(format!("Failed to create config dir: {e}")))?;
    }

    let content = if path.extension().is_some_and(|e| e == "json") {
        serde_json::to_string_pretty(config)
            .map_err(|e| PreviewError::config(format!("Failed to serialize config: {e}")))?
    } else {
        toml::to_string_pretty(config)
            .map_err(|e| PreviewError::config(format!("Failed to serialize config: {e}")))?
    };

    fs::write(path, content)
        .map_err(|e| PreviewError::config(format!("Failed to write config: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PreviewConfig::default();
        assert_eq!(config.width, 16);
        assert_eq!(config.height, 16);
        assert!(config.show_names);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "width = 32\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 16);
        assert!(config.show_names);
    }

    #[test]
    fn test_json_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"height": 8, "show_names": false}"#).unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.height, 8);
        assert!(!config.show_names);
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "width = \"wide\"").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, PreviewError::ConfigurationError(_)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "width = 0").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, PreviewError::ParameterValidationError { .. }));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = PreviewConfig {
            width: 24,
            separator: "---".to_string(),
            ..Default::default()
        };
        save_config(&config, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/icon-preview.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
