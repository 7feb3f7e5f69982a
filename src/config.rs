//! Layout configuration and file loading.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("max_width must be at least 1")]
    InvalidMaxWidth,
}

/// Layout settings for one prettify call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width budget for a rendered line.
    pub max_width: usize,

    /// Prefix for continuation lines.
    pub indent: String,

    /// Put every flag on its own continuation line regardless of width.
    pub flags_on_new_line: bool,

    /// Never emit ANSI styling, whatever the terminal supports.
    pub disable_colors: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: 80,
            indent: "  ".to_string(),
            flags_on_new_line: false,
            disable_colors: false,
        }
    }
}

/// Partial config as read from a TOML file; unset fields keep the values
/// from the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    max_width: Option<usize>,
    indent: Option<String>,
    flags_on_new_line: Option<bool>,
    disable_colors: Option<bool>,
}

impl LayoutConfig {
    /// Load configuration, merging user and project files over the defaults.
    ///
    /// The user file is `~/.config/cmdpretty.toml`; a `.cmdpretty.toml` in
    /// `cwd` overlays it field by field.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = LayoutConfig::default();

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                config.apply(Self::read_file(&path)?);
            }
        }

        if let Some(cwd) = cwd {
            let path = cwd.join(".cmdpretty.toml");
            if path.exists() {
                config.apply(Self::read_file(&path)?);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Get user config path.
    /// Respects CMDPRETTY_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("CMDPRETTY_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".config/cmdpretty.toml"))
    }

    fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Overlay set fields from a config file onto this config.
    fn apply(&mut self, file: ConfigFile) {
        if let Some(max_width) = file.max_width {
            self.max_width = max_width;
        }
        if let Some(indent) = file.indent {
            self.indent = indent;
        }
        if let Some(flags_on_new_line) = file.flags_on_new_line {
            self.flags_on_new_line = flags_on_new_line;
        }
        if let Some(disable_colors) = file.disable_colors {
            self.disable_colors = disable_colors;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == 0 {
            return Err(ConfigError::InvalidMaxWidth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.max_width, 80);
        assert_eq!(config.indent, "  ");
        assert!(!config.flags_on_new_line);
        assert!(!config.disable_colors);
    }

    #[test]
    fn test_apply_overlay() {
        let mut config = LayoutConfig::default();
        config.apply(ConfigFile {
            max_width: Some(100),
            indent: None,
            flags_on_new_line: Some(true),
            disable_colors: None,
        });
        assert_eq!(config.max_width, 100);
        assert_eq!(config.indent, "  ");
        assert!(config.flags_on_new_line);
        assert!(!config.disable_colors);
    }

    #[test]
    fn test_read_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmdpretty.toml");
        fs::write(&path, "max_width = 120\nindent = \"    \"\n").unwrap();

        let file = LayoutConfig::read_file(&path).unwrap();
        assert_eq!(file.max_width, Some(120));
        assert_eq!(file.indent.as_deref(), Some("    "));
        assert_eq!(file.flags_on_new_line, None);
    }

    #[test]
    fn test_later_overlay_wins() {
        let mut config = LayoutConfig::default();
        config.apply(ConfigFile {
            max_width: Some(100),
            ..Default::default()
        });
        config.apply(ConfigFile {
            max_width: Some(60),
            disable_colors: Some(true),
            ..Default::default()
        });
        assert_eq!(config.max_width, 60);
        assert!(config.disable_colors);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmdpretty.toml");
        fs::write(&path, "max_width = \"wide\"").unwrap();

        assert!(matches!(
            LayoutConfig::read_file(&path),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = LayoutConfig {
            max_width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxWidth)
        ));
    }
}
