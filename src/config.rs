use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use log::LevelFilter;
use serde::Deserialize;

use crate::theme::{Theme, ThemeConfig};

/// User settings from `<config-dir>/rm/config.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub color: bool,
    pub theme: ThemeConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl Settings {
    /// Missing file means defaults. Read and parse failures are returned so the
    /// caller can report them after logging is up.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file at {}", path.display()))?;
        toml::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse config file at {}", path.display()))
    }

    pub fn level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }

    /// Build the output theme; styling is off when disabled or when stdout
    /// is not a terminal.
    pub fn theme(&self, is_terminal: bool) -> Theme {
        if self.color && is_terminal {
            self.theme.clone().into_theme()
        } else {
            Theme::plain()
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("rm").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults_when_keys_missing() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.level(), LevelFilter::Warn);
        assert!(settings.color);
        assert!(settings.theme.preset.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "log_level = \"debug\"\ncolor = false\n\n[theme]\npreset = \"gruvbox\"\ntoday_fg = \"red\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.level(), LevelFilter::Debug);
        assert!(!settings.color);

        assert!(!settings.theme(true).enabled);
        let colored = Settings {
            color: true,
            ..settings
        };
        assert_eq!(colored.theme(true).name, "gruvbox");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "color = \"sometimes\"").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_level_falls_back_to_warn() {
        let settings = Settings {
            log_level: "chatty".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.level(), LevelFilter::Warn);
    }

    #[test]
    fn test_theme_disabled_off_terminal() {
        assert!(!Settings::default().theme(false).enabled);
        assert!(Settings::default().theme(true).enabled);
    }
}
