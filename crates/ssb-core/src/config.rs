use crate::theme::{string_to_theme, Theme, ThemeName};
use crate::CONFIG_DIR;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Name selecting `custom_theme` in `general.theme`.
pub const CUSTOM_THEME: &str = "Custom";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot access config file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub general: GeneralSettings,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub custom_theme: Option<Theme>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralSettings {
    /// A [`ThemeName`] as displayed, or [`CUSTOM_THEME`].
    pub theme: String,
    /// `log` level filter for this application's own modules.
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: ThemeName::default().to_string(),
            log_level: "debug".to_string(),
        }
    }
}

pub static CONFIG_FILE: LazyLock<PathBuf> = LazyLock::new(|| CONFIG_DIR.join("config.toml"));

impl Config {
    /// Tokens selected by `general.theme`.
    ///
    /// `Custom` without a `custom_theme` table falls back to the named presets.
    #[must_use]
    pub fn theme(&self) -> Theme {
        match &self.custom_theme {
            Some(custom) if self.general.theme.eq_ignore_ascii_case(CUSTOM_THEME) => {
                custom.clone()
            }
            _ => string_to_theme(&self.general.theme).theme(),
        }
    }

    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        self.general.log_level.parse().unwrap_or(log::LevelFilter::Debug)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Ok(toml::from_str(&s)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }

    pub fn save_changes(&self) -> Result<(), ConfigError> {
        debug!("config: saving to {}", CONFIG_FILE.display());
        self.save_to(&CONFIG_FILE)
    }

    /// Reads the user config, restoring the default file when it is missing
    /// or invalid.
    #[must_use]
    pub fn load_configuration_file() -> Self {
        Self::load_or_restore(&CONFIG_FILE)
    }

    #[must_use]
    pub fn load_or_restore(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => return config,
            Err(e) => error!("{e}"),
        }
        error!("Restoring default config file");
        let config = Self::default();
        if let Err(e) = config.save_to(path) {
            error!("Could not write config file to disk: {e}");
        }
        config
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.theme, ThemeName::default().to_string());
        assert_eq!(config.custom_theme, None);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            general: GeneralSettings {
                theme: "Dark".to_string(),
                log_level: "warn".to_string(),
            },
            custom_theme: None,
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.theme(), Theme::dark());
        assert_eq!(loaded.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_invalid_file_is_restored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "general = 12").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));

        let config = Config::load_or_restore(&path);
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_custom_theme() {
        let src = r##"
            [general]
            theme = "Custom"

            [custom_theme]
            name = "brand"
            grid_unit = 6.0
        "##;
        let config: Config = toml::from_str(src).unwrap();
        let theme = config.theme();
        assert_eq!(theme.name, "brand");
        assert!((theme.grid_unit - 6.0).abs() < f32::EPSILON);
        assert_eq!(theme.primary, Theme::light().primary);
    }

    #[test]
    fn test_custom_without_table_uses_preset() {
        let config = Config {
            general: GeneralSettings {
                theme: CUSTOM_THEME.to_string(),
                ..GeneralSettings::default()
            },
            custom_theme: None,
        };
        assert_eq!(config.theme(), ThemeName::Auto.theme());
    }
}
