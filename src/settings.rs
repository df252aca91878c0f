//! Persisted user preferences.
//!
//! One store, read once at startup and written back through
//! [`SettingsStore::set_theme`] only.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Environment variable overriding the settings file location.
pub const SETTINGS_PATH_ENV: &str = "ESTIMATOR_SETTINGS_PATH";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// `$ESTIMATOR_SETTINGS_PATH`, else `<config dir>/estimator/settings.json`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let base = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(base.join("estimator").join("settings.json"))
    }

    /// Reads the settings file. A missing or malformed file yields defaults;
    /// the next save overwrites it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let settings = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
                    Settings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Settings::default()
            }
            Err(source) => return Err(SettingsError::Io { path, source }),
        };
        Ok(Self { path, settings })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Updates the theme and writes the file.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), SettingsError> {
        self.settings.theme = theme;
        self.save()?;
        info!(%theme, "theme saved");
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, SettingsError> {
        let theme = self.settings.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    fn save(&self) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&self.settings).map_err(|source| {
            SettingsError::Invalid {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::load(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = SettingsStore::load(&path).unwrap();
        assert_eq!(store.toggle_theme().unwrap(), Theme::Light);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"light\""));

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.settings(), &Settings { theme: Theme::Light });
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        for content in ["{ theme: ", "\"dark\"", "{\"theme\": \"sepia\"}"] {
            let path = dir.path().join("settings.json");
            std::fs::write(&path, content).unwrap();

            let store = SettingsStore::load(&path).unwrap();
            assert_eq!(store.theme(), Theme::Dark, "{content}");
            assert_eq!(store.path(), path.as_path());
        }
    }

    #[test]
    fn toggle_repairs_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "\"dark\"").unwrap();

        let mut store = SettingsStore::load(&path).unwrap();
        store.toggle_theme().unwrap();

        let reloaded = SettingsStore::load(&path).unwrap();
        assert_eq!(reloaded.settings(), &Settings { theme: Theme::Light });
    }

    #[test]
    fn theme_parses() {
        assert_eq!("DARK".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
