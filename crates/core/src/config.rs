//! Application configuration persisted under the user config directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Directory name under the platform config root.
pub const APP_DIR: &str = "gamedex";
const CONFIG_FILE: &str = "config.toml";

/// Visual theme choice, persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark palette (default).
    Dark,
    /// Light palette.
    Light,
}

impl ThemePreference {
    /// The opposite preference.
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    /// Stable string form used in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }
}

/// User-tunable application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location of the catalog JSON file.
    pub data_path: PathBuf,
    /// Persisted visual theme.
    pub theme: ThemePreference,
    /// Number of records in the highlights carousel.
    pub highlight_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/games.json"),
            theme: ThemePreference::Dark,
            highlight_count: 5,
        }
    }
}

impl AppConfig {
    /// Directory holding the config file.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Full path of the config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load settings from the default location, applying `GAMEDEX_*`
    /// environment overrides on top.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("data_path", "data/games.json")?
            .set_default("theme", "dark")?
            .set_default("highlight_count", 5i64)?
            .add_source(File::from(Self::config_path()).required(false))
            .add_source(Environment::with_prefix("GAMEDEX"))
            .build()
            .context("failed to assemble configuration")?;
        settings
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    /// Load settings from an explicit file, falling back to defaults for
    /// anything unset. Missing files are not an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Config::builder()
            .set_default("data_path", "data/games.json")?
            .set_default("theme", "dark")?
            .set_default("highlight_count", 5i64)?
            .add_source(File::from(path.as_ref().to_path_buf()).required(false))
            .build()
            .context("failed to assemble configuration")?;
        settings
            .try_deserialize()
            .context("failed to deserialize configuration")
    }

    /// Record a theme change and write it back to the default location.
    pub fn save_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.theme = theme;
        self.persist_to(Self::config_path())
    }

    /// Write the current settings to the given file.
    pub fn persist_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, self.render())
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn render(&self) -> String {
        format!(
            "# gamedex configuration\n\
             data_path = \"{}\"\n\
             theme = \"{}\"\n\
             highlight_count = {}\n",
            self.data_path.display(),
            self.theme.as_str(),
            self.highlight_count
        )
    }
}

/// Write a default config file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        return Ok(());
    }
    AppConfig::default().persist_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let temp = tempdir()?;
        let config = AppConfig::load_from(temp.path().join("absent.toml"))?;
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.data_path, PathBuf::from("data/games.json"));
        assert_eq!(config.highlight_count, 5);
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "theme = \"light\"\nhighlight_count = 3\n")?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.theme, ThemePreference::Light);
        assert_eq!(config.highlight_count, 3);
        assert_eq!(config.data_path, PathBuf::from("data/games.json"));
        Ok(())
    }

    #[test]
    fn persisted_config_round_trips() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("config.toml");

        let config = AppConfig {
            theme: ThemePreference::Light,
            data_path: PathBuf::from("custom/catalog.json"),
            ..AppConfig::default()
        };
        config.persist_to(&path)?;

        let loaded = AppConfig::load_from(&path)?;
        assert_eq!(loaded.theme, ThemePreference::Light);
        assert_eq!(loaded.data_path, PathBuf::from("custom/catalog.json"));
        Ok(())
    }

    #[test]
    fn toggling_flips_between_dark_and_light() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    }
}
