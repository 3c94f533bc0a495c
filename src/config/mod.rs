use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use settings_rows::{Appearance, IconSet, Theme};

/// Appearance requested by the user; `auto` follows the terminal theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceSetting {
    #[default]
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub title: String,
    pub accessibility_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub app_url: String,  // Opened when the app is installed
    pub web_url: String,  // Fallback
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,

    /// Shown in the version row
    pub version: String,

    pub appearance: AppearanceSetting,

    pub icon_set: IconSet,

    /// kitty-format colour file used to detect light/dark for `auto`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_file: Option<PathBuf>,

    /// Store page of the app; the review action is appended on tap
    pub store_url: String,

    pub made_with: Caption,

    pub social: SocialLinks,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "settings-rows".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            appearance: AppearanceSetting::Auto,
            icon_set: IconSet::Unicode,
            theme_file: None,
            store_url: "https://apps.example.com/app/123".to_string(),
            made_with: Caption {
                title: "Made with ❤️ in a terminal".to_string(),
                accessibility_label: "Made with love in a terminal".to_string(),
            },
            social: SocialLinks {
                app_url: "twitter://user?screen_name=example".to_string(),
                web_url: "https://twitter.com/example".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("settings-rows");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path` or the default location, creating a default
    /// file when none exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::config_path() {
                Ok(p) => p,
                Err(_) => return Ok(AppConfig::default()),
            },
        };

        if path.exists() {
            return Ok(Self::load_from(&path));
        }

        let config = AppConfig::default();
        if let Err(e) = config.save_to(&path) {
            tracing::warn!("Failed to write default config: {}", e);
        }
        Ok(config)
    }

    /// Read `path`, falling back to defaults on any read or parse error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Failed to parse config: {}", e),
            },
            Err(e) => tracing::warn!("Failed to read config: {}", e),
        }
        AppConfig::default()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Palette for the configured appearance
    pub fn theme(&self) -> Theme {
        match self.appearance {
            AppearanceSetting::Light => Theme::for_appearance(Appearance::Light),
            AppearanceSetting::Dark => Theme::for_appearance(Appearance::Dark),
            AppearanceSetting::Auto => match self.theme_file.clone().or_else(default_theme_file) {
                Some(path) => Theme::detect(&path),
                None => Theme::default(),
            },
        }
    }
}

fn default_theme_file() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("kitty/current-theme.conf"))
}
