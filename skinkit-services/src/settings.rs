// SPDX-License-Identifier: MIT OR Apache-2.0
use anyhow::Result;
use serde::{Deserialize, Serialize};
use skinkit_theme::config::{ThemeConfig, ThemeConfigLayer, ENV_THEME_CONFIG};
use smol::fs;
use std::env;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// XDG prefix for every skinkit file.
pub const XDG_PREFIX: &str = "skinkit";
/// File name of the persisted user settings.
pub const SETTINGS_FILE: &str = "settings.json";
/// File name of the layered theme configuration.
pub const THEME_CONFIG_FILE: &str = "theme.toml";

/// User settings persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Name of the skin the user picked last.
    pub theme: Option<String>,
    /// Follow the desktop's light/dark preference instead of `theme`.
    pub use_system_theme: bool,
}

/// Owns the user [Settings] and the layered [ThemeConfig].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
    pub theme_config: ThemeConfig,
}

impl SettingsStore {
    /// Create a store in the XDG config home and load everything from the
    /// standard locations.
    pub async fn new() -> Result<Self> {
        let xdg_dirs = BaseDirectories::with_prefix(XDG_PREFIX)?;
        let mut store = Self::at(xdg_dirs.get_config_home().join(SETTINGS_FILE));
        store.load().await?;
        store.load_theme_config(&xdg_dirs).await;
        Ok(store)
    }

    /// Create a store backed by `path` with default contents. Nothing is read.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settings: Settings::default(),
            theme_config: ThemeConfig::new(),
        }
    }

    /// Where the settings are persisted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings.
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Get the current settings for modification. Call [save](Self::save)
    /// to persist them.
    pub fn get_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Read the settings file. A missing file leaves the defaults in place;
    /// an unreadable or malformed file is logged and replaced by defaults.
    pub async fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            log::debug!("No settings at {:?}, using defaults", self.path);
            self.settings = Settings::default();
            return Ok(());
        }

        log::info!("Loading settings from: {:?}", self.path);
        self.settings = match fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings {:?}: {}", self.path, e);
                    Settings::default()
                },
            },
            Err(e) => {
                log::warn!("Failed to read settings {:?}: {}", self.path, e);
                Settings::default()
            },
        };
        Ok(())
    }

    /// Write the settings file, creating its directory if needed.
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write settings {:?}: {}", self.path, e))?;
        log::info!("Saved settings to: {:?}", self.path);
        Ok(())
    }

    /// Load theme configuration from standard locations.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/skinkit/theme.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/skinkit/theme.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/skinkit/theme.toml (XDG_CONFIG_HOME)
    /// 4. The file named by `SKINKIT_THEME_CONFIG`
    /// 5. The remaining `SKINKIT_*` environment variables
    async fn load_theme_config(&mut self, xdg_dirs: &BaseDirectories) {
        for path in xdg_dirs.find_data_files(THEME_CONFIG_FILE).rev() {
            self.load_theme_file(&path).await;
        }

        for path in xdg_dirs.find_config_files(THEME_CONFIG_FILE).rev() {
            self.load_theme_file(&path).await;
        }

        if let Some(user_config_path) = xdg_dirs.find_config_file(THEME_CONFIG_FILE) {
            self.load_theme_file(&user_config_path).await;
        }

        if let Ok(path) = env::var(ENV_THEME_CONFIG) {
            self.load_theme_file(Path::new(&path)).await;
        }

        self.theme_config
            .merge(ThemeConfigLayer::from_env_with(|key| env::var(key).ok()));
    }

    async fn load_theme_file(&mut self, path: &Path) {
        log::info!("Loading theme config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match ThemeConfigLayer::from_toml(&content) {
                Ok(layer) => {
                    self.theme_config.merge(layer);
                },
                Err(e) => {
                    log::warn!("Failed to parse theme config {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read theme config {:?}: {}", path, e);
            },
        }
    }

    /// Merge theme configuration from custom paths, in order.
    pub async fn load_theme_config_from_paths(&mut self, paths: Vec<PathBuf>) -> Vec<Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result = async {
                let content = fs::read_to_string(&path).await.map_err(|e| {
                    anyhow::anyhow!("Failed to read theme config {:?}: {}", path, e)
                })?;

                let layer = ThemeConfigLayer::from_toml(&content).map_err(|e| {
                    anyhow::anyhow!("Failed to parse theme config {:?}: {}", path, e)
                })?;

                self.theme_config.merge(layer);
                Ok(())
            }
            .await;

            results.push(result);
        }

        results
    }

    /// Re-read the settings file and reset the theme configuration to its defaults.
    pub async fn reload_async(&mut self) -> Result<()> {
        self.theme_config = ThemeConfig::new();
        self.load().await
    }
}
