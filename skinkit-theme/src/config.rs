//! # Skin Configuration
//!
//! [ThemeConfig] holds the application-level skin settings: which skin to
//! start with, what to fall back to, how strictly to validate and how to
//! treat unknown override names.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults ([ThemeConfig::new])
//! 2. A TOML file with a `[theme]` table
//! 3. Environment variables
//!
//! ## Environment Variables
//!
//! ```bash
//! export SKINKIT_THEME=Light                 # skin name
//! export SKINKIT_THEME=file:./ocean.json     # skin document
//! export SKINKIT_THEME_FALLBACK=Dark
//! export SKINKIT_THEME_CONFIG=./skinkit.toml
//! export SKINKIT_THEMES_DIR=~/.local/share/skinkit/themes
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "Ocean"
//! fallback = "Light"
//! strict = true
//! unknown_overrides = "warn"
//! themes_dir = "./themes"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use skinkit_theme::config::{ThemeConfig, ThemeSelection};
//!
//! let config = ThemeConfig::new()
//!     .with_default_theme(ThemeSelection::named("Light"))
//!     .with_strict_validation(true);
//! assert_eq!(config.default_theme.to_string(), "Light");
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::inheritance::UnknownPropertyPolicy;

/// Environment variable naming the default skin.
pub const ENV_THEME: &str = "SKINKIT_THEME";
/// Environment variable naming the fallback skin.
pub const ENV_THEME_FALLBACK: &str = "SKINKIT_THEME_FALLBACK";
/// Environment variable pointing at a TOML configuration file.
pub const ENV_THEME_CONFIG: &str = "SKINKIT_THEME_CONFIG";
/// Environment variable pointing at a directory of skin documents.
pub const ENV_THEMES_DIR: &str = "SKINKIT_THEMES_DIR";

/// How a skin is specified in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeSelection {
    /// A skin registered under this name.
    Named(String),
    /// A skin document on disk, written as `file:<path>`.
    File(PathBuf),
}

impl ThemeSelection {
    /// Select a registered skin by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Parse `file:<path>` or a plain skin name.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        match source.strip_prefix("file:") {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Named(source.to_string()),
        }
    }
}

impl fmt::Display for ThemeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSelection::Named(name) => f.write_str(name),
            ThemeSelection::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

impl From<String> for ThemeSelection {
    fn from(source: String) -> Self {
        Self::parse(&source)
    }
}

impl From<ThemeSelection> for String {
    fn from(selection: ThemeSelection) -> Self {
        selection.to_string()
    }
}

/// Application-level skin settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// The skin to start with.
    pub default_theme: ThemeSelection,
    /// The skin to use when the default cannot be loaded.
    pub fallback_theme: Option<ThemeSelection>,
    /// Run every validation rule, and refuse skins with errors.
    pub strict_validation: bool,
    /// How unknown override names are treated during inheritance.
    pub unknown_overrides: UnknownPropertyPolicy,
    /// Directory scanned for skin documents.
    pub themes_dir: Option<PathBuf>,
}

/// One configuration source. Every member is optional; present members
/// override the configuration they are merged into.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfigLayer {
    /// See [ThemeConfig::default_theme].
    pub default: Option<ThemeSelection>,
    /// See [ThemeConfig::fallback_theme].
    pub fallback: Option<ThemeSelection>,
    /// See [ThemeConfig::strict_validation].
    pub strict: Option<bool>,
    /// See [ThemeConfig::unknown_overrides].
    pub unknown_overrides: Option<UnknownPropertyPolicy>,
    /// See [ThemeConfig::themes_dir].
    pub themes_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeConfigLayer,
}

impl ThemeConfigLayer {
    /// Parse the `[theme]` table of a TOML document. Other tables are ignored.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        Ok(toml::from_str::<ConfigFile>(content)?.theme)
    }

    /// Read the layer described by environment variables, through `lookup`.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            default: lookup(ENV_THEME).map(|value| ThemeSelection::parse(&value)),
            fallback: lookup(ENV_THEME_FALLBACK).map(|value| ThemeSelection::parse(&value)),
            strict: None,
            unknown_overrides: None,
            themes_dir: lookup(ENV_THEMES_DIR).map(PathBuf::from),
        }
    }
}

impl ThemeConfig {
    /// Create a configuration with the built-in defaults: "Dark", falling
    /// back to "Light", standard validation, unknown overrides ignored.
    pub fn new() -> Self {
        Self {
            default_theme: ThemeSelection::named("Dark"),
            fallback_theme: Some(ThemeSelection::named("Light")),
            strict_validation: false,
            unknown_overrides: UnknownPropertyPolicy::Ignore,
            themes_dir: None,
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// A file named by `SKINKIT_THEME_CONFIG` is applied first; the other
    /// variables override it. An unreadable file is logged and skipped.
    pub fn from_env_or_default() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Like [from_env_or_default](Self::from_env_or_default), reading
    /// variables through `lookup`.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = lookup(ENV_THEME_CONFIG) {
            match Self::layer_from_file(&path) {
                Ok(layer) => config.merge(layer),
                Err(err) => log::warn!("Ignoring theme config {}: {}", path, err),
            }
        }

        config.merge(ThemeConfigLayer::from_env_with(lookup));
        config
    }

    /// Load a configuration from a `.toml` file, on top of the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let mut config = Self::new();
        config.merge(Self::layer_from_file(path)?);
        Ok(config)
    }

    /// Load a configuration from TOML text, on top of the defaults.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let layer = ThemeConfigLayer::from_toml(content)
            .map_err(|err| ThemeError::parse_error("<inline>", err.to_string()))?;
        let mut config = Self::new();
        config.merge(layer);
        Ok(config)
    }

    fn layer_from_file(path: impl AsRef<Path>) -> ThemeResult<ThemeConfigLayer> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return Err(ThemeError::parse_error(
                path,
                "Unsupported configuration file format. Use .toml",
            ));
        }
        if !path.exists() {
            return Err(ThemeError::file_not_found(path));
        }

        let content = fs::read_to_string(path)?;
        log::info!("Loading theme config from: {:?}", path);
        ThemeConfigLayer::from_toml(&content)
            .map_err(|err| ThemeError::parse_error(path, err.to_string()))
    }

    /// Apply every member present in `layer`.
    pub fn merge(&mut self, layer: ThemeConfigLayer) {
        if let Some(default) = layer.default {
            self.default_theme = default;
        }
        if layer.fallback.is_some() {
            self.fallback_theme = layer.fallback;
        }
        if let Some(strict) = layer.strict {
            self.strict_validation = strict;
        }
        if let Some(policy) = layer.unknown_overrides {
            self.unknown_overrides = policy;
        }
        if layer.themes_dir.is_some() {
            self.themes_dir = layer.themes_dir;
        }
    }

    /// Set the default skin.
    pub fn with_default_theme(mut self, theme: ThemeSelection) -> Self {
        self.default_theme = theme;
        self
    }

    /// Set the fallback skin.
    pub fn with_fallback_theme(mut self, theme: ThemeSelection) -> Self {
        self.fallback_theme = Some(theme);
        self
    }

    /// Enable or disable strict validation.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    /// Set the unknown override policy.
    pub fn with_unknown_overrides(mut self, policy: UnknownPropertyPolicy) -> Self {
        self.unknown_overrides = policy;
        self
    }

    /// Set the skin document directory.
    pub fn with_themes_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.themes_dir = Some(dir.into());
        self
    }

    /// The default skin followed by the fallback, if any.
    pub fn selections(&self) -> impl Iterator<Item = &ThemeSelection> {
        std::iter::once(&self.default_theme).chain(self.fallback_theme.as_ref())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::new();
        assert_eq!(config.default_theme, ThemeSelection::named("Dark"));
        assert_eq!(config.fallback_theme, Some(ThemeSelection::named("Light")));
        assert!(!config.strict_validation);
        assert_eq!(config.unknown_overrides, UnknownPropertyPolicy::Ignore);
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!(ThemeSelection::parse("Ocean"), ThemeSelection::named("Ocean"));
        assert_eq!(
            ThemeSelection::parse("file:./skins/ocean.json"),
            ThemeSelection::File(PathBuf::from("./skins/ocean.json"))
        );
        assert_eq!(
            ThemeSelection::File(PathBuf::from("a.json")).to_string(),
            "file:a.json"
        );
    }

    #[test]
    fn test_from_toml() {
        let config = ThemeConfig::from_toml(
            r#"
            [window]
            width = 800

            [theme]
            default = "Ocean"
            strict = true
            unknown_overrides = "reject"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_theme, ThemeSelection::named("Ocean"));
        assert_eq!(config.fallback_theme, Some(ThemeSelection::named("Light")));
        assert!(config.strict_validation);
        assert_eq!(config.unknown_overrides, UnknownPropertyPolicy::Reject);
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(
            ThemeConfig::from_toml("[theme]\nstrict = \"very\""),
            Err(ThemeError::ThemeParseError { .. })
        ));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_THEME, "file:/tmp/ocean.json"),
            (ENV_THEME_FALLBACK, "Dark"),
            (ENV_THEMES_DIR, "/usr/share/skinkit/themes"),
        ]);
        let config = ThemeConfig::from_env_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.default_theme,
            ThemeSelection::File(PathBuf::from("/tmp/ocean.json"))
        );
        assert_eq!(config.fallback_theme, Some(ThemeSelection::named("Dark")));
        assert_eq!(
            config.themes_dir,
            Some(PathBuf::from("/usr/share/skinkit/themes"))
        );
    }

    #[test]
    fn test_missing_config_file_is_skipped() {
        let config = ThemeConfig::from_env_with(|key| {
            (key == ENV_THEME_CONFIG).then(|| "/definitely/not/here.toml".to_string())
        });
        assert_eq!(config, ThemeConfig::new());
    }

    #[test]
    fn test_merge_only_present_members() {
        let mut config = ThemeConfig::new().with_themes_dir("/themes");
        config.merge(ThemeConfigLayer {
            strict: Some(true),
            ..ThemeConfigLayer::default()
        });
        assert!(config.strict_validation);
        assert_eq!(config.themes_dir, Some(PathBuf::from("/themes")));
        assert_eq!(config.selections().count(), 2);
    }
}
