// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime skin switching.
//!
//! The [SkinManager] owns the skin registry, an inheritance resolver for
//! derived skins and the persisted settings. Applying a skin replaces the
//! current record and notifies every registered listener.

use anyhow::Result;
use skinkit_theme::config::ThemeSelection;
use skinkit_theme::error::{ThemeError, ThemeResult};
use skinkit_theme::inheritance::{InheritableTheme, InheritanceResolver};
use skinkit_theme::presets;
use skinkit_theme::record::ThemeRecord;
use skinkit_theme::registry::SkinRegistry;
use skinkit_theme::validator::ThemeValidator;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::settings::SettingsStore;
use crate::theme_files;

/// Callback invoked with the newly applied skin.
pub type SkinListener = Box<dyn Fn(&ThemeRecord) + Send + Sync>;

/// Owns the available skins and the one currently applied.
pub struct SkinManager {
    registry: Arc<RwLock<SkinRegistry>>,
    resolver: InheritanceResolver,
    settings: SettingsStore,
    validator: ThemeValidator,
    strict: bool,
    current: ThemeRecord,
    listeners: Vec<SkinListener>,
}

impl SkinManager {
    /// Create a manager with the built-in skins. Strictness and the unknown
    /// override policy come from the settings' theme configuration.
    pub fn new(settings: SettingsStore) -> Self {
        Self::with_registry(SkinRegistry::with_builtin(), settings)
    }

    /// Create a manager over an existing registry.
    pub fn with_registry(registry: SkinRegistry, settings: SettingsStore) -> Self {
        let registry = Arc::new(RwLock::new(registry));
        let config = &settings.theme_config;
        let strict = config.strict_validation;
        let resolver = InheritanceResolver::with_source(registry.clone())
            .with_policy(config.unknown_overrides);

        Self {
            registry,
            resolver,
            validator: ThemeValidator::for_strictness(strict),
            strict,
            settings,
            current: presets::dark(),
            listeners: Vec::new(),
        }
    }

    /// The skin currently applied.
    pub fn current(&self) -> &ThemeRecord {
        &self.current
    }

    /// The persisted settings.
    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// The persisted settings, for modification.
    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    /// The resolver holding derived skins.
    pub fn resolver_mut(&mut self) -> &mut InheritanceResolver {
        &mut self.resolver
    }

    /// Whether skins are validated before they are applied.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Toggle validation before applying, switching between the standard
    /// and the full rule set.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
        self.validator = ThemeValidator::for_strictness(strict);
    }

    /// Add or replace a plain skin.
    pub fn register_skin(&mut self, name: impl Into<String>, skin: ThemeRecord) {
        let name = name.into();
        if let Ok(mut registry) = self.registry.write() {
            registry.register_skin(name.as_str(), skin);
        }
        // Derived skins may use it as their base.
        self.resolver.clear_cache();
    }

    /// Add or replace a derived skin.
    pub fn register_variant(&mut self, name: impl Into<String>, theme: InheritableTheme) {
        self.resolver.register_inheritable_theme(name, theme);
    }

    /// Names of every plain and derived skin, sorted and deduplicated.
    pub fn available_skin_names(&self) -> Vec<String> {
        let mut names = self.resolver.registered_names();
        if let Ok(registry) = self.registry.read() {
            names.extend(registry.names());
        }
        names.sort();
        names.dedup();
        names
    }

    /// Find a skin by name, derived skins first.
    pub fn find_skin(&mut self, name: &str) -> ThemeResult<Option<ThemeRecord>> {
        if let Some(resolved) = self.resolver.get_resolved_theme(name)? {
            return Ok(Some(resolved));
        }
        Ok(self.registry.read().ok().and_then(|registry| registry.skin(name)))
    }

    /// Apply the named skin.
    pub fn apply_skin(&mut self, name: &str) -> ThemeResult<()> {
        match self.find_skin(name)? {
            Some(skin) => self.apply_record(skin),
            None => {
                log::warn!("Skin '{}' not found", name);
                Err(ThemeError::not_found(name))
            },
        }
    }

    /// Apply a record directly. When strict, a record with validation errors
    /// is refused and the current skin kept.
    pub fn apply_record(&mut self, record: ThemeRecord) -> ThemeResult<()> {
        let validation = self.validator.validate_theme(&record);
        for warning in &validation.warnings {
            log::warn!("Skin '{}': {}", record.name, warning);
        }
        if self.strict && !validation.is_valid() {
            log::warn!(
                "Refusing skin '{}': {}",
                record.name,
                validation.errors.join(", ")
            );
            return Err(ThemeError::validation_failed(&record.name, validation.errors));
        }

        log::info!("Applied skin '{}'", record.name);
        self.current = record;
        for listener in &self.listeners {
            listener(&self.current);
        }
        Ok(())
    }

    /// Register a callback run after every successful apply.
    pub fn on_skin_changed(&mut self, listener: impl Fn(&ThemeRecord) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Remember the current skin in the settings file.
    pub async fn save_selected_theme(&mut self) -> Result<()> {
        self.settings.get_mut().theme = Some(self.current.name.clone());
        self.settings.save().await
    }

    /// Apply the skin remembered in the settings, if any. Returns whether a
    /// skin was applied.
    pub fn load_saved_theme(&mut self) -> ThemeResult<bool> {
        match self.settings.get().theme.clone() {
            Some(name) => self.apply_skin(&name).map(|()| true),
            None => Ok(false),
        }
    }

    /// Register every document in `dir`. Documents with a base skin become
    /// derived skins; the rest are imported and validated. Returns the number
    /// of skins registered.
    pub async fn load_themes_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut count = 0;
        for loaded in theme_files::load_documents(dir).await? {
            let name = loaded.document.name.clone();
            if loaded.is_inheritable() {
                match loaded.document.to_inheritable() {
                    Ok(theme) => {
                        self.register_variant(name, theme);
                        count += 1;
                    },
                    Err(e) => log::warn!("Skipping {:?}: {}", loaded.path, e),
                }
                continue;
            }

            let imported = skinkit_theme::codec::import_document(&loaded.document);
            match imported.theme {
                Some(theme) => {
                    self.register_skin(name, theme);
                    count += 1;
                },
                None => log::warn!(
                    "Skipping {:?}: {}",
                    loaded.path,
                    imported.error.unwrap_or_default()
                ),
            }
        }
        Ok(count)
    }

    /// Apply the configured skin: load the themes directory if one is set,
    /// then try the default selection and the fallback in turn.
    pub async fn apply_configured(&mut self) -> Result<()> {
        if let Some(dir) = self.settings.theme_config.themes_dir.clone() {
            if let Err(e) = self.load_themes_dir(&dir).await {
                log::warn!("{:#}", e);
            }
        }

        let selections: Vec<ThemeSelection> =
            self.settings.theme_config.selections().cloned().collect();
        let mut last_error = None;
        for selection in selections {
            let applied = match &selection {
                ThemeSelection::Named(name) => self.apply_skin(name).map_err(anyhow::Error::from),
                ThemeSelection::File(path) => match theme_files::load_theme_file(path).await {
                    Ok(skin) => self.apply_record(skin).map_err(anyhow::Error::from),
                    Err(e) => Err(e),
                },
            };
            match applied {
                Ok(()) => return Ok(()),
                Err(e) => {
                    log::warn!("Could not apply configured skin '{}': {:#}", selection, e);
                    last_error = Some(e);
                },
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No skin configured")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn manager() -> SkinManager {
        SkinManager::new(SettingsStore::at("/nonexistent/skinkit/settings.json"))
    }

    #[test]
    fn test_starts_dark_with_builtin_skins() {
        let manager = manager();
        assert_eq!(manager.current().name, "Dark");
        assert_eq!(manager.available_skin_names(), vec!["Dark", "Light"]);
    }

    #[test]
    fn test_apply_unknown_skin_keeps_current() {
        let mut manager = manager();
        assert!(matches!(
            manager.apply_skin("Solarized"),
            Err(ThemeError::ThemeNotFound { .. })
        ));
        assert_eq!(manager.current().name, "Dark");
    }

    #[test]
    fn test_listeners_see_new_skin() {
        let mut manager = manager();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        manager.on_skin_changed(move |skin| {
            assert_eq!(skin.name, "Light");
            seen.fetch_add(1, Ordering::SeqCst);
        });

        manager.apply_skin("Light").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_strict_refuses_invalid_record() {
        let mut manager = manager();
        manager.set_strict(true);

        let mut broken = presets::dark().renamed("Broken");
        broken.font_size_small = 30.0;
        assert!(matches!(
            manager.apply_record(broken.clone()),
            Err(ThemeError::ValidationFailed { .. })
        ));
        assert_eq!(manager.current().name, "Dark");

        manager.set_strict(false);
        manager.apply_record(broken).unwrap();
        assert_eq!(manager.current().name, "Broken");
    }

    #[test]
    fn test_strict_applies_light_but_not_dark() {
        let mut manager = manager();
        manager.set_strict(true);
        assert!(manager.is_strict());

        manager.apply_skin("Light").unwrap();
        assert_eq!(manager.current().name, "Light");

        assert!(matches!(
            manager.apply_skin("Dark"),
            Err(ThemeError::ValidationFailed { .. })
        ));
        assert_eq!(manager.current().name, "Light");
    }

    #[test]
    fn test_variant_resolves_against_registry() {
        let mut manager = manager();
        manager.register_variant(
            "Light Teal",
            InheritableTheme::new(presets::light())
                .with_base("Light")
                .with_override("accentColor", "#009688"),
        );

        manager.apply_skin("Light Teal").unwrap();
        assert_eq!(manager.current().name, "Light Teal");
        assert!(manager.available_skin_names().contains(&"Light Teal".to_string()));
    }

    #[test]
    fn test_load_saved_theme_without_selection() {
        let mut manager = manager();
        assert!(!manager.load_saved_theme().unwrap());

        manager.settings_mut().get_mut().theme = Some("Light".to_string());
        assert!(manager.load_saved_theme().unwrap());
        assert_eq!(manager.current().name, "Light");
    }
}
