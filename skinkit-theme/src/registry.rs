//! # Skin Registry
//!
//! An owned, name-keyed store of [ThemeRecord]s. Applications create one (or
//! let the skin manager own one) instead of reaching for a global.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::presets;
use crate::record::ThemeRecord;

/// Something that can look up a plain skin by name.
///
/// The [InheritanceResolver](crate::inheritance::InheritanceResolver) falls
/// back to a `ThemeSource` for base themes it does not manage itself.
pub trait ThemeSource: Send + Sync {
    /// Return a copy of the named skin, if known.
    fn theme(&self, name: &str) -> Option<ThemeRecord>;
}

impl<T: ThemeSource> ThemeSource for RwLock<T> {
    fn theme(&self, name: &str) -> Option<ThemeRecord> {
        match self.read() {
            Ok(source) => source.theme(name),
            Err(_) => {
                log::warn!("Theme source lock poisoned while looking up '{}'", name);
                None
            }
        }
    }
}

impl<T: ThemeSource + ?Sized> ThemeSource for Arc<T> {
    fn theme(&self, name: &str) -> Option<ThemeRecord> {
        (**self).theme(name)
    }
}

/// Name-keyed skin storage.
#[derive(Debug, Clone, Default)]
pub struct SkinRegistry {
    skins: HashMap<String, ThemeRecord>,
}

impl SkinRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in presets.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for preset in presets::all() {
            registry.register_skin(preset.name.clone(), preset);
        }
        registry
    }

    /// Store `skin` under `name`, replacing any previous entry. The stored
    /// record's name is set to `name`.
    pub fn register_skin(&mut self, name: impl Into<String>, mut skin: ThemeRecord) {
        let name = name.into();
        skin.name = name.clone();
        if self.skins.insert(name.clone(), skin).is_some() {
            log::debug!("Replaced skin '{}'", name);
        }
    }

    /// Return a copy of the named skin.
    pub fn skin(&self, name: &str) -> Option<ThemeRecord> {
        self.skins.get(name).cloned()
    }

    /// Borrow the named skin.
    pub fn get(&self, name: &str) -> Option<&ThemeRecord> {
        self.skins.get(name)
    }

    /// Whether a skin with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.skins.contains_key(name)
    }

    /// Remove a skin, returning it.
    pub fn remove(&mut self, name: &str) -> Option<ThemeRecord> {
        self.skins.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.skins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered skins.
    pub fn len(&self) -> usize {
        self.skins.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }
}

impl ThemeSource for SkinRegistry {
    fn theme(&self, name: &str) -> Option<ThemeRecord> {
        self.skin(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = SkinRegistry::with_builtin();
        assert_eq!(registry.names(), vec!["Dark", "Light"]);
        assert_eq!(registry.skin("Light"), Some(presets::light()));
    }

    #[test]
    fn test_register_sets_name() {
        let mut registry = SkinRegistry::new();
        registry.register_skin("Midnight", ThemeRecord::named("whatever"));
        assert_eq!(registry.get("Midnight").map(|s| s.name.as_str()), Some("Midnight"));
        assert_eq!(registry.len(), 1);

        assert!(registry.remove("Midnight").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_shared_source() {
        let shared = Arc::new(RwLock::new(SkinRegistry::with_builtin()));
        let source: Arc<dyn ThemeSource> = shared.clone();
        assert!(source.theme("Dark").is_some());

        if let Ok(mut registry) = shared.write() {
            registry.remove("Dark");
        }
        assert!(source.theme("Dark").is_none());
    }
}
