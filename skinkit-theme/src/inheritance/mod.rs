//! # Theme Inheritance
//!
//! An [InheritableTheme] names a base skin and carries property overrides.
//! The [InheritanceResolver] turns registered inheritable themes into plain
//! [ThemeRecord]s by merging each one onto its (recursively resolved) base,
//! and memoizes the results.
//!
//! ## Merge order
//!
//! 1. Start from the default record.
//! 2. Copy the base skin's scalar properties.
//! 3. Copy the child's own scalar properties over them.
//! 4. Apply the overrides in insertion order.
//!
//! Overrides that cannot be converted are logged and skipped. Unknown
//! property names follow the resolver's [UnknownPropertyPolicy].
//!
//! ## Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use skinkit_theme::inheritance::{InheritanceResolver, OverrideValue};
//! use skinkit_theme::registry::SkinRegistry;
//! use std::sync::Arc;
//!
//! let mut resolver = InheritanceResolver::with_source(Arc::new(SkinRegistry::with_builtin()));
//!
//! let mut overrides = IndexMap::new();
//! overrides.insert("accentColor".to_string(), OverrideValue::from("#E91E63"));
//! resolver.create_variant("Dark", "Dark Pink", overrides).unwrap();
//!
//! let resolved = resolver.get_resolved_theme("Dark Pink").unwrap().unwrap();
//! assert_eq!(resolved.name, "Dark Pink");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::record::ThemeRecord;
use crate::registry::ThemeSource;

mod property;
mod value;

pub use property::ThemeProperty;
pub use value::OverrideValue;

/// What to do with an override whose name matches no property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPropertyPolicy {
    /// Skip silently.
    #[default]
    Ignore,
    /// Skip with a logged warning.
    Warn,
    /// Fail the merge with [ThemeError::UnknownProperty].
    Reject,
}

impl UnknownPropertyPolicy {
    /// Parse a policy name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "warn" => Some(Self::Warn),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// A skin that inherits from another skin by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InheritableTheme {
    /// The skin's own properties.
    pub theme: ThemeRecord,
    /// Name of the skin to inherit from.
    pub base_theme: Option<String>,
    /// Property overrides, applied in insertion order.
    pub overrides: IndexMap<String, OverrideValue>,
}

impl InheritableTheme {
    /// Wrap a record with no base and no overrides.
    pub fn new(theme: ThemeRecord) -> Self {
        Self {
            theme,
            base_theme: None,
            overrides: IndexMap::new(),
        }
    }

    /// Set the base skin name.
    pub fn with_base(mut self, base_theme: impl Into<String>) -> Self {
        self.base_theme = Some(base_theme.into());
        self
    }

    /// Add an override.
    pub fn with_override(
        mut self,
        property: impl Into<String>,
        value: impl Into<OverrideValue>,
    ) -> Self {
        self.overrides.insert(property.into(), value.into());
        self
    }

    /// Merge onto `base` and apply overrides.
    ///
    /// Fails only for an unknown override name under
    /// [UnknownPropertyPolicy::Reject].
    pub fn create_resolved(
        &self,
        base: Option<&ThemeRecord>,
        policy: UnknownPropertyPolicy,
    ) -> ThemeResult<ThemeRecord> {
        let mut resolved = ThemeRecord::default();
        if let Some(base) = base {
            resolved.copy_scalars_from(base);
        }
        resolved.copy_scalars_from(&self.theme);

        for (key, value) in &self.overrides {
            let Some(property) = ThemeProperty::lookup(key) else {
                match policy {
                    UnknownPropertyPolicy::Ignore => {}
                    UnknownPropertyPolicy::Warn => {
                        log::warn!("Ignoring unknown override '{}' on '{}'", key, self.theme.name)
                    }
                    UnknownPropertyPolicy::Reject => {
                        return Err(ThemeError::UnknownProperty(key.clone()))
                    }
                }
                continue;
            };

            if let Err(err) = property.apply(&mut resolved, value) {
                log::warn!(
                    "{}",
                    ThemeError::conversion(property.as_str(), err)
                );
            }
        }

        Ok(resolved)
    }
}

impl From<ThemeRecord> for InheritableTheme {
    fn from(theme: ThemeRecord) -> Self {
        Self::new(theme)
    }
}

/// Resolves and caches inheritable themes.
///
/// Registering a theme evicts only that theme's cached result. Themes derived
/// from it keep their cached merge until [invalidate](Self::invalidate) or
/// [clear_cache](Self::clear_cache) is called. Cycles are checked against the
/// registered base names on every lookup, so a stale cache never hides one.
pub struct InheritanceResolver {
    themes: HashMap<String, InheritableTheme>,
    cache: HashMap<String, ThemeRecord>,
    source: Option<Arc<dyn ThemeSource>>,
    policy: UnknownPropertyPolicy,
}

/// A resolver shared between threads.
pub type SharedInheritanceResolver = Arc<RwLock<InheritanceResolver>>;

impl InheritanceResolver {
    /// Create a resolver with no fallback source.
    pub fn new() -> Self {
        Self {
            themes: HashMap::new(),
            cache: HashMap::new(),
            source: None,
            policy: UnknownPropertyPolicy::default(),
        }
    }

    /// Create a resolver that looks up unmanaged base themes in `source`.
    pub fn with_source(source: Arc<dyn ThemeSource>) -> Self {
        Self {
            source: Some(source),
            ..Self::new()
        }
    }

    /// Set the policy for unknown override names.
    pub fn with_policy(mut self, policy: UnknownPropertyPolicy) -> Self {
        self.set_policy(policy);
        self
    }

    /// Change the policy for unknown override names. Clears the cache.
    pub fn set_policy(&mut self, policy: UnknownPropertyPolicy) {
        if self.policy != policy {
            self.policy = policy;
            self.cache.clear();
        }
    }

    /// The policy for unknown override names.
    pub fn policy(&self) -> UnknownPropertyPolicy {
        self.policy
    }

    /// Wrap the resolver for sharing between threads.
    pub fn into_shared(self) -> SharedInheritanceResolver {
        Arc::new(RwLock::new(self))
    }

    /// Register (or replace) a theme under `name`. The theme's record is
    /// renamed to `name`.
    pub fn register_inheritable_theme(
        &mut self,
        name: impl Into<String>,
        mut theme: InheritableTheme,
    ) {
        let name = name.into();
        theme.theme.name = name.clone();
        self.cache.remove(&name);
        self.themes.insert(name, theme);
    }

    /// Remove a registered theme.
    pub fn unregister(&mut self, name: &str) -> Option<InheritableTheme> {
        self.cache.remove(name);
        self.themes.remove(name)
    }

    /// Whether a theme with this name is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered theme names, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Borrow a registered (unresolved) theme.
    pub fn inheritable_theme(&self, name: &str) -> Option<&InheritableTheme> {
        self.themes.get(name)
    }

    /// Resolve a registered theme.
    ///
    /// Returns `Ok(None)` when `name` is not registered, and
    /// [ThemeError::CyclicInheritance] when its base chain loops.
    pub fn get_resolved_theme(&mut self, name: &str) -> ThemeResult<Option<ThemeRecord>> {
        if let Some(cycle) = self.registered_cycle(Vec::new(), name) {
            return Err(ThemeError::CyclicInheritance { chain: cycle });
        }
        let mut chain = Vec::new();
        self.resolve(name, &mut chain)
    }

    /// Follow registered base names from `name`, returning the loop if the
    /// walk comes back to a theme already in `chain`.
    fn registered_cycle(&self, mut chain: Vec<String>, name: &str) -> Option<Vec<String>> {
        let mut current = name.to_string();
        loop {
            if let Some(start) = chain.iter().position(|seen| *seen == current) {
                let mut cycle = chain.split_off(start);
                cycle.push(current);
                return Some(cycle);
            }
            let base = self
                .themes
                .get(&current)?
                .base_theme
                .clone()
                .filter(|base| !base.is_empty())?;
            chain.push(current);
            current = base;
        }
    }

    fn resolve(&mut self, name: &str, chain: &mut Vec<String>) -> ThemeResult<Option<ThemeRecord>> {
        if let Some(cached) = self.cache.get(name) {
            log::debug!("Resolved theme cache hit for '{}'", name);
            return Ok(Some(cached.clone()));
        }

        if let Some(start) = chain.iter().position(|seen| seen == name) {
            let mut cycle = chain[start..].to_vec();
            cycle.push(name.to_string());
            return Err(ThemeError::CyclicInheritance { chain: cycle });
        }

        let base_name = match self.themes.get(name) {
            Some(theme) => theme.base_theme.clone().filter(|base| !base.is_empty()),
            None => return Ok(None),
        };

        chain.push(name.to_string());
        let base = match base_name {
            Some(base_name) => self.lookup_base(&base_name, chain)?,
            None => None,
        };
        chain.pop();

        let resolved = match self.themes.get(name) {
            Some(theme) => theme.create_resolved(base.as_ref(), self.policy)?,
            None => return Ok(None),
        };

        self.cache.insert(name.to_string(), resolved.clone());
        Ok(Some(resolved))
    }

    fn lookup_base(
        &mut self,
        base_name: &str,
        chain: &mut Vec<String>,
    ) -> ThemeResult<Option<ThemeRecord>> {
        let base = if self.themes.contains_key(base_name) {
            self.resolve(base_name, chain)?
        } else {
            self.source.as_ref().and_then(|source| source.theme(base_name))
        };

        if base.is_none() {
            log::warn!("Base theme '{}' not found, resolving without it", base_name);
        }
        Ok(base)
    }

    /// Create, register and return a variant of `base_name`.
    ///
    /// The variant's own properties start as a copy of the resolved base (or
    /// the default record when the base is unknown), so only `overrides`
    /// distinguish it.
    pub fn create_variant(
        &mut self,
        base_name: &str,
        variant_name: &str,
        overrides: IndexMap<String, OverrideValue>,
    ) -> ThemeResult<InheritableTheme> {
        let mut chain = vec![variant_name.to_string()];
        if let Some(cycle) = self.registered_cycle(chain.clone(), base_name) {
            return Err(ThemeError::CyclicInheritance { chain: cycle });
        }
        let seed = self
            .lookup_base(base_name, &mut chain)?
            .unwrap_or_default();

        let variant = InheritableTheme {
            theme: seed,
            base_theme: Some(base_name.to_string()),
            overrides,
        };
        self.register_inheritable_theme(variant_name, variant.clone());
        log::info!("Created theme variant '{}' of '{}'", variant_name, base_name);

        Ok(InheritableTheme {
            theme: variant.theme.renamed(variant_name),
            ..variant
        })
    }

    /// Drop one cached resolution.
    pub fn invalidate(&mut self, name: &str) {
        self.cache.remove(name);
    }

    /// Drop every cached resolution.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

impl Default for InheritanceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;
    use crate::record::FontFamily;
    use crate::registry::SkinRegistry;
    use pretty_assertions::assert_eq;

    fn overrides<const N: usize>(
        entries: [(&str, OverrideValue); N],
    ) -> IndexMap<String, OverrideValue> {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    fn red_base() -> ThemeRecord {
        ThemeRecord {
            primary_color: parse_color("#FF0000").unwrap(),
            font_size_small: 10.0,
            ..ThemeRecord::named("Base")
        }
    }

    #[test]
    fn test_variant_inherits_and_overrides() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("Base", InheritableTheme::new(red_base()));
        resolver
            .create_variant("Base", "Child", overrides([("primaryColor", "blue".into())]))
            .unwrap();

        let child = resolver.get_resolved_theme("Child").unwrap().unwrap();
        assert_eq!(child.name, "Child");
        assert_eq!(child.primary_color, parse_color("blue").unwrap());
        assert_eq!(child.font_size_small, 10.0);
    }

    #[test]
    fn test_child_scalars_win_over_base() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("Base", InheritableTheme::new(red_base()));

        let child = InheritableTheme::new(ThemeRecord::named("Child")).with_base("Base");
        resolver.register_inheritable_theme("Child", child);

        let resolved = resolver.get_resolved_theme("Child").unwrap().unwrap();
        assert_eq!(resolved.primary_color, ThemeRecord::default().primary_color);
    }

    #[test]
    fn test_unregistered_is_none() {
        let mut resolver = InheritanceResolver::new();
        assert_eq!(resolver.get_resolved_theme("Nope").unwrap(), None);
    }

    #[test]
    fn test_base_from_source() {
        let mut resolver = InheritanceResolver::with_source(Arc::new(SkinRegistry::with_builtin()));
        resolver
            .create_variant("Light", "Light Large", overrides([("FontSizeLarge", 20.0.into())]))
            .unwrap();

        let resolved = resolver.get_resolved_theme("Light Large").unwrap().unwrap();
        assert_eq!(resolved.primary_background, crate::presets::light().primary_background);
        assert_eq!(resolved.font_size_large, 20.0);
    }

    #[test]
    fn test_missing_base_resolves_without_it() {
        let mut resolver = InheritanceResolver::new();
        let orphan = InheritableTheme::new(ThemeRecord::named("Orphan")).with_base("Ghost");
        resolver.register_inheritable_theme("Orphan", orphan);

        let resolved = resolver.get_resolved_theme("Orphan").unwrap().unwrap();
        assert_eq!(resolved, ThemeRecord::named("Orphan"));
    }

    #[test]
    fn test_cache_and_reregister() {
        let mut resolver = InheritanceResolver::new();
        resolver
            .register_inheritable_theme("Solo", InheritableTheme::new(ThemeRecord::named("Solo")));

        let first = resolver.get_resolved_theme("Solo").unwrap();
        let second = resolver.get_resolved_theme("Solo").unwrap();
        assert_eq!(first, second);

        let updated =
            InheritableTheme::new(ThemeRecord::named("Solo")).with_override("borderRadius", 9.0);
        resolver.register_inheritable_theme("Solo", updated);
        let third = resolver.get_resolved_theme("Solo").unwrap().unwrap();
        assert_eq!(third.border_radius, 9.0);
    }

    #[test]
    fn test_invalidate_and_clear_recompute_same_result() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("Base", InheritableTheme::new(red_base()));
        resolver
            .create_variant("Base", "Child", overrides([("fontFamily", "Inter".into())]))
            .unwrap();
        let before = resolver.get_resolved_theme("Child").unwrap();

        resolver.invalidate("Child");
        assert_eq!(resolver.get_resolved_theme("Child").unwrap(), before);

        resolver.clear_cache();
        let after = resolver.get_resolved_theme("Child").unwrap().unwrap();
        assert_eq!(after.font_family.as_str(), "Inter");
        assert_eq!(after.primary_color, parse_color("#FF0000").unwrap());
    }

    #[test]
    fn test_unregister_and_names() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("B", InheritableTheme::default());
        resolver.register_inheritable_theme("A", InheritableTheme::default());
        assert_eq!(resolver.registered_names(), vec!["A", "B"]);
        assert_eq!(resolver.inheritable_theme("A").map(|t| t.theme.name.as_str()), Some("A"));

        assert!(resolver.unregister("A").is_some());
        assert!(!resolver.is_registered("A"));
        assert_eq!(resolver.get_resolved_theme("A").unwrap(), None);
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("A", InheritableTheme::default().with_base("B"));
        resolver.register_inheritable_theme("B", InheritableTheme::default().with_base("A"));

        match resolver.get_resolved_theme("A") {
            Err(ThemeError::CyclicInheritance { chain }) => assert_eq!(chain, vec!["A", "B", "A"]),
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_closed_after_caching_is_reported() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("A", InheritableTheme::default().with_base("B"));
        assert!(resolver.get_resolved_theme("A").unwrap().is_some());

        resolver.register_inheritable_theme("B", InheritableTheme::default().with_base("A"));
        match resolver.get_resolved_theme("B") {
            Err(ThemeError::CyclicInheritance { chain }) => assert_eq!(chain, vec!["B", "A", "B"]),
            other => panic!("expected a cycle, got {other:?}"),
        }
        assert!(matches!(
            resolver.get_resolved_theme("A"),
            Err(ThemeError::CyclicInheritance { .. })
        ));
    }

    #[test]
    fn test_variant_of_own_descendant_is_a_cycle() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("Kid", InheritableTheme::default().with_base("Root"));
        assert!(resolver.get_resolved_theme("Kid").unwrap().is_some());

        match resolver.create_variant("Kid", "Root", IndexMap::new()) {
            Err(ThemeError::CyclicInheritance { chain }) => {
                assert_eq!(chain, vec!["Root", "Kid", "Root"])
            },
            other => panic!("expected a cycle, got {other:?}"),
        }
        assert!(!resolver.is_registered("Root"));
    }

    #[test]
    fn test_typography_survives_resolution_and_variants() {
        let mut base = ThemeRecord::named("Airy");
        base.line_height = 2.0;
        base.letter_spacing = 0.25;
        base.monospace_font_family = FontFamily::new("Iosevka");
        base.typography.apply_scale(2.0);

        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("Airy", InheritableTheme::new(base.clone()));

        let direct = resolver.get_resolved_theme("Airy").unwrap().unwrap();
        assert_eq!(direct, base);

        resolver
            .create_variant("Airy", "Airy Teal", overrides([("accentColor", "#009688".into())]))
            .unwrap();
        let variant = resolver.get_resolved_theme("Airy Teal").unwrap().unwrap();
        assert_eq!(variant.line_height, 2.0);
        assert_eq!(variant.letter_spacing, 0.25);
        assert_eq!(variant.monospace_font_family.as_str(), "Iosevka");
        assert_eq!(variant.typography, base.typography);
        assert_eq!(variant.accent_color, parse_color("#009688").unwrap());
    }

    #[test]
    fn test_self_inheritance_is_a_cycle() {
        let mut resolver = InheritanceResolver::new();
        resolver.register_inheritable_theme("Loop", InheritableTheme::default().with_base("Loop"));
        assert!(matches!(
            resolver.get_resolved_theme("Loop"),
            Err(ThemeError::CyclicInheritance { .. })
        ));
    }

    #[test]
    fn test_bad_override_is_skipped() {
        let theme = InheritableTheme::new(ThemeRecord::named("Odd"))
            .with_override("primaryColor", "not a color")
            .with_override("fontSizeMedium", 13.0);
        let resolved = theme.create_resolved(None, UnknownPropertyPolicy::Ignore).unwrap();
        assert_eq!(resolved.primary_color, ThemeRecord::default().primary_color);
        assert_eq!(resolved.font_size_medium, 13.0);
    }

    #[test]
    fn test_unknown_property_policies() {
        let theme =
            InheritableTheme::new(ThemeRecord::named("Odd")).with_override("glowColor", "#FFF");

        assert!(theme.create_resolved(None, UnknownPropertyPolicy::Ignore).is_ok());
        assert!(theme.create_resolved(None, UnknownPropertyPolicy::Warn).is_ok());
        assert!(matches!(
            theme.create_resolved(None, UnknownPropertyPolicy::Reject),
            Err(ThemeError::UnknownProperty(name)) if name == "glowColor"
        ));
    }

    #[test]
    fn test_shared_resolver() {
        let shared = InheritanceResolver::new().into_shared();
        if let Ok(mut resolver) = shared.write() {
            resolver.register_inheritable_theme("Shared", InheritableTheme::default());
        }
        let names = shared.read().map(|r| r.registered_names()).unwrap();
        assert_eq!(names, vec!["Shared"]);
    }
}
