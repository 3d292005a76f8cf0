//! Built-in defaults per host integration
//!
//! Each supported host system ships a static table of default icons and
//! hideable fields. [`ProviderRegistry`] maps host identifiers to providers;
//! identifiers without a provider resolve to empty defaults, since
//! integrations are optional.

mod dnd5e;
mod wfrp4e;

use crate::types::{IconRegistry, PropertyRegistry};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Defaults one integration contributes to both registries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationDefaults {
    pub icons: IconRegistry,
    pub properties: PropertyRegistry,
}

impl IntegrationDefaults {
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty() && self.properties.is_empty()
    }
}

/// Source of built-in defaults for one host system
pub trait IntegrationProvider: Send + Sync {
    fn defaults(&self) -> IntegrationDefaults;
}

impl<F> IntegrationProvider for F
where
    F: Fn() -> IntegrationDefaults + Send + Sync,
{
    fn defaults(&self) -> IntegrationDefaults {
        self()
    }
}

/// Provider backed by compile-time tables
#[derive(Debug, Clone, Copy)]
pub struct StaticProvider {
    pub icons: &'static [(&'static str, &'static str)],
    pub properties: &'static [(&'static str, &'static [(&'static str, bool)])],
}

impl IntegrationProvider for StaticProvider {
    fn defaults(&self) -> IntegrationDefaults {
        let icons = self
            .icons
            .iter()
            .map(|(category, icon)| (category.to_string(), icon.to_string()))
            .collect();

        let properties = self
            .properties
            .iter()
            .map(|(category, fields)| {
                let fields = fields
                    .iter()
                    .map(|(path, visible)| (path.to_string(), *visible))
                    .collect();
                (category.to_string(), fields)
            })
            .collect();

        IntegrationDefaults { icons, properties }
    }
}

/// Host identifier to provider lookup
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn IntegrationProvider>>,
}

impl ProviderRegistry {
    /// Empty registry; every host resolves to empty defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the integrations shipped in this crate
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(dnd5e::HOST_ID, Arc::new(dnd5e::PROVIDER));
        registry.register(wfrp4e::HOST_ID, Arc::new(wfrp4e::PROVIDER));
        registry
    }

    /// Register a provider, replacing any previous one for `host_id`
    pub fn register(&mut self, host_id: &str, provider: Arc<dyn IntegrationProvider>) {
        self.providers.insert(host_id.trim().to_string(), provider);
    }

    /// Returns sorted host identifiers.
    pub fn host_ids(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    pub fn contains(&self, host_id: &str) -> bool {
        self.providers.contains_key(host_id.trim())
    }

    /// Built-in defaults for `host_id`, empty when no provider is registered
    ///
    /// ```rust
    /// use item_registry::ProviderRegistry;
    ///
    /// let providers = ProviderRegistry::with_builtin();
    /// assert!(!providers.defaults_for("dnd5e").is_empty());
    /// assert!(providers.defaults_for("unknown-system").is_empty());
    /// ```
    pub fn defaults_for(&self, host_id: &str) -> IntegrationDefaults {
        match self.providers.get(host_id.trim()) {
            Some(provider) => provider.defaults(),
            None => {
                log::debug!("event=provider_lookup host={} status=unknown", host_id);
                IntegrationDefaults::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_hosts() {
        let providers = ProviderRegistry::with_builtin();
        assert_eq!(providers.host_ids(), ["dnd5e", "wfrp4e"]);
        assert!(providers.contains("dnd5e"));
        assert!(!providers.contains("pf2e"));
    }

    #[test]
    fn test_unknown_host_yields_empty_defaults() {
        let providers = ProviderRegistry::with_builtin();
        assert_eq!(providers.defaults_for("pf2e"), IntegrationDefaults::default());
    }

    #[test]
    fn test_register_replaces_provider() {
        let mut providers = ProviderRegistry::with_builtin();
        providers.register(
            "dnd5e",
            Arc::new(|| {
                let mut defaults = IntegrationDefaults::default();
                defaults
                    .properties
                    .entry("weapon".to_string())
                    .or_default()
                    .insert("description".to_string(), true);
                defaults
            }),
        );

        let defaults = providers.defaults_for("dnd5e");
        assert!(defaults.icons.is_empty());
        assert_eq!(defaults.properties.len(), 1);
        assert_eq!(defaults.properties["weapon"]["description"], true);
    }

    #[test]
    fn test_static_tables_have_fields() {
        let providers = ProviderRegistry::with_builtin();
        for host in providers.host_ids() {
            let defaults = providers.defaults_for(&host);
            assert!(!defaults.icons.is_empty(), "{} has no icons", host);
            assert!(
                defaults.properties.values().all(|fields| !fields.is_empty()),
                "{} has a category without fields",
                host
            );
        }
    }
}
