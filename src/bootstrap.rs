//! Registry bootstrap
//!
//! On startup every registry that has never been populated gets its initial
//! value: built-in defaults for the active host integration, canonicalized,
//! offered to extension listeners, merged with what they contributed and
//! persisted. Registries that already hold entries are left alone, so calling
//! [`Bootstrapper::ensure_initialized`] on every start is safe.

use crate::canonical::canonicalize;
use crate::error::Result;
use crate::hooks::ExtensionHooks;
use crate::integrations::ProviderRegistry;
use crate::merge::merge;
use crate::settings::DEFAULT_NAMESPACE;
use crate::store::RegistryStore;
use crate::types::{is_uninitialized, RegistryName};
use serde::Serialize;
use serde_json::Value;

/// Configuration for a bootstrap run
///
/// # Example
///
/// ```rust
/// use item_registry::BootstrapConfig;
///
/// let config = BootstrapConfig::new("dnd5e");
/// assert_eq!(config.namespace, "forien-unidentified-items");
/// assert_eq!(config.host_id, "dnd5e");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Namespace the registries are stored under and hooks are named after
    pub namespace: String,
    /// Identifier of the active host system, used to select built-in defaults
    pub host_id: String,
}

impl BootstrapConfig {
    pub fn new(host_id: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            ..Self::default()
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            host_id: String::new(),
        }
    }
}

/// What bootstrap did for one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum Outcome {
    /// The registry was empty and has been written with `categories` entries
    Initialized { categories: usize },
    /// The registry already held data; nothing was written
    AlreadyInitialized,
}

/// Per-registry outcome of [`Bootstrapper::ensure_initialized`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub default_icons: Outcome,
    pub item_properties: Outcome,
}

impl BootstrapReport {
    pub fn outcome(&self, name: RegistryName) -> Outcome {
        match name {
            RegistryName::DefaultIcons => self.default_icons,
            RegistryName::ItemProperties => self.item_properties,
        }
    }
}

/// Runs the default-computation pipeline against a store
pub struct Bootstrapper<'a, S> {
    config: BootstrapConfig,
    store: S,
    providers: &'a ProviderRegistry,
    hooks: &'a ExtensionHooks,
}

impl<'a, S: RegistryStore> Bootstrapper<'a, S> {
    pub fn new(
        config: BootstrapConfig,
        store: S,
        providers: &'a ProviderRegistry,
        hooks: &'a ExtensionHooks,
    ) -> Self {
        Self {
            config,
            store,
            providers,
            hooks,
        }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Bootstrap both registries if they are still empty
    ///
    /// Both registries are always attempted. If either fails, the first
    /// error is returned after the other one has run.
    ///
    /// # Example
    ///
    /// ```rust
    /// use item_registry::{
    ///     BootstrapConfig, Bootstrapper, ExtensionHooks, MemoryStore, Outcome, ProviderRegistry,
    /// };
    ///
    /// let providers = ProviderRegistry::with_builtin();
    /// let hooks = ExtensionHooks::new();
    /// let mut store = MemoryStore::new();
    ///
    /// let mut bootstrapper =
    ///     Bootstrapper::new(BootstrapConfig::new("dnd5e"), &mut store, &providers, &hooks);
    /// let first = bootstrapper.ensure_initialized()?;
    /// assert!(matches!(first.item_properties, Outcome::Initialized { .. }));
    ///
    /// let second = bootstrapper.ensure_initialized()?;
    /// assert_eq!(second.item_properties, Outcome::AlreadyInitialized);
    /// # Ok::<(), item_registry::Error>(())
    /// ```
    pub fn ensure_initialized(&mut self) -> Result<BootstrapReport> {
        let icons = self.bootstrap(RegistryName::DefaultIcons);
        let properties = self.bootstrap(RegistryName::ItemProperties);

        Ok(BootstrapReport {
            default_icons: icons?,
            item_properties: properties?,
        })
    }

    /// Bootstrap a single registry if it is still empty
    pub fn bootstrap(&mut self, name: RegistryName) -> Result<Outcome> {
        let namespace = self.config.namespace.as_str();
        let current = self
            .store
            .get(namespace, name.key())?
            .unwrap_or_else(|| Value::Object(Default::default()));

        if !is_uninitialized(&current) {
            if !current.is_object() {
                log::warn!(
                    "event=registry_bootstrap registry={} status=skipped reason=not_an_object",
                    name.key()
                );
            }
            log::debug!(
                "event=registry_bootstrap registry={} status=already_initialized",
                name.key()
            );
            return Ok(Outcome::AlreadyInitialized);
        }

        let (value, categories) = match name {
            RegistryName::DefaultIcons => self.compute_icons()?,
            RegistryName::ItemProperties => self.compute_properties()?,
        };

        // Only reached once every listener succeeded
        self.store.set(namespace, name.key(), value)?;

        log::info!(
            "event=registry_bootstrap registry={} host={} categories={} status=ok",
            name.key(),
            self.config.host_id,
            categories
        );
        Ok(Outcome::Initialized { categories })
    }

    fn compute_icons(&self) -> Result<(Value, usize)> {
        let hook = RegistryName::DefaultIcons.hook_name(&self.config.namespace);
        let defaults = self.providers.defaults_for(&self.config.host_id).icons;

        let mut overlay = defaults.clone();
        self.hooks.notify_default_icons(&hook, &mut overlay)?;

        let merged = merge(defaults, overlay);
        Ok((serde_json::to_value(&merged)?, merged.len()))
    }

    fn compute_properties(&self) -> Result<(Value, usize)> {
        let hook = RegistryName::ItemProperties.hook_name(&self.config.namespace);
        let defaults = canonicalize(self.providers.defaults_for(&self.config.host_id).properties);

        let mut overlay = defaults.clone();
        self.hooks.notify_item_properties(&hook, &mut overlay)?;

        // No second canonicalize: listener-only keys stay where the merge appends them
        let merged = merge(defaults, overlay);
        Ok((serde_json::to_value(&merged)?, merged.len()))
    }
}
