//! # item-registry - Item Icon and Property Registries
//!
//! This library bootstraps and maintains two persisted registries keyed by
//! item category: the default icon shown for each category, and the set of
//! data fields that can be hidden on items of that category.
//!
//! ## Features
//!
//! - Detect registries that have never been populated and fill them exactly once
//! - Built-in defaults for supported host systems (`dnd5e`, `wfrp4e`)
//! - Extension hooks letting third parties add or override entries before they are stored
//! - Deterministic, sorted field ordering in the stored property registry
//! - Pluggable key/value storage with in-memory and JSON-file implementations
//! - Extension contributions loaded from JSON overlay files
//! - Glob queries over stored registries
//!
//! ## Quick Start
//!
//! ### Bootstrapping
//!
//! ```rust
//! use item_registry::{
//!     BootstrapConfig, Bootstrapper, ExtensionHooks, MemoryStore, ProviderRegistry, Settings,
//! };
//!
//! let providers = ProviderRegistry::with_builtin();
//! let hooks = ExtensionHooks::new();
//! let mut store = MemoryStore::new();
//!
//! Bootstrapper::new(BootstrapConfig::new("dnd5e"), &mut store, &providers, &hooks)
//!     .ensure_initialized()?;
//!
//! let settings = Settings::new(&mut store, "forien-unidentified-items");
//! let properties = settings.properties()?;
//! assert!(properties.contains_key("weapon"));
//! # Ok::<(), item_registry::Error>(())
//! ```
//!
//! ### Contributing Entries from an Extension
//!
//! Listeners receive a mutable copy of the computed defaults. Whatever they
//! leave in it is merged over the defaults before the registry is stored.
//!
//! ```rust
//! use item_registry::{
//!     BootstrapConfig, Bootstrapper, ExtensionHooks, MemoryStore, ProviderRegistry, Settings,
//! };
//!
//! let mut hooks = ExtensionHooks::new();
//! hooks.on_item_properties("my-extension", |overlay| {
//!     overlay
//!         .entry("weapon".to_string())
//!         .or_default()
//!         .insert("flags.my-extension.runes".to_string(), true);
//!     Ok(())
//! });
//!
//! let providers = ProviderRegistry::with_builtin();
//! let mut store = MemoryStore::new();
//! Bootstrapper::new(BootstrapConfig::new("dnd5e"), &mut store, &providers, &hooks)
//!     .ensure_initialized()?;
//!
//! let properties = Settings::new(&mut store, "forien-unidentified-items").properties()?;
//! assert_eq!(properties["weapon"]["flags.my-extension.runes"], true);
//! # Ok::<(), item_registry::Error>(())
//! ```
//!
//! ### Persisting to Disk
//!
//! ```rust,no_run
//! use item_registry::{BootstrapConfig, Bootstrapper, ExtensionHooks, JsonFileStore, ProviderRegistry};
//!
//! let providers = ProviderRegistry::with_builtin();
//! let hooks = ExtensionHooks::new();
//! let store = JsonFileStore::new("/var/lib/my-world/settings");
//!
//! let report = Bootstrapper::new(BootstrapConfig::new("wfrp4e"), store, &providers, &hooks)
//!     .ensure_initialized()?;
//! println!("{:?}", report);
//! # Ok::<(), item_registry::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All functions return [`Result<T, Error>`]. A listener error aborts the
//! bootstrap of its registry and leaves the stored value untouched, so the
//! registry is bootstrapped again on the next start:
//!
//! ```rust
//! use item_registry::{
//!     BootstrapConfig, Bootstrapper, Error, ExtensionHooks, MemoryStore, ProviderRegistry,
//!     RegistryName,
//! };
//!
//! let mut hooks = ExtensionHooks::new();
//! hooks.on_default_icons("strict-extension", |_| anyhow::bail!("icon pack missing"));
//!
//! let providers = ProviderRegistry::with_builtin();
//! let mut store = MemoryStore::new();
//! let result = Bootstrapper::new(BootstrapConfig::new("dnd5e"), &mut store, &providers, &hooks)
//!     .bootstrap(RegistryName::DefaultIcons);
//!
//! match result {
//!     Err(Error::Listener { hook, listener, .. }) => {
//!         eprintln!("{} failed in {}", listener, hook);
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! assert!(store.is_empty());
//! ```

// Re-export all public types at crate root
pub use types::{
    is_uninitialized, FieldPath, FieldVisibility, IconPath, IconRegistry, ItemCategory,
    PropertyRegistry, RegistryName,
};

// Re-export error types
pub use error::{Error, Result};

// Re-export the bootstrap pipeline
pub use bootstrap::{BootstrapConfig, BootstrapReport, Bootstrapper, Outcome};
pub use canonical::canonicalize;
pub use hooks::{ExtensionHooks, Listener};
pub use integrations::{IntegrationDefaults, IntegrationProvider, ProviderRegistry, StaticProvider};
pub use merge::{merge, DeepMerge};

// Re-export storage and settings
pub use settings::{
    setting_definition, SettingDefinition, SettingScope, Settings, DEFAULT_NAMESPACE,
    PLAYERS_WELCOME_SCREEN, SETTINGS,
};
pub use store::{JsonFileStore, MemoryStore, RegistryStore};

// Re-export overlay files and queries
pub use overlay_files::{load_overlay_dir, load_overlay_file, OverlayFile};
pub use query::{query_categories, query_properties};

// All modules are private - use re-exports above for public API
mod bootstrap;
mod canonical;
mod error;
mod hooks;
mod integrations;
mod merge;
mod overlay_files;
mod query;
mod settings;
mod store;
mod types;
