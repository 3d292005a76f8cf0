//! Extension hooks fired during bootstrap
//!
//! Third parties contribute registry entries by registering listeners. While a
//! registry is bootstrapped its listeners are called synchronously, in
//! registration order, with a mutable overlay of the computed defaults. A
//! listener that returns an error stops the notification and the error is
//! surfaced to the caller.

use crate::error::{Error, Result};
use crate::types::{IconRegistry, PropertyRegistry, RegistryName};
use std::fmt;

/// Listener callback receiving the mutable overlay
pub type Listener<T> = Box<dyn Fn(&mut T) -> anyhow::Result<()> + Send + Sync>;

struct RegisteredListener<T> {
    name: String,
    callback: Listener<T>,
}

/// Listener registry for both bootstrap hooks
#[derive(Default)]
pub struct ExtensionHooks {
    icons: Vec<RegisteredListener<IconRegistry>>,
    properties: Vec<RegisteredListener<PropertyRegistry>>,
}

impl ExtensionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen on `onInitializeDefaultIcons`
    ///
    /// # Example
    ///
    /// ```rust
    /// use item_registry::ExtensionHooks;
    ///
    /// let mut hooks = ExtensionHooks::new();
    /// hooks.on_default_icons("my-extension", |icons| {
    ///     icons.insert("relic".to_string(), "icons/svg/crown.svg".to_string());
    ///     Ok(())
    /// });
    /// ```
    pub fn on_default_icons<F>(&mut self, name: impl Into<String>, listener: F)
    where
        F: Fn(&mut IconRegistry) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.icons.push(RegisteredListener {
            name: name.into(),
            callback: Box::new(listener),
        });
    }

    /// Listen on `onInitializeItemProperties`
    pub fn on_item_properties<F>(&mut self, name: impl Into<String>, listener: F)
    where
        F: Fn(&mut PropertyRegistry) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.properties.push(RegisteredListener {
            name: name.into(),
            callback: Box::new(listener),
        });
    }

    /// Names of the listeners registered for `registry`, in call order
    pub fn listener_names(&self, registry: RegistryName) -> Vec<&str> {
        match registry {
            RegistryName::DefaultIcons => names(&self.icons),
            RegistryName::ItemProperties => names(&self.properties),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty() && self.properties.is_empty()
    }

    /// Run the icon listeners against `overlay`
    pub fn notify_default_icons(&self, hook: &str, overlay: &mut IconRegistry) -> Result<()> {
        notify(&self.icons, hook, overlay)
    }

    /// Run the property listeners against `overlay`
    pub fn notify_item_properties(
        &self,
        hook: &str,
        overlay: &mut PropertyRegistry,
    ) -> Result<()> {
        notify(&self.properties, hook, overlay)
    }
}

impl fmt::Debug for ExtensionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionHooks")
            .field("icons", &names(&self.icons))
            .field("properties", &names(&self.properties))
            .finish()
    }
}

fn names<T>(listeners: &[RegisteredListener<T>]) -> Vec<&str> {
    listeners.iter().map(|l| l.name.as_str()).collect()
}

fn notify<T>(listeners: &[RegisteredListener<T>], hook: &str, overlay: &mut T) -> Result<()> {
    for listener in listeners {
        log::debug!("event=hook_call hook={} listener={}", hook, listener.name);
        (listener.callback)(overlay).map_err(|e| Error::Listener {
            hook: hook.to_string(),
            listener: listener.name.clone(),
            source: e.into(),
        })?;
    }
    Ok(())
}
