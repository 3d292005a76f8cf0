//! Module settings
//!
//! The add-on registers three world-scoped settings. Reading a setting that
//! was never written yields its registered default, so both registries read
//! as `{}` until they are bootstrapped.

use crate::error::{Error, Result};
use crate::store::RegistryStore;
use crate::types::{IconRegistry, PropertyRegistry, RegistryName};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Namespace the add-on stores its settings under
pub const DEFAULT_NAMESPACE: &str = "forien-unidentified-items";

/// Key of the welcome screen toggle
pub const PLAYERS_WELCOME_SCREEN: &str = "playersWelcomeScreen";

/// Where a setting applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingScope {
    World,
    Client,
}

/// Registration record for one setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDefinition {
    pub key: &'static str,
    pub scope: SettingScope,
    /// Shown in the host's settings form
    pub config: bool,
    /// Localization key for the label, if the setting is user-facing
    pub name: Option<&'static str>,
    pub hint: Option<&'static str>,
}

/// Settings registered by the add-on
pub const SETTINGS: &[SettingDefinition] = &[
    SettingDefinition {
        key: "defaultIcons",
        scope: SettingScope::World,
        config: false,
        name: None,
        hint: None,
    },
    SettingDefinition {
        key: "itemProperties",
        scope: SettingScope::World,
        config: false,
        name: None,
        hint: None,
    },
    SettingDefinition {
        key: PLAYERS_WELCOME_SCREEN,
        scope: SettingScope::World,
        config: true,
        name: Some("ForienUnidentifiedItems.Settings.playersWelcomeScreen.Enable"),
        hint: Some("ForienUnidentifiedItems.Settings.playersWelcomeScreen.EnableHint"),
    },
];

impl SettingDefinition {
    /// Value a setting reads as before it is first written
    pub fn default_value(&self) -> Value {
        match self.key {
            PLAYERS_WELCOME_SCREEN => json!(true),
            _ => json!({}),
        }
    }
}

/// Look up the registration record for `key`
pub fn setting_definition(key: &str) -> Option<&'static SettingDefinition> {
    SETTINGS.iter().find(|def| def.key == key)
}

/// Typed view over the add-on's settings in a store
#[derive(Debug)]
pub struct Settings<S> {
    store: S,
    namespace: String,
}

impl<S: RegistryStore> Settings<S> {
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Stored value of `key`, or its registered default
    pub fn read(&self, key: &str) -> Result<Value> {
        let def = setting_definition(key).ok_or_else(|| Error::UnknownSetting(key.to_string()))?;
        Ok(self
            .store
            .get(&self.namespace, key)?
            .unwrap_or_else(|| def.default_value()))
    }

    /// Write a registered setting
    pub fn write(&mut self, key: &str, value: Value) -> Result<()> {
        if setting_definition(key).is_none() {
            return Err(Error::UnknownSetting(key.to_string()));
        }
        self.store.set(&self.namespace, key, value)
    }

    pub fn players_welcome_screen(&self) -> Result<bool> {
        self.read(PLAYERS_WELCOME_SCREEN)?
            .as_bool()
            .ok_or(Error::InvalidSetting {
                key: PLAYERS_WELCOME_SCREEN.to_string(),
                expected: "a boolean",
            })
    }

    pub fn set_players_welcome_screen(&mut self, enabled: bool) -> Result<()> {
        self.write(PLAYERS_WELCOME_SCREEN, Value::Bool(enabled))
    }

    /// Stored icon registry
    pub fn icons(&self) -> Result<IconRegistry> {
        self.registry(RegistryName::DefaultIcons)
    }

    /// Stored property registry
    pub fn properties(&self) -> Result<PropertyRegistry> {
        self.registry(RegistryName::ItemProperties)
    }

    fn registry<T: DeserializeOwned>(&self, name: RegistryName) -> Result<T> {
        let value = self.read(name.key())?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_defaults_before_first_write() {
        let settings = Settings::new(MemoryStore::new(), DEFAULT_NAMESPACE);

        assert_eq!(settings.read("defaultIcons").unwrap(), json!({}));
        assert_eq!(settings.read("itemProperties").unwrap(), json!({}));
        assert!(settings.players_welcome_screen().unwrap());
        assert!(settings.icons().unwrap().is_empty());
        assert!(settings.properties().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_setting_is_rejected() {
        let mut settings = Settings::new(MemoryStore::new(), DEFAULT_NAMESPACE);

        assert!(matches!(
            settings.read("colorScheme"),
            Err(Error::UnknownSetting(_))
        ));
        assert!(matches!(
            settings.write("colorScheme", json!("dark")),
            Err(Error::UnknownSetting(_))
        ));
    }

    #[test]
    fn test_welcome_screen_toggle() {
        let mut settings = Settings::new(MemoryStore::new(), DEFAULT_NAMESPACE);
        settings.set_players_welcome_screen(false).unwrap();
        assert!(!settings.players_welcome_screen().unwrap());
    }

    #[test]
    fn test_welcome_screen_rejects_non_bool() {
        let mut store = MemoryStore::new();
        store
            .set(DEFAULT_NAMESPACE, PLAYERS_WELCOME_SCREEN, json!("yes"))
            .unwrap();
        let settings = Settings::new(store, DEFAULT_NAMESPACE);

        assert!(matches!(
            settings.players_welcome_screen(),
            Err(Error::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_typed_registry_reads() {
        let mut store = MemoryStore::new();
        store
            .set(
                DEFAULT_NAMESPACE,
                "itemProperties",
                json!({"weapon": {"description": true}}),
            )
            .unwrap();
        store
            .set(DEFAULT_NAMESPACE, "defaultIcons", json!({"weapon": 3}))
            .unwrap();
        let settings = Settings::new(store, DEFAULT_NAMESPACE);

        assert_eq!(settings.properties().unwrap()["weapon"]["description"], true);
        assert!(matches!(settings.icons(), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_user_facing_settings_have_labels() {
        for def in SETTINGS.iter().filter(|s| s.config) {
            assert!(def.name.is_some(), "{} has no label", def.key);
        }
        assert_eq!(
            setting_definition(PLAYERS_WELCOME_SCREEN).unwrap().scope,
            SettingScope::World
        );
    }
}
