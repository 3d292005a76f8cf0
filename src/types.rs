use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Item-type identifier used as the top-level key of both registries
pub type ItemCategory = String;

/// Path of the icon shown for an item category
pub type IconPath = String;

/// Dot-delimited path to a nested item data field (e.g. `"attack.damage"`)
pub type FieldPath = String;

/// Category to default icon mapping
pub type IconRegistry = IndexMap<ItemCategory, IconPath>;

/// Field path to hideable flag mapping for a single category
pub type FieldVisibility = IndexMap<FieldPath, bool>;

/// Category to hideable field mapping
///
/// Maps keep insertion order, which is the order the registry is written to
/// the store in.
pub type PropertyRegistry = IndexMap<ItemCategory, FieldVisibility>;

/// The two persisted registries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegistryName {
    DefaultIcons,
    ItemProperties,
}

impl RegistryName {
    /// Both registries, in bootstrap order
    pub const ALL: [RegistryName; 2] = [RegistryName::DefaultIcons, RegistryName::ItemProperties];

    /// Key the registry is stored under
    pub fn key(self) -> &'static str {
        match self {
            RegistryName::DefaultIcons => "defaultIcons",
            RegistryName::ItemProperties => "itemProperties",
        }
    }

    /// Name of the extension hook fired while bootstrapping this registry
    ///
    /// ```rust
    /// use item_registry::RegistryName;
    ///
    /// assert_eq!(
    ///     RegistryName::ItemProperties.hook_name("my-module"),
    ///     "my-module:onInitializeItemProperties"
    /// );
    /// ```
    pub fn hook_name(self, namespace: &str) -> String {
        format!("{}:onInitialize{}", namespace, self)
    }
}

impl fmt::Display for RegistryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryName::DefaultIcons => write!(f, "DefaultIcons"),
            RegistryName::ItemProperties => write!(f, "ItemProperties"),
        }
    }
}

/// Returns true when a stored registry value has never been populated
///
/// Only an object with zero entries counts. `{"weapon": {}}` is initialized,
/// and so is any value that is not an object at all.
pub fn is_uninitialized(value: &serde_json::Value) -> bool {
    matches!(value, serde_json::Value::Object(map) if map.is_empty())
}
