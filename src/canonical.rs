//! Canonical field ordering for property registries
//!
//! Persisted registries must be byte-stable regardless of the order a
//! provider produced its entries in, so every category's field paths are
//! sorted before the registry is handed to extension listeners.

use crate::types::PropertyRegistry;

/// Sort the field paths of every category in ascending byte-wise order
///
/// Category order is left as is. Field paths are unique within a category,
/// so no tie-break is needed.
///
/// # Example
///
/// ```rust
/// use item_registry::{canonicalize, FieldVisibility, PropertyRegistry};
///
/// let mut fields = FieldVisibility::new();
/// fields.insert("weight".to_string(), true);
/// fields.insert("attack.damage".to_string(), true);
/// fields.insert("description".to_string(), true);
///
/// let mut registry = PropertyRegistry::new();
/// registry.insert("weapon".to_string(), fields);
///
/// let registry = canonicalize(registry);
/// let keys: Vec<_> = registry["weapon"].keys().map(String::as_str).collect();
/// assert_eq!(keys, ["attack.damage", "description", "weight"]);
/// ```
pub fn canonicalize(mut registry: PropertyRegistry) -> PropertyRegistry {
    for fields in registry.values_mut() {
        fields.sort_unstable_keys();
    }
    registry
}
