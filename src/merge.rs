//! Overlay merging
//!
//! Merges an extension overlay back onto computed defaults. Overlay entries
//! take precedence at the leaf level; keys that exist on only one side are
//! kept. Keys already present keep their position and overlay-only keys are
//! appended, so a sorted base stays sorted apart from new keys.

use crate::types::{IconRegistry, PropertyRegistry};

/// Deep merge of an overlay into `self`
pub trait DeepMerge {
    /// Merge `overlay` into `self`, overlay values winning on conflicts
    fn merge_from(&mut self, overlay: Self);
}

impl DeepMerge for IconRegistry {
    fn merge_from(&mut self, overlay: Self) {
        for (category, icon) in overlay {
            self.insert(category, icon);
        }
    }
}

impl DeepMerge for PropertyRegistry {
    fn merge_from(&mut self, overlay: Self) {
        for (category, fields) in overlay {
            let target = self.entry(category).or_default();
            for (path, visible) in fields {
                target.insert(path, visible);
            }
        }
    }
}

/// Merge `overlay` onto `base` and return the result
///
/// # Example
///
/// ```rust
/// use item_registry::{merge, FieldVisibility, PropertyRegistry};
///
/// let mut base = PropertyRegistry::new();
/// base.entry("weapon".to_string()).or_default().insert("description".to_string(), true);
///
/// let mut overlay = PropertyRegistry::new();
/// let fields: &mut FieldVisibility = overlay.entry("weapon".to_string()).or_default();
/// fields.insert("description".to_string(), false);
/// fields.insert("damage".to_string(), true);
///
/// let merged = merge(base, overlay);
/// assert_eq!(merged["weapon"]["description"], false);
/// assert_eq!(merged["weapon"]["damage"], true);
/// ```
pub fn merge<T: DeepMerge>(mut base: T, overlay: T) -> T {
    base.merge_from(overlay);
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldVisibility;

    fn fields(entries: &[(&str, bool)]) -> FieldVisibility {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_overlay_wins_at_field_level() {
        let mut base = PropertyRegistry::new();
        base.insert("weapon".to_string(), fields(&[("description", true)]));

        let mut overlay = PropertyRegistry::new();
        overlay.insert(
            "weapon".to_string(),
            fields(&[("description", false), ("damage", true)]),
        );

        let merged = merge(base, overlay);

        let mut expected = PropertyRegistry::new();
        expected.insert(
            "weapon".to_string(),
            fields(&[("description", false), ("damage", true)]),
        );
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_base_only_keys_survive() {
        let mut base = PropertyRegistry::new();
        base.insert("weapon".to_string(), fields(&[("description", true), ("weight", true)]));
        base.insert("armor".to_string(), fields(&[("price", true)]));

        let mut overlay = PropertyRegistry::new();
        overlay.insert("weapon".to_string(), fields(&[("weight", false)]));

        let merged = merge(base, overlay);
        assert_eq!(merged["weapon"]["description"], true);
        assert_eq!(merged["weapon"]["weight"], false);
        assert_eq!(merged["armor"]["price"], true);
    }

    #[test]
    fn test_overlay_only_keys_are_appended() {
        let mut base = PropertyRegistry::new();
        base.insert("weapon".to_string(), fields(&[("attack", true), ("weight", true)]));

        let mut overlay = PropertyRegistry::new();
        overlay.insert("weapon".to_string(), fields(&[("ammo", true), ("weight", false)]));
        overlay.insert("consumable".to_string(), fields(&[("uses", true)]));

        let merged = merge(base, overlay);

        let weapon: Vec<_> = merged["weapon"].keys().cloned().collect();
        assert_eq!(weapon, ["attack", "weight", "ammo"]);
        let categories: Vec<_> = merged.keys().cloned().collect();
        assert_eq!(categories, ["weapon", "consumable"]);
    }

    #[test]
    fn test_icon_overlay_replaces_category() {
        let mut base = IconRegistry::new();
        base.insert("weapon".to_string(), "icons/sword.svg".to_string());
        base.insert("armor".to_string(), "icons/shield.svg".to_string());

        let mut overlay = IconRegistry::new();
        overlay.insert("weapon".to_string(), "icons/axe.svg".to_string());
        overlay.insert("loot".to_string(), "icons/coins.svg".to_string());

        let merged = merge(base, overlay);
        assert_eq!(merged["weapon"], "icons/axe.svg");
        assert_eq!(merged["armor"], "icons/shield.svg");
        assert_eq!(merged["loot"], "icons/coins.svg");
    }
}
