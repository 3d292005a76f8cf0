use crate::error::{Error, Result};
use crate::types::PropertyRegistry;
use glob::Pattern;
use indexmap::IndexMap;

fn compile(patterns: &[&str]) -> Result<Vec<Pattern>> {
    // Compile all patterns first to fail fast on invalid patterns
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::InvalidGlobPattern(format!("'{}': {}", p, e)))
        })
        .collect()
}

/// Keep field paths matching any of the patterns (OR logic)
///
/// Categories with no matching field are dropped.
pub fn query_properties(registry: &PropertyRegistry, patterns: &[&str]) -> Result<PropertyRegistry> {
    let compiled = compile(patterns)?;

    Ok(registry
        .iter()
        .map(|(category, fields)| {
            let kept = fields
                .iter()
                .filter(|(path, _)| compiled.iter().any(|pattern| pattern.matches(path)))
                .map(|(path, visible)| (path.clone(), *visible))
                .collect::<IndexMap<_, _>>();
            (category.clone(), kept)
        })
        .filter(|(_, fields)| !fields.is_empty())
        .collect())
}

/// Keep categories matching any of the patterns (OR logic)
pub fn query_categories<V: Clone>(
    registry: &IndexMap<String, V>,
    patterns: &[&str],
) -> Result<IndexMap<String, V>> {
    let compiled = compile(patterns)?;

    Ok(registry
        .iter()
        .filter(|(category, _)| compiled.iter().any(|pattern| pattern.matches(category)))
        .map(|(category, value)| (category.clone(), value.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldVisibility, IconRegistry};

    fn create_test_registry() -> PropertyRegistry {
        let mut registry = PropertyRegistry::new();
        let weapon: FieldVisibility = [
            ("attack.bonus", true),
            ("attack.damage", true),
            ("description", true),
            ("weight", false),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
        let armor: FieldVisibility = [("armor.value", true), ("weight", false)]
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        registry.insert("weapon".to_string(), weapon);
        registry.insert("armor".to_string(), armor);
        registry
    }

    #[test]
    fn test_query_single_pattern() {
        let registry = create_test_registry();
        let queried = query_properties(&registry, &["attack.*"]).unwrap();
        assert_eq!(queried.len(), 1);
        assert_eq!(queried["weapon"].len(), 2);
        assert!(queried["weapon"].contains_key("attack.damage"));
    }

    #[test]
    fn test_query_multiple_patterns_or_logic() {
        let registry = create_test_registry();
        let queried = query_properties(&registry, &["weight", "armor.*"]).unwrap();
        assert_eq!(queried["weapon"].len(), 1);
        assert_eq!(queried["armor"].len(), 2);
    }

    #[test]
    fn test_query_no_matches() {
        let registry = create_test_registry();
        let queried = query_properties(&registry, &["price.*"]).unwrap();
        assert!(queried.is_empty());
    }

    #[test]
    fn test_query_invalid_pattern() {
        let registry = create_test_registry();
        let result = query_properties(&registry, &["[invalid"]);
        assert!(matches!(result, Err(Error::InvalidGlobPattern(_))));
    }

    #[test]
    fn test_query_categories() {
        let mut icons = IconRegistry::new();
        icons.insert("weapon".to_string(), "sword.svg".to_string());
        icons.insert("armor".to_string(), "shield.svg".to_string());
        icons.insert("ammunition".to_string(), "target.svg".to_string());

        let queried = query_categories(&icons, &["a*"]).unwrap();
        let keys: Vec<_> = queried.keys().cloned().collect();
        assert_eq!(keys, ["armor", "ammunition"]);
    }
}
