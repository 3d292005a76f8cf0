//! Extension contributions loaded from JSON files
//!
//! An overlay file is a JSON object with optional `defaultIcons` and
//! `itemProperties` members shaped like the registries themselves:
//!
//! ```json
//! {
//!   "defaultIcons": { "relic": "icons/svg/crown.svg" },
//!   "itemProperties": { "weapon": { "damage.parts": false } }
//! }
//! ```
//!
//! Each loaded file becomes a hook listener that merges its contents into the
//! overlay, so file contributions follow the same precedence as listeners
//! registered in code.

use crate::error::{Error, Result};
use crate::hooks::ExtensionHooks;
use crate::merge::DeepMerge;
use crate::types::{IconRegistry, PropertyRegistry};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Registry contributions read from one file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayFile {
    #[serde(rename = "defaultIcons", default)]
    pub icons: IconRegistry,
    #[serde(rename = "itemProperties", default)]
    pub properties: PropertyRegistry,
}

impl OverlayFile {
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty() && self.properties.is_empty()
    }

    /// Register this file's contributions as listeners named `label`
    pub fn register(self, hooks: &mut ExtensionHooks, label: &str) {
        let OverlayFile { icons, properties } = self;

        if !icons.is_empty() {
            hooks.on_default_icons(label, move |overlay| {
                overlay.merge_from(icons.clone());
                Ok(())
            });
        }

        if !properties.is_empty() {
            hooks.on_item_properties(label, move |overlay| {
                overlay.merge_from(properties.clone());
                Ok(())
            });
        }
    }
}

/// Parse a single overlay file
pub fn load_overlay_file(path: &Path) -> Result<OverlayFile> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::MalformedOverlay {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `*.json` file under `dir`, ordered by path
///
/// Fails on the first malformed file, before any listener is registered.
pub fn load_overlay_dir(dir: &Path) -> Result<Vec<(PathBuf, OverlayFile)>> {
    let mut overlays = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("json")
        {
            continue;
        }

        let overlay = load_overlay_file(path)?;
        log::debug!(
            "event=overlay_load path={} icons={} categories={}",
            path.display(),
            overlay.icons.len(),
            overlay.properties.len()
        );
        overlays.push((path.to_path_buf(), overlay));
    }

    Ok(overlays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::TempDir;

    #[test]
    fn test_load_overlay_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("extra.json");
        write(
            &path,
            r#"{"defaultIcons": {"relic": "crown.svg"}, "itemProperties": {"weapon": {"damage": true}}}"#,
        )
        .unwrap();

        let overlay = load_overlay_file(&path).unwrap();
        assert_eq!(overlay.icons["relic"], "crown.svg");
        assert_eq!(overlay.properties["weapon"]["damage"], true);
    }

    #[test]
    fn test_members_are_optional() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icons.json");
        write(&path, r#"{"defaultIcons": {"relic": "crown.svg"}}"#).unwrap();

        let overlay = load_overlay_file(&path).unwrap();
        assert!(overlay.properties.is_empty());
        assert!(!overlay.is_empty());
    }

    #[test]
    fn test_malformed_overlay_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        write(&path, r#"{"itemProperties": {"weapon": {"damage": "yes"}}}"#).unwrap();

        match load_overlay_file(&path) {
            Err(Error::MalformedOverlay { path: bad, .. }) => assert_eq!(bad, path),
            other => panic!("expected MalformedOverlay, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_member_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("typo.json");
        write(&path, r#"{"itemProperty": {}}"#).unwrap();

        assert!(matches!(
            load_overlay_file(&path),
            Err(Error::MalformedOverlay { .. })
        ));
    }

    #[test]
    fn test_load_dir_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path().join("b.json"), r#"{"defaultIcons": {"b": "b.svg"}}"#).unwrap();
        write(temp_dir.path().join("a.json"), r#"{"defaultIcons": {"a": "a.svg"}}"#).unwrap();
        write(temp_dir.path().join("notes.txt"), "not an overlay").unwrap();

        let overlays = load_overlay_dir(temp_dir.path()).unwrap();
        let names: Vec<_> = overlays
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.json", "b.json"]);
    }

    #[test]
    fn test_register_merges_into_overlay() {
        let mut file = OverlayFile::default();
        file.properties
            .entry("weapon".to_string())
            .or_default()
            .insert("description".to_string(), false);

        let mut hooks = ExtensionHooks::new();
        file.register(&mut hooks, "file:extra.json");
        assert!(hooks
            .listener_names(crate::types::RegistryName::DefaultIcons)
            .is_empty());

        let mut overlay = PropertyRegistry::new();
        overlay
            .entry("weapon".to_string())
            .or_default()
            .insert("description".to_string(), true);
        hooks
            .notify_item_properties("ns:onInitializeItemProperties", &mut overlay)
            .unwrap();

        assert_eq!(overlay["weapon"]["description"], false);
    }
}
