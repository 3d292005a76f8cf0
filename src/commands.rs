use crate::cli::RegistryArg;
use anyhow::Context;
use item_registry::{
    load_overlay_dir, load_overlay_file, query_categories, query_properties, BootstrapConfig,
    Bootstrapper, ExtensionHooks, JsonFileStore, ProviderRegistry, Settings,
};
use std::path::{Path, PathBuf};

/// Bootstrap both registries in the store at `store_dir`
pub fn bootstrap(
    store_dir: &Path,
    namespace: &str,
    host: &str,
    overlays: &[PathBuf],
    overlay_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let providers = ProviderRegistry::with_builtin();
    if !providers.contains(host) {
        log::warn!(
            "No built-in defaults for host '{}'; only overlay entries will be stored",
            host
        );
    }

    // Load every overlay before touching the store so a bad file aborts cleanly
    let mut loaded = Vec::new();
    for path in overlays {
        let overlay = load_overlay_file(path)
            .with_context(|| format!("Failed to load overlay {}", path.display()))?;
        loaded.push((path.clone(), overlay));
    }
    if let Some(dir) = overlay_dir {
        let from_dir = load_overlay_dir(dir)
            .with_context(|| format!("Failed to load overlays from {}", dir.display()))?;
        loaded.extend(from_dir);
    }

    let mut hooks = ExtensionHooks::new();
    for (path, overlay) in loaded {
        overlay.register(&mut hooks, &format!("file:{}", path.display()));
    }

    let config = BootstrapConfig {
        namespace: namespace.to_string(),
        host_id: host.to_string(),
    };
    let store = JsonFileStore::new(store_dir);
    let report = Bootstrapper::new(config, store, &providers, &hooks)
        .ensure_initialized()
        .with_context(|| format!("Failed to bootstrap registries in {}", store_dir.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print one stored registry, optionally filtered by glob patterns
pub fn show(
    store_dir: &Path,
    namespace: &str,
    registry: RegistryArg,
    query: &[String],
) -> anyhow::Result<()> {
    let settings = Settings::new(JsonFileStore::new(store_dir), namespace);
    let patterns: Vec<&str> = query.iter().map(String::as_str).collect();

    let json = match registry {
        RegistryArg::Icons => {
            let mut icons = settings.icons().context("Failed to read defaultIcons")?;
            if !patterns.is_empty() {
                icons = query_categories(&icons, &patterns)?;
            }
            serde_json::to_string_pretty(&icons)?
        }
        RegistryArg::Properties => {
            let mut properties = settings
                .properties()
                .context("Failed to read itemProperties")?;
            if !patterns.is_empty() {
                properties = query_properties(&properties, &patterns)?;
            }
            serde_json::to_string_pretty(&properties)?
        }
    };

    println!("{}", json);
    Ok(())
}

/// Print or update the players welcome screen toggle
pub fn welcome(store_dir: &Path, namespace: &str, set: Option<bool>) -> anyhow::Result<()> {
    let mut settings = Settings::new(JsonFileStore::new(store_dir), namespace);

    if let Some(enabled) = set {
        settings
            .set_players_welcome_screen(enabled)
            .context("Failed to update playersWelcomeScreen")?;
    }

    println!("{}", settings.players_welcome_screen()?);
    Ok(())
}

/// List host identifiers with built-in defaults
pub fn list_hosts() -> anyhow::Result<()> {
    let hosts = ProviderRegistry::with_builtin().host_ids();
    println!("{}", serde_json::to_string_pretty(&hosts)?);
    Ok(())
}
