//! Error types for registry bootstrap and storage
//!
//! This module defines the error types used throughout the item-registry
//! library. All public functions return [`Result<T, Error>`] for consistent
//! error handling.

use std::path::PathBuf;

/// Errors that can occur while bootstrapping, storing or querying registries
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An extension listener rejected the overlay and aborted the bootstrap
    #[error("Listener '{listener}' failed during hook '{hook}': {source}")]
    Listener {
        hook: String,
        listener: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The registry store could not read or write a value
    #[error("Store error for {namespace}.{key}: {message}")]
    Store {
        namespace: String,
        key: String,
        message: String,
    },

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored or produced data could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An overlay file does not hold a valid registry contribution
    #[error("Malformed overlay file {path}: {source}")]
    MalformedOverlay {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Setting key was never registered for the namespace
    #[error("Unknown setting '{0}'")]
    UnknownSetting(String),

    /// Stored setting value has the wrong shape
    #[error("Invalid value for setting '{key}': expected {expected}")]
    InvalidSetting { key: String, expected: &'static str },

    /// Invalid glob pattern in query
    #[error("Invalid glob pattern: {0}")]
    InvalidGlobPattern(String),
}

/// Result type alias for convenience
///
/// All public functions in the item-registry library return this type alias
/// for consistent error handling.
///
/// # Example
///
/// ```rust
/// use item_registry::{MemoryStore, RegistryStore, Result};
///
/// fn read_icons(store: &MemoryStore) -> Result<()> {
///     let value = store.get("forien-unidentified-items", "defaultIcons")?;
///     assert!(value.is_none());
///     Ok(())
/// }
///
/// read_icons(&MemoryStore::new()).unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;
