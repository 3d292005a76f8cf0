//! Registry storage
//!
//! Registries live in a namespaced key/value store. [`MemoryStore`] keeps
//! values in process memory; [`JsonFileStore`] keeps one JSON object per
//! namespace in a directory and rewrites it atomically on every `set`.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Namespaced persistent key/value storage
pub trait RegistryStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, namespace: &str, key: &str, value: Value) -> Result<()>;
}

impl<S: RegistryStore + ?Sized> RegistryStore for &mut S {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>> {
        (**self).get(namespace, key)
    }

    fn set(&mut self, namespace: &str, key: &str, value: Value) -> Result<()> {
        (**self).set(namespace, key, value)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: HashMap<(String, String), Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl RegistryStore for MemoryStore {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>> {
        Ok(self
            .values
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    fn set(&mut self, namespace: &str, key: &str, value: Value) -> Result<()> {
        self.values
            .insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}

/// Directory-backed store with one `<namespace>.json` file per namespace
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `namespace`
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{}.json", namespace))
    }

    fn read_namespace(&self, namespace: &str, key: &str) -> Result<Map<String, Value>> {
        let path = self.namespace_path(namespace);
        if !path.exists() {
            return Ok(Map::new());
        }

        let store_error = |message: String| Error::Store {
            namespace: namespace.to_string(),
            key: key.to_string(),
            message,
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| store_error(format!("failed to read {}: {}", path.display(), e)))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(store_error(format!(
                "{} does not contain a JSON object",
                path.display()
            ))),
            Err(e) => Err(store_error(format!(
                "failed to parse {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write_namespace(&self, namespace: &str, values: &Map<String, Value>) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;

        // Write next to the target so the rename stays on one filesystem
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, values)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.persist(self.namespace_path(namespace))
            .map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

impl RegistryStore for JsonFileStore {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>> {
        let mut values = self.read_namespace(namespace, key)?;
        Ok(values.remove(key))
    }

    fn set(&mut self, namespace: &str, key: &str, value: Value) -> Result<()> {
        let mut values = self.read_namespace(namespace, key)?;
        values.insert(key.to_string(), value);
        self.write_namespace(namespace, &values)
    }
}
