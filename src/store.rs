//! Key-value storage backing the session
//!
//! [`SessionStore`] is the narrow surface the guard needs from browser-style
//! persistent storage. Storage is assumed to be always available, so the
//! trait is infallible; [`FileStore`] logs write failures instead of
//! returning them.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

/// Flat string key-value storage scoped to one origin
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    /// Removing an absent key is a no-op
    fn remove(&mut self, key: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store persisted as a JSON object in a single file.
///
/// Every mutation is written through. Concurrent writers to the same file
/// are last-write-wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened session store {} ({} entries)", path.display(), entries.len());

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current entries to disk
    pub fn flush(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);
        fs::write(&tmp, serde_json::to_vec_pretty(&self.entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::error!("Failed to persist session store {}: {}", self.path.display(), e);
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}
