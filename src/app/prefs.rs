use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::PreferenceError;

pub const DARK_MODE_KEY: &str = "darkMode";

/// String key-value storage that survives restarts.
pub trait PreferenceStore: Send {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Flat JSON object on disk, rewritten on every save.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking every later save.
        let mut entries = self.read_all().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), "discarding unreadable settings: {e}");
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// In-memory store, used in tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Light/dark flag backed by a [`PreferenceStore`].
pub struct ThemePreference {
    dark: bool,
    store: Box<dyn PreferenceStore>,
}

impl ThemePreference {
    /// Reads the persisted flag. Anything other than `"true"` is light.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let dark = match store.load(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("could not read theme preference, using light theme: {e}");
                false
            }
        };
        Self { dark, store }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flips the flag and persists it. The in-memory flag flips even if the
    /// write fails.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        let value = if self.dark { "true" } else { "false" };
        match self.store.save(DARK_MODE_KEY, value) {
            Ok(()) => info!(dark = self.dark, "theme toggled"),
            Err(e) => warn!("could not persist theme preference: {e}"),
        }
        self.dark
    }

    #[cfg(test)]
    pub(crate) fn persisted(&self) -> Option<String> {
        self.store.load(DARK_MODE_KEY).ok().flatten()
    }
}
