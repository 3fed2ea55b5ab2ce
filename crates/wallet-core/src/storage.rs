use shared::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key holding the preferred display unit.
pub const KEY_UNIT: &str = "unit";
/// Key holding the dark-mode flag.
pub const KEY_DARK_MODE: &str = "darkMode";
/// Key holding the selected network.
pub const KEY_NETWORK: &str = "network";

/// Store key for the resolved server of one network.
pub fn server_key(network: &str) -> String {
    format!("server-{}", network)
}

/// String-keyed, string-valued persisted storage.
///
/// The on-disk format is a single flat JSON object. Every mutation rewrites
/// the file, so the store on disk always reflects the last completed write.
/// There is no versioning or migration scheme.
#[derive(Debug)]
pub struct LocalStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open a store backed by the given file. A missing file is an empty
    /// store; a file that exists but does not parse is a storage error.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text)
                .map_err(|e| Error::Storage(format!("corrupt store {}: {}", path.display(), e)))?
        } else {
            BTreeMap::new()
        };

        debug!("Opened local store {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// An unpersisted store with the same API, for tests and ephemeral use.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flush(&self) -> Result<()> {
        if let Some(path) = &self.path {
            let text = serde_json::to_string_pretty(&self.entries)
                .map_err(|e| Error::Storage(e.to_string()))?;
            fs::write(path, text)?;
        }
        Ok(())
    }
}
