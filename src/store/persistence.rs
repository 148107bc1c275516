//! Durable string-keyed storage for preferences.
//!
//! Five entries are persisted: favorites (JSON int array), search history
//! (JSON string array), view mode (plain `grid|list`), theme (plain
//! `light|dark`) and sidebar-open (JSON boolean).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::Result;

use super::action::PersistedState;
use super::state::PreferenceState;

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// A string key/value store that survives restarts.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile storage, for tests and embedders that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under a directory.
///
/// Writes go to a temp file that is renamed into place, so an interrupted
/// write never leaves a truncated entry behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, or the platform data directory when
    /// `None`. Creates the directory if it does not exist.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_storage_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let dest = self.path_for(key);
        let tmp = self.dir.join(format!("{}.tmp", key));

        let result = fs::write(&tmp, value).and_then(|_| fs::rename(&tmp, &dest));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        Ok(result?)
    }
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// Read every persisted entry. An unreadable or unparseable entry is skipped
/// with a warning; the rest still load.
pub fn load_persisted<S: Storage + ?Sized>(storage: &S) -> PersistedState {
    PersistedState {
        favorites: read_entry(storage, config::FAVORITES_KEY, |raw| {
            serde_json::from_str(raw).map_err(Into::into)
        }),
        search_history: read_entry(storage, config::SEARCH_HISTORY_KEY, |raw| {
            serde_json::from_str(raw).map_err(Into::into)
        }),
        view_mode: read_entry(storage, config::VIEW_MODE_KEY, |raw| raw.parse()),
        theme: read_entry(storage, config::THEME_KEY, |raw| raw.parse()),
        sidebar_open: read_entry(storage, config::SIDEBAR_OPEN_KEY, |raw| {
            serde_json::from_str(raw).map_err(Into::into)
        }),
    }
}

fn read_entry<S, T, F>(storage: &S, key: &str, parse: F) -> Option<T>
where
    S: Storage + ?Sized,
    F: FnOnce(&str) -> Result<T>,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not read persisted preference");
            return None;
        }
    };
    match parse(raw.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring unparseable persisted preference");
            None
        }
    }
}

/// Write the entries whose values differ between `prev` and `next`.
pub fn save_changes<S: Storage + ?Sized>(
    storage: &mut S,
    prev: &PreferenceState,
    next: &PreferenceState,
) -> Result<()> {
    if prev.favorites != next.favorites {
        storage.set(config::FAVORITES_KEY, &serde_json::to_string(&next.favorites)?)?;
    }
    if prev.search_history != next.search_history {
        storage.set(
            config::SEARCH_HISTORY_KEY,
            &serde_json::to_string(&next.search_history)?,
        )?;
    }
    if prev.view_mode != next.view_mode {
        storage.set(config::VIEW_MODE_KEY, next.view_mode.as_str())?;
    }
    if prev.theme != next.theme {
        storage.set(config::THEME_KEY, next.theme.as_str())?;
    }
    if prev.sidebar_open != next.sidebar_open {
        storage.set(
            config::SIDEBAR_OPEN_KEY,
            &serde_json::to_string(&next.sidebar_open)?,
        )?;
    }
    Ok(())
}

/// Write all five entries unconditionally.
pub fn save_all<S: Storage + ?Sized>(storage: &mut S, state: &PreferenceState) -> Result<()> {
    storage.set(config::FAVORITES_KEY, &serde_json::to_string(&state.favorites)?)?;
    storage.set(
        config::SEARCH_HISTORY_KEY,
        &serde_json::to_string(&state.search_history)?,
    )?;
    storage.set(config::VIEW_MODE_KEY, state.view_mode.as_str())?;
    storage.set(config::THEME_KEY, state.theme.as_str())?;
    storage.set(
        config::SIDEBAR_OPEN_KEY,
        &serde_json::to_string(&state.sidebar_open)?,
    )?;
    Ok(())
}
