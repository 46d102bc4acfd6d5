use std::collections::{BTreeMap, HashMap};

use bfs_types::Entry;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::error::{StoreError, StoreResult};

/// Point-in-time occupancy of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    /// Number of stored entries.
    pub entries: usize,
    /// Aggregate size of all stored entries.
    pub used: u64,
    /// Fixed upper bound on `used`.
    pub capacity: u64,
}

/// In-memory file store with a fixed size budget.
///
/// Each stored entry gets a sequence number when it is written. Entries are
/// held in a `BTreeMap` keyed by that number, with a name index beside it,
/// so listings come back in insertion order and lookups by name stay cheap.
/// The aggregate size only changes when an entry is inserted or removed.
pub struct FileStorage {
    capacity: u64,
    used: u64,
    next_seq: u64,
    entries: BTreeMap<u64, Entry>,
    by_name: HashMap<String, u64>,
}

impl FileStorage {
    /// Create an empty store that holds at most `capacity` in aggregate size.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            used: 0,
            next_seq: 0,
            entries: BTreeMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create an empty store from a validated configuration.
    pub fn from_config(config: &StorageConfig) -> StoreResult<Self> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Store `entry` if its name is free and it fits.
    ///
    /// Returns `Ok(false)` without storing anything when the entry would push
    /// the aggregate size past the capacity. Fails with
    /// [`StoreError::NullEntry`] when called with `None` and with
    /// [`StoreError::DuplicateName`] when the name is taken.
    pub fn write(&mut self, entry: impl Into<Option<Entry>>) -> StoreResult<bool> {
        let entry = entry.into().ok_or(StoreError::NullEntry)?;
        let name = entry.filename();

        if self.by_name.contains_key(name) {
            warn!(name = %name, "file name already exists");
            return Err(StoreError::DuplicateName {
                name: name.to_owned(),
            });
        }

        let size = entry.size();
        if size > self.available() {
            debug!(
                name = %name,
                size,
                used = self.used,
                capacity = self.capacity,
                "file does not fit, not stored"
            );
            return Ok(false);
        }

        debug!(name = %name, size, used = self.used + size, "file stored");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.used += size;
        self.by_name.insert(name.to_owned(), seq);
        self.entries.insert(seq, entry);
        Ok(true)
    }

    /// Build an entry from `name` and `content`, then [`write`](Self::write) it.
    ///
    /// Construction failures surface as [`StoreError::Entry`].
    pub fn write_content(&mut self, name: &str, content: &str) -> StoreResult<bool> {
        let entry = Entry::new(name, content)?;
        self.write(entry)
    }

    /// Whether a file named `name` is stored.
    pub fn is_exists(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Remove the file named `name`. Returns `true` if it was present.
    pub fn delete(&mut self, name: &str) -> bool {
        let Some(entry) = self
            .by_name
            .remove(name)
            .and_then(|seq| self.entries.remove(&seq))
        else {
            return false;
        };
        self.used -= entry.size();
        debug!(name = %name, size = entry.size(), used = self.used, "file deleted");
        true
    }

    /// The file named `name`.
    ///
    /// Fails with [`StoreError::NotFound`] if it is not stored.
    pub fn get_file(&self, name: &str) -> StoreResult<&Entry> {
        self.by_name
            .get(name)
            .and_then(|seq| self.entries.get(seq))
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_owned(),
            })
    }

    /// Every stored file, in the order it was written.
    pub fn get_files(&self) -> Vec<&Entry> {
        self.entries.values().collect()
    }

    /// Remove every file. Always returns `true`, even on an empty store.
    pub fn delete_all_files(&mut self) -> bool {
        let removed = self.entries.len();
        self.entries.clear();
        self.by_name.clear();
        self.used = 0;
        debug!(removed, "all files deleted");
        true
    }

    /// The fixed size budget.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Aggregate size of all stored files.
    pub fn used(&self) -> u64 {
        self.used
    }

    /// Size still available before the budget is reached.
    pub fn available(&self) -> u64 {
        self.capacity - self.used
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no files are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the current occupancy.
    pub fn stats(&self) -> StorageStats {
        StorageStats {
            entries: self.entries.len(),
            used: self.used,
            capacity: self.capacity,
        }
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(StorageConfig::default().capacity)
    }
}

impl std::fmt::Debug for FileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorage")
            .field("file_count", &self.entries.len())
            .field("used", &self.used)
            .field("capacity", &self.capacity)
            .finish()
    }
}
