//! Thread-safe file storage.
//!
//! [`SharedFileStorage`] wraps a [`FileStorage`] in a `RwLock` so it can be
//! shared across threads behind an `Arc`. Every mutating call holds the write
//! lock for its whole duration, which makes the capacity check and the
//! insert in `write` a single step for concurrent callers.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bfs_types::Entry;

use crate::config::StorageConfig;
use crate::error::{StoreError, StoreResult};
use crate::storage::{FileStorage, StorageStats};

/// A [`FileStorage`] that can be used through `&self` from many threads.
///
/// Reads return owned clones so no lock outlives the call.
pub struct SharedFileStorage {
    inner: RwLock<FileStorage>,
}

impl SharedFileStorage {
    /// Create an empty shared store with the given capacity.
    pub fn new(capacity: u64) -> Self {
        Self::from_storage(FileStorage::new(capacity))
    }

    /// Create an empty shared store from a validated configuration.
    pub fn from_config(config: &StorageConfig) -> StoreResult<Self> {
        FileStorage::from_config(config).map(Self::from_storage)
    }

    /// Take ownership of an existing store.
    pub fn from_storage(storage: FileStorage) -> Self {
        Self {
            inner: RwLock::new(storage),
        }
    }

    /// Unwrap back into a single-owner store.
    pub fn into_inner(self) -> StoreResult<FileStorage> {
        self.inner.into_inner().map_err(|_| StoreError::LockPoisoned)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, FileStorage>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_lock(&self) -> StoreResult<RwLockWriteGuard<'_, FileStorage>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// See [`FileStorage::write`].
    pub fn write(&self, entry: impl Into<Option<Entry>>) -> StoreResult<bool> {
        self.write_lock()?.write(entry)
    }

    /// See [`FileStorage::is_exists`].
    pub fn is_exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.read()?.is_exists(name))
    }

    /// See [`FileStorage::delete`].
    pub fn delete(&self, name: &str) -> StoreResult<bool> {
        Ok(self.write_lock()?.delete(name))
    }

    /// See [`FileStorage::get_file`].
    pub fn get_file(&self, name: &str) -> StoreResult<Entry> {
        self.read()?.get_file(name).cloned()
    }

    /// See [`FileStorage::get_files`].
    pub fn get_files(&self) -> StoreResult<Vec<Entry>> {
        Ok(self.read()?.get_files().into_iter().cloned().collect())
    }

    /// See [`FileStorage::delete_all_files`].
    pub fn delete_all_files(&self) -> StoreResult<bool> {
        Ok(self.write_lock()?.delete_all_files())
    }

    /// See [`FileStorage::stats`].
    pub fn stats(&self) -> StoreResult<StorageStats> {
        Ok(self.read()?.stats())
    }
}

impl std::fmt::Debug for SharedFileStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_read() {
            Ok(storage) => f
                .debug_struct("SharedFileStorage")
                .field("file_count", &storage.len())
                .field("used", &storage.used())
                .field("capacity", &storage.capacity())
                .finish(),
            Err(_) => f.debug_struct("SharedFileStorage").finish_non_exhaustive(),
        }
    }
}
