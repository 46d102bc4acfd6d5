//! Capacity-bounded in-memory file storage.
//!
//! A [`FileStorage`] holds named [`Entry`] values and enforces a fixed budget
//! on the sum of their sizes. Names are unique; writing a name twice is an
//! error, not an overwrite.
//!
//! # Storage Types
//!
//! - [`FileStorage`] -- single-owner store, mutated through `&mut self`
//! - [`SharedFileStorage`] -- `RwLock`-guarded store for multi-threaded callers
//!
//! # Design Rules
//!
//! 1. The aggregate size never exceeds the capacity.
//! 2. No two entries share a name.
//! 3. Running out of capacity is a normal outcome: `write` returns `Ok(false)`.
//! 4. Caller errors (missing entry, duplicate name, unknown name on read) are
//!    returned immediately; the store never retries.
//! 5. The library emits `tracing` events but never installs a subscriber;
//!    see [`init_tracing`] for drivers that want one.

pub mod config;
pub mod error;
pub mod shared;
pub mod storage;

// Re-export primary types at crate root for ergonomic imports.
pub use bfs_types::{Entry, EntryError};
pub use config::StorageConfig;
pub use error::{StoreError, StoreResult};
pub use shared::SharedFileStorage;
pub use storage::{FileStorage, StorageStats};

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        let mut storage = FileStorage::new(1);
        assert!(storage.write(Entry::new("a", "xy").unwrap()).unwrap());
    }
}
