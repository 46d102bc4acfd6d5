use bfs_types::EntryError;

/// Errors from file storage operations.
///
/// Running out of capacity is deliberately absent: `write` reports it as
/// `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `write` was called without an entry.
    #[error("cannot write a null file")]
    NullEntry,

    /// An entry with this name is already stored.
    #[error("file name already exists: {name}")]
    DuplicateName { name: String },

    /// No entry with this name is stored.
    #[error("file not found: {name}")]
    NotFound { name: String },

    /// Entry construction failed.
    #[error(transparent)]
    Entry(#[from] EntryError),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid storage config: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A thread panicked while holding the storage lock.
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
