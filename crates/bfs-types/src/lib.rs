//! Foundation types for the bounded file store (BFS).
//!
//! This crate provides the value types handed to a store. Every other BFS
//! crate depends on `bfs-types`.
//!
//! # Key Types
//!
//! - [`Entry`] — Immutable named file with a size fixed at construction
//! - [`EntryError`] — Rejected construction input

pub mod entry;
pub mod error;

pub use entry::Entry;
pub use error::EntryError;
