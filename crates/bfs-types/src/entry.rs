use std::fmt;

use serde::Serialize;

use crate::error::EntryError;

/// A single stored file.
///
/// An `Entry` pairs a non-empty name with a size computed once from the
/// content it was built from. The content itself is not retained.
///
/// The size is half the content's length in UTF-16 code units, rounded
/// down, so a character outside the Basic Multilingual Plane counts twice. Two
/// entries are equal when both name and size match.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    name: String,
    size: u64,
}

impl Entry {
    /// Build an entry from a name and its content.
    ///
    /// Fails with [`EntryError::InvalidArgument`] if `name` is empty.
    pub fn new(name: impl Into<String>, content: &str) -> Result<Self, EntryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EntryError::invalid("file name must not be empty"));
        }
        Ok(Self {
            name,
            size: Self::size_of(content),
        })
    }

    /// Build an entry where the content may be missing.
    ///
    /// Absent content is rejected the same way an empty name is.
    pub fn from_parts(name: impl Into<String>, content: Option<&str>) -> Result<Self, EntryError> {
        match content {
            Some(content) => Self::new(name, content),
            None => Err(EntryError::invalid("file content must be present")),
        }
    }

    /// The size an entry built from `content` would have.
    pub fn size_of(content: &str) -> u64 {
        content.encode_utf16().count() as u64 / 2
    }

    /// The file name.
    pub fn filename(&self) -> &str {
        &self.name
    }

    /// The size fixed at construction.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry({:?}, size={})", self.name, self.size)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.size)
    }
}
