use thiserror::Error;

/// Errors produced while constructing an [`Entry`](crate::Entry).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// Malformed construction input (empty name, absent content).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl EntryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
