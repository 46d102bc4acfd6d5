use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Configuration for a [`FileStorage`](crate::FileStorage).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Maximum aggregate size of all stored entries.
    pub capacity: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { capacity: 5 }
    }
}

impl StorageConfig {
    /// Configuration with the given capacity.
    pub fn with_capacity(capacity: u64) -> Self {
        Self { capacity }
    }

    /// Parse and validate a TOML document such as `capacity = 64`.
    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Reject values a store cannot be built from.
    pub fn validate(&self) -> StoreResult<()> {
        if self.capacity == 0 {
            return Err(StoreError::InvalidConfig(
                "capacity must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = StorageConfig::default();
        assert_eq!(c.capacity, 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn parse_toml() {
        let c = StorageConfig::from_toml_str("capacity = 64").unwrap();
        assert_eq!(c, StorageConfig::with_capacity(64));
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let err = StorageConfig::from_toml_str("capacity = 0").unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }

    #[test]
    fn missing_capacity_is_a_parse_error() {
        let err = StorageConfig::from_toml_str("size = 3").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn negative_capacity_is_a_parse_error() {
        let err = StorageConfig::from_toml_str("capacity = -1").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity = 128").unwrap();
        let c = StorageConfig::load(file.path()).unwrap();
        assert_eq!(c.capacity, 128);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StorageConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let c = StorageConfig::with_capacity(9);
        let text = toml::to_string(&c).unwrap();
        assert_eq!(StorageConfig::from_toml_str(&text).unwrap(), c);
    }
}
