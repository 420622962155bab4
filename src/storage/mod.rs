//! Local cache storage.
//!
//! Best-effort keyed JSON stores under the data directory:
//! - `cache/profiles`: normalized stat profiles per player
//! - `cache/shots`: shot-event batches per player-season
//!
//! Entries carry a fetch timestamp and expire after the configured
//! freshness window; expired or corrupt entries read as absent.

mod cache;

pub use cache::CacheStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("cache")
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.cache_dir().join("profiles")
    }

    pub fn shots_dir(&self) -> PathBuf {
        self.cache_dir().join("shots")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));

        assert_eq!(config.cache_dir(), PathBuf::from("/data/cache"));
        assert_eq!(config.profiles_dir(), PathBuf::from("/data/cache/profiles"));
        assert_eq!(config.shots_dir(), PathBuf::from("/data/cache/shots"));
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
