//! Keyed JSON cache with a freshness window.

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::StorageError;

/// Envelope stored per entry.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope<T> {
    key: String,
    fetched_at: DateTime<Utc>,
    value: T,
}

/// Typed key-value cache backed by one JSON file per key.
///
/// Keys are case-insensitive and hashed into filenames, so player names
/// with any punctuation or accents are safe. Reads return `None` for
/// missing, expired, or unreadable entries; the cache never fails a lookup
/// over a corrupt file.
pub struct CacheStore<T> {
    dir: PathBuf,
    ttl: Duration,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> CacheStore<T> {
    pub fn new(dir: PathBuf, ttl: Duration) -> Self {
        Self {
            dir,
            ttl,
            _marker: PhantomData,
        }
    }

    fn key_hash(key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(key.trim().to_lowercase().as_bytes());
        let digest = hasher.finalize();
        hex::encode(&digest[..8])
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::key_hash(key)))
    }

    /// Read a fresh entry, or `None` when absent, stale, or unreadable.
    pub fn get(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        if !path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Unreadable cache entry {:?}: {}", path, e);
                return None;
            }
        };

        let envelope: CacheEnvelope<T> = match serde_json::from_str(&contents) {
            Ok(env) => env,
            Err(e) => {
                warn!("Corrupt cache entry {:?}: {}", path, e);
                return None;
            }
        };

        let age = Utc::now().signed_duration_since(envelope.fetched_at);
        if age.num_seconds() > self.ttl.as_secs() as i64 {
            debug!("Cache expired for {key}");
            return None;
        }

        debug!("Cache hit for {key}");
        Some(envelope.value)
    }

    /// Write an entry, replacing any existing one for the key.
    pub fn put(&self, key: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let envelope = CacheEnvelope {
            key: key.trim().to_lowercase(),
            fetched_at: Utc::now(),
            value,
        };

        let json = serde_json::to_string_pretty(&envelope)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    /// Number of entries on disk, fresh or not.
    pub fn len(&self) -> usize {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return 0;
        };
        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry.
    pub fn clear(&self) -> Result<usize, StorageError> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Ok(0);
        };

        let mut removed = 0;
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
