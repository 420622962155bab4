//! Retrieval orchestration: cache, then provider, then fallback.
//!
//! Wires the stats provider to the local cache and the normalizing
//! constructors. The evaluation core never sees any of this; it receives
//! finished [`StatProfile`]s and [`ShotEvent`] batches.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::models::{fallback_profile, ShotEvent, StatProfile};
use crate::provider::{ProviderError, StatProvider};
use crate::storage::{CacheStore, StorageConfig};

/// Cache-first lookup of normalized player profiles.
pub struct ProfileService {
    provider: Arc<dyn StatProvider>,
    cache: CacheStore<StatProfile>,
    season: String,
}

impl ProfileService {
    pub fn new(
        provider: Arc<dyn StatProvider>,
        storage: &StorageConfig,
        ttl: Duration,
        season: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            cache: CacheStore::new(storage.profiles_dir(), ttl),
            season: season.into(),
        }
    }

    /// The profile for a named player.
    ///
    /// Order: fresh cache entry, then provider fetch (cached on success),
    /// then the fixed fallback catalog when the provider fails for a player
    /// it carries. Unknown players surface the provider error.
    pub async fn profile_for(&self, name: &str) -> Result<StatProfile, ProviderError> {
        if let Some(profile) = self.cache.get(name) {
            return Ok(profile);
        }

        match self.fetch_profile(name).await {
            Ok(profile) => {
                if let Err(e) = self.cache.put(name, &profile) {
                    warn!("Could not cache profile for {name}: {e}");
                }
                Ok(profile)
            }
            Err(ProviderError::PlayerNotFound(name)) => {
                Err(ProviderError::PlayerNotFound(name))
            }
            Err(e) => match fallback_profile(name) {
                Some(profile) => {
                    warn!("Provider unavailable for {name} ({e}), using fallback catalog");
                    Ok(profile)
                }
                None => Err(e),
            },
        }
    }

    async fn fetch_profile(&self, name: &str) -> Result<StatProfile, ProviderError> {
        let player = self
            .provider
            .find_player(name)
            .await?
            .ok_or_else(|| ProviderError::PlayerNotFound(name.to_string()))?;

        let raw = self.provider.season_totals(player.id, &self.season).await?;
        info!(
            "Fetched season {} totals for {} ({} games)",
            raw.season_id, player.full_name, raw.games_played
        );
        Ok(StatProfile::from_season_totals(&raw))
    }

    /// Entries currently on disk.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached profile.
    pub fn clear_cache(&self) -> Result<usize, crate::storage::StorageError> {
        self.cache.clear()
    }
}

/// Cache-first lookup of shot-event batches, keyed by player and season.
pub struct ShotService {
    provider: Arc<dyn StatProvider>,
    cache: CacheStore<Vec<ShotEvent>>,
    season: String,
}

impl ShotService {
    pub fn new(
        provider: Arc<dyn StatProvider>,
        storage: &StorageConfig,
        ttl: Duration,
        season: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            cache: CacheStore::new(storage.shots_dir(), ttl),
            season: season.into(),
        }
    }

    /// All shot events for a named player's season.
    pub async fn shots_for(&self, name: &str) -> Result<Vec<ShotEvent>, ProviderError> {
        let key = format!("{name}:{}", self.season);
        if let Some(events) = self.cache.get(&key) {
            return Ok(events);
        }

        let player = self
            .provider
            .find_player(name)
            .await?
            .ok_or_else(|| ProviderError::PlayerNotFound(name.to_string()))?;

        let raw = self.provider.shot_chart(player.id, &self.season).await?;
        let events: Vec<ShotEvent> = raw.iter().map(ShotEvent::from).collect();
        info!("Fetched {} shots for {}", events.len(), player.full_name);

        if let Err(e) = self.cache.put(&key, &events) {
            warn!("Could not cache shots for {name}: {e}");
        }
        Ok(events)
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) -> Result<usize, crate::storage::StorageError> {
        self.cache.clear()
    }
}
