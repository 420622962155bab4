//! Stats provider abstraction.
//!
//! The evaluator reads three things from a provider: the player directory,
//! per-season totals, and raw shot-chart rows. [`HttpStatsProvider`] speaks
//! the provider's tabular JSON over HTTP; [`StaticProvider`] serves a fixed
//! in-memory catalog for offline use and tests.

mod catalog;
mod http;

pub use catalog::StaticProvider;
pub use http::HttpStatsProvider;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{PlayerInfo, RawSeasonTotals, RawShotRecord};

/// Errors that can occur talking to a stats provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown player: {0}")]
    PlayerNotFound(String),

    #[error("No seasons recorded for player {0}")]
    NoSeasons(i64),
}

/// Read-only source of player statistics.
#[async_trait]
pub trait StatProvider: Send + Sync {
    /// List active players, deduplicated by name and sorted.
    async fn list_players(&self) -> Result<Vec<PlayerInfo>, ProviderError>;

    /// Season totals for one player, falling back to the most recent season
    /// when the requested one is absent.
    async fn season_totals(
        &self,
        player_id: i64,
        season: &str,
    ) -> Result<RawSeasonTotals, ProviderError>;

    /// All shot-chart rows for one player-season.
    async fn shot_chart(
        &self,
        player_id: i64,
        season: &str,
    ) -> Result<Vec<RawShotRecord>, ProviderError>;

    /// Find a player by exact name, case-insensitive.
    async fn find_player(&self, name: &str) -> Result<Option<PlayerInfo>, ProviderError> {
        let players = self.list_players().await?;
        Ok(players
            .into_iter()
            .find(|p| p.full_name.eq_ignore_ascii_case(name.trim())))
    }
}

/// Sort by name and drop duplicate names, keeping the first occurrence.
pub(crate) fn dedup_players(mut players: Vec<PlayerInfo>) -> Vec<PlayerInfo> {
    players.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    players.dedup_by(|a, b| a.full_name.eq_ignore_ascii_case(&b.full_name));
    players
}
