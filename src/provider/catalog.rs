//! In-memory provider over a fixed catalog.
//!
//! Serves deterministic season totals for a handful of well-known players.
//! Used as the offline provider mode and as the test double for everything
//! downstream of the provider trait.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{PlayerInfo, RawSeasonTotals, RawShotRecord};

use super::{dedup_players, ProviderError, StatProvider};

/// Fixed-catalog provider. No network, no latency, stable output.
#[derive(Debug, Default)]
pub struct StaticProvider {
    players: Vec<PlayerInfo>,
    totals: HashMap<i64, RawSeasonTotals>,
    shots: HashMap<i64, Vec<RawShotRecord>>,
}

#[allow(clippy::too_many_arguments)]
fn totals(
    season_id: &str,
    games_played: u32,
    points: f64,
    rebounds: f64,
    assists: f64,
    fg: f64,
    three: f64,
    ft: f64,
    minutes: f64,
) -> RawSeasonTotals {
    RawSeasonTotals {
        season_id: season_id.to_string(),
        games_played,
        points,
        rebounds,
        assists,
        field_goal_pct: fg,
        three_point_pct: three,
        free_throw_pct: ft,
        minutes,
    }
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the five fallback stars with plausible season lines.
    pub fn with_fallback_catalog() -> Self {
        let mut provider = Self::new();
        provider.add_player(
            1,
            "LeBron James",
            totals("2023-24", 71, 1796.0, 518.0, 525.0, 0.505, 0.347, 0.731, 2504.0),
        );
        provider.add_player(
            2,
            "Stephen Curry",
            totals("2023-24", 74, 2183.0, 377.0, 466.0, 0.493, 0.427, 0.915, 2427.0),
        );
        provider.add_player(
            3,
            "Luka Dončić",
            totals("2023-24", 70, 1988.0, 637.0, 560.0, 0.453, 0.346, 0.786, 2478.0),
        );
        provider.add_player(
            4,
            "Giannis Antetokounmpo",
            totals("2023-24", 73, 2270.0, 861.0, 416.0, 0.553, 0.294, 0.644, 2567.0),
        );
        provider.add_player(
            5,
            "Kevin Durant",
            totals("2023-24", 75, 2227.0, 502.0, 375.0, 0.525, 0.383, 0.885, 2788.0),
        );
        provider
    }

    /// Register a player with their season totals.
    pub fn add_player(&mut self, id: i64, name: &str, season: RawSeasonTotals) {
        self.players.push(PlayerInfo {
            id,
            full_name: name.to_string(),
            is_active: true,
        });
        self.totals.insert(id, season);
    }

    /// Attach shot-chart rows for a registered player.
    pub fn set_shots(&mut self, id: i64, shots: Vec<RawShotRecord>) {
        self.shots.insert(id, shots);
    }
}

#[async_trait]
impl StatProvider for StaticProvider {
    async fn list_players(&self) -> Result<Vec<PlayerInfo>, ProviderError> {
        Ok(dedup_players(self.players.clone()))
    }

    async fn season_totals(
        &self,
        player_id: i64,
        _season: &str,
    ) -> Result<RawSeasonTotals, ProviderError> {
        self.totals
            .get(&player_id)
            .cloned()
            .ok_or(ProviderError::NoSeasons(player_id))
    }

    async fn shot_chart(
        &self,
        player_id: i64,
        _season: &str,
    ) -> Result<Vec<RawShotRecord>, ProviderError> {
        Ok(self.shots.get(&player_id).cloned().unwrap_or_default())
    }
}
