use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{PlayerInfo, StatProfile};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub total: usize,
    pub players: Vec<PlayerInfo>,
}

pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PlayerListResponse>, ApiError> {
    let mut players = state.provider.list_players().await?;

    if let Some(term) = params.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let needle = term.to_lowercase();
        players.retain(|p| p.full_name.to_lowercase().contains(&needle));
    }

    Ok(Json(PlayerListResponse {
        total: players.len(),
        players,
    }))
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub name: String,
    pub profile: StatProfile,
}

pub async fn get_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let profile = state.profiles.profile_for(&name).await?;

    Ok(Json(PlayerResponse { name, profile }))
}
