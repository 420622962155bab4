use axum::Json;
use serde::Serialize;

use crate::models::{Archetype, StatProfile};

#[derive(Debug, Serialize)]
pub struct ArchetypeEntry {
    pub name: &'static str,
    pub profile: StatProfile,
}

#[derive(Debug, Serialize)]
pub struct ArchetypeListResponse {
    pub archetypes: Vec<ArchetypeEntry>,
}

pub async fn list_archetypes() -> Json<ArchetypeListResponse> {
    let archetypes = Archetype::ALL
        .into_iter()
        .map(|a| ArchetypeEntry {
            name: a.name(),
            profile: a.profile(),
        })
        .collect();

    Json(ArchetypeListResponse { archetypes })
}
