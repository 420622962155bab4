use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub season: String,
    pub cached_profiles: usize,
    pub cached_shot_batches: usize,
}

pub async fn meta(State(state): State<AppState>) -> Json<MetaResponse> {
    Json(MetaResponse {
        service: "courtscope",
        version: env!("CARGO_PKG_VERSION"),
        season: state.config.provider.season.clone(),
        cached_profiles: state.profiles.cached_entries(),
        cached_shot_batches: state.shots.cached_entries(),
    })
}

#[cfg(test)]
mod tests {
    use crate::api::routes::test_support::{get_json, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_meta_reports_service_info() {
        let (app, _tmp) = test_app();
        let (status, json) = get_json(app, "/api/meta").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["service"], "courtscope");
        assert_eq!(json["season"], "2023-24");
        assert_eq!(json["cached_profiles"], 0);
    }
}
