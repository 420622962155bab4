use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{summarize, ShootingTendencies, ShotInsights, ZoneReport};

#[derive(Debug, Serialize)]
pub struct ZonesResponse {
    pub name: String,
    pub season: String,
    pub report: ZoneReport,
    pub insights: ShotInsights,
    pub tendencies: ShootingTendencies,
}

/// Zone-by-zone efficiency report plus whole-season insights.
///
/// A player with no recorded shots gets an empty report with zeroed
/// insights, not an error.
pub async fn player_zones(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ZonesResponse>, ApiError> {
    let events = state.shots.shots_for(&name).await?;

    let report = summarize(&events);
    let insights = ShotInsights::from_events(&events, &report);
    let tendencies = ShootingTendencies::from_insights(&insights);

    Ok(Json(ZonesResponse {
        name,
        season: state.config.provider.season.clone(),
        report,
        insights,
        tendencies,
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::routes::test_support::{get_json, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_player_zone_report() {
        let (app, _tmp) = test_app();
        let (status, json) = get_json(app, "/api/players/Stephen%20Curry/zones").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Stephen Curry");
        assert_eq!(json["season"], "2023-24");

        // Fixture: 12 paint shots (6 made), 4 left-corner threes (2 made).
        let zones = json["report"]["zones"].as_array().unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0]["zone"], "Paint");
        assert_eq!(zones[0]["attempts"], 12);
        assert_eq!(zones[0]["makes"], 6);
        assert_eq!(zones[0]["rating"], "Elite");
        assert_eq!(zones[1]["zone"], "Left Corner 3");
        assert_eq!(zones[1]["attempts"], 4);

        assert_eq!(json["insights"]["total_shots"], 16);
        assert_eq!(json["insights"]["three_point_attempts"], 4);
        assert_eq!(json["insights"]["best_zone"]["zone"], "Paint");
        assert_eq!(json["tendencies"]["shot_diet"], "paint_focused");
    }

    #[tokio::test]
    async fn test_player_without_shots_gets_empty_report() {
        let (app, _tmp) = test_app();
        let (status, json) = get_json(app, "/api/players/LeBron%20James/zones").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["report"]["zones"].as_array().unwrap().is_empty());
        assert_eq!(json["insights"]["total_shots"], 0);
        assert!(json["insights"]["best_zone"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_player_zones_404() {
        let (app, _tmp) = test_app();
        let (status, _) = get_json(app, "/api/players/Nobody%20Athletic/zones").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
