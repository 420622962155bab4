use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::Comparison;
use crate::models::Archetype;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub subject: String,
    pub target: Option<String>,
    pub archetype: Option<String>,
}

/// Compare a subject player against another player or an archetype.
///
/// Exactly one of `target` and `archetype` must be supplied.
pub async fn compare(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<Comparison>, ApiError> {
    let subject_profile = state.profiles.profile_for(&params.subject).await?;

    let comparison = match (params.target.as_deref(), params.archetype.as_deref()) {
        (Some(target), None) => {
            let target_profile = state.profiles.profile_for(target).await?;
            Comparison::between(&params.subject, target, &subject_profile, &target_profile)
        }
        (None, Some(name)) => {
            let archetype = Archetype::from_name(name)
                .ok_or_else(|| ApiError::NotFound(format!("archetype {name}")))?;
            Comparison::between(
                &params.subject,
                format!("{archetype} Archetype"),
                &subject_profile,
                &archetype.profile(),
            )
        }
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "supply either target or archetype, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(ApiError::BadRequest(
                "supply a target player or an archetype".to_string(),
            ))
        }
    };

    Ok(Json(comparison))
}

#[cfg(test)]
mod tests {
    use crate::api::routes::test_support::{get_json, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_compare_two_players() {
        let (app, _tmp) = test_app();
        let (status, json) = get_json(
            app,
            "/api/compare?subject=Stephen%20Curry&target=Kevin%20Durant",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let similarity = json["similarity"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&similarity));
        assert_eq!(json["subject_name"], "Stephen Curry");
        assert_eq!(json["target_name"], "Kevin Durant");
        assert!(json["strengths"].is_array());
        assert!(json["weaknesses"].is_array());
    }

    #[tokio::test]
    async fn test_compare_self_is_100() {
        let (app, _tmp) = test_app();
        let (status, json) = get_json(
            app,
            "/api/compare?subject=Stephen%20Curry&target=Stephen%20Curry",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["similarity"].as_f64().unwrap(), 100.0);
    }

    #[tokio::test]
    async fn test_compare_against_archetype() {
        let (app, _tmp) = test_app();
        let (status, json) = get_json(
            app,
            "/api/compare?subject=Stephen%20Curry&archetype=Elite%20Scorer",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["target_name"], "Elite Scorer Archetype");
    }

    #[tokio::test]
    async fn test_compare_unknown_archetype_404() {
        let (app, _tmp) = test_app();
        let (status, json) = get_json(
            app,
            "/api/compare?subject=Stephen%20Curry&archetype=Sixth%20Man",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_compare_requires_exactly_one_target() {
        let (app, _tmp) = test_app();
        let (status, _) = get_json(app, "/api/compare?subject=Stephen%20Curry").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (app, _tmp) = test_app();
        let (status, _) = get_json(
            app,
            "/api/compare?subject=Stephen%20Curry&target=Kevin%20Durant&archetype=Playmaker",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
