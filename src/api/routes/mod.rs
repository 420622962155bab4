pub mod archetypes;
pub mod compare;
pub mod meta;
pub mod players;
pub mod zones;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::config::AppConfig;
    use crate::models::RawShotRecord;
    use crate::provider::{StatProvider, StaticProvider};
    use crate::retrieve::{ProfileService, ShotService};
    use crate::storage::StorageConfig;

    /// Shot rows for the test fixture: a paint-heavy diet with a few
    /// corner threes, attached to Stephen Curry (id 2).
    pub fn fixture_shots() -> Vec<RawShotRecord> {
        let mut rows = Vec::new();
        for i in 0..12 {
            rows.push(RawShotRecord {
                loc_x: 0.0,
                loc_y: 5.0,
                shot_distance: 4.0,
                shot_made: i % 2 == 0,
            });
        }
        for i in 0..4 {
            rows.push(RawShotRecord {
                loc_x: -230.0,
                loc_y: 50.0,
                shot_distance: 23.0,
                shot_made: i < 2,
            });
        }
        rows
    }

    /// Router over a static provider and a tempdir cache.
    pub fn test_app() -> (axum::Router, TempDir) {
        let tmp = TempDir::new().unwrap();
        let mut provider = StaticProvider::with_fallback_catalog();
        provider.set_shots(2, fixture_shots());

        let provider: Arc<dyn StatProvider> = Arc::new(provider);
        let config = Arc::new(AppConfig::default());
        let storage = StorageConfig::new(tmp.path().to_path_buf());
        let ttl = Duration::from_secs(21600);

        let state = AppState {
            config: config.clone(),
            provider: provider.clone(),
            profiles: Arc::new(ProfileService::new(
                provider.clone(),
                &storage,
                ttl,
                "2023-24",
            )),
            shots: Arc::new(ShotService::new(provider, &storage, ttl, "2023-24")),
        };

        (build_router(state), tmp)
    }

    pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }
}
