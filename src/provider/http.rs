//! HTTP client for the stats provider.
//!
//! The provider answers every endpoint with the same tabular envelope:
//! `{"resultSets": [{"name", "headers", "rowSet"}]}`. Columns are resolved
//! by header name, never by position, since the provider reorders columns
//! between API revisions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::ProviderConfig;
use crate::models::{PlayerInfo, RawSeasonTotals, RawShotRecord};

use super::{dedup_players, ProviderError, StatProvider};

#[derive(Debug, Deserialize)]
struct TabularResponse {
    #[serde(rename = "resultSets")]
    result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    name: String,
    headers: Vec<String>,
    #[serde(rename = "rowSet")]
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    fn column(&self, header: &str) -> Result<usize, ProviderError> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| {
                ProviderError::MalformedPayload(format!(
                    "result set {} missing column {header}",
                    self.name
                ))
            })
    }
}

impl TabularResponse {
    fn result_set(&self, name: &str) -> Result<&ResultSet, ProviderError> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| ProviderError::MalformedPayload(format!("missing result set {name}")))
    }
}

fn cell_f64(row: &[Value], idx: usize) -> f64 {
    match row.get(idx) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn cell_u32(row: &[Value], idx: usize) -> u32 {
    cell_f64(row, idx) as u32
}

fn cell_i64(row: &[Value], idx: usize) -> i64 {
    cell_f64(row, idx) as i64
}

fn cell_str(row: &[Value], idx: usize) -> String {
    match row.get(idx) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

/// The row for the requested season, or the most recent row when absent.
fn season_row<'a>(set: &'a ResultSet, season_col: usize, season: &str) -> Option<&'a Vec<Value>> {
    set.rows
        .iter()
        .find(|row| cell_str(row, season_col).contains(season))
        .or_else(|| set.rows.last())
}

/// Stats provider over HTTP.
pub struct HttpStatsProvider {
    client: Client,
    base_url: Url,
    season: String,
    request_delay: Duration,
}

impl HttpStatsProvider {
    /// Build a provider from configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("courtscope/0.1.0")),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ProviderError::MalformedPayload(format!("invalid base URL: {e}")))?;

        Ok(Self {
            client,
            base_url,
            season: config.season.clone(),
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProviderError> {
        self.base_url
            .join(path)
            .map_err(|e| ProviderError::MalformedPayload(format!("invalid endpoint {path}: {e}")))
    }

    /// GET one endpoint and decode the tabular envelope.
    async fn get_tabular(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<TabularResponse, ProviderError> {
        let url = self.endpoint(path)?;
        info!("Fetching {} from stats provider", path);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ProviderError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let payload: TabularResponse = response.json().await?;

        // Politeness delay so bursts of lookups don't hammer the provider.
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        Ok(payload)
    }
}

#[async_trait]
impl StatProvider for HttpStatsProvider {
    async fn list_players(&self) -> Result<Vec<PlayerInfo>, ProviderError> {
        let payload = self
            .get_tabular(
                "commonallplayers",
                &[
                    ("LeagueID", "00"),
                    ("Season", &self.season),
                    ("IsOnlyCurrentSeason", "1"),
                ],
            )
            .await?;

        let set = payload.result_set("CommonAllPlayers")?;
        let id_col = set.column("PERSON_ID")?;
        let name_col = set.column("DISPLAY_FIRST_LAST")?;
        let status_col = set.column("ROSTERSTATUS")?;

        let players: Vec<PlayerInfo> = set
            .rows
            .iter()
            .map(|row| PlayerInfo {
                id: cell_i64(row, id_col),
                full_name: cell_str(row, name_col),
                is_active: cell_u32(row, status_col) == 1,
            })
            .filter(|p| p.is_active && !p.full_name.is_empty())
            .collect();

        debug!("Provider listed {} active players", players.len());
        Ok(dedup_players(players))
    }

    async fn season_totals(
        &self,
        player_id: i64,
        season: &str,
    ) -> Result<RawSeasonTotals, ProviderError> {
        let player_id_str = player_id.to_string();
        let payload = self
            .get_tabular(
                "playercareerstats",
                &[("PlayerID", player_id_str.as_str()), ("PerMode", "Totals")],
            )
            .await?;

        let set = payload.result_set("SeasonTotalsRegularSeason")?;
        let season_col = set.column("SEASON_ID")?;
        let gp_col = set.column("GP")?;
        let pts_col = set.column("PTS")?;
        let reb_col = set.column("REB")?;
        let ast_col = set.column("AST")?;
        let fg_col = set.column("FG_PCT")?;
        let fg3_col = set.column("FG3_PCT")?;
        let ft_col = set.column("FT_PCT")?;
        let min_col = set.column("MIN")?;

        let row = season_row(set, season_col, season).ok_or(ProviderError::NoSeasons(player_id))?;

        Ok(RawSeasonTotals {
            season_id: cell_str(row, season_col),
            games_played: cell_u32(row, gp_col),
            points: cell_f64(row, pts_col),
            rebounds: cell_f64(row, reb_col),
            assists: cell_f64(row, ast_col),
            field_goal_pct: cell_f64(row, fg_col),
            three_point_pct: cell_f64(row, fg3_col),
            free_throw_pct: cell_f64(row, ft_col),
            minutes: cell_f64(row, min_col),
        })
    }

    async fn shot_chart(
        &self,
        player_id: i64,
        season: &str,
    ) -> Result<Vec<RawShotRecord>, ProviderError> {
        let player_id_str = player_id.to_string();
        let payload = self
            .get_tabular(
                "shotchartdetail",
                &[
                    ("PlayerID", player_id_str.as_str()),
                    ("TeamID", "0"),
                    ("Season", season),
                    ("SeasonType", "Regular Season"),
                    ("ContextMeasure", "FGA"),
                ],
            )
            .await?;

        let set = payload.result_set("Shot_Chart_Detail")?;
        let x_col = set.column("LOC_X")?;
        let y_col = set.column("LOC_Y")?;
        let dist_col = set.column("SHOT_DISTANCE")?;
        let made_col = set.column("SHOT_MADE_FLAG")?;

        let shots = set
            .rows
            .iter()
            .map(|row| RawShotRecord {
                loc_x: cell_f64(row, x_col),
                loc_y: cell_f64(row, y_col),
                shot_distance: cell_f64(row, dist_col),
                shot_made: cell_u32(row, made_col) == 1,
            })
            .collect();

        Ok(shots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabular(name: &str, headers: &[&str], rows: Vec<Vec<Value>>) -> TabularResponse {
        TabularResponse {
            result_sets: vec![ResultSet {
                name: name.to_string(),
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows,
            }],
        }
    }

    #[test]
    fn test_result_set_lookup() {
        let payload = tabular("SeasonTotalsRegularSeason", &["GP"], vec![]);

        assert!(payload.result_set("SeasonTotalsRegularSeason").is_ok());
        assert!(matches!(
            payload.result_set("Shot_Chart_Detail"),
            Err(ProviderError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_column_resolved_by_name_not_position() {
        let payload = tabular("T", &["PTS", "GP", "REB"], vec![]);
        let set = payload.result_set("T").unwrap();

        assert_eq!(set.column("GP").unwrap(), 1);
        assert_eq!(set.column("REB").unwrap(), 2);
        assert!(matches!(
            set.column("AST"),
            Err(ProviderError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_cell_decoding_handles_mixed_values() {
        let row = vec![
            Value::from(25.5),
            Value::from("12"),
            Value::Null,
            Value::from("Jalen Example"),
        ];

        assert_eq!(cell_f64(&row, 0), 25.5);
        assert_eq!(cell_f64(&row, 1), 12.0);
        assert_eq!(cell_f64(&row, 2), 0.0);
        assert_eq!(cell_u32(&row, 1), 12);
        assert_eq!(cell_str(&row, 3), "Jalen Example");
        // Out-of-range index decodes to the zero value, not a panic.
        assert_eq!(cell_f64(&row, 9), 0.0);
    }

    #[test]
    fn test_season_row_prefers_requested_season() {
        let payload = tabular(
            "SeasonTotalsRegularSeason",
            &["SEASON_ID", "GP"],
            vec![
                vec![Value::from("2021-22"), Value::from(68)],
                vec![Value::from("2022-23"), Value::from(70)],
                vec![Value::from("2023-24"), Value::from(74)],
            ],
        );
        let set = payload.result_set("SeasonTotalsRegularSeason").unwrap();

        let row = season_row(set, 0, "2022-23").unwrap();
        assert_eq!(cell_u32(row, 1), 70);
    }

    #[test]
    fn test_season_row_falls_back_to_most_recent() {
        let payload = tabular(
            "SeasonTotalsRegularSeason",
            &["SEASON_ID", "GP"],
            vec![
                vec![Value::from("2021-22"), Value::from(68)],
                vec![Value::from("2022-23"), Value::from(70)],
            ],
        );
        let set = payload.result_set("SeasonTotalsRegularSeason").unwrap();

        let row = season_row(set, 0, "2029-30").unwrap();
        assert_eq!(cell_u32(row, 1), 70);

        let empty = tabular("SeasonTotalsRegularSeason", &["SEASON_ID", "GP"], vec![]);
        let set = empty.result_set("SeasonTotalsRegularSeason").unwrap();
        assert!(season_row(set, 0, "2023-24").is_none());
    }

    #[test]
    fn test_payload_deserialization() {
        let json = r#"{
            "resultSets": [{
                "name": "Shot_Chart_Detail",
                "headers": ["LOC_X", "LOC_Y", "SHOT_DISTANCE", "SHOT_MADE_FLAG"],
                "rowSet": [[-230, 50, 23, 1], [0, 100, 5, 0]]
            }]
        }"#;

        let payload: TabularResponse = serde_json::from_str(json).unwrap();
        let set = payload.result_set("Shot_Chart_Detail").unwrap();

        assert_eq!(set.rows.len(), 2);
        assert_eq!(cell_f64(&set.rows[0], 0), -230.0);
        assert_eq!(cell_u32(&set.rows[0], 3), 1);
    }
}
