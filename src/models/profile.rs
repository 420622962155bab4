//! Player stat profiles.
//!
//! A [`StatProfile`] is the normalized season record every comparison runs
//! on: three per-game rates plus eight shooting percentages, all derived
//! once from provider data (or supplied as archetype literals) and immutable
//! afterwards.

use serde::{Deserialize, Serialize};

/// Estimation factors for situational percentages the season endpoint does
/// not break out. Applied to the headline FG%/3P% and capped at 1.0.
pub const PAINT_FG_FACTOR: f64 = 1.15;
pub const MIDRANGE_FG_FACTOR: f64 = 0.85;
pub const CORNER_THREE_FACTOR: f64 = 1.10;
pub const CLUTCH_FG_FACTOR: f64 = 0.90;
pub const FAST_BREAK_FG_FACTOR: f64 = 1.20;

/// Directory entry for one player as listed by the stats provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: i64,
    pub full_name: String,
    pub is_active: bool,
}

/// Raw season row from the provider's career-totals endpoint.
///
/// Counting stats are season totals; percentages are fractions as reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSeasonTotals {
    pub season_id: String,
    pub games_played: u32,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
    pub free_throw_pct: f64,
    pub minutes: f64,
}

/// Normalized season statistics for one player or archetype.
///
/// Percentages are fractions in `[0, 1]`; per-game rates are non-negative.
/// Construction clamps every field into range, so a `StatProfile` in hand is
/// always complete and valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatProfile {
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
    pub free_throw_pct: f64,
    pub paint_fg_pct: f64,
    pub midrange_fg_pct: f64,
    pub corner_three_pct: f64,
    pub clutch_fg_pct: f64,
    pub fast_break_fg_pct: f64,
}

impl StatProfile {
    /// Build a profile from explicit values, clamping into valid ranges.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        points_per_game: f64,
        rebounds_per_game: f64,
        assists_per_game: f64,
        field_goal_pct: f64,
        three_point_pct: f64,
        free_throw_pct: f64,
        paint_fg_pct: f64,
        midrange_fg_pct: f64,
        corner_three_pct: f64,
        clutch_fg_pct: f64,
        fast_break_fg_pct: f64,
    ) -> Self {
        Self {
            points_per_game: points_per_game.max(0.0),
            rebounds_per_game: rebounds_per_game.max(0.0),
            assists_per_game: assists_per_game.max(0.0),
            field_goal_pct: field_goal_pct.clamp(0.0, 1.0),
            three_point_pct: three_point_pct.clamp(0.0, 1.0),
            free_throw_pct: free_throw_pct.clamp(0.0, 1.0),
            paint_fg_pct: paint_fg_pct.clamp(0.0, 1.0),
            midrange_fg_pct: midrange_fg_pct.clamp(0.0, 1.0),
            corner_three_pct: corner_three_pct.clamp(0.0, 1.0),
            clutch_fg_pct: clutch_fg_pct.clamp(0.0, 1.0),
            fast_break_fg_pct: fast_break_fg_pct.clamp(0.0, 1.0),
        }
    }

    /// Normalize a raw season row into a profile.
    ///
    /// Per-game rates divide by `max(games_played, 1)`. Situational
    /// percentages are estimated from the headline percentages with the
    /// fixed factors above.
    pub fn from_season_totals(raw: &RawSeasonTotals) -> Self {
        let games = f64::from(raw.games_played.max(1));
        let fg = raw.field_goal_pct;
        let three = raw.three_point_pct;

        Self::new(
            raw.points / games,
            raw.rebounds / games,
            raw.assists / games,
            fg,
            three,
            raw.free_throw_pct,
            fg * PAINT_FG_FACTOR,
            fg * MIDRANGE_FG_FACTOR,
            three * CORNER_THREE_FACTOR,
            fg * CLUTCH_FG_FACTOR,
            fg * FAST_BREAK_FG_FACTOR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(games: u32, points: f64, fg: f64) -> RawSeasonTotals {
        RawSeasonTotals {
            season_id: "2023-24".to_string(),
            games_played: games,
            points,
            rebounds: 400.0,
            assists: 350.0,
            field_goal_pct: fg,
            three_point_pct: 0.38,
            free_throw_pct: 0.85,
            minutes: 2400.0,
        }
    }

    #[test]
    fn test_from_season_totals_per_game_rates() {
        let profile = StatProfile::from_season_totals(&raw(70, 1750.0, 0.48));

        assert!((profile.points_per_game - 25.0).abs() < 1e-9);
        assert!((profile.rebounds_per_game - 400.0 / 70.0).abs() < 1e-9);
        assert!((profile.assists_per_game - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_season_totals_zero_games_floors_at_one() {
        let profile = StatProfile::from_season_totals(&raw(0, 30.0, 0.5));

        // Divisor floors at 1, never divides by zero.
        assert!((profile.points_per_game - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimated_percentages_capped() {
        // 0.90 FG * 1.20 fast-break factor would exceed 1.0 uncapped.
        let profile = StatProfile::from_season_totals(&raw(60, 1200.0, 0.90));

        assert!((profile.paint_fg_pct - 1.0).abs() < 1e-9);
        assert!((profile.fast_break_fg_pct - 1.0).abs() < 1e-9);
        assert!((profile.midrange_fg_pct - 0.90 * MIDRANGE_FG_FACTOR).abs() < 1e-9);
    }

    #[test]
    fn test_new_clamps_out_of_range_input() {
        let profile = StatProfile::new(
            -3.0, 5.0, 4.0, 1.4, -0.2, 0.8, 0.6, 0.45, 0.4, 0.46, 0.65,
        );

        assert_eq!(profile.points_per_game, 0.0);
        assert_eq!(profile.field_goal_pct, 1.0);
        assert_eq!(profile.three_point_pct, 0.0);
    }

    #[test]
    fn test_profile_serialization_round_trip() {
        let profile = StatProfile::from_season_totals(&raw(72, 2000.0, 0.51));
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: StatProfile = serde_json::from_str(&json).unwrap();

        assert_eq!(profile, parsed);
    }
}
