//! Whole-athlete shooting insights.
//!
//! A flat reduction over one player-season's shot events: overall
//! efficiency, shot-diet splits, and the best-performing zone, plus a
//! qualitative tendency readout.

use serde::{Deserialize, Serialize};

use crate::models::{ShotEvent, ZoneLabel};

use super::zones::{classify_event, ZoneReport};

/// Attempt floor for a zone to qualify as "best".
pub const BEST_ZONE_MIN_ATTEMPTS: u32 = 10;

/// Close-range cutoff in feet.
pub const CLOSE_RANGE_DISTANCE: f64 = 8.0;

/// Tendency thresholds (average distance in feet, frequencies as fractions).
pub const PERIMETER_AVG_DISTANCE: f64 = 18.0;
pub const PAINT_AVG_DISTANCE: f64 = 12.0;
pub const HIGH_CLOSE_FREQUENCY: f64 = 0.40;
pub const LOW_CLOSE_FREQUENCY: f64 = 0.20;
pub const ELITE_THREE_PCT: f64 = 0.37;
pub const GOOD_THREE_PCT: f64 = 0.33;

/// The best-performing zone and its percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestZone {
    pub zone: ZoneLabel,
    pub percentage: f64,
}

/// Flat insight record over one shot-event sequence.
///
/// An empty sequence is a valid "no data" state: counts are zero and
/// percentage fields are zero, never NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotInsights {
    pub total_shots: u32,
    pub overall_fg_pct: f64,
    pub avg_shot_distance: f64,
    pub three_point_attempts: u32,
    pub three_point_pct: f64,
    pub two_point_attempts: u32,
    pub two_point_pct: f64,
    pub close_shot_frequency: f64,
    pub close_shot_pct: f64,
    pub best_zone: Option<BestZone>,
}

fn ratio(numer: u32, denom: u32) -> f64 {
    if denom == 0 {
        0.0
    } else {
        f64::from(numer) / f64::from(denom)
    }
}

impl ShotInsights {
    /// Reduce a shot sequence and its zone report into the insight record.
    ///
    /// A shot counts as a three-point attempt when it classifies into one of
    /// the three-point zones.
    pub fn from_events(events: &[ShotEvent], report: &ZoneReport) -> Self {
        let total_shots = events.len() as u32;
        if total_shots == 0 {
            return Self::default();
        }

        let mut makes = 0u32;
        let mut distance_sum = 0.0;
        let mut threes = 0u32;
        let mut three_makes = 0u32;
        let mut close = 0u32;
        let mut close_makes = 0u32;

        for event in events {
            if event.made {
                makes += 1;
            }
            distance_sum += event.distance;

            if classify_event(event).is_three_point() {
                threes += 1;
                if event.made {
                    three_makes += 1;
                }
            }
            if event.distance <= CLOSE_RANGE_DISTANCE {
                close += 1;
                if event.made {
                    close_makes += 1;
                }
            }
        }

        let twos = total_shots - threes;
        let two_makes = makes - three_makes;

        Self {
            total_shots,
            overall_fg_pct: ratio(makes, total_shots),
            avg_shot_distance: distance_sum / f64::from(total_shots),
            three_point_attempts: threes,
            three_point_pct: ratio(three_makes, threes),
            two_point_attempts: twos,
            two_point_pct: ratio(two_makes, twos),
            close_shot_frequency: ratio(close, total_shots),
            close_shot_pct: ratio(close_makes, close),
            best_zone: report.best_zone(BEST_ZONE_MIN_ATTEMPTS).map(|z| BestZone {
                zone: z.zone,
                percentage: z.percentage,
            }),
        }
    }
}

/// Shot-diet classification by average attempt distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotDiet {
    PerimeterOriented,
    PaintFocused,
    Balanced,
}

/// Close-range attempt frequency flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseRangeBias {
    High,
    Limited,
}

/// Three-point shooting grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreePointGrade {
    Elite,
    Good,
}

/// Qualitative shooting tendencies derived from the insight record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShootingTendencies {
    pub shot_diet: Option<ShotDiet>,
    pub close_range: Option<CloseRangeBias>,
    pub three_point: Option<ThreePointGrade>,
}

impl ShootingTendencies {
    pub fn from_insights(insights: &ShotInsights) -> Self {
        if insights.total_shots == 0 {
            return Self::default();
        }

        let shot_diet = Some(if insights.avg_shot_distance > PERIMETER_AVG_DISTANCE {
            ShotDiet::PerimeterOriented
        } else if insights.avg_shot_distance < PAINT_AVG_DISTANCE {
            ShotDiet::PaintFocused
        } else {
            ShotDiet::Balanced
        });

        let close_range = if insights.close_shot_frequency > HIGH_CLOSE_FREQUENCY {
            Some(CloseRangeBias::High)
        } else if insights.close_shot_frequency < LOW_CLOSE_FREQUENCY {
            Some(CloseRangeBias::Limited)
        } else {
            None
        };

        let three_point = if insights.three_point_pct > ELITE_THREE_PCT {
            Some(ThreePointGrade::Elite)
        } else if insights.three_point_pct > GOOD_THREE_PCT {
            Some(ThreePointGrade::Good)
        } else {
            None
        };

        Self {
            shot_diet,
            close_range,
            three_point,
        }
    }
}
