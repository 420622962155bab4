//! Court zones and efficiency ratings.

use serde::{Deserialize, Serialize};

/// Rating thresholds on zone field-goal percentage.
pub const ELITE_THRESHOLD: f64 = 0.50;
pub const GOOD_THRESHOLD: f64 = 0.40;
pub const AVERAGE_THRESHOLD: f64 = 0.30;

/// Named court regions for shot classification.
///
/// Declaration order is the tie-break order wherever zones compare equal on
/// attempts, so it is part of the reporting contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ZoneLabel {
    #[serde(rename = "Paint")]
    Paint,
    #[serde(rename = "Close Range")]
    CloseRange,
    #[serde(rename = "Left Baseline Mid")]
    LeftBaselineMid,
    #[serde(rename = "Right Baseline Mid")]
    RightBaselineMid,
    #[serde(rename = "Mid-Range Center")]
    MidRangeCenter,
    #[serde(rename = "Left Mid-Range")]
    LeftMidRange,
    #[serde(rename = "Right Mid-Range")]
    RightMidRange,
    #[serde(rename = "Top of Key")]
    TopOfKey,
    #[serde(rename = "Left Corner 3")]
    LeftCorner3,
    #[serde(rename = "Right Corner 3")]
    RightCorner3,
    #[serde(rename = "Left Wing 3")]
    LeftWing3,
    #[serde(rename = "Right Wing 3")]
    RightWing3,
    #[serde(rename = "Top of Arc 3")]
    TopOfArc3,
}

impl ZoneLabel {
    /// Display name as used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            ZoneLabel::Paint => "Paint",
            ZoneLabel::CloseRange => "Close Range",
            ZoneLabel::LeftBaselineMid => "Left Baseline Mid",
            ZoneLabel::RightBaselineMid => "Right Baseline Mid",
            ZoneLabel::MidRangeCenter => "Mid-Range Center",
            ZoneLabel::LeftMidRange => "Left Mid-Range",
            ZoneLabel::RightMidRange => "Right Mid-Range",
            ZoneLabel::TopOfKey => "Top of Key",
            ZoneLabel::LeftCorner3 => "Left Corner 3",
            ZoneLabel::RightCorner3 => "Right Corner 3",
            ZoneLabel::LeftWing3 => "Left Wing 3",
            ZoneLabel::RightWing3 => "Right Wing 3",
            ZoneLabel::TopOfArc3 => "Top of Arc 3",
        }
    }

    /// Whether this zone lies beyond the three-point line.
    pub fn is_three_point(&self) -> bool {
        matches!(
            self,
            ZoneLabel::LeftCorner3
                | ZoneLabel::RightCorner3
                | ZoneLabel::LeftWing3
                | ZoneLabel::RightWing3
                | ZoneLabel::TopOfArc3
        )
    }
}

impl std::fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative rating of a zone's field-goal percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EfficiencyRating {
    Elite,
    Good,
    Average,
    Poor,
}

impl EfficiencyRating {
    /// Rate a field-goal percentage against the fixed thresholds.
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= ELITE_THRESHOLD {
            EfficiencyRating::Elite
        } else if pct >= GOOD_THRESHOLD {
            EfficiencyRating::Good
        } else if pct >= AVERAGE_THRESHOLD {
            EfficiencyRating::Average
        } else {
            EfficiencyRating::Poor
        }
    }
}

impl std::fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EfficiencyRating::Elite => write!(f, "Elite"),
            EfficiencyRating::Good => write!(f, "Good"),
            EfficiencyRating::Average => write!(f, "Average"),
            EfficiencyRating::Poor => write!(f, "Poor"),
        }
    }
}

/// Per-zone shooting summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub zone: ZoneLabel,
    pub attempts: u32,
    pub makes: u32,
    pub percentage: f64,
    pub rating: EfficiencyRating,
}

impl ZoneSummary {
    /// Summarize a zone from its attempt and make counts.
    ///
    /// Callers never construct a summary for a zone with zero attempts; such
    /// zones are simply absent from reports.
    pub fn from_counts(zone: ZoneLabel, attempts: u32, makes: u32) -> Self {
        debug_assert!(attempts > 0 && makes <= attempts);
        let percentage = f64::from(makes) / f64::from(attempts);
        Self {
            zone,
            attempts,
            makes,
            percentage,
            rating: EfficiencyRating::from_percentage(percentage),
        }
    }
}
