//! Similarity scoring between two stat profiles.
//!
//! Produces a 0-100 score from a fixed weighting over eleven stats.
//! Counting stats (points, rebounds, assists) use a relative difference
//! normalized by the target's own value; percentage stats use the absolute
//! difference, which is already bounded in `[0, 1]`.

use serde::{Deserialize, Serialize};

use crate::models::StatProfile;

/// Scale factor mapping the weighted total difference onto the 0-100 range.
/// Part of the scoring contract, not a tunable.
pub const SIMILARITY_SCALE: f64 = 200.0;

/// Floor on the relative-difference denominator for counting stats.
pub const RELATIVE_DIFF_FLOOR: f64 = 1.0;

/// Weighting policy over the eleven profile stats. Weights must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
    pub free_throw_pct: f64,
    pub paint_fg_pct: f64,
    pub midrange_fg_pct: f64,
    pub corner_three_pct: f64,
    pub clutch_fg_pct: f64,
    pub fast_break_fg_pct: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            points: 0.20,
            rebounds: 0.15,
            assists: 0.15,
            field_goal_pct: 0.15,
            three_point_pct: 0.10,
            free_throw_pct: 0.05,
            paint_fg_pct: 0.05,
            midrange_fg_pct: 0.05,
            corner_three_pct: 0.05,
            clutch_fg_pct: 0.03,
            fast_break_fg_pct: 0.02,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.points
            + self.rebounds
            + self.assists
            + self.field_goal_pct
            + self.three_point_pct
            + self.free_throw_pct
            + self.paint_fg_pct
            + self.midrange_fg_pct
            + self.corner_three_pct
            + self.clutch_fg_pct
            + self.fast_break_fg_pct
    }

    /// A weight table is valid when it sums to 1 within floating tolerance.
    pub fn is_valid(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-9
    }
}

/// Relative difference for counting stats, normalized by the target value
/// with a floor of 1 on the denominator.
fn relative_diff(subject: f64, target: f64) -> f64 {
    (subject - target).abs() / target.max(RELATIVE_DIFF_FLOOR)
}

/// Compare two profiles under the default weighting. Higher is more similar.
///
/// Not symmetric: counting-stat differences are normalized by the *target*,
/// so swapping arguments changes the result whenever those stats differ.
pub fn compute_similarity(subject: &StatProfile, target: &StatProfile) -> f64 {
    compute_similarity_weighted(&ScoringWeights::default(), subject, target)
}

/// Compare two profiles under an explicit weighting policy.
pub fn compute_similarity_weighted(
    weights: &ScoringWeights,
    subject: &StatProfile,
    target: &StatProfile,
) -> f64 {
    let mut total_diff = 0.0;

    total_diff += weights.points * relative_diff(subject.points_per_game, target.points_per_game);
    total_diff +=
        weights.rebounds * relative_diff(subject.rebounds_per_game, target.rebounds_per_game);
    total_diff +=
        weights.assists * relative_diff(subject.assists_per_game, target.assists_per_game);

    total_diff += weights.field_goal_pct * (subject.field_goal_pct - target.field_goal_pct).abs();
    total_diff +=
        weights.three_point_pct * (subject.three_point_pct - target.three_point_pct).abs();
    total_diff += weights.free_throw_pct * (subject.free_throw_pct - target.free_throw_pct).abs();
    total_diff += weights.paint_fg_pct * (subject.paint_fg_pct - target.paint_fg_pct).abs();
    total_diff += weights.midrange_fg_pct * (subject.midrange_fg_pct - target.midrange_fg_pct).abs();
    total_diff +=
        weights.corner_three_pct * (subject.corner_three_pct - target.corner_three_pct).abs();
    total_diff += weights.clutch_fg_pct * (subject.clutch_fg_pct - target.clutch_fg_pct).abs();
    total_diff +=
        weights.fast_break_fg_pct * (subject.fast_break_fg_pct - target.fast_break_fg_pct).abs();

    let similarity = (100.0 - total_diff * SIMILARITY_SCALE).max(0.0);
    (similarity * 10.0).round() / 10.0
}

/// One headline stat's edge relative to the target, as a signed percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDelta {
    pub stat: String,
    pub subject: f64,
    pub target: f64,
    /// `(subject - target) / target`, as a percentage.
    pub delta_pct: f64,
}

/// Full comparison outcome: score plus per-stat strengths and weaknesses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub subject_name: String,
    pub target_name: String,
    pub similarity: f64,
    pub subject: StatProfile,
    pub target: StatProfile,
    /// Headline stats where the subject exceeds the target, largest edge first.
    pub strengths: Vec<StatDelta>,
    /// Headline stats where the subject trails the target, largest gap first.
    pub weaknesses: Vec<StatDelta>,
}

impl Comparison {
    pub fn between(
        subject_name: impl Into<String>,
        target_name: impl Into<String>,
        subject: &StatProfile,
        target: &StatProfile,
    ) -> Self {
        let headline: [(&str, f64, f64); 6] = [
            ("PPG", subject.points_per_game, target.points_per_game),
            ("RPG", subject.rebounds_per_game, target.rebounds_per_game),
            ("APG", subject.assists_per_game, target.assists_per_game),
            ("FG%", subject.field_goal_pct, target.field_goal_pct),
            ("3P%", subject.three_point_pct, target.three_point_pct),
            ("FT%", subject.free_throw_pct, target.free_throw_pct),
        ];

        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        for (stat, s, t) in headline {
            // No relative edge is expressible against a zero target.
            if t <= 0.0 || s == t {
                continue;
            }
            let delta = StatDelta {
                stat: stat.to_string(),
                subject: s,
                target: t,
                delta_pct: (s - t) / t * 100.0,
            };
            if s > t {
                strengths.push(delta);
            } else {
                weaknesses.push(delta);
            }
        }

        strengths.sort_by(|a, b| {
            b.delta_pct
                .partial_cmp(&a.delta_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        weaknesses.sort_by(|a, b| {
            a.delta_pct
                .partial_cmp(&b.delta_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            subject_name: subject_name.into(),
            target_name: target_name.into(),
            similarity: compute_similarity(subject, target),
            subject: *subject,
            target: *target,
            strengths,
            weaknesses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{fallback_profile, Archetype};
    use pretty_assertions::assert_eq;

    fn scorer() -> StatProfile {
        Archetype::EliteScorer.profile()
    }

    fn playmaker() -> StatProfile {
        Archetype::Playmaker.profile()
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!(weights.is_valid(), "sum was {}", weights.sum());
    }

    #[test]
    fn test_invalid_weights_detected() {
        let mut weights = ScoringWeights::default();
        weights.points = 0.5;
        assert!(!weights.is_valid());
    }

    #[test]
    fn test_identical_profiles_score_100() {
        let p = scorer();
        assert_eq!(compute_similarity(&p, &p), 100.0);

        let curry = fallback_profile("Stephen Curry").unwrap();
        assert_eq!(compute_similarity(&curry, &curry), 100.0);
    }

    #[test]
    fn test_score_bounded_for_extreme_profiles() {
        let zero = StatProfile::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let max = StatProfile::new(60.0, 25.0, 15.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0);

        for (a, b) in [(&zero, &max), (&max, &zero), (&zero, &zero), (&max, &max)] {
            let score = compute_similarity(a, b);
            assert!((0.0..=100.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_asymmetric_when_counting_targets_differ() {
        // 28 ppg vs 18 ppg: relative diff is 10/18 one way, 10/28 the other.
        let a = scorer();
        let b = playmaker();

        let ab = compute_similarity(&a, &b);
        let ba = compute_similarity(&b, &a);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_relative_diff_floors_denominator() {
        // Target of 0 ppg divides by the floor of 1, not by zero.
        assert_eq!(relative_diff(5.0, 0.0), 5.0);
        assert_eq!(relative_diff(5.0, 0.5), 5.0 - 0.5);
        assert!((relative_diff(30.0, 20.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_known_score_value() {
        // Single differing stat: |0.480 - 0.450| * 0.15 weight = 0.0045
        // => 100 - 0.9 = 99.1.
        let a = scorer();
        let mut b = scorer();
        b.field_goal_pct = 0.450;

        assert_eq!(compute_similarity(&a, &b), 99.1);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let a = scorer();
        let b = playmaker();
        let score = compute_similarity(&a, &b);

        assert_eq!(score, (score * 10.0).round() / 10.0);
    }

    #[test]
    fn test_comparison_partitions_headline_stats() {
        let comparison = Comparison::between("A", "B", &scorer(), &playmaker());

        assert_eq!(comparison.similarity, compute_similarity(&scorer(), &playmaker()));

        // Every differing headline stat lands in exactly one bucket.
        let total = comparison.strengths.len() + comparison.weaknesses.len();
        assert_eq!(total, 6);
        for delta in &comparison.strengths {
            assert!(delta.delta_pct > 0.0);
        }
        for delta in &comparison.weaknesses {
            assert!(delta.delta_pct < 0.0);
        }

        // Scorer vs playmaker: more points, fewer assists.
        assert!(comparison.strengths.iter().any(|d| d.stat == "PPG"));
        assert!(comparison.weaknesses.iter().any(|d| d.stat == "APG"));
    }

    #[test]
    fn test_comparison_sorted_by_magnitude() {
        let comparison = Comparison::between("A", "B", &scorer(), &playmaker());

        for pair in comparison.strengths.windows(2) {
            assert!(pair[0].delta_pct >= pair[1].delta_pct);
        }
        for pair in comparison.weaknesses.windows(2) {
            assert!(pair[0].delta_pct <= pair[1].delta_pct);
        }
    }

    #[test]
    fn test_comparison_skips_zero_target_stats() {
        let mut target = playmaker();
        target.three_point_pct = 0.0;
        let comparison = Comparison::between("A", "B", &scorer(), &target);

        assert!(!comparison
            .strengths
            .iter()
            .chain(comparison.weaknesses.iter())
            .any(|d| d.stat == "3P%"));
    }
}
