//! Shot zone classification and per-zone aggregation.
//!
//! The classifier is total: every coordinate triple maps to exactly one
//! [`ZoneLabel`], with boundaries evaluated in a fixed first-match-wins
//! order. Aggregation groups a shot sequence by zone and reports counts,
//! percentage, and rating, ordered by attempt volume.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ShotEvent, ZoneLabel, ZoneSummary};

/// Coordinates with magnitude above this are taken to be in tenths of a
/// foot and divided down. Upstream data arrives in either unit; the source
/// gives no explicit tag, so magnitude is all there is to go on.
const TENTHS_MAGNITUDE_CUTOFF: f64 = 100.0;

fn to_feet(value: f64) -> f64 {
    if value.abs() > TENTHS_MAGNITUDE_CUTOFF {
        value / 10.0
    } else {
        value
    }
}

/// Classify a shot location into its court zone.
///
/// `loc_x`/`loc_y` may be in feet or tenths of a foot (inferred by
/// magnitude); `distance` is in feet.
pub fn classify(loc_x: f64, loc_y: f64, distance: f64) -> ZoneLabel {
    let x_ft = to_feet(loc_x);
    let y_ft = to_feet(loc_y);

    if distance <= 8.0 {
        if x_ft.abs() <= 8.0 && y_ft <= 19.0 {
            ZoneLabel::Paint
        } else {
            ZoneLabel::CloseRange
        }
    } else if distance <= 16.0 {
        if y_ft <= 14.0 {
            if x_ft < -8.0 {
                ZoneLabel::LeftBaselineMid
            } else if x_ft > 8.0 {
                ZoneLabel::RightBaselineMid
            } else {
                ZoneLabel::MidRangeCenter
            }
        } else if x_ft < -6.0 {
            ZoneLabel::LeftMidRange
        } else if x_ft > 6.0 {
            ZoneLabel::RightMidRange
        } else {
            ZoneLabel::TopOfKey
        }
    } else if x_ft.abs() > 22.0 && y_ft <= 14.0 {
        if x_ft < 0.0 {
            ZoneLabel::LeftCorner3
        } else {
            ZoneLabel::RightCorner3
        }
    } else if y_ft > 14.0 && y_ft <= 26.0 {
        if x_ft < 0.0 {
            ZoneLabel::LeftWing3
        } else {
            ZoneLabel::RightWing3
        }
    } else {
        ZoneLabel::TopOfArc3
    }
}

/// Classify a shot event's location.
pub fn classify_event(event: &ShotEvent) -> ZoneLabel {
    classify(event.loc_x, event.loc_y, event.distance)
}

/// Per-zone shooting report for one player-season.
///
/// Zones are ordered by descending attempts (declaration order breaks
/// ties), so iteration order is deterministic for any permutation of the
/// input. Zones with no attempts are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneReport {
    pub zones: Vec<ZoneSummary>,
}

impl ZoneReport {
    /// Look up one zone's summary by label.
    pub fn zone(&self, label: ZoneLabel) -> Option<&ZoneSummary> {
        self.zones.iter().find(|z| z.zone == label)
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// The best-shooting zone among those with at least `min_attempts`.
    ///
    /// Ties go to the first zone reaching the maximum percentage in report
    /// order.
    pub fn best_zone(&self, min_attempts: u32) -> Option<&ZoneSummary> {
        let mut best: Option<&ZoneSummary> = None;
        for summary in self.zones.iter().filter(|z| z.attempts >= min_attempts) {
            match best {
                Some(b) if summary.percentage <= b.percentage => {}
                _ => best = Some(summary),
            }
        }
        best
    }
}

/// Group shot events by zone and summarize each.
pub fn summarize(events: &[ShotEvent]) -> ZoneReport {
    let mut counts: BTreeMap<ZoneLabel, (u32, u32)> = BTreeMap::new();

    for event in events {
        let entry = counts.entry(classify_event(event)).or_insert((0, 0));
        entry.0 += 1;
        if event.made {
            entry.1 += 1;
        }
    }

    let mut zones: Vec<ZoneSummary> = counts
        .into_iter()
        .map(|(zone, (attempts, makes))| ZoneSummary::from_counts(zone, attempts, makes))
        .collect();

    // BTreeMap iteration gives declaration order; the stable sort on
    // attempts keeps it as the tie-break.
    zones.sort_by(|a, b| b.attempts.cmp(&a.attempts));

    ZoneReport { zones }
}
