//! Shot attempt records.

use serde::{Deserialize, Serialize};

/// One row of the provider's shot-chart result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShotRecord {
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_distance: f64,
    pub shot_made: bool,
}

/// One recorded shot attempt.
///
/// `loc_x`/`loc_y` are court-plane coordinates in tenths of a foot with the
/// origin at the basket; `distance` is in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    pub loc_x: f64,
    pub loc_y: f64,
    pub distance: f64,
    pub made: bool,
}

impl ShotEvent {
    pub fn new(loc_x: f64, loc_y: f64, distance: f64, made: bool) -> Self {
        Self {
            loc_x,
            loc_y,
            distance,
            made,
        }
    }
}

impl From<&RawShotRecord> for ShotEvent {
    fn from(raw: &RawShotRecord) -> Self {
        Self {
            loc_x: raw.loc_x,
            loc_y: raw.loc_y,
            distance: raw.shot_distance,
            made: raw.shot_made,
        }
    }
}
