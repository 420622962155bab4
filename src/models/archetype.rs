//! Reference profiles: archetypes and the fallback star catalog.
//!
//! Both catalogs are fixed configuration data. Archetypes are stylistic
//! reference targets; the fallback catalog mirrors well-known player lines
//! and stands in when the stats provider is unreachable.

use serde::{Deserialize, Serialize};

use super::profile::StatProfile;

/// Stylistic reference category usable as a comparison target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Elite Scorer")]
    EliteScorer,
    #[serde(rename = "Playmaker")]
    Playmaker,
    #[serde(rename = "Two-Way Wing")]
    TwoWayWing,
    #[serde(rename = "Interior Force")]
    InteriorForce,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::EliteScorer,
        Archetype::Playmaker,
        Archetype::TwoWayWing,
        Archetype::InteriorForce,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::EliteScorer => "Elite Scorer",
            Archetype::Playmaker => "Playmaker",
            Archetype::TwoWayWing => "Two-Way Wing",
            Archetype::InteriorForce => "Interior Force",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The reference stat line for this archetype.
    pub fn profile(&self) -> StatProfile {
        match self {
            Archetype::EliteScorer => StatProfile::new(
                28.0, 5.0, 4.0, 0.480, 0.370, 0.850, 0.600, 0.450, 0.400, 0.460, 0.650,
            ),
            Archetype::Playmaker => StatProfile::new(
                18.0, 5.0, 10.0, 0.450, 0.350, 0.800, 0.550, 0.420, 0.380, 0.440, 0.620,
            ),
            Archetype::TwoWayWing => StatProfile::new(
                22.0, 7.0, 5.0, 0.470, 0.360, 0.820, 0.580, 0.430, 0.390, 0.450, 0.640,
            ),
            Archetype::InteriorForce => StatProfile::new(
                24.0, 12.0, 3.0, 0.560, 0.250, 0.720, 0.680, 0.380, 0.300, 0.520, 0.720,
            ),
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hard-coded star profiles used when the provider cannot be reached.
pub const FALLBACK_PLAYER_NAMES: [&str; 5] = [
    "LeBron James",
    "Stephen Curry",
    "Luka Dončić",
    "Giannis Antetokounmpo",
    "Kevin Durant",
];

/// Look up a fallback profile by player name (case-insensitive).
pub fn fallback_profile(name: &str) -> Option<StatProfile> {
    let profile = match name.trim().to_lowercase().as_str() {
        "lebron james" => StatProfile::new(
            25.3, 7.3, 7.4, 0.505, 0.347, 0.731, 0.612, 0.398, 0.367, 0.478, 0.721,
        ),
        "stephen curry" => StatProfile::new(
            29.5, 5.1, 6.3, 0.493, 0.427, 0.915, 0.641, 0.452, 0.456, 0.462, 0.589,
        ),
        "luka dončić" | "luka doncic" => StatProfile::new(
            28.4, 9.1, 8.0, 0.453, 0.346, 0.786, 0.587, 0.425, 0.389, 0.487, 0.623,
        ),
        "giannis antetokounmpo" => StatProfile::new(
            31.1, 11.8, 5.7, 0.553, 0.294, 0.644, 0.672, 0.378, 0.324, 0.534, 0.745,
        ),
        "kevin durant" => StatProfile::new(
            29.7, 6.7, 5.0, 0.525, 0.383, 0.885, 0.634, 0.512, 0.412, 0.498, 0.687,
        ),
        _ => return None,
    };
    Some(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_lookup() {
        assert_eq!(Archetype::from_name("Playmaker"), Some(Archetype::Playmaker));
        assert_eq!(
            Archetype::from_name("two-way wing"),
            Some(Archetype::TwoWayWing)
        );
        assert_eq!(Archetype::from_name(" Elite Scorer "), Some(Archetype::EliteScorer));
        assert_eq!(Archetype::from_name("Sixth Man"), None);
    }

    #[test]
    fn test_archetype_profiles_complete() {
        for archetype in Archetype::ALL {
            let p = archetype.profile();
            assert!(p.points_per_game > 0.0, "{archetype} has no scoring line");
            assert!(p.field_goal_pct > 0.0 && p.field_goal_pct <= 1.0);
            assert!(p.fast_break_fg_pct > 0.0 && p.fast_break_fg_pct <= 1.0);
        }
    }

    #[test]
    fn test_archetype_serde_names() {
        let json = serde_json::to_string(&Archetype::TwoWayWing).unwrap();
        assert_eq!(json, "\"Two-Way Wing\"");
    }

    #[test]
    fn test_fallback_profile_lookup() {
        assert!(fallback_profile("Stephen Curry").is_some());
        assert!(fallback_profile("stephen curry").is_some());
        assert!(fallback_profile("Luka Doncic").is_some());
        assert!(fallback_profile("Benchwarmer").is_none());
    }

    #[test]
    fn test_fallback_catalog_covers_all_names() {
        for name in FALLBACK_PLAYER_NAMES {
            assert!(fallback_profile(name).is_some(), "missing profile for {name}");
        }
    }
}
