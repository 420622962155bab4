//! Player evaluation engine.
//!
//! Pure, synchronous computation over in-memory inputs:
//! - Similarity scoring between two stat profiles
//! - Shot zone classification and per-zone efficiency
//! - Whole-athlete shooting insights and tendencies
//!
//! Nothing here performs I/O or holds shared state; every function is safe
//! to call concurrently with independent inputs.

pub mod insights;
pub mod similarity;
pub mod zones;

pub use insights::{BestZone, ShootingTendencies, ShotInsights};
pub use similarity::{compute_similarity, compute_similarity_weighted, Comparison, ScoringWeights};
pub use zones::{classify, classify_event, summarize, ZoneReport};
