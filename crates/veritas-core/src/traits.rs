//! Trait interfaces between crates.
//!
//! [`CredibilityScorer`] is the seam between the scoring engine
//! (veritas-engine implements it) and whatever schedules scoring runs
//! and persists the result.

use chrono::{DateTime, Utc};

use crate::behaviour::BehaviourInfo;
use crate::trace::ScoreTrace;

/// Pure computation of a credibility score from a behavioral snapshot.
///
/// Implementations must be deterministic: the wall clock enters only
/// through `evaluated_at`, never implicitly. Concurrent calls are safe
/// because no state is shared; the caller owns the read-score/write-score
/// ordering discipline for a given identity.
pub trait CredibilityScorer: Send + Sync {
    /// Compute the credibility score in `[0, 100]` for one snapshot.
    ///
    /// When `trace` is supplied, every rule's delta (including zeros) is
    /// recorded in evaluation order. Never fails: degenerate inputs
    /// produce neutral rule contributions, not errors.
    fn compute_credibility(
        &self,
        info: &BehaviourInfo,
        evaluated_at: DateTime<Utc>,
        trace: Option<&mut ScoreTrace>,
    ) -> u8;
}
