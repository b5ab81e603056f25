//! Error types for the Veritas engine.
use thiserror::Error;

/// Input-contract violations on a [`crate::BehaviourInfo`] record.
///
/// Counts and intervals are unsigned by construction, so the only
/// violations left to detect are internal inconsistencies. The scoring
/// engine itself never returns these; callers validate at the boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BehaviourError {
    #[error("vote counts inconsistent: {upvotes} up + {downvotes} down != {total} total")]
    VoteCountMismatch { upvotes: u32, downvotes: u32, total: u32 },
    #[error("stored credibility {0} exceeds 100")]
    CredibilityOutOfRange(u8),
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}
