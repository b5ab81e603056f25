//! Behavioral input records for credibility scoring.
//!
//! A [`BehaviourInfo`] snapshot is assembled by an external aggregation
//! layer from raw event logs, passed once per scoring invocation, and
//! discarded after the score is persisted. The engine treats it as
//! read-only. All intervals are in milliseconds; field names serialize
//! as `camelCase` to match the historical wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BehaviourError;

/// A WGS84 coordinate pair.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, `[-180, 180]`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude/longitude degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check coordinate bounds.
    pub fn validate(&self) -> Result<(), BehaviourError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(BehaviourError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(BehaviourError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

/// Aggregated voting behavior of an identity.
///
/// Invariant: `upvote_count + downvote_count == total_count`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VotingBehaviour {
    /// Total number of votes ever cast.
    pub total_count: u32,
    /// Number of upvotes.
    pub upvote_count: u32,
    /// Number of downvotes.
    pub downvote_count: u32,
    /// When the most recent vote was cast, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_voted_at: Option<DateTime<Utc>>,
    /// Mean time between votes, in milliseconds.
    pub average_voting_interval_ms: u64,
}

/// Aggregated registration behavior of an identity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationBehaviour {
    /// Total number of registrations ever performed.
    pub total_count: u32,
    /// When the most recent registration happened, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_registration_at: Option<DateTime<Utc>>,
    /// Mean time between registrations, in milliseconds.
    pub average_registration_interval_ms: u64,
}

/// Immutable behavioral snapshot of a platform identity.
///
/// Optional fields distinguish "never observed" from zero-valued: a
/// missing `last_interaction_position` means no location is known, not
/// a position at the origin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BehaviourInfo {
    /// Previously stored credibility score in `[0, 100]`.
    ///
    /// Zero means "no prior history" and disables temporal smoothing.
    pub credibility: u8,
    /// When the identity was issued. Governs all age-based weighting.
    pub issued_at: DateTime<Utc>,
    /// The last time the identity interacted with the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction_at: Option<DateTime<Utc>>,
    /// The last known position of the identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction_position: Option<GeoPoint>,
    /// Mean time between any interactions, in milliseconds.
    pub average_interaction_interval_ms: u64,
    /// Accumulated count of physically implausible position transitions.
    ///
    /// Monotonically non-decreasing over an identity's lifetime; reset
    /// only by external policy.
    pub unrealistic_movement_count: u32,
    /// Voting behavior counters.
    pub voting: VotingBehaviour,
    /// Registration behavior counters.
    pub registration: RegistrationBehaviour,
}

impl BehaviourInfo {
    /// Check the record's internal invariants.
    ///
    /// The engine itself is total over any `BehaviourInfo`; this exists
    /// so callers can reject inconsistent aggregates at the boundary
    /// instead of scoring garbage.
    pub fn validate(&self) -> Result<(), BehaviourError> {
        if self.credibility > 100 {
            return Err(BehaviourError::CredibilityOutOfRange(self.credibility));
        }
        let v = &self.voting;
        if v.upvote_count.saturating_add(v.downvote_count) != v.total_count {
            return Err(BehaviourError::VoteCountMismatch {
                upvotes: v.upvote_count,
                downvotes: v.downvote_count,
                total: v.total_count,
            });
        }
        if let Some(pos) = &self.last_interaction_position {
            pos.validate()?;
        }
        Ok(())
    }

    /// Total observed activity: votes plus registrations.
    pub fn total_activity(&self) -> u32 {
        self.voting
            .total_count
            .saturating_add(self.registration.total_count)
    }
}
