//! # veritas-engine
//! Behavioral credibility scoring.
//!
//! A pure, synchronous input→score transformation:
//! - **Penalty rules**: independent curves (exponential, logistic,
//!   logarithmic) over one behavioral signal each, every one capped and
//!   gated on minimum sample size.
//! - **Score composition**: deltas sum onto a base of 100, clamp to
//!   `[0, 100]`, then EWMA-blend against the previously stored score.
//! - **Movement plausibility**: haversine distance and implied speed
//!   against a distance-bucketed maximum-speed table.
//!
//! No IO, no shared state, no implicit clock: the evaluation timestamp
//! is threaded into every age and interval computation.

pub mod evaluator;
pub mod geo;
pub mod movement;
pub mod rules;
pub mod smoothing;

pub use evaluator::{CredibilityEngine, RULES};
pub use geo::{distance_km, speed_kmh};
pub use movement::is_unrealistic_movement;
pub use smoothing::ewma;
