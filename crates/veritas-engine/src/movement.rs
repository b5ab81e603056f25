//! Movement plausibility classification.
//!
//! A position transition is "unrealistic" when the implied travel speed
//! exceeds a ceiling chosen by how far the identity moved: nobody walks
//! 8 km in ten minutes, but a 900 km/h hop between continents is just an
//! airliner. The classifier is stateless; callers accumulate its boolean
//! into `BehaviourInfo::unrealistic_movement_count`.

use chrono::{DateTime, Utc};
use veritas_core::GeoPoint;
use veritas_core::constants::MS_PER_HOUR;

use crate::geo::distance_km;

/// Distance buckets with strict `<` upper edges and their maximum
/// plausible speeds, in km/h. Monotonically increasing: long-distance
/// travel is only plausible via faster transport.
const SPEED_BUCKETS: &[(f64, f64)] = &[
    (1.0, 10.0),
    (10.0, 50.0),
    (100.0, 120.0),
    (500.0, 200.0),
    (1000.0, 700.0),
];

/// Ceiling for transitions of 1000 km and beyond.
const LONG_HAUL_MAX_KMH: f64 = 900.0;

/// Maximum plausible travel speed for a transition of the given length.
///
/// Bucket edges use strict `<`: a transition of exactly 1 km falls into
/// the `<10 km` bucket (50 km/h), not the `<1 km` one.
///
/// # Examples
///
/// ```
/// use veritas_engine::movement::max_plausible_speed_kmh;
///
/// assert_eq!(max_plausible_speed_kmh(0.5), 10.0);
/// assert_eq!(max_plausible_speed_kmh(1.0), 50.0);
/// assert_eq!(max_plausible_speed_kmh(999.9), 700.0);
/// assert_eq!(max_plausible_speed_kmh(1000.0), 900.0);
/// ```
pub fn max_plausible_speed_kmh(distance_km: f64) -> f64 {
    for &(edge, max_kmh) in SPEED_BUCKETS {
        if distance_km < edge {
            return max_kmh;
        }
    }
    LONG_HAUL_MAX_KMH
}

/// Classify a position transition as physically implausible.
///
/// Edge policy:
/// - zero distance is never unrealistic, regardless of elapsed time;
/// - a non-zero distance covered in zero or negative elapsed time is
///   always unrealistic (instantaneous relocation).
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use veritas_core::GeoPoint;
/// use veritas_engine::movement::is_unrealistic_movement;
///
/// let now = Utc::now();
/// let munich = GeoPoint::new(48.137, 11.575);
/// let sydney = GeoPoint::new(-33.868, 151.209);
///
/// // Munich to Sydney in one hour: ~16,000 km/h.
/// assert!(is_unrealistic_movement(&munich, &sydney, now - Duration::hours(1), now));
/// // The same trip over 24 hours is a plausible flight.
/// assert!(!is_unrealistic_movement(&munich, &sydney, now - Duration::hours(24), now));
/// ```
pub fn is_unrealistic_movement(
    last_position: &GeoPoint,
    current_position: &GeoPoint,
    last_interaction_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    let distance = distance_km(last_position, current_position);
    if distance == 0.0 {
        return false;
    }

    let elapsed_ms = (now - last_interaction_at).num_milliseconds();
    if elapsed_ms <= 0 {
        return true;
    }

    let speed_kmh = distance / (elapsed_ms as f64 / MS_PER_HOUR);
    speed_kmh > max_plausible_speed_kmh(distance)
}
