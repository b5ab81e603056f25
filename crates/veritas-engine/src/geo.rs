//! Great-circle distance and implied travel speed.

use chrono::{DateTime, Utc};
use veritas_core::GeoPoint;
use veritas_core::constants::MS_PER_HOUR;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometers.
///
/// Identical points yield exactly 0.
///
/// # Examples
///
/// ```
/// use veritas_core::GeoPoint;
/// use veritas_engine::geo::distance_km;
///
/// let munich = GeoPoint::new(48.137, 11.575);
/// let berlin = GeoPoint::new(52.520, 13.405);
/// let d = distance_km(&munich, &berlin);
/// assert!((d - 504.0).abs() < 5.0, "Munich-Berlin is ~504 km, got {d}");
/// assert_eq!(distance_km(&munich, &munich), 0.0);
/// ```
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Implied travel speed between two timestamped observations, in km/h.
///
/// The caller must guarantee `now > since`; a zero or negative elapsed
/// time is a contract violation this primitive does not guard against
/// (the movement classifier handles that case before calling in).
pub fn speed_kmh(a: &GeoPoint, b: &GeoPoint, since: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed_hours = (now - since).num_milliseconds() as f64 / MS_PER_HOUR;
    distance_km(a, b) / elapsed_hours
}
