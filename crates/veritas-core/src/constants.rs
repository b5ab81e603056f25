//! Scoring constants shared across the engine.

/// Upper bound of the credibility score range.
pub const MAX_SCORE: u8 = 100;

/// Base score every evaluation starts from before penalties apply.
pub const BASE_SCORE: i32 = 100;

/// Default EWMA weight given to the freshly computed raw score.
///
/// The remaining `1 - alpha` weight goes to the previously stored
/// credibility, dampening single-observation volatility.
pub const DEFAULT_SMOOTHING_ALPHA: f64 = 0.4;

/// Minimum observation count before rate/ratio rules trust an inferred
/// pattern. Below this, those rules contribute a neutral zero.
pub const MIN_SAMPLE_SIZE: u32 = 5;

/// Milliseconds in one hour.
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Milliseconds in one minute.
pub const MS_PER_MINUTE: f64 = 60_000.0;
