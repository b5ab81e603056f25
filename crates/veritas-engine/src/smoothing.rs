//! Exponentially weighted moving average.

/// Blend a new value into a previous one.
///
/// `ewma(previous, current, alpha) = alpha * current + (1 - alpha) * previous`
///
/// Pure and unbounded: the evaluator clamps both inputs to `[0, 100]`
/// before blending, so with `alpha` in `(0, 1)` the result stays in
/// range without further checks.
///
/// # Examples
///
/// ```
/// use veritas_engine::smoothing::ewma;
///
/// assert_eq!(ewma(50.0, 50.0, 0.4), 50.0);
/// assert_eq!(ewma(100.0, 0.0, 0.4), 60.0);
/// assert_eq!(ewma(0.0, 100.0, 0.4), 40.0);
/// ```
pub fn ewma(previous: f64, current: f64, alpha: f64) -> f64 {
    alpha * current + (1.0 - alpha) * previous
}
