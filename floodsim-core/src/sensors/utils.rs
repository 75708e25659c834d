//! Shared numeric guards for the sensor models
//!
//! Every model clamps instead of failing. These helpers keep the clamping
//! rules in one place and report whether a clamp happened so callers can
//! log it.

/// Clamp `value` into `[min, max]`, reporting whether it moved
pub fn clamp_tracked(value: f64, min: f64, max: f64) -> (f64, bool) {
    let clamped = value.clamp(min, max);
    (clamped, clamped != value)
}

/// Raise `value` to at least `min`
///
/// Used for time constants, periods and step sizes that end up as divisors.
/// NaN also falls back to `min`.
pub fn at_least(value: f64, min: f64) -> f64 {
    if value >= min {
        value
    } else {
        min
    }
}

/// Replace a near-zero divisor by `eps`, keeping values away from zero as-is
pub fn nonzero(value: f64, eps: f64) -> f64 {
    if value.abs() < eps {
        eps
    } else {
        value
    }
}
