//! Status Classification Thresholds
//!
//! Safe / Alert / Danger bands used by each sensor's status rule.

// ===== WATER LEVEL (ultrasonic distance to surface) =====

/// Distance above which the water level is safe (cm).
pub const LEVEL_SAFE_ABOVE_CM: f64 = 50.0;

/// Distance at or above which the level is an alert rather than danger (cm).
pub const LEVEL_ALERT_FROM_CM: f64 = 20.0;

// ===== FLOW =====

/// Highest safe flow (L/min).
pub const FLOW_SAFE_MAX_LPM: f64 = 10.0;

/// Highest alert flow (L/min).
pub const FLOW_ALERT_MAX_LPM: f64 = 20.0;

// ===== RAIN =====

/// Rain intensity below which conditions are safe (mm/h).
pub const RAIN_SAFE_BELOW_MM_H: f64 = 10.0;

/// Highest alert rain intensity (mm/h).
pub const RAIN_ALERT_MAX_MM_H: f64 = 55.0;

// ===== pH =====

/// Safe pH band.
pub const PH_SAFE_RANGE: (f64, f64) = (6.5, 8.5);

/// Alert pH band (the safe band is carved out of it).
pub const PH_ALERT_RANGE: (f64, f64) = (5.5, 9.5);

// ===== WATER TEMPERATURE =====

/// Safe water temperature band (°C).
pub const TEMP_SAFE_RANGE_C: (f64, f64) = (0.0, 50.0);
