//! Physical Constants for FloodSim
//!
//! Relations used by the sensor physics. Values follow the approximations
//! printed in the sensor application notes rather than high-precision
//! references; the simulation only has to be plausible.

// ===== ACOUSTICS =====

/// Speed of sound in dry air at 0°C (m/s).
///
/// Linear model: c = 331.4 + 0.606 * T(°C).
///
/// Source: JSN-SR04T application note
pub const SPEED_OF_SOUND_BASE_M_PER_S: f64 = 331.4;

/// Temperature coefficient of the speed of sound (m/s per °C).
pub const SPEED_OF_SOUND_SLOPE_M_PER_S_C: f64 = 0.606;

/// Speed of sound for the given air temperature (m/s).
#[inline]
pub fn speed_of_sound(temp_c: f64) -> f64 {
    SPEED_OF_SOUND_BASE_M_PER_S + SPEED_OF_SOUND_SLOPE_M_PER_S_C * temp_c
}

// ===== UNIT CONVERSIONS =====

/// Centimetres per metre.
pub const CM_PER_M: f64 = 100.0;

/// Milliseconds per second.
pub const MS_PER_S: f64 = 1000.0;

/// Rain intensity shown per unit of wetness (mm/h).
///
/// The YL-83 board has no absolute calibration; the dashboard presents
/// wetness 0..1 as 0..100 mm/h.
pub const RAIN_MM_PER_H_PER_WETNESS: f64 = 100.0;
