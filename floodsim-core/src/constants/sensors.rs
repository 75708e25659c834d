//! Sensor Datasheet Limits
//!
//! Operational envelopes and default parameters for the five simulated
//! sensors, taken from their datasheets where one exists.

// ===== JSN-SR04T ULTRASONIC =====

/// Minimum measurable distance (m).
///
/// Source: JSN-SR04T datasheet (blind zone ~21 cm)
pub const ULTRASONIC_MIN_DISTANCE_M: f64 = 0.21;

/// Maximum measurable distance (m).
///
/// Source: JSN-SR04T datasheet
pub const ULTRASONIC_MAX_DISTANCE_M: f64 = 6.0;

/// Transducer carrier frequency (Hz).
pub const ULTRASONIC_CARRIER_HZ: f64 = 40_000.0;

/// Shortest echo packet accepted (s).
pub const ULTRASONIC_MIN_ECHO_WINDOW_S: f64 = 1e-6;

// ===== YF-S201 FLOW =====

/// Pulse frequency per unit flow (Hz per L/min).
///
/// Source: YF-S201 datasheet (F = 7.5 * Q)
pub const FLOW_K_HZ_PER_LPM: f64 = 7.5;

/// Lowest pulse frequency used, keeps the period finite (Hz).
pub const FLOW_MIN_PULSE_HZ: f64 = 0.001;

/// Fraction of each period the Hall output is high.
pub const FLOW_DUTY_CYCLE: f64 = 0.2;

/// Hall output level (V).
pub const FLOW_PULSE_AMPLITUDE_V: f64 = 5.0;

// ===== YL-83 RAIN =====

/// Baseline output voltage of the rain board (V).
pub const RAIN_BASE_V: f64 = 1.0;

/// Span of the exponential wetness response (V).
pub const RAIN_SPAN_V: f64 = 2.0;

/// Standard deviation of the wetness jitter (wetness units).
pub const RAIN_WETNESS_JITTER: f64 = 0.05;

// ===== SEN0161 pH =====

/// Minimum board output voltage (V).
///
/// Source: DFRobot SEN0161 V2 (0..3 V output)
pub const PH_MIN_VOLTAGE_V: f64 = 0.0;

/// Maximum board output voltage (V).
pub const PH_MAX_VOLTAGE_V: f64 = 3.0;

/// Lower end of the pH scale.
pub const PH_MIN: f64 = 0.0;

/// Upper end of the pH scale.
pub const PH_MAX: f64 = 14.0;

/// Smallest calibration slope magnitude before flooring (V/pH).
pub const PH_MIN_SLOPE: f64 = 1e-6;

/// Smallest probe time constant (s).
pub const PH_MIN_TAU_S: f64 = 1e-3;

/// Step used when two samples share a timestamp (s).
pub const PH_MIN_DT_S: f64 = 1e-3;

// ===== DS18B20 TEMPERATURE =====

/// 12-bit resolution step (°C).
///
/// Source: DS18B20 datasheet
pub const TEMP_RESOLUTION_12BIT_C: f64 = 0.0625;

/// 12-bit conversion time (s).
///
/// Source: DS18B20 datasheet (750 ms max)
pub const TEMP_CONVERSION_12BIT_S: f64 = 0.75;

/// Shortest conversion time accepted (s).
pub const TEMP_MIN_CONVERSION_S: f64 = 0.01;

/// Smallest quantization step accepted (°C).
pub const TEMP_MIN_RESOLUTION_C: f64 = 1e-6;
