//! Spectral Analysis Constants

// ===== FFT =====

/// Fewest samples for which a spectrum is computed.
pub const MIN_SPECTRAL_SAMPLES: usize = 16;

/// Longest FFT taken from the tail of a history buffer.
///
/// Large enough for useful resolution, small enough for a 200 ms tick.
pub const MAX_FFT_LEN: usize = 2048;

/// Highest frequency shown for the ultrasonic spectrum (Hz).
pub const ULTRASONIC_DISPLAY_MAX_HZ: f64 = 50_000.0;

/// Points kept when decimating a time series for plotting.
pub const TIME_PLOT_MAX_POINTS: usize = 1000;

// ===== POLE/ZERO MODEL =====

/// Divisor mapping the ultrasonic carrier into the s-plane (Hz per rad/s).
///
/// 20..60 kHz lands on 2..6, a convenient plotting range.
pub const CARRIER_TO_OMEGA_DIVISOR: f64 = 10_000.0;

/// Gain mapping the rain coefficient onto a real pole.
pub const RAIN_POLE_GAIN: f64 = 5.0;

/// Slowest real pole allowed from the rain coefficient.
pub const RAIN_POLE_MIN: f64 = 0.5;

/// Smallest pH time constant used for the pole (s).
pub const PH_POLE_MIN_TAU_S: f64 = 0.1;

/// Normalized sample period for the s-to-z mapping.
pub const DISCRETE_SAMPLE_PERIOD: f64 = 1.0;

/// Width of the marginal band around the stability boundary.
pub const STABILITY_TOLERANCE: f64 = 1e-9;
