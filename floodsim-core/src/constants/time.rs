//! Time-Related Constants
//!
//! Tick cadence, per-sensor sample rates and display windows.

// ===== TICK =====

/// Wall-clock interval between ticks (s).
///
/// The dashboard timer fires every 200 ms.
pub const DEFAULT_TICK_INTERVAL_S: f64 = 0.2;

/// Display window shared by the slow sensors (s).
pub const DEFAULT_WINDOW_S: f64 = 10.0;

// ===== SAMPLE RATES =====

/// Ultrasonic echo sample rate (Hz).
///
/// 2.5x oversampling of the 40 kHz carrier.
pub const ULTRASONIC_SAMPLE_RATE_HZ: f64 = 100_000.0;

/// Ultrasonic display window (s).
///
/// Short enough to keep the 100 kHz buffer at a few thousand samples.
pub const ULTRASONIC_WINDOW_S: f64 = 0.025;

/// Most ultrasonic samples generated per tick.
pub const ULTRASONIC_MAX_CHUNK_LEN: usize = 2000;

/// Flow pulse-train sample rate (Hz).
pub const FLOW_SAMPLE_RATE_HZ: f64 = 400.0;

/// Rain board sample rate (Hz).
pub const RAIN_SAMPLE_RATE_HZ: f64 = 20.0;

/// pH probe sample rate (Hz).
pub const PH_SAMPLE_RATE_HZ: f64 = 10.0;

/// Temperature sample rate (Hz).
pub const TEMP_SAMPLE_RATE_HZ: f64 = 5.0;
