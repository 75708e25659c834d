//! Constants for FloodSim Core
//!
//! Every numeric value the simulation depends on is defined here with its
//! unit in the name. Sensor models, the engine and the status rules read
//! from these modules instead of carrying magic numbers.
//!
//! ## Organization
//!
//! - **Physics**: speed of sound and other physical relations
//! - **Sensors**: datasheet envelopes and default parameters per sensor
//! - **Status**: thresholds for the Safe / Alert / Danger classification
//! - **Time**: tick cadence, sample rates and display windows
//! - **Spectral**: FFT length limits and pole/zero scaling

/// Physical constants used by the sensor physics.
pub mod physics;

/// Sensor envelopes, clamps and default parameters.
pub mod sensors;

/// Status classification thresholds.
pub mod status;

/// Tick cadence, sample rates and windows.
pub mod time;

/// Spectral analysis and pole/zero constants.
pub mod spectral;

// Re-export commonly used constants for convenience
pub use physics::{SPEED_OF_SOUND_BASE_M_PER_S, SPEED_OF_SOUND_SLOPE_M_PER_S_C};

pub use time::{
    DEFAULT_TICK_INTERVAL_S, DEFAULT_WINDOW_S, ULTRASONIC_SAMPLE_RATE_HZ,
    ULTRASONIC_WINDOW_S, ULTRASONIC_MAX_CHUNK_LEN,
};

pub use spectral::{MIN_SPECTRAL_SAMPLES, MAX_FFT_LEN};
