//! Core simulation engine for FloodSim
//!
//! Simulates the sensors of a flood-monitoring testbed (ultrasonic water
//! level, flow, rain, pH and temperature), keeps a sliding window of each
//! signal, computes its spectrum and derives a small pole/zero model for
//! stability plots.
//!
//! Key constraints:
//! - One synchronous tick per external timer interval
//! - No tick ever fails on bad parameters; they are clamped instead
//! - Buffers stay bounded by `sample_rate × window`
//!
//! ```no_run
//! use floodsim_core::{Engine, EngineConfig, SensorKind};
//!
//! let mut engine = Engine::new(EngineConfig::default())?;
//! engine.start();
//!
//! // UI writes land in the current or the next tick
//! engine.params().flow.update(|p| p.flow_lpm = 12.0);
//!
//! engine.tick()?;
//! if let Some(status) = engine.status(SensorKind::Flow) {
//!     println!("{}: {}", status.label(), status.detail);
//! }
//! # Ok::<(), floodsim_core::EngineError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Optional logging, compiled out without the `log` feature. The disabled
// variants still type-check their arguments so bindings used only for
// logging do not trip unused-variable lints.
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod history;
pub mod params;
pub mod poles;
pub mod random;
pub mod sensors;
pub mod spectral;
pub mod status;
pub mod time;
pub mod traits;
pub mod transforms;

// Public API
pub use config::{ChannelConfig, EngineConfig};
pub use engine::{Channel, Engine, EngineMetrics, EngineState, ParamHandles};
pub use errors::{
    ConfigError, ConfigResult, EngineError, EngineResult, HistoryError, HistoryResult,
    SpectralError, SpectralResult,
};
pub use history::StreamingHistory;
pub use params::SharedParams;
pub use poles::{PoleZeroInputs, PoleZeroModel, PoleZeroSet, PoleZeroSnapshot, Stability};
pub use random::RandomGaussian;
pub use sensors::{
    FlowParams, FlowSensor, HoldState, PhFilterState, PhParams, PhSensor, RainParams, RainSensor,
    TemperatureParams, TemperatureSensor, UltrasonicParams, UltrasonicSensor,
};
pub use spectral::{SpectralAnalyzer, SpectralFrame};
pub use status::{SensorStatus, StatusLevel};
pub use traits::{SensorKind, SensorModel};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
