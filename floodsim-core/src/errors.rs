//! Error Types for the Simulation Engine
//!
//! ## Design Philosophy
//!
//! Almost nothing in the engine is allowed to fail. Degenerate parameters
//! (zero slope, zero time constant, zero frequency) are floored to a small
//! epsilon and out-of-range physical values are clamped, so they never show
//! up here. What remains are the few conditions a caller can act on:
//!
//! 1. **Small and Copy-friendly**: every variant carries plain numbers or
//!    `&'static str`, so errors are cheap to return from the tick path.
//!
//! 2. **One enum per concern**: history, spectral and configuration errors
//!    are separate so each module's `Result` alias says exactly what can go
//!    wrong. [`EngineError`] wraps them for the orchestrator.
//!
//! ## Error Categories
//!
//! ### Insufficient Data
//! - `SpectralError::InsufficientData`: fewer samples than a spectrum needs.
//!   The engine skips the frame for that tick and keeps the previous one.
//!
//! ### Contract Violations
//! - `HistoryError::LengthMismatch`: a generator returned a chunk whose length
//!   differs from its time vector.
//! - `HistoryError::NonMonotonic`: a chunk would put an older timestamp
//!   after a newer one.
//!
//! ### Configuration
//! - `ConfigError`: a sample rate, window or tick interval that would make
//!   the engine divide by zero or grow without bound.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use floodsim_core::{SpectralAnalyzer, SpectralError};
//!
//! let mut analyzer = SpectralAnalyzer::new();
//! match analyzer.analyze(&[0.0; 4], 10.0) {
//!     Ok(frame) => println!("{} bins", frame.len()),
//!     Err(SpectralError::InsufficientData { required, available }) => {
//!         // Keep showing the last frame until the buffer fills up
//!         println!("waiting for {} more samples", required - available);
//!     }
//!     Err(e) => println!("spectrum skipped: {}", e),
//! }
//! ```

use thiserror::Error;

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Result type for spectral analysis
pub type SpectralResult<T> = Result<T, SpectralError>;

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by [`crate::history::StreamingHistory`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum HistoryError {
    /// Time and value chunks must pair up element-wise
    #[error("Chunk length mismatch: {times} timestamps, {values} values")]
    LengthMismatch {
        /// Number of timestamps in the chunk
        times: usize,
        /// Number of values in the chunk
        values: usize,
    },

    /// Timestamps must keep increasing across and within chunks
    #[error("Timestamp {next} does not follow {previous}")]
    NonMonotonic {
        /// Last timestamp already accepted
        previous: f64,
        /// Offending timestamp
        next: f64,
    },
}

/// Errors raised by [`crate::spectral::SpectralAnalyzer`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SpectralError {
    /// Not enough samples for a meaningful spectrum
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of samples needed
        required: usize,
        /// Samples actually available
        available: usize,
    },

    /// Sample rate must be positive and finite
    #[error("Invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The rejected sample rate
        rate: f64,
    },
}

/// Errors raised while validating [`crate::config::EngineConfig`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Tick interval must be positive and finite
    #[error("Invalid tick interval: {seconds} s")]
    InvalidTickInterval {
        /// The rejected interval in seconds
        seconds: f64,
    },

    /// Channel sample rate must be positive and finite
    #[error("Invalid sample rate for {channel}: {rate} Hz")]
    InvalidSampleRate {
        /// Channel name
        channel: &'static str,
        /// The rejected rate
        rate: f64,
    },

    /// Channel window must be positive and finite
    #[error("Invalid window for {channel}: {seconds} s")]
    InvalidWindow {
        /// Channel name
        channel: &'static str,
        /// The rejected window length
        seconds: f64,
    },

    /// A chunk cap of zero would never produce samples
    #[error("Chunk cap for {channel} must be at least 1")]
    ZeroChunkCap {
        /// Channel name
        channel: &'static str,
    },
}

/// Top-level error for the tick orchestrator
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// Configuration rejected at construction
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// History append failed
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Spectral analysis failed for a reason other than missing data
    #[error(transparent)]
    Spectral(#[from] SpectralError),
}
