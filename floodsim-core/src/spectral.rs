//! Spectral Analysis of Sensor Histories
//!
//! ## Overview
//!
//! Turns the tail of a history buffer into a single-sided amplitude
//! spectrum for display:
//!
//! ```text
//! tail (≤ 2048) → subtract mean → Hann window → FFT → |X[k]|·2/N, k < N/2
//! ```
//!
//! Bin 0 is halved after scaling so the DC line is not double counted.
//! Mean removal happens first, so DC is normally near zero anyway; the halving
//! only matters for signals whose mean shifts inside the window.
//!
//! ## Window
//!
//! The symmetric Hann window `w[n] = 0.5·(1 − cos(2πn/(N−1)))` has a
//! coherent gain of roughly 0.5, so a sinusoid of amplitude `A` sitting
//! exactly on a bin shows up with magnitude ≈ `A/2`.
//!
//! ## Plan Caching
//!
//! `rustfft` handles any length, not just powers of two. The analyzer owns
//! one `FftPlanner`, which caches the plan for every length it has seen, so
//! the steady state of a full buffer reuses the same 2048-point plan on
//! every tick.
//!
//! ## Usage Example
//!
//! ```rust
//! use floodsim_core::SpectralAnalyzer;
//!
//! let fs = 1024.0;
//! let signal: Vec<f64> = (0..1024)
//!     .map(|i| (2.0 * std::f64::consts::PI * 64.0 * i as f64 / fs).sin())
//!     .collect();
//!
//! let mut analyzer = SpectralAnalyzer::new();
//! let frame = analyzer.analyze(&signal, fs)?;
//! let (freq, _mag) = frame.peak().unwrap();
//! assert_eq!(freq, 64.0);
//! # Ok::<(), floodsim_core::SpectralError>(())
//! ```

use core::f64::consts::TAU;
use core::fmt;

use num_complex::Complex64;
use rustfft::FftPlanner;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::spectral::{MAX_FFT_LEN, MIN_SPECTRAL_SAMPLES},
    errors::{SpectralError, SpectralResult},
};

/// One computed spectrum
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralFrame {
    /// Bin centre frequencies (Hz), `k·fs/N`
    pub frequencies: Vec<f64>,
    /// Single-sided amplitudes, same length as `frequencies`
    pub magnitudes: Vec<f64>,
    /// Sample rate the frame was computed at (Hz)
    pub sample_rate_hz: f64,
    /// Number of samples that went into the FFT
    pub sample_count: usize,
}

impl SpectralFrame {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Whether the frame has no bins
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency spacing between bins (Hz)
    pub fn resolution_hz(&self) -> f64 {
        if self.sample_count == 0 {
            0.0
        } else {
            self.sample_rate_hz / self.sample_count as f64
        }
    }

    /// `(frequency, magnitude)` pairs
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies.iter().copied().zip(self.magnitudes.iter().copied())
    }

    /// Copy with every bin above `max_hz` dropped
    pub fn limited_to(&self, max_hz: f64) -> SpectralFrame {
        let keep = self.frequencies.partition_point(|&f| f <= max_hz);
        SpectralFrame {
            frequencies: self.frequencies[..keep].to_vec(),
            magnitudes: self.magnitudes[..keep].to_vec(),
            sample_rate_hz: self.sample_rate_hz,
            sample_count: self.sample_count,
        }
    }

    /// Strongest bin, DC excluded
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.bins()
            .skip(1)
            .fold(None, |best: Option<(f64, f64)>, (f, m)| match best {
                Some((_, bm)) if bm >= m => best,
                _ => Some((f, m)),
            })
    }
}

/// Windowed FFT over the tail of a signal
pub struct SpectralAnalyzer {
    planner: FftPlanner<f64>,
    max_len: usize,
}

impl SpectralAnalyzer {
    /// Analyzer using at most [`MAX_FFT_LEN`] samples
    pub fn new() -> Self {
        Self::with_max_len(MAX_FFT_LEN)
    }

    /// Analyzer with a custom tail length, never below [`MIN_SPECTRAL_SAMPLES`]
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            planner: FftPlanner::new(),
            max_len: max_len.max(MIN_SPECTRAL_SAMPLES),
        }
    }

    /// Longest tail this analyzer transforms
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Compute the spectrum of the last `min(max_len, values.len())` samples
    ///
    /// # Errors
    ///
    /// - [`SpectralError::InvalidSampleRate`] if `sample_rate_hz` is not a
    ///   positive finite number
    /// - [`SpectralError::InsufficientData`] with fewer than
    ///   [`MIN_SPECTRAL_SAMPLES`] values
    pub fn analyze(
        &mut self,
        values: &[f64],
        sample_rate_hz: f64,
    ) -> SpectralResult<SpectralFrame> {
        if !(sample_rate_hz.is_finite() && sample_rate_hz > 0.0) {
            return Err(SpectralError::InvalidSampleRate { rate: sample_rate_hz });
        }
        if values.len() < MIN_SPECTRAL_SAMPLES {
            return Err(SpectralError::InsufficientData {
                required: MIN_SPECTRAL_SAMPLES,
                available: values.len(),
            });
        }

        let n = values.len().min(self.max_len);
        let tail = &values[values.len() - n..];
        let mean = tail.iter().sum::<f64>() / n as f64;

        let denom = (n - 1) as f64;
        let mut buffer: Vec<Complex64> = tail
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let w = 0.5 * (1.0 - (TAU * i as f64 / denom).cos());
                Complex64::new((x - mean) * w, 0.0)
            })
            .collect();

        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let half = n / 2;
        let scale = 2.0 / n as f64;
        let frequencies = (0..half).map(|k| k as f64 * sample_rate_hz / n as f64).collect();
        let mut magnitudes: Vec<f64> = buffer[..half].iter().map(|c| c.norm() * scale).collect();
        if let Some(dc) = magnitudes.first_mut() {
            *dc *= 0.5;
        }

        Ok(SpectralFrame {
            frequencies,
            magnitudes,
            sample_rate_hz,
            sample_count: n,
        })
    }
}

impl Default for SpectralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpectralAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectralAnalyzer")
            .field("max_len", &self.max_len)
            .finish_non_exhaustive()
    }
}
