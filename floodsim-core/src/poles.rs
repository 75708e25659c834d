//! Pole/zero model of the monitoring system
//!
//! A small illustrative model built from three live parameters, recomputed on
//! every tick so the s-plane and z-plane plots follow the controls:
//!
//! | Source               | Pole(s)                  |
//! |----------------------|--------------------------|
//! | Ultrasonic carrier   | `±jω0`, `ω0 = F0/10000`  |
//! | Rain coefficient     | `−β`, `β = max(0.5, 5α)` |
//! | pH time constant     | `−1/τ`, `τ ≥ 0.1`        |
//! | (integrators)        | `0`, `0`                 |
//!
//! plus a single zero at the origin. The discrete set maps every point
//! through `z = e^{s·Ts}` with `Ts = 1`.
//!
//! Stability is classified with a marginal band of width
//! [`STABILITY_TOLERANCE`] on both sides of the boundary, so a pole on the
//! imaginary axis and its image on the unit circle both come out
//! [`Stability::Marginal`].

use core::fmt;

use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::spectral::{
        CARRIER_TO_OMEGA_DIVISOR, DISCRETE_SAMPLE_PERIOD, PH_POLE_MIN_TAU_S, RAIN_POLE_GAIN,
        RAIN_POLE_MIN, STABILITY_TOLERANCE,
    },
    sensors::{PhParams, RainParams, UltrasonicParams},
};

/// Room for the six poles plus headroom
pub const MAX_POLES: usize = 8;

/// Room for the single zero plus headroom
pub const MAX_ZEROS: usize = 4;

/// Parameters the model reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoleZeroInputs {
    /// Ultrasonic carrier frequency (Hz)
    pub ultrasonic_f0_hz: f64,
    /// Rain board decay coefficient
    pub rain_alpha: f64,
    /// pH probe time constant (s)
    pub ph_tau_sec: f64,
}

impl PoleZeroInputs {
    /// Pull the three inputs out of the live sensor parameters
    pub fn from_params(ultrasonic: &UltrasonicParams, rain: &RainParams, ph: &PhParams) -> Self {
        Self {
            ultrasonic_f0_hz: ultrasonic.f0_hz,
            rain_alpha: rain.alpha,
            ph_tau_sec: ph.tau_sec,
        }
    }

    /// Carrier mapped into the s-plane (rad/s)
    pub fn omega0(&self) -> f64 {
        self.ultrasonic_f0_hz / CARRIER_TO_OMEGA_DIVISOR
    }

    /// Decay rate of the rain pole
    pub fn rain_beta(&self) -> f64 {
        // f64::max discards NaN
        (self.rain_alpha * RAIN_POLE_GAIN).max(RAIN_POLE_MIN)
    }

    /// Effective pH time constant (s)
    pub fn ph_tau(&self) -> f64 {
        self.ph_tau_sec.max(PH_POLE_MIN_TAU_S)
    }
}

/// Where a root sits relative to the stability boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stability {
    /// Strictly inside the stable region
    Stable,
    /// On the boundary, within the tolerance band
    Marginal,
    /// Outside the stable region
    Unstable,
}

impl Stability {
    /// Classify a continuous-time root by its real part
    pub fn of_s(s: Complex64) -> Self {
        if s.re < -STABILITY_TOLERANCE {
            Stability::Stable
        } else if s.re <= STABILITY_TOLERANCE {
            Stability::Marginal
        } else {
            Stability::Unstable
        }
    }

    /// Classify a discrete-time root by its distance from the origin
    pub fn of_z(z: Complex64) -> Self {
        let r = z.norm();
        if r < 1.0 - STABILITY_TOLERANCE {
            Stability::Stable
        } else if r <= 1.0 + STABILITY_TOLERANCE {
            Stability::Marginal
        } else {
            Stability::Unstable
        }
    }

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Marginal => "marginally stable",
            Stability::Unstable => "unstable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Poles and zeros in one domain
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoleZeroSet {
    /// System poles
    pub poles: heapless::Vec<Complex64, MAX_POLES>,
    /// System zeros
    pub zeros: heapless::Vec<Complex64, MAX_ZEROS>,
}

impl PoleZeroSet {
    /// Map every root through `z = e^{s·ts}`
    pub fn discretize(&self, sample_period: f64) -> PoleZeroSet {
        let map = |s: &Complex64| (*s * sample_period).exp();
        PoleZeroSet {
            poles: self.poles.iter().map(map).collect(),
            zeros: self.zeros.iter().map(map).collect(),
        }
    }
}

/// Continuous and discrete pole/zero sets for one tick
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoleZeroSnapshot {
    /// s-plane roots
    pub continuous: PoleZeroSet,
    /// z-plane roots
    pub discrete: PoleZeroSet,
    /// Sample period used for the mapping (s)
    pub sample_period: f64,
}

impl PoleZeroSnapshot {
    /// Worst classification over the continuous poles
    pub fn continuous_stability(&self) -> Stability {
        worst(self.continuous.poles.iter().copied().map(Stability::of_s))
    }

    /// Worst classification over the discrete poles
    pub fn discrete_stability(&self) -> Stability {
        worst(self.discrete.poles.iter().copied().map(Stability::of_z))
    }
}

fn worst(iter: impl Iterator<Item = Stability>) -> Stability {
    iter.max().unwrap_or(Stability::Stable)
}

/// Builds [`PoleZeroSnapshot`]s from [`PoleZeroInputs`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoleZeroModel {
    sample_period: f64,
}

impl Default for PoleZeroModel {
    fn default() -> Self {
        Self {
            sample_period: DISCRETE_SAMPLE_PERIOD,
        }
    }
}

impl PoleZeroModel {
    /// Model with the normalized `Ts = 1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Model with a custom sample period (non-positive values fall back to 1)
    pub fn with_sample_period(sample_period: f64) -> Self {
        if sample_period.is_finite() && sample_period > 0.0 {
            Self { sample_period }
        } else {
            Self::default()
        }
    }

    /// Sample period used for the z-plane mapping
    pub fn sample_period(&self) -> f64 {
        self.sample_period
    }

    /// s-plane roots for the given inputs
    pub fn continuous(&self, inputs: &PoleZeroInputs) -> PoleZeroSet {
        let w0 = inputs.omega0();
        let poles = [
            Complex64::new(0.0, w0),
            Complex64::new(0.0, -w0),
            Complex64::new(-inputs.rain_beta(), 0.0),
            Complex64::new(-1.0 / inputs.ph_tau(), 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        PoleZeroSet {
            poles: poles.into_iter().collect(),
            zeros: core::iter::once(Complex64::new(0.0, 0.0)).collect(),
        }
    }

    /// Both domains for the given inputs
    pub fn compute(&self, inputs: &PoleZeroInputs) -> PoleZeroSnapshot {
        let continuous = self.continuous(inputs);
        let discrete = continuous.discretize(self.sample_period);
        PoleZeroSnapshot {
            continuous,
            discrete,
            sample_period: self.sample_period,
        }
    }
}
