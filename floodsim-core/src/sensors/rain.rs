//! YL-83 rain board
//!
//! The board's resistance drops as the plate gets wet, so the output voltage
//! falls exponentially with wetness. Wetness itself drifts around a mean with
//! a slow sinusoidal shower pattern and a small random jitter that is redrawn
//! on every call.

use core::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        physics::RAIN_MM_PER_H_PER_WETNESS,
        sensors::{RAIN_BASE_V, RAIN_SPAN_V, RAIN_WETNESS_JITTER},
        status::{RAIN_ALERT_MAX_MM_H, RAIN_SAFE_BELOW_MM_H},
    },
    params::SharedParams,
    random::RandomGaussian,
    status::{SensorStatus, StatusLevel},
    traits::{SensorKind, SensorModel},
};

/// Rain board parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RainParams {
    /// Mean plate wetness, 0 = dry, 1 = flooded
    pub wetness: f64,
    /// Exponential decay coefficient of the voltage with wetness
    pub alpha: f64,
    /// Output noise standard deviation (V)
    pub noise_std: f64,
    /// Amplitude of the shower pattern (wetness units)
    pub dynamic_amp: f64,
    /// Frequency of the shower pattern (Hz)
    pub rain_freq_hz: f64,
}

impl Default for RainParams {
    fn default() -> Self {
        Self {
            wetness: 0.2,
            alpha: 0.5,
            noise_std: 0.01,
            dynamic_amp: 0.3,
            rain_freq_hz: 0.02,
        }
    }
}

impl RainParams {
    /// Dashboard start-up values
    pub fn testbed() -> Self {
        Self::default()
    }

    /// Rain intensity shown to the operator (mm/h)
    pub fn intensity_mm_h(&self) -> f64 {
        self.wetness * RAIN_MM_PER_H_PER_WETNESS
    }
}

/// Rain board voltage generator
pub struct RainSensor {
    params: SharedParams<RainParams>,
    noise: RandomGaussian,
}

impl RainSensor {
    /// Sensor with entropy-seeded noise
    pub fn new(params: SharedParams<RainParams>) -> Self {
        Self::with_noise(params, RandomGaussian::from_entropy())
    }

    /// Sensor with a caller-supplied noise source
    pub fn with_noise(params: SharedParams<RainParams>, noise: RandomGaussian) -> Self {
        Self { params, noise }
    }

    /// Handle to the parameter store
    pub fn params(&self) -> &SharedParams<RainParams> {
        &self.params
    }
}

impl SensorModel for RainSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Rain
    }

    fn name(&self) -> &'static str {
        "YL-83 (Rain)"
    }

    fn formula(&self) -> &'static str {
        "Vout(t) = 1.0 + 2.0·e^{-α·W(t)} + n(t)"
    }

    fn generate(&mut self, times: &[f64]) -> Vec<f64> {
        let p = self.params.snapshot();
        let w0 = p.wetness.clamp(0.0, 1.0);

        let noise = &mut self.noise;
        times
            .iter()
            .map(|&t| {
                let shower = p.dynamic_amp * (TAU * p.rain_freq_hz * t).sin();
                let jitter = RAIN_WETNESS_JITTER * noise.standard();
                let w = (w0 + shower + jitter).clamp(0.0, 1.0);

                RAIN_BASE_V + RAIN_SPAN_V * (-p.alpha * w).exp() + noise.sample(0.0, p.noise_std)
            })
            .collect()
    }

    fn describe_status(&self, _latest: f64) -> SensorStatus {
        let rain = self.params.read().intensity_mm_h();
        let level = if rain < RAIN_SAFE_BELOW_MM_H {
            StatusLevel::Safe
        } else if rain <= RAIN_ALERT_MAX_MM_H {
            StatusLevel::Alert
        } else {
            StatusLevel::Danger
        };
        SensorStatus::new(level, format!("~{:.0} mm/h", rain))
    }
}
