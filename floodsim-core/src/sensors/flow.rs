//! YF-S201 Hall-effect flow sensor
//!
//! The rotor passes a magnet by the Hall element `K` times per second per
//! L/min, giving a pulse train `f = K·Q`. Phase comes from absolute time, so
//! the model keeps no state between calls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        sensors::{FLOW_DUTY_CYCLE, FLOW_K_HZ_PER_LPM, FLOW_MIN_PULSE_HZ, FLOW_PULSE_AMPLITUDE_V},
        status::{FLOW_ALERT_MAX_LPM, FLOW_SAFE_MAX_LPM},
    },
    params::SharedParams,
    random::RandomGaussian,
    status::{classify_ascending, SensorStatus},
    traits::{SensorKind, SensorModel},
};

use super::utils;

/// Pulse-train parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowParams {
    /// Pulses per second per L/min
    pub k_hz_per_lpm: f64,
    /// Flow rate (L/min)
    pub flow_lpm: f64,
    /// Output noise standard deviation (V)
    pub noise_std: f64,
    /// High level of the pulse (V)
    pub pulse_amplitude: f64,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            k_hz_per_lpm: FLOW_K_HZ_PER_LPM,
            flow_lpm: 5.0,
            noise_std: 0.02,
            pulse_amplitude: FLOW_PULSE_AMPLITUDE_V,
        }
    }
}

impl FlowParams {
    /// Dashboard start-up values
    pub fn testbed() -> Self {
        Self {
            flow_lpm: 8.0,
            noise_std: 0.05,
            ..Self::default()
        }
    }

    /// Pulse frequency (Hz), floored so the period stays finite
    pub fn pulse_hz(&self) -> f64 {
        utils::at_least(self.k_hz_per_lpm * self.flow_lpm, FLOW_MIN_PULSE_HZ)
    }
}

/// Pulse-train generator
pub struct FlowSensor {
    params: SharedParams<FlowParams>,
    noise: RandomGaussian,
}

impl FlowSensor {
    /// Sensor with entropy-seeded noise
    pub fn new(params: SharedParams<FlowParams>) -> Self {
        Self::with_noise(params, RandomGaussian::from_entropy())
    }

    /// Sensor with a caller-supplied noise source
    pub fn with_noise(params: SharedParams<FlowParams>, noise: RandomGaussian) -> Self {
        Self { params, noise }
    }

    /// Handle to the parameter store
    pub fn params(&self) -> &SharedParams<FlowParams> {
        &self.params
    }
}

impl SensorModel for FlowSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Flow
    }

    fn name(&self) -> &'static str {
        "YF-S201 (Flow)"
    }

    fn formula(&self) -> &'static str {
        "f(t) = K·Q(t)  (K ≈ 7.5 Hz per L/min)"
    }

    fn generate(&mut self, times: &[f64]) -> Vec<f64> {
        let p = self.params.snapshot();

        let period = 1.0 / p.pulse_hz();
        let width = period * FLOW_DUTY_CYCLE;

        let noise = &mut self.noise;
        times
            .iter()
            .map(|&t| {
                let pulse = if t.rem_euclid(period) < width { p.pulse_amplitude } else { 0.0 };
                pulse + noise.sample(0.0, p.noise_std)
            })
            .collect()
    }

    fn describe_status(&self, _latest: f64) -> SensorStatus {
        let q = self.params.read().flow_lpm;
        let level = classify_ascending(q, FLOW_SAFE_MAX_LPM, FLOW_ALERT_MAX_LPM);
        SensorStatus::new(level, format!("Q = {:.0} L/min", q))
    }
}
