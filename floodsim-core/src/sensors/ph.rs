//! SEN0161 pH probe
//!
//! The board outputs a voltage that maps linearly to pH through a
//! calibration point `(V0, pH0)` and a slope `S` in V/pH. The glass
//! electrode does not respond instantly; the reading follows the true pH
//! through a first-order lag `τ·dpH/dt + pH = pH_true`, discretized as
//!
//! ```text
//! alpha   = 1 - e^(-dt/τ)
//! pH[n]   = pH[n-1] + alpha·(pH_true[n] - pH[n-1])
//! ```
//!
//! which stays stable for any `dt`. The filter state persists between calls,
//! so this model is only correct when fed a time-ordered stream.

use core::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::{
        PH_MAX, PH_MAX_VOLTAGE_V, PH_MIN, PH_MIN_DT_S, PH_MIN_SLOPE, PH_MIN_TAU_S,
        PH_MIN_VOLTAGE_V,
    },
    params::SharedParams,
    random::RandomGaussian,
    status::{classify_ph, SensorStatus},
    traits::{SensorKind, SensorModel},
};

use super::utils;

/// pH probe parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhParams {
    /// Raw board output before noise and amplification (V)
    pub vout: f64,
    /// Voltage noise standard deviation (V)
    pub noise_std: f64,
    /// Amplifier gain
    pub gain: f64,
    /// Amplifier offset (V)
    pub offset: f64,
    /// Calibration pH at `v0`
    pub ph0: f64,
    /// Calibration voltage (V)
    pub v0: f64,
    /// Calibration slope (V per pH)
    pub slope: f64,
    /// Probe time constant (s)
    pub tau_sec: f64,
    /// Amplitude of the slow pH drift
    pub drift_amp: f64,
    /// Frequency of the slow pH drift (Hz)
    pub drift_freq_hz: f64,
}

impl Default for PhParams {
    fn default() -> Self {
        Self {
            vout: 2.5,
            noise_std: 0.01,
            gain: 1.0,
            offset: 0.0,
            // pH = 7 - (V - 2.5) / 0.18
            ph0: 7.0,
            v0: 2.5,
            slope: 0.18,
            tau_sec: 5.0,
            drift_amp: 0.05,
            drift_freq_hz: 0.01,
        }
    }
}

impl PhParams {
    /// Dashboard start-up values
    pub fn testbed() -> Self {
        Self {
            vout: 2.6,
            ..Self::default()
        }
    }

    /// Board voltage after amplification, clamped to the 0..3 V output range
    pub fn board_voltage(&self, noise_v: f64) -> f64 {
        self.board_voltage_tracked(noise_v).0
    }

    /// Board voltage plus whether the output range clamp kicked in
    pub fn board_voltage_tracked(&self, noise_v: f64) -> (f64, bool) {
        utils::clamp_tracked(
            (self.vout + noise_v) * self.gain + self.offset,
            PH_MIN_VOLTAGE_V,
            PH_MAX_VOLTAGE_V,
        )
    }

    /// Calibrated pH for a board voltage, before the lag
    pub fn calibrated_ph(&self, voltage: f64) -> f64 {
        let slope = utils::nonzero(self.slope, PH_MIN_SLOPE);
        self.ph0 - (voltage - self.v0) / slope
    }
}

/// Lag filter state, exposed so tests and hosts can snapshot and restore it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhFilterState {
    /// Filter output
    pub last_ph: f64,
    /// Timestamp of the last processed sample, `None` before the first one
    pub last_time: Option<f64>,
}

impl Default for PhFilterState {
    fn default() -> Self {
        Self {
            last_ph: 7.0,
            last_time: None,
        }
    }
}

/// Lagging pH generator
pub struct PhSensor {
    params: SharedParams<PhParams>,
    noise: RandomGaussian,
    state: PhFilterState,
}

impl PhSensor {
    /// Sensor with entropy-seeded noise
    pub fn new(params: SharedParams<PhParams>) -> Self {
        Self::with_noise(params, RandomGaussian::from_entropy())
    }

    /// Sensor with a caller-supplied noise source
    pub fn with_noise(params: SharedParams<PhParams>, noise: RandomGaussian) -> Self {
        Self {
            params,
            noise,
            state: PhFilterState::default(),
        }
    }

    /// Handle to the parameter store
    pub fn params(&self) -> &SharedParams<PhParams> {
        &self.params
    }

    /// Current filter state
    pub fn state(&self) -> PhFilterState {
        self.state
    }

    /// Replace the filter state
    pub fn restore(&mut self, state: PhFilterState) {
        self.state = state;
    }
}

impl SensorModel for PhSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Ph
    }

    fn name(&self) -> &'static str {
        "SEN0161 (pH)"
    }

    fn formula(&self) -> &'static str {
        "pH(t) = pH0 - (Vout(t) - V0)/S + n(t);  τ·dpH/dt + pH = pH_true"
    }

    fn generate(&mut self, times: &[f64]) -> Vec<f64> {
        let p = self.params.snapshot();
        let tau = utils::at_least(p.tau_sec, PH_MIN_TAU_S);

        let mut out = Vec::with_capacity(times.len());
        let mut clamped_samples = 0usize;
        for &t in times {
            let last_time = *self.state.last_time.get_or_insert(t);
            let mut dt = t - last_time;
            if dt <= 0.0 {
                dt = PH_MIN_DT_S;
            }

            let (voltage, clamped) = p.board_voltage_tracked(self.noise.sample(0.0, p.noise_std));
            clamped_samples += usize::from(clamped);
            let ph_true = p.calibrated_ph(voltage)
                + p.drift_amp * (TAU * p.drift_freq_hz * t).sin();

            let alpha = 1.0 - (-dt / tau).exp();
            let next = self.state.last_ph + alpha * (ph_true - self.state.last_ph);
            self.state.last_ph = next.clamp(PH_MIN, PH_MAX);
            self.state.last_time = Some(t);

            out.push(self.state.last_ph);
        }
        if clamped_samples > 0 {
            log_debug!(
                "ph: {} of {} board voltages clamped to {}..{} V",
                clamped_samples,
                times.len(),
                PH_MIN_VOLTAGE_V,
                PH_MAX_VOLTAGE_V
            );
        }
        out
    }

    fn describe_status(&self, latest: f64) -> SensorStatus {
        SensorStatus::new(classify_ph(latest), format!("pH = {:.2}", latest))
    }

    fn rewind(&mut self) {
        self.state.last_time = None;
    }
}
