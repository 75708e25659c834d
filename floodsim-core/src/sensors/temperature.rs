//! DS18B20 digital thermometer
//!
//! The DS18B20 takes up to 750 ms per 12-bit conversion and keeps returning
//! the previous result until the next one finishes. The model reproduces
//! that: it holds its last reading verbatim and only resamples once a full
//! conversion time has elapsed.
//!
//! ```text
//! T_meas(t) = Q{ T_true + drift·t + n(t) }   refreshed every t_conv
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::{
        TEMP_CONVERSION_12BIT_S, TEMP_MIN_CONVERSION_S, TEMP_MIN_RESOLUTION_C,
        TEMP_RESOLUTION_12BIT_C,
    },
    params::SharedParams,
    random::RandomGaussian,
    status::{classify_temperature, SensorStatus},
    traits::{SensorKind, SensorModel},
};

use super::utils;

/// Thermometer parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TemperatureParams {
    /// Actual water temperature (°C)
    pub true_temp_c: f64,
    /// Measurement noise standard deviation (°C)
    pub noise_std: f64,
    /// Linear sensor drift (°C/s)
    pub drift_per_sec: f64,
    /// Round readings to `resolution_step`
    pub quantize: bool,
    /// ADC resolution step (°C)
    pub resolution_step: f64,
    /// Time for one conversion (s)
    pub conversion_time_sec: f64,
}

impl Default for TemperatureParams {
    fn default() -> Self {
        Self {
            true_temp_c: 25.0,
            noise_std: 0.1,
            drift_per_sec: 0.0,
            quantize: true,
            resolution_step: TEMP_RESOLUTION_12BIT_C,
            conversion_time_sec: TEMP_CONVERSION_12BIT_S,
        }
    }
}

impl TemperatureParams {
    /// Dashboard start-up values
    pub fn testbed() -> Self {
        Self {
            true_temp_c: 26.0,
            noise_std: 0.2,
            ..Self::default()
        }
    }
}

/// Sample-and-hold state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HoldState {
    /// Reading currently on the bus (°C)
    pub last_value: f64,
    /// When the held reading was taken, `None` before the first conversion
    pub last_update_time: Option<f64>,
}

impl Default for HoldState {
    fn default() -> Self {
        Self {
            last_value: 25.0,
            last_update_time: None,
        }
    }
}

/// Sample-and-hold temperature generator
pub struct TemperatureSensor {
    params: SharedParams<TemperatureParams>,
    noise: RandomGaussian,
    state: HoldState,
}

impl TemperatureSensor {
    /// Sensor with entropy-seeded noise
    pub fn new(params: SharedParams<TemperatureParams>) -> Self {
        Self::with_noise(params, RandomGaussian::from_entropy())
    }

    /// Sensor with a caller-supplied noise source
    pub fn with_noise(params: SharedParams<TemperatureParams>, noise: RandomGaussian) -> Self {
        Self {
            params,
            noise,
            state: HoldState::default(),
        }
    }

    /// Handle to the parameter store
    pub fn params(&self) -> &SharedParams<TemperatureParams> {
        &self.params
    }

    /// Current hold state
    pub fn state(&self) -> HoldState {
        self.state
    }

    /// Replace the hold state
    pub fn restore(&mut self, state: HoldState) {
        self.state = state;
    }

    fn convert(&mut self, p: &TemperatureParams, t: f64) -> f64 {
        let temp = p.true_temp_c + self.noise.sample(0.0, p.noise_std) + p.drift_per_sec * t;
        if p.quantize {
            let step = utils::at_least(p.resolution_step, TEMP_MIN_RESOLUTION_C);
            (temp / step).round() * step
        } else {
            temp
        }
    }
}

impl SensorModel for TemperatureSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn name(&self) -> &'static str {
        "DS18B20 (Temp)"
    }

    fn formula(&self) -> &'static str {
        "T_meas(t) = QΔ{T_true(t) + n(t) + b(t)} updated every tCONV"
    }

    fn generate(&mut self, times: &[f64]) -> Vec<f64> {
        let p = self.params.snapshot();
        let t_conv = utils::at_least(p.conversion_time_sec, TEMP_MIN_CONVERSION_S);

        let mut out = Vec::with_capacity(times.len());
        for &t in times {
            let due = match self.state.last_update_time {
                None => true,
                Some(last) => t - last >= t_conv,
            };
            if due {
                self.state.last_value = self.convert(&p, t);
                self.state.last_update_time = Some(t);
            }
            out.push(self.state.last_value);
        }
        out
    }

    fn describe_status(&self, latest: f64) -> SensorStatus {
        SensorStatus::new(classify_temperature(latest), format!("T = {:.1} °C", latest))
    }

    fn rewind(&mut self) {
        self.state.last_update_time = None;
    }
}
