//! Core traits for sensor models
//!
//! One interface covers all five simulated sensors, so the engine iterates a
//! list of models without asking which kind each one is.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::status::SensorStatus;

/// Sensor kind enumeration
///
/// Selects the channel configuration and names the sensor in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum SensorKind {
    /// JSN-SR04T water level
    Ultrasonic = 0,
    /// YF-S201 flow
    Flow = 1,
    /// YL-83 rain
    Rain = 2,
    /// SEN0161 pH
    Ph = 3,
    /// DS18B20 water temperature
    Temperature = 4,
}

impl SensorKind {
    /// All kinds in dashboard order
    pub const ALL: [SensorKind; 5] = [
        SensorKind::Ultrasonic,
        SensorKind::Flow,
        SensorKind::Rain,
        SensorKind::Ph,
        SensorKind::Temperature,
    ];

    /// Short machine name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorKind::Ultrasonic => "ultrasonic",
            SensorKind::Flow => "flow",
            SensorKind::Rain => "rain",
            SensorKind::Ph => "ph",
            SensorKind::Temperature => "temperature",
        }
    }

    /// Unit of the generated signal
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorKind::Ultrasonic => "a.u.",
            SensorKind::Flow => "V",
            SensorKind::Rain => "V",
            SensorKind::Ph => "pH",
            SensorKind::Temperature => "°C",
        }
    }

    /// Position in [`SensorKind::ALL`]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Waveform generator for one simulated sensor
///
/// `generate` may carry state between calls (the pH lag and the temperature
/// hold do), so successive calls must receive non-decreasing timestamps.
pub trait SensorModel: Send {
    /// Which sensor this is
    fn kind(&self) -> SensorKind;

    /// Display name including the part number
    fn name(&self) -> &'static str;

    /// Short description of the signal model
    fn formula(&self) -> &'static str;

    /// Produce one value per timestamp
    ///
    /// `times` is strictly increasing, in seconds. An empty slice yields an
    /// empty vector.
    fn generate(&mut self, times: &[f64]) -> Vec<f64>;

    /// Classify the latest reading
    fn describe_status(&self, latest: f64) -> SensorStatus;

    /// Forget time anchors after the engine clock restarts at zero
    fn rewind(&mut self) {}
}
