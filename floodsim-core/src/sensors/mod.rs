//! Simulated Flood-Monitoring Sensors
//!
//! ## Overview
//!
//! Each model turns a vector of timestamps into a vector of readings that
//! look like what the real board would put on its output pin: an echo burst,
//! a Hall pulse train, a rain-board voltage, a lagging pH reading, a
//! quantized temperature that only changes once per conversion.
//!
//! | Model | Part | Signal | State across calls |
//! |-------|------|--------|--------------------|
//! | [`UltrasonicSensor`] | JSN-SR04T | 40 kHz echo burst gated at the time of flight | last echo time |
//! | [`FlowSensor`] | YF-S201 | 20 % duty pulse train at `K·Q` Hz | none |
//! | [`RainSensor`] | YL-83 | `1 + 2·e^{-αW(t)}` with jittered wetness | none |
//! | [`PhSensor`] | SEN0161 | first-order lag toward the calibrated pH | `last_ph`, `last_time` |
//! | [`TemperatureSensor`] | DS18B20 | sample-and-hold, optionally quantized | `last_value`, `last_update_time` |
//!
//! ## Parameters
//!
//! Parameters live behind [`SharedParams`](crate::params::SharedParams)
//! handles. A model snapshots them once per `generate` call. Each parameter
//! struct has a datasheet `Default` and a `testbed()` preset matching the
//! dashboard's start-up values:
//!
//! ```rust
//! use floodsim_core::{UltrasonicParams, UltrasonicSensor, SensorModel, RandomGaussian};
//! use floodsim_core::SharedParams;
//!
//! let params = SharedParams::new(UltrasonicParams {
//!     noise_std: 0.0,
//!     ..UltrasonicParams::default()
//! });
//! let mut sensor = UltrasonicSensor::with_noise(params, RandomGaussian::seeded(1));
//!
//! let times: Vec<f64> = (0..20).map(|i| i as f64 * 1e-3).collect();
//! let echo = sensor.generate(&times);
//! assert_eq!(echo[0], 0.0); // nothing before the time of flight
//! ```
//!
//! ## Degenerate Parameters
//!
//! Zero slopes, time constants and frequencies are floored to a small
//! epsilon; voltages, distances and pH are clamped to the physical envelope.
//! No model returns an error.

mod flow;
mod ph;
mod rain;
mod temperature;
mod ultrasonic;
pub(crate) mod utils;

pub use flow::{FlowParams, FlowSensor};
pub use ph::{PhFilterState, PhParams, PhSensor};
pub use rain::{RainParams, RainSensor};
pub use temperature::{HoldState, TemperatureParams, TemperatureSensor};
pub use ultrasonic::{UltrasonicParams, UltrasonicSensor};
