//! JSN-SR04T ultrasonic water-level sensor
//!
//! Models the echo the receiver sees after one ping:
//! - Time of flight from the distance and the temperature-dependent speed
//!   of sound
//! - Amplitude loss with distance and with beam angle
//! - A carrier burst gated to a short echo window, plus receiver noise

use core::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        physics::{speed_of_sound, CM_PER_M, MS_PER_S},
        sensors::{
            ULTRASONIC_CARRIER_HZ, ULTRASONIC_MAX_DISTANCE_M, ULTRASONIC_MIN_DISTANCE_M,
            ULTRASONIC_MIN_ECHO_WINDOW_S,
        },
        status::{LEVEL_ALERT_FROM_CM, LEVEL_SAFE_ABOVE_CM},
    },
    params::SharedParams,
    random::RandomGaussian,
    status::{classify_descending, SensorStatus},
    traits::{SensorKind, SensorModel},
};

use super::utils;

/// Echo model parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UltrasonicParams {
    /// Distance from the transducer to the water surface (cm)
    pub distance_cm: f64,
    /// Carrier frequency (Hz)
    pub f0_hz: f64,
    /// Distance attenuation coefficient (1/m)
    pub alpha: f64,
    /// Air temperature (°C)
    pub temp_c: f64,
    /// Echo amplitude at zero distance
    pub amplitude: f64,
    /// Beam angle off the surface normal (degrees)
    pub theta_deg: f64,
    /// Exponent of the cos^n(θ) beam pattern
    pub angle_order: f64,
    /// Receiver noise standard deviation
    pub noise_std: f64,
    /// Length of the echo packet (s)
    pub echo_window_sec: f64,
}

impl Default for UltrasonicParams {
    fn default() -> Self {
        Self {
            distance_cm: 100.0,
            f0_hz: ULTRASONIC_CARRIER_HZ,
            alpha: 0.005,
            temp_c: 20.0,
            amplitude: 1.0,
            theta_deg: 0.0,
            angle_order: 1.0,
            noise_std: 0.01,
            echo_window_sec: 0.001,
        }
    }
}

impl UltrasonicParams {
    /// Dashboard start-up values: water 10 cm below the sensor, noisy tank
    pub fn testbed() -> Self {
        Self {
            distance_cm: 10.0,
            alpha: 2.0,
            noise_std: 2.0,
            ..Self::default()
        }
    }

    /// Distance in metres, clamped to the sensor's measuring range
    pub fn distance_m(&self) -> f64 {
        (self.distance_cm / CM_PER_M).clamp(ULTRASONIC_MIN_DISTANCE_M, ULTRASONIC_MAX_DISTANCE_M)
    }

    /// Round-trip time of flight (s)
    pub fn echo_time_sec(&self) -> f64 {
        2.0 * self.distance_m() / speed_of_sound(self.temp_c)
    }

    /// Echo amplitude after distance and beam-angle losses
    pub fn effective_amplitude(&self) -> f64 {
        let distance_loss = (-self.alpha * self.distance_m()).exp();
        let angle_factor = self.theta_deg.to_radians().cos().powf(self.angle_order);
        self.amplitude * distance_loss * angle_factor
    }
}

/// Ultrasonic echo generator
pub struct UltrasonicSensor {
    params: SharedParams<UltrasonicParams>,
    noise: RandomGaussian,
    last_echo_time_sec: f64,
    last_distance_cm: f64,
}

impl UltrasonicSensor {
    /// Sensor with entropy-seeded noise
    pub fn new(params: SharedParams<UltrasonicParams>) -> Self {
        Self::with_noise(params, RandomGaussian::from_entropy())
    }

    /// Sensor with a caller-supplied noise source
    pub fn with_noise(params: SharedParams<UltrasonicParams>, noise: RandomGaussian) -> Self {
        let initial = params.snapshot();
        Self {
            params,
            noise,
            last_echo_time_sec: initial.echo_time_sec(),
            last_distance_cm: initial.distance_cm,
        }
    }

    /// Handle to the parameter store
    pub fn params(&self) -> &SharedParams<UltrasonicParams> {
        &self.params
    }

    /// Time of flight computed by the last `generate` call (s)
    pub fn last_echo_time_sec(&self) -> f64 {
        self.last_echo_time_sec
    }

    /// Distance seen by the last `generate` call (cm)
    pub fn last_distance_cm(&self) -> f64 {
        self.last_distance_cm
    }
}

impl SensorModel for UltrasonicSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Ultrasonic
    }

    fn name(&self) -> &'static str {
        "JSN-SR04T (Water level)"
    }

    fn formula(&self) -> &'static str {
        "t_echo = 2d/c(T);  s(t) = Aeff·cos(2πf0(t - t_echo))·gate(t) + n(t)"
    }

    fn generate(&mut self, times: &[f64]) -> Vec<f64> {
        let p = self.params.snapshot();

        let (_, clamped) = utils::clamp_tracked(
            p.distance_cm / CM_PER_M,
            ULTRASONIC_MIN_DISTANCE_M,
            ULTRASONIC_MAX_DISTANCE_M,
        );
        if clamped {
            log_debug!("ultrasonic: distance {} cm clamped to sensor range", p.distance_cm);
        }

        let t_echo = p.echo_time_sec();
        self.last_echo_time_sec = t_echo;
        self.last_distance_cm = p.distance_cm;

        let a_eff = p.effective_amplitude();
        let window = utils::at_least(p.echo_window_sec, ULTRASONIC_MIN_ECHO_WINDOW_S);
        let echo_end = t_echo + window;

        let noise = &mut self.noise;
        times
            .iter()
            .map(|&t| {
                let echo = if t >= t_echo && t <= echo_end {
                    a_eff * (TAU * p.f0_hz * (t - t_echo)).cos()
                } else {
                    0.0
                };
                echo + noise.sample(0.0, p.noise_std)
            })
            .collect()
    }

    fn describe_status(&self, _latest: f64) -> SensorStatus {
        let distance_cm = self.last_distance_cm;
        let level = classify_descending(distance_cm, LEVEL_SAFE_ABOVE_CM, LEVEL_ALERT_FROM_CM);
        SensorStatus::new(
            level,
            format!(
                "d = {:.0} cm, t_echo = {:.2} ms",
                distance_cm,
                self.last_echo_time_sec * MS_PER_S
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusLevel;

    fn quiet_sensor(params: UltrasonicParams) -> UltrasonicSensor {
        UltrasonicSensor::with_noise(SharedParams::new(params), RandomGaussian::seeded(3))
    }

    #[test]
    fn empty_times_empty_output() {
        let mut sensor = quiet_sensor(UltrasonicParams::default());
        assert!(sensor.generate(&[]).is_empty());
    }

    #[test]
    fn distance_is_clamped() {
        let near = UltrasonicParams { distance_cm: 5.0, ..UltrasonicParams::default() };
        assert_eq!(near.distance_m(), ULTRASONIC_MIN_DISTANCE_M);

        let far = UltrasonicParams { distance_cm: 900.0, ..UltrasonicParams::default() };
        assert_eq!(far.distance_m(), ULTRASONIC_MAX_DISTANCE_M);
    }

    #[test]
    fn gated_cosine_without_noise() {
        let params = UltrasonicParams {
            noise_std: 0.0,
            alpha: 0.0,
            theta_deg: 0.0,
            amplitude: 1.0,
            ..UltrasonicParams::default()
        };
        let t_echo = params.echo_time_sec();
        let window = params.echo_window_sec;
        let f0 = params.f0_hz;
        let mut sensor = quiet_sensor(params);

        // 10 µs grid over 0..10 ms
        let times: Vec<f64> = (0..1000).map(|i| i as f64 * 1e-5).collect();
        let out = sensor.generate(&times);

        for (&t, &y) in times.iter().zip(&out) {
            if t >= t_echo && t <= t_echo + window {
                assert_eq!(y, (TAU * f0 * (t - t_echo)).cos());
            } else {
                assert_eq!(y, 0.0);
            }
        }
        assert_eq!(sensor.last_echo_time_sec(), t_echo);
    }

    #[test]
    fn one_metre_echo_scenario() {
        let params = UltrasonicParams {
            distance_cm: 100.0,
            f0_hz: 40_000.0,
            alpha: 0.005,
            noise_std: 0.0,
            ..UltrasonicParams::default()
        };
        let mut sensor = quiet_sensor(params);

        let times: Vec<f64> = (0..=20).map(|i| i as f64 * 1e-3).collect();
        let out = sensor.generate(&times);

        let t_echo = sensor.last_echo_time_sec();
        assert!((t_echo - 5.822e-3).abs() < 1e-5, "t_echo = {}", t_echo);

        // Samples at 0..5 ms precede the echo, 6 ms is inside the 1 ms burst
        assert!(out[..6].iter().all(|&y| y == 0.0));
        assert!(out[6] != 0.0);
        assert!(out[8..].iter().all(|&y| y == 0.0));
    }

    #[test]
    fn attenuation_and_angle_reduce_amplitude() {
        let base = UltrasonicParams::default();
        let steep = UltrasonicParams { theta_deg: 60.0, ..base.clone() };
        let lossy = UltrasonicParams { alpha: 2.0, ..base.clone() };

        assert!(steep.effective_amplitude() < base.effective_amplitude());
        assert!(lossy.effective_amplitude() < base.effective_amplitude());
        assert!((steep.effective_amplitude() / base.effective_amplitude() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn status_follows_distance() {
        let params = SharedParams::new(UltrasonicParams::default());
        let mut sensor = UltrasonicSensor::with_noise(params.clone(), RandomGaussian::seeded(1));
        assert_eq!(sensor.describe_status(0.0).level, StatusLevel::Safe);

        params.write().distance_cm = 30.0;
        sensor.generate(&[0.0]);
        assert_eq!(sensor.describe_status(0.0).level, StatusLevel::Alert);

        params.write().distance_cm = 10.0;
        sensor.generate(&[0.0]);
        let status = sensor.describe_status(0.0);
        assert_eq!(status.level, StatusLevel::Danger);
        assert!(status.detail.starts_with("d = 10 cm"));
    }

    #[test]
    fn status_pairs_distance_with_its_echo_time() {
        let params = SharedParams::new(UltrasonicParams::default());
        let mut sensor = UltrasonicSensor::with_noise(params.clone(), RandomGaussian::seeded(1));
        sensor.generate(&[0.0]);
        let t_echo_ms = sensor.last_echo_time_sec() * MS_PER_S;

        // A write between generate and status must not leak into the detail line
        params.write().distance_cm = 10.0;
        let status = sensor.describe_status(0.0);
        assert_eq!(status.level, StatusLevel::Safe);
        assert_eq!(sensor.last_distance_cm(), 100.0);
        assert_eq!(status.detail, format!("d = 100 cm, t_echo = {:.2} ms", t_echo_ms));
    }
}
