//! Property tests for the sensor models and the streaming history
//!
//! Each property holds for any parameter combination the UI can produce,
//! including degenerate ones the models are expected to clamp.

mod common;

use floodsim_core::{
    constants::sensors::{FLOW_PULSE_AMPLITUDE_V, PH_MAX, PH_MIN},
    FlowParams, FlowSensor, PhParams, PhSensor, RainParams, RainSensor, RandomGaussian,
    SensorModel, SharedParams, SpectralAnalyzer, StreamingHistory, TemperatureParams,
    TemperatureSensor, UltrasonicParams, UltrasonicSensor,
};
use proptest::prelude::*;

use common::{time_grid, SEED};

fn noise() -> RandomGaussian {
    RandomGaussian::seeded(SEED)
}

proptest! {
    #[test]
    fn history_trim_keeps_window_in_order(
        gaps in prop::collection::vec(1e-4f64..1.0, 1..200),
        window in 0.0f64..50.0,
        lag in 0.0f64..5.0,
    ) {
        let times: Vec<f64> = gaps
            .iter()
            .scan(0.0, |t, gap| {
                *t += gap;
                Some(*t)
            })
            .collect();
        let values: Vec<f64> = (0..times.len()).map(|i| i as f64).collect();

        let mut history = StreamingHistory::new();
        history.append(&times, &values).unwrap();

        let now = times[times.len() - 1] + lag;
        history.trim(now, window);

        let kept: Vec<(f64, f64)> = history.iter().collect();
        prop_assert!(kept.iter().all(|&(t, _)| t >= now - window));
        // Survivors are exactly the suffix that was inside the window
        let expected: Vec<(f64, f64)> = times
            .iter()
            .copied()
            .zip(values.iter().copied())
            .filter(|&(t, _)| t >= now - window)
            .collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn ph_stays_on_scale(
        vout in -20.0f64..20.0,
        gain in -10.0f64..10.0,
        slope in -1.0f64..1.0,
        tau in -1.0f64..20.0,
        dt in 0.0f64..2.0,
    ) {
        let params = PhParams { vout, gain, slope, tau_sec: tau, ..PhParams::default() };
        let mut sensor = PhSensor::with_noise(SharedParams::new(params), noise());
        let out = sensor.generate(&time_grid(0.0, dt, 100));
        prop_assert!(out.iter().all(|y| (PH_MIN..=PH_MAX).contains(y)));
    }

    #[test]
    fn flow_output_is_two_level_without_noise(flow_lpm in 0.0f64..30.0) {
        let params = FlowParams { flow_lpm, noise_std: 0.0, ..FlowParams::default() };
        let mut sensor = FlowSensor::with_noise(SharedParams::new(params), noise());
        let out = sensor.generate(&time_grid(0.0, 1.0 / 400.0, 400));
        prop_assert!(out.iter().all(|&y| y == 0.0 || y == FLOW_PULSE_AMPLITUDE_V));
    }

    #[test]
    fn flow_duty_cycle_converges(flow_lpm in 1.0f64..30.0) {
        let params = FlowParams { flow_lpm, noise_std: 0.0, ..FlowParams::default() };
        let mut sensor = FlowSensor::with_noise(SharedParams::new(params), noise());
        // 20 kHz over 10 s: at least 75 whole periods
        let out = sensor.generate(&time_grid(0.0, 5e-5, 200_000));
        let duty = out.iter().filter(|&&y| y > 0.0).count() as f64 / out.len() as f64;
        prop_assert!((duty - 0.2).abs() < 0.01, "duty = {}", duty);
    }

    #[test]
    fn every_model_matches_input_length(n in 0usize..64, start in 0.0f64..100.0) {
        let times = time_grid(start, 0.01, n);
        let mut models: Vec<Box<dyn SensorModel>> = vec![
            Box::new(UltrasonicSensor::with_noise(
                SharedParams::new(UltrasonicParams::testbed()),
                noise(),
            )),
            Box::new(FlowSensor::with_noise(SharedParams::new(FlowParams::testbed()), noise())),
            Box::new(RainSensor::with_noise(SharedParams::new(RainParams::testbed()), noise())),
            Box::new(PhSensor::with_noise(SharedParams::new(PhParams::testbed()), noise())),
            Box::new(TemperatureSensor::with_noise(
                SharedParams::new(TemperatureParams::testbed()),
                noise(),
            )),
        ];
        for model in models.iter_mut() {
            let out = model.generate(&times);
            prop_assert_eq!(out.len(), n, "{}", model.name());
            prop_assert!(out.iter().all(|y| y.is_finite()));
        }
    }

    #[test]
    fn spectrum_has_half_the_bins(n in 16usize..3000, fs in 1.0f64..200_000.0) {
        let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();
        let frame = SpectralAnalyzer::new().analyze(&signal, fs).unwrap();
        let used = n.min(2048);
        prop_assert_eq!(frame.sample_count, used);
        prop_assert_eq!(frame.len(), used / 2);
        prop_assert!(frame.magnitudes.iter().all(|m| m.is_finite() && *m >= 0.0));
    }
}
