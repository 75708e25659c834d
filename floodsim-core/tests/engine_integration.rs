//! Integration tests for the tick orchestrator
//!
//! Drives complete engines through start/tick/stop cycles and checks the
//! buffers, spectra, statuses and pole/zero snapshots they expose.

mod common;

use floodsim_core::{
    ChannelConfig, Engine, EngineConfig, EngineState, RandomGaussian, SensorKind, SensorModel,
    SharedParams, Stability, UltrasonicParams, UltrasonicSensor,
};

use common::{
    assert_strictly_increasing, quiet_params, running_engine, running_engine_with, scenarios,
    time_grid,
};

#[test]
fn test_buffers_stay_bounded() {
    let mut engine = running_engine();
    // 60 s of simulated time, six times the common window
    engine.run_ticks(300).unwrap();

    for channel in engine.channels() {
        let fs = channel.config().sample_rate_hz;
        let bound = (fs * channel.window_sec()).round() as usize + 1;
        assert!(
            channel.history().len() <= bound,
            "{} holds {} samples, bound {}",
            channel.kind(),
            channel.history().len(),
            bound
        );
    }
    assert!(engine.history(SensorKind::Ultrasonic).len() <= 2500);
}

#[test]
fn test_histories_cover_trailing_window() {
    let mut engine = running_engine();
    engine.run_ticks(100).unwrap();
    let now = engine.global_time();

    for channel in engine.channels() {
        let window = channel.window_sec();
        assert!(channel.history().times().all(|t| t >= now - window && t < now));
        assert_strictly_increasing(channel.history().times());
    }

    // The slow channels are full: 10 s at 5 Hz
    let temperature = engine.history(SensorKind::Temperature);
    assert!(temperature.len() >= 49);
}

#[test]
fn test_histories_stay_ordered_across_ticks() {
    let mut engine = running_engine();
    let mut last_flow = f64::NEG_INFINITY;
    for _ in 0..20 {
        engine.tick().unwrap();
        let (t, _) = engine.history(SensorKind::Flow).latest().unwrap();
        assert!(t > last_flow);
        last_flow = t;
    }
}

#[test]
fn test_spectra_appear_once_enough_samples() {
    let mut engine = running_engine();

    // 4 samples per tick at 20 Hz: four ticks are needed for 16 samples
    engine.run_ticks(3).unwrap();
    assert!(engine.spectrum(SensorKind::Rain).is_none());
    engine.tick().unwrap();
    assert!(engine.spectrum(SensorKind::Rain).is_some());

    // 5 Hz temperature needs sixteen ticks
    engine.run_ticks(11).unwrap();
    assert!(engine.spectrum(SensorKind::Temperature).is_none());
    engine.tick().unwrap();
    let frame = engine.spectrum(SensorKind::Temperature).unwrap();
    assert_eq!(frame.sample_count, 16);
    assert_eq!(frame.len(), 8);
}

#[test]
fn test_flow_spectrum_peaks_at_pulse_frequency() {
    let params = quiet_params();
    // 7.5 Hz per L/min at 4 L/min: 30 Hz pulses
    params.flow.update(|p| p.flow_lpm = 4.0);
    let mut engine = running_engine_with(params);
    engine.run_ticks(60).unwrap();

    let frame = engine.spectrum(SensorKind::Flow).unwrap();
    assert_eq!(frame.sample_count, 2048);
    let (peak_hz, _) = frame.peak().unwrap();
    assert!((peak_hz - 30.0).abs() <= frame.resolution_hz(), "peak at {} Hz", peak_hz);
}

#[test]
fn test_stop_freezes_everything() {
    let mut engine = running_engine();
    engine.run_ticks(10).unwrap();
    engine.stop();
    assert_eq!(engine.state(), EngineState::Idle);

    let time = engine.global_time();
    let snapshot = engine.history(SensorKind::Ph).to_vecs();
    let status = engine.status(SensorKind::Ph).cloned();

    engine.run_ticks(10).unwrap();
    assert_eq!(engine.global_time(), time);
    assert_eq!(engine.history(SensorKind::Ph).to_vecs(), snapshot);
    assert_eq!(engine.status(SensorKind::Ph).cloned(), status);
}

#[test]
fn test_restart_begins_from_zero() {
    let mut engine = running_engine();
    engine.run_ticks(10).unwrap();
    engine.stop();
    engine.start();

    assert_eq!(engine.global_time(), 0.0);
    for kind in SensorKind::ALL {
        assert!(engine.history(kind).is_empty());
        assert!(engine.spectrum(kind).is_none());
        assert!(engine.status(kind).is_none());
    }

    // The thermometer takes a fresh reading right away
    engine.params().temperature.update(|p| {
        p.noise_std = 0.0;
        p.true_temp_c = 12.0;
    });
    engine.tick().unwrap();
    assert_eq!(engine.history(SensorKind::Temperature).latest().map(|(_, v)| v), Some(12.0));
}

#[test]
fn test_reset_while_running_keeps_running() {
    let mut engine = running_engine();
    engine.run_ticks(5).unwrap();
    engine.reset();
    assert!(engine.is_running());
    assert_eq!(engine.global_time(), 0.0);
    engine.tick().unwrap();
    assert!((engine.global_time() - 0.2).abs() < 1e-12);
}

#[test]
fn test_scenarios_drive_statuses() {
    for scenario in scenarios::all() {
        let mut engine = running_engine();
        (scenario.apply)(engine.params());
        engine.tick().unwrap();

        for (kind, level) in scenario.expected {
            let status = engine.status(kind).unwrap();
            assert_eq!(status.level, level, "{}: {} is {}", scenario.name, kind, status);
        }
    }
}

#[test]
fn test_pole_zero_follows_parameters() {
    let mut engine = running_engine();
    engine.params().rain.update(|p| p.alpha = 1.0);
    engine.params().ph.update(|p| p.tau_sec = 2.0);
    engine.tick().unwrap();

    let snapshot = engine.pole_zero();
    let poles = &snapshot.continuous.poles;
    assert_eq!(poles.len(), 6);
    assert_eq!(poles[2].re, -5.0);
    assert_eq!(poles[3].re, -0.5);
    assert_eq!(snapshot.continuous.zeros.len(), 1);

    for (s, z) in poles.iter().zip(&snapshot.discrete.poles) {
        assert_eq!(*z, s.exp());
        assert_eq!(Stability::of_s(*s), Stability::of_z(*z));
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_common_window_from_json() {
    let config: EngineConfig =
        serde_json::from_str(r#"{ "seed": 1, "window_sec": 20.0 }"#).unwrap();
    let mut engine = Engine::new(config).unwrap();
    engine.start();
    // 30 s, longer than the 20 s window
    engine.run_ticks(150).unwrap();

    let rain = engine.history(SensorKind::Rain);
    let (newest, _) = rain.latest().unwrap();
    let span = newest - rain.oldest_time().unwrap();
    assert!(span > 19.0 && span <= 20.0, "rain span {} s", span);
    assert_eq!(engine.channel(SensorKind::Rain).window_sec(), 20.0);
    assert_eq!(engine.channel(SensorKind::Ultrasonic).window_sec(), 0.025);
}

#[test]
fn test_custom_channel_rates() {
    let config = EngineConfig::deterministic(common::SEED)
        .with_tick_interval(0.1)
        .with_channel(SensorKind::Rain, ChannelConfig::new(100.0, 2.0));
    let mut engine = Engine::new(config).unwrap();
    engine.start();
    engine.run_ticks(50).unwrap();

    // 10 samples per tick, 2 s window
    let rain = engine.history(SensorKind::Rain);
    assert!(rain.len() <= 201 && rain.len() >= 190, "{} samples", rain.len());
    assert!((engine.global_time() - 5.0).abs() < 1e-9);
}

#[test]
fn test_echo_scenario_end_to_end() {
    let params = SharedParams::new(UltrasonicParams {
        distance_cm: 100.0,
        f0_hz: 40_000.0,
        alpha: 0.005,
        noise_std: 0.0,
        ..UltrasonicParams::default()
    });
    let mut sensor = UltrasonicSensor::with_noise(params, RandomGaussian::seeded(common::SEED));

    let times = time_grid(0.0, 1e-3, 21);
    let out = sensor.generate(&times);

    let t_echo = sensor.last_echo_time_sec();
    assert!((t_echo - 5.82e-3).abs() < 1e-5);
    for (&t, &y) in times.iter().zip(&out) {
        if t < t_echo || t > t_echo + 1e-3 {
            assert_eq!(y, 0.0, "unexpected echo at {} s", t);
        }
    }
    assert!(out[6] != 0.0);

    let status = sensor.describe_status(0.0);
    assert_eq!(status.label(), "SAFE");
    assert_eq!(status.detail, "d = 100 cm, t_echo = 5.82 ms");
}
