//! Shared fixtures for integration tests
//!
//! - Deterministic engines and noise-free parameter sets
//! - Named flood scenarios with the statuses they should produce
//! - Assertion helpers for time series

#![allow(dead_code)]

use floodsim_core::{
    Engine, EngineConfig, FlowParams, ParamHandles, PhParams, RainParams, SharedParams,
    TemperatureParams, UltrasonicParams,
};

pub mod scenarios;

/// Seed used by every deterministic fixture
pub const SEED: u64 = 0xF100D;

/// Parameter stores with every noise source switched off
pub fn quiet_params() -> ParamHandles {
    ParamHandles {
        ultrasonic: SharedParams::new(UltrasonicParams {
            noise_std: 0.0,
            ..UltrasonicParams::default()
        }),
        flow: SharedParams::new(FlowParams {
            noise_std: 0.0,
            ..FlowParams::default()
        }),
        rain: SharedParams::new(RainParams {
            noise_std: 0.0,
            ..RainParams::default()
        }),
        ph: SharedParams::new(PhParams {
            noise_std: 0.0,
            ..PhParams::default()
        }),
        temperature: SharedParams::new(TemperatureParams {
            noise_std: 0.0,
            ..TemperatureParams::default()
        }),
    }
}

/// Seeded engine with the dashboard presets, already started
pub fn running_engine() -> Engine {
    let mut engine =
        Engine::new(EngineConfig::deterministic(SEED)).expect("default config is valid");
    engine.start();
    engine
}

/// Seeded engine driven by caller-owned parameters, already started
pub fn running_engine_with(params: ParamHandles) -> Engine {
    let mut engine = Engine::with_params(EngineConfig::deterministic(SEED), params)
        .expect("default config is valid");
    engine.start();
    engine
}

/// `n` timestamps from `start` spaced by `step`
pub fn time_grid(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Panics unless every element is larger than the one before
pub fn assert_strictly_increasing(values: impl IntoIterator<Item = f64>) {
    let mut previous = f64::NEG_INFINITY;
    for (i, v) in values.into_iter().enumerate() {
        assert!(v > previous, "element {} ({}) does not follow {}", i, v, previous);
        previous = v;
    }
}
