//! Headless dashboard
//!
//! Runs the engine for a simulated minute while a storm builds, printing one
//! status line per second and the pole/zero summary at the end.
//!
//! Run with: cargo run -p floodsim-core --example streaming_dashboard

use floodsim_core::{Engine, EngineConfig, EngineError, SensorKind};

const TICKS: usize = 300;
const TICKS_PER_LINE: usize = 5;

fn main() -> Result<(), EngineError> {
    let mut engine = Engine::new(EngineConfig::deterministic(2024))?;
    engine.start();

    // Shared handles a UI would hold
    let params = engine.params().clone();

    println!("=== FloodSim headless dashboard ===\n");
    for tick in 0..TICKS {
        // Storm builds over the minute: rain, flow and water level rise
        let progress = tick as f64 / TICKS as f64;
        params.rain.update(|p| p.wetness = 0.05 + 0.9 * progress);
        params.flow.update(|p| p.flow_lpm = 4.0 + 24.0 * progress);
        params.ultrasonic.update(|p| p.distance_cm = 120.0 - 110.0 * progress);

        engine.tick()?;

        if (tick + 1) % TICKS_PER_LINE == 0 {
            print!("t = {:5.1} s |", engine.global_time());
            for kind in SensorKind::ALL {
                if let Some(status) = engine.status(kind) {
                    print!(" {:<11} {:<6} |", kind.name(), status.label());
                }
            }
            println!();
        }
    }

    println!();
    for channel in engine.channels() {
        let peak = channel
            .spectrum()
            .and_then(|frame| frame.peak())
            .map(|(f, m)| format!("peak {:.1} Hz ({:.3})", f, m))
            .unwrap_or_else(|| "no spectrum".to_string());
        let status = channel
            .status()
            .map(|s| s.to_string())
            .unwrap_or_default();
        println!(
            "{:<24} {:>5} samples  {}  {}",
            channel.model().name(),
            channel.history().len(),
            peak,
            status
        );
    }

    let pz = engine.pole_zero();
    println!(
        "\npoles: {} continuous ({}), {} discrete ({})",
        pz.continuous.poles.len(),
        pz.continuous_stability(),
        pz.discrete.poles.len(),
        pz.discrete_stability()
    );
    let metrics = engine.metrics();
    println!(
        "{} ticks, {} samples, {} frames computed, {} skipped",
        metrics.ticks, metrics.samples_generated, metrics.frames_computed, metrics.frames_skipped
    );
    Ok(())
}
