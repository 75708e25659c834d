//! Spectral and tick benchmarks
//!
//! The dashboard ticks every 200 ms; a full tick (five channels, two of them
//! at the 2048-sample FFT ceiling) has to fit comfortably inside that.
//!
//! Run with: cargo bench -p floodsim-core --bench spectral

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use floodsim_core::{Engine, EngineConfig, SpectralAnalyzer};

fn signal(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.123).sin() + 0.3 * (i as f64 * 1.7).cos()).collect()
}

/// FFT pipeline at several lengths, including non-powers of two
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral_analyze");
    let mut analyzer = SpectralAnalyzer::new();

    for n in [256usize, 1000, 2000, 2048] {
        let input = signal(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| analyzer.analyze(black_box(input), 100_000.0))
        });
    }
    group.finish();
}

/// One steady-state tick with full buffers
fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(EngineConfig::deterministic(1)).expect("default config is valid");
    engine.start();
    engine.run_ticks(60).expect("warm-up ticks");

    c.bench_function("engine_tick", |b| b.iter(|| engine.tick()));
}

criterion_group!(benches, bench_analyze, bench_tick);
criterion_main!(benches);
