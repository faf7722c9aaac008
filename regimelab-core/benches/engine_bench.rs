//! Criterion benchmarks for the tick-pipeline hot paths.
//!
//! Benchmarks:
//! 1. Full tick processing (feature extraction + estimators + detection)
//! 2. Regime detection on a full return window
//! 3. Entropy calculation over the sub-window
//! 4. Composed execution cost simulation

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use regimelab_core::config::EngineConfig;
use regimelab_core::domain::{Quote, Regime};
use regimelab_core::engine::SimulationEngine;
use regimelab_core::execution::{ExecutionModel, LatencyModel, PartialFillModel, SlippageModel};
use regimelab_core::regime::{EntropyCalculator, RegimeDetector};

fn make_quotes(n: usize) -> Vec<Quote> {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut price = 100.0_f64;
    (0..n)
        .map(|_| {
            price = (price + rng.gen_range(-0.2..0.2)).max(1.0);
            let spread = rng.gen_range(0.01..0.05);
            Quote::new(
                price - spread / 2.0,
                price + spread / 2.0,
                rng.gen_range(5..15),
                rng.gen_range(5..15),
            )
        })
        .collect()
}

fn bench_on_tick(c: &mut Criterion) {
    let quotes = make_quotes(1_000);

    c.bench_function("engine_on_tick_1000", |b| {
        b.iter(|| {
            let mut engine = SimulationEngine::new(&EngineConfig::default());
            for quote in &quotes {
                black_box(engine.on_tick(black_box(quote)));
            }
        })
    });
}

fn bench_detect(c: &mut Criterion) {
    let mut detector = RegimeDetector::new(100, 10, 0.5, 2.0);
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        detector.update(rng.gen_range(-0.5..0.5));
    }

    c.bench_function("regime_detect_full_window", |b| {
        b.iter(|| black_box(detector.detect()))
    });
}

fn bench_entropy(c: &mut Criterion) {
    let calc = EntropyCalculator::new(10, 20);
    let mut rng = StdRng::seed_from_u64(9);
    let returns: Vec<f64> = (0..100).map(|_| rng.gen_range(-0.5..0.5)).collect();

    c.bench_function("normalized_entropy_window_20", |b| {
        b.iter(|| black_box(calc.normalized_entropy(black_box(&returns))))
    });
}

fn bench_execution(c: &mut Criterion) {
    let model = ExecutionModel::new(
        LatencyModel::new(1, 10),
        SlippageModel::new(1e-4),
        PartialFillModel::new(),
    );
    let mut rng = StdRng::seed_from_u64(77);

    c.bench_function("execution_model_execute", |b| {
        b.iter(|| {
            black_box(model.execute(
                black_box(0.5),
                100.0,
                0.01,
                0.8,
                Regime::Volatile,
                &mut rng,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_on_tick,
    bench_detect,
    bench_entropy,
    bench_execution
);
criterion_main!(benches);
