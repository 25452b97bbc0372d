//! Criterion benchmarks for transito-core primitives
//!
//! Run with: cargo bench -p transito-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use transito_core::{Envelope, apply_gain_ramp, linear_to_db, rms};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("Envelope");

    for &block_size in BLOCK_SIZES {
        let left = generate_test_signal(block_size);
        let right: Vec<f32> = left.iter().map(|s| s * 0.8).collect();

        group.bench_with_input(
            BenchmarkId::new("mono", block_size),
            &block_size,
            |b, _| {
                let mut env = Envelope::with_times(0.01, 0.1);
                env.prepare(SAMPLE_RATE, block_size);
                b.iter(|| {
                    env.process_block(black_box(&[&left[..]]));
                    black_box(env.last_value())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("stereo", block_size),
            &block_size,
            |b, _| {
                let mut env = Envelope::with_times(0.01, 0.1);
                env.prepare(SAMPLE_RATE, block_size);
                b.iter(|| {
                    env.process_block(black_box(&[&left[..], &right[..]]));
                    black_box(env.last_value())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("instant_attack", block_size),
            &block_size,
            |b, _| {
                let mut env = Envelope::with_times(0.0, 0.1);
                env.prepare(SAMPLE_RATE, block_size);
                b.iter(|| {
                    env.process_block(black_box(&[&left[..]]));
                    black_box(env.last_value())
                });
            },
        );
    }

    group.finish();
}

fn bench_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("Math");
    let signal = generate_test_signal(1024);

    group.bench_function("rms_1024", |b| b.iter(|| black_box(rms(black_box(&signal)))));

    group.bench_function("gain_ramp_1024", |b| {
        let mut block = signal.clone();
        b.iter(|| {
            apply_gain_ramp(black_box(&mut block), 1.0, 1.0001);
            black_box(block[0])
        });
    });

    group.bench_function("linear_to_db", |b| {
        b.iter(|| black_box(linear_to_db(black_box(0.25))));
    });

    group.finish();
}

criterion_group!(benches, bench_envelope, bench_math);
criterion_main!(benches);
