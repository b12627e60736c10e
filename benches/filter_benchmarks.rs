use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ecg_core::pipeline::synthesize_corrupted;
use ecg_core::processing::{apply_chain, apply_zero_phase, design, FilterChainConfig, FilterSpec};
use ecg_core::{synthesize, TimeGrid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

const SAMPLE_RATES: &[f64] = &[250.0, 500.0, 1000.0];
const SIGNAL_LENGTHS: &[usize] = &[512, 2500, 10_000];
const DURATIONS_S: &[f64] = &[2.0, 10.0, 60.0];

fn benchmark_filter_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_design");

    for &sample_rate_hz in SAMPLE_RATES {
        group.bench_with_input(
            BenchmarkId::new("butterworth_low_pass", sample_rate_hz),
            &sample_rate_hz,
            |b, &fs| {
                b.iter(|| design(black_box(FilterSpec::LowPass { cutoff_hz: 40.0 }), fs).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("butterworth_high_pass", sample_rate_hz),
            &sample_rate_hz,
            |b, &fs| {
                b.iter(|| design(black_box(FilterSpec::HighPass { cutoff_hz: 0.5 }), fs).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("notch", sample_rate_hz),
            &sample_rate_hz,
            |b, &fs| {
                b.iter(|| {
                    design(
                        black_box(FilterSpec::Notch {
                            center_hz: 50.0,
                            bandwidth_hz: 1.0,
                        }),
                        fs,
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_zero_phase_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_phase");

    let butterworth = design(FilterSpec::LowPass { cutoff_hz: 40.0 }, 250.0).unwrap();
    let notch = design(
        FilterSpec::Notch {
            center_hz: 50.0,
            bandwidth_hz: 1.0,
        },
        250.0,
    )
    .unwrap();

    for &len in SIGNAL_LENGTHS {
        let signal: Vec<f64> = (0..len)
            .map(|i| (2.0 * PI * 5.0 * i as f64 / 250.0).sin())
            .collect();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("butterworth", len), &signal, |b, signal| {
            b.iter(|| apply_zero_phase(black_box(signal), &butterworth).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("notch", len), &signal, |b, signal| {
            b.iter(|| apply_zero_phase(black_box(signal), &notch).unwrap());
        });
    }

    group.finish();
}

fn benchmark_full_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_chain");
    let config = FilterChainConfig::default();

    for &len in SIGNAL_LENGTHS {
        let duration_s = len as f64 / 250.0;
        let mut rng = StdRng::seed_from_u64(42);
        let (_, corrupted) = synthesize_corrupted(250.0, duration_s, 0.5, 0.2, &mut rng).unwrap();

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("default_chain", len),
            &corrupted,
            |b, corrupted| {
                b.iter(|| apply_chain(black_box(corrupted), 250.0, &config).unwrap());
            },
        );
    }

    group.finish();
}

fn benchmark_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis");

    for &duration_s in DURATIONS_S {
        let grid = TimeGrid::new(250.0, duration_s).unwrap();

        group.throughput(Throughput::Elements(grid.sample_count() as u64));
        group.bench_with_input(
            BenchmarkId::new("clean_template", duration_s),
            &grid,
            |b, grid| {
                b.iter(|| synthesize(black_box(grid), 75.0).unwrap());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("corrupted", duration_s),
            &duration_s,
            |b, &duration_s| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    synthesize_corrupted(250.0, duration_s, 0.5, 0.2, &mut rng).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_design,
    benchmark_zero_phase_application,
    benchmark_full_chain,
    benchmark_synthesis
);
criterion_main!(benches);
